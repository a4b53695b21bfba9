//! 批次会话
//!
//! 表现层的唯一入口：校验输入 → 让出一次以渲染“生成中”状态 → 生成 → 导出。
//! 每条流水线同一时间最多只有一个批次在进行。

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{
    ActiveView, AddressDerivationRequest, CsvRecord, GenerationRequest, Pipeline, SeedWords,
};
use crate::error::{AppError, AppResult};
use crate::infrastructure::{validate_count, validate_mnemonic};
use crate::service::address_batch::AddressBatchGenerator;
use crate::service::csv_export::{CsvDocument, CsvExporter, ExportedFile};
use crate::service::mnemonic_batch::MnemonicBatchGenerator;
use crate::utils::format_duration_ms;

/// 进行中标记的 RAII 守卫
/// 任何退出路径（成功、错误、future 被丢弃）都会复位标记
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool, pipeline: Pipeline) -> AppResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::BatchInProgress(pipeline))?;
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// 批次会话
pub struct BatchSession {
    view: ActiveView,
    render_delay: Duration,
    wallets: MnemonicBatchGenerator,
    addresses: AddressBatchGenerator,
    exporter: CsvExporter,
    wallets_busy: AtomicBool,
    addresses_busy: AtomicBool,
}

impl BatchSession {
    pub fn new(config: &Config) -> Self {
        Self::with_generators(
            config,
            MnemonicBatchGenerator::new(),
            AddressBatchGenerator::new(),
        )
    }

    pub fn with_generators(
        config: &Config,
        wallets: MnemonicBatchGenerator,
        addresses: AddressBatchGenerator,
    ) -> Self {
        Self {
            view: ActiveView::default(),
            render_delay: Duration::from_millis(config.generation.render_delay_ms),
            wallets,
            addresses,
            exporter: CsvExporter::from_config(&config.export),
            wallets_busy: AtomicBool::new(false),
            addresses_busy: AtomicBool::new(false),
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 导航
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn view(&self) -> ActiveView {
        self.view
    }

    pub fn go_home(&mut self) {
        self.view.go_home();
    }

    pub fn open_wallets(&mut self) {
        self.view.open_wallets();
    }

    pub fn open_addresses(&mut self) {
        self.view.open_addresses();
    }

    pub fn get_started(&mut self) {
        self.view.get_started();
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 批次
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// 该流水线是否有批次在进行（对应提交按钮的禁用状态）
    pub fn is_generating(&self, pipeline: Pipeline) -> bool {
        self.busy_flag(pipeline).load(Ordering::Acquire)
    }

    /// 生成 `raw_count` 个新钱包并导出 CSV
    pub async fn generate_wallets(&self, raw_count: &str) -> AppResult<ExportedFile> {
        let _guard = BusyGuard::acquire(&self.wallets_busy, Pipeline::Wallets)?;
        let request = GenerationRequest {
            count: validate_count(raw_count)?,
        };
        let started = Instant::now();

        self.yield_for_render().await;

        let records = self.wallets.generate(request.count)?;
        self.export(Pipeline::Wallets, &records, started)
    }

    /// 从 `words` 派生 `raw_count` 个地址并导出 CSV
    pub async fn generate_addresses(
        &self,
        words: &SeedWords,
        raw_count: &str,
    ) -> AppResult<ExportedFile> {
        let _guard = BusyGuard::acquire(&self.addresses_busy, Pipeline::Addresses)?;
        let count = validate_count(raw_count)?;
        validate_mnemonic(words)?;
        let started = Instant::now();

        self.yield_for_render().await;

        let request = AddressDerivationRequest {
            seed_words: words.clone(),
            count,
        };
        let records = self.addresses.generate(&request)?;
        self.export(Pipeline::Addresses, &records, started)
    }

    async fn yield_for_render(&self) {
        if !self.render_delay.is_zero() {
            tokio::time::sleep(self.render_delay).await;
        }
    }

    fn export<R: CsvRecord>(
        &self,
        pipeline: Pipeline,
        records: &[R],
        started: Instant,
    ) -> AppResult<ExportedFile> {
        let document = CsvDocument::from_records(records);
        let file = self
            .exporter
            .export(&document, pipeline.file_prefix())
            .inspect_err(|e| warn!(%pipeline, error = %e, "Batch export failed"))?;

        info!(
            %pipeline,
            count = records.len(),
            file = %file.file_name,
            elapsed = %format_duration_ms(started.elapsed().as_millis()),
            "Batch completed"
        );
        Ok(file)
    }

    fn busy_flag(&self, pipeline: Pipeline) -> &AtomicBool {
        match pipeline {
            Pipeline::Wallets => &self.wallets_busy,
            Pipeline::Addresses => &self.addresses_busy,
        }
    }
}
