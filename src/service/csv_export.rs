//! CSV 导出服务
//!
//! 字段以逗号、行以换行拼接，不做引号转义：字段只可能是序号、十六进制串
//! 或以空格分隔的字母单词。文件先写入输出目录下的临时文件，再以
//! `<prefix>_<YYYYMMDD_HHMMSS>.csv` 落盘；同名文件已存在时追加 ` (n)`，
//! 从不覆盖。

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tempfile::NamedTempFile;
use tracing::{info, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::config::ExportConfig;
use crate::domain::CsvRecord;
use crate::error::{AppError, AppResult};
use crate::utils::export_timestamp;

/// 同一秒内重复导出时的最大重命名次数
const MAX_NAME_ATTEMPTS: u32 = 100;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CSV 文档
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// 表头 + 数据行
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CsvDocument {
    rows: Vec<Vec<String>>,
}

impl CsvDocument {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// 由记录构造，首行为记录类型的表头
    pub fn from_records<R: CsvRecord>(records: &[R]) -> Self {
        let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len() + 1);
        rows.push(R::HEADER.iter().map(|h| h.to_string()).collect());
        rows.extend(records.iter().map(R::to_fields));
        Self { rows }
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// 不含表头的行数
    pub fn record_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// 序列化为 CSV 文本（无结尾换行）
    pub fn serialize(&self) -> Zeroizing<String> {
        let mut out = Zeroizing::new(String::new());
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for (j, field) in row.iter().enumerate() {
                if j > 0 {
                    out.push(',');
                }
                out.push_str(field);
            }
        }
        out
    }

    /// `serialize` 的逆运算
    ///
    /// 仅对每行至少一个字段的文档成立：空行会被解析为含一个空字段的行
    pub fn parse(content: &str) -> Self {
        if content.is_empty() {
            return Self::default();
        }
        let rows = content
            .split('\n')
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect();
        Self { rows }
    }
}

impl fmt::Debug for CsvDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvDocument")
            .field("header", &self.header())
            .field("records", &self.record_count())
            .finish()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 导出
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// 已保存的导出文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub file_name: String,
    /// 数据行数（不含表头）
    pub rows: usize,
    pub bytes: usize,
}

/// CSV 导出器
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.output_dir.clone())
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 以当前本地时间导出
    pub fn export(&self, document: &CsvDocument, prefix: &str) -> AppResult<ExportedFile> {
        self.export_at(document, prefix, Local::now())
    }

    /// 以给定时间戳导出
    ///
    /// 失败时临时文件随 `NamedTempFile` 析构被删除
    pub fn export_at(
        &self,
        document: &CsvDocument,
        prefix: &str,
        now: DateTime<Local>,
    ) -> AppResult<ExportedFile> {
        let content = document.serialize();

        let mut temp = tempfile::Builder::new()
            .prefix(".ewallgen-")
            .suffix(".tmp")
            .tempfile_in(&self.output_dir)
            .map_err(|e| {
                warn!(dir = ?self.output_dir, error = %e, "Failed to create export file");
                AppError::export_failure("failed to create temporary file", e)
            })?;

        write_all(&mut temp, content.as_bytes())?;

        let stem = format!("{}_{}", prefix, export_timestamp(&now));
        let mut attempt = 0u32;
        loop {
            let file_name = candidate_name(&stem, attempt);
            let path = self.output_dir.join(&file_name);

            match temp.persist_noclobber(&path) {
                Ok(_) => {
                    info!(
                        file = %file_name,
                        rows = document.record_count(),
                        bytes = content.len(),
                        "CSV exported"
                    );
                    return Ok(ExportedFile {
                        path,
                        file_name,
                        rows: document.record_count(),
                        bytes: content.len(),
                    });
                }
                Err(e)
                    if e.error.kind() == io::ErrorKind::AlreadyExists
                        && attempt < MAX_NAME_ATTEMPTS =>
                {
                    temp = e.file;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(file = %file_name, error = %e.error, "Failed to save export file");
                    return Err(AppError::export_failure("failed to save export file", e.error));
                }
            }
        }
    }
}

fn write_all(temp: &mut NamedTempFile, bytes: &[u8]) -> AppResult<()> {
    temp.write_all(bytes)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| {
            warn!(error = %e, "Failed to write export file");
            AppError::export_failure("failed to write export file", e)
        })
}

/// `wallets_20240307_090502.csv`、`wallets_20240307_090502 (1).csv` ...
fn candidate_name(stem: &str, attempt: u32) -> String {
    if attempt == 0 {
        format!("{}.csv", stem)
    } else {
        format!("{} ({}).csv", stem, attempt)
    }
}
