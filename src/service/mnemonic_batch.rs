//! 助记词批量生成服务
//!
//! 每个钱包独立抽取 128 位熵并构造 12 词 BIP39 助记词；整批要么全部成功，
//! 要么不返回任何结果

use rand::{rngs::OsRng, CryptoRng, RngCore};
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::domain::{BatchCount, Pipeline, ValidMnemonic, WalletRecord};
use crate::error::{AppError, AppResult};

/// 12 词助记词对应的熵长度
const ENTROPY_BYTES: usize = 16;

/// 助记词批量生成器
#[derive(Debug, Clone, Copy, Default)]
pub struct MnemonicBatchGenerator;

impl MnemonicBatchGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 使用操作系统 CSPRNG 生成 `count` 个钱包
    pub fn generate(&self, count: BatchCount) -> AppResult<Vec<WalletRecord>> {
        self.generate_with_rng(count, &mut OsRng)
    }

    /// 使用指定的随机源生成 `count` 个钱包
    ///
    /// 任一序号的熵抽取或助记词构造失败时返回 `GenerationFailure`，
    /// 已生成的记录随返回值一起丢弃（销毁时清零）
    pub fn generate_with_rng<R>(
        &self,
        count: BatchCount,
        rng: &mut R,
    ) -> AppResult<Vec<WalletRecord>>
    where
        R: RngCore + CryptoRng,
    {
        let total = count.get();
        let mut records = Vec::with_capacity(total as usize);

        for index in 1..=total {
            let mut entropy = Zeroizing::new([0u8; ENTROPY_BYTES]);
            rng.try_fill_bytes(&mut entropy[..]).map_err(|e| {
                warn!(index, error = %e, "Entropy draw failed, discarding wallet batch");
                AppError::generation_failure(Pipeline::Wallets, index, e.to_string())
            })?;

            let mnemonic = ValidMnemonic::from_entropy(&entropy[..]).map_err(|e| {
                warn!(index, error = %e, "Mnemonic construction failed, discarding wallet batch");
                AppError::generation_failure(Pipeline::Wallets, index, e.to_string())
            })?;

            records.push(WalletRecord {
                index,
                mnemonic_phrase: mnemonic.phrase().to_string(),
            });
            debug!(index, "Wallet generated");
        }

        info!(count = total, "Wallet batch generated");
        Ok(records)
    }
}
