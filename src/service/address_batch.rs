//! 地址批量派生服务
//!
//! 从同一助记词按 m/44'/60'/0'/0/i 依次派生地址与私钥。
//! 相同的 (助记词, 数量) 总是得到逐字节相同的结果

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    address_path, AddressDerivationRequest, AddressRecord, DerivationStrategy, Pipeline,
    Secp256k1EthereumStrategy,
};
use crate::error::{AppError, AppResult};
use crate::infrastructure::log_redact::{redact_address, sanitize_log_message};
use crate::infrastructure::validate_mnemonic;

/// 地址批量派生器
#[derive(Clone)]
pub struct AddressBatchGenerator {
    strategy: Arc<dyn DerivationStrategy>,
}

impl Default for AddressBatchGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBatchGenerator {
    /// 以太坊 secp256k1 派生
    pub fn new() -> Self {
        Self::with_strategy(Arc::new(Secp256k1EthereumStrategy))
    }

    pub fn with_strategy(strategy: Arc<dyn DerivationStrategy>) -> Self {
        Self { strategy }
    }

    /// 派生 `request.count` 个地址
    ///
    /// 助记词会被再次校验；任一索引派生失败时整批丢弃
    pub fn generate(&self, request: &AddressDerivationRequest) -> AppResult<Vec<AddressRecord>> {
        let mnemonic = validate_mnemonic(&request.seed_words)?;
        let phrase = mnemonic.phrase();
        let seed = mnemonic.to_seed();

        let total = request.count.get();
        let mut records = Vec::with_capacity(total as usize);

        for derivation_index in 0..total {
            let index = derivation_index + 1;
            let path = address_path(derivation_index);

            let key = self.strategy.derive(&seed[..], &path).map_err(|e| {
                let reason = sanitize_log_message(&format!("{:#}", e));
                warn!(index, path = %path, error = %reason, "Address derivation failed, discarding batch");
                AppError::generation_failure(Pipeline::Addresses, index, reason)
            })?;

            debug!(index, address = %redact_address(&key.address), "Address derived");
            records.push(AddressRecord {
                index,
                address: key.address.clone(),
                private_key: key.private_key.to_string(),
                source_mnemonic: phrase.to_string(),
            });
        }

        info!(count = total, "Address batch derived");
        Ok(records)
    }
}
