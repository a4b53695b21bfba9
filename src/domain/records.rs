//! 批次输出记录
//!
//! 记录创建后不再修改；销毁时清零其中的助记词与私钥。

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::infrastructure::log_redact::redact_address;

/// 可导出为 CSV 行的记录
pub trait CsvRecord {
    /// 表头字段
    const HEADER: &'static [&'static str];

    /// 与表头一一对应的字段值
    fn to_fields(&self) -> Vec<String>;
}

/// 随机生成的钱包
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct WalletRecord {
    /// 批次内序号（从 1 开始）
    pub index: u32,
    pub mnemonic_phrase: String,
}

impl CsvRecord for WalletRecord {
    const HEADER: &'static [&'static str] = &["wallet_number", "seed_phrase"];

    fn to_fields(&self) -> Vec<String> {
        vec![self.index.to_string(), self.mnemonic_phrase.clone()]
    }
}

impl fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletRecord")
            .field("index", &self.index)
            .field("mnemonic_phrase", &"***")
            .finish()
    }
}

/// 从助记词派生的地址
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AddressRecord {
    /// 批次内序号（从 1 开始），派生索引为 index - 1
    pub index: u32,
    /// EIP-55 校验和地址
    pub address: String,
    /// 0x 前缀的十六进制私钥
    pub private_key: String,
    pub source_mnemonic: String,
}

impl CsvRecord for AddressRecord {
    const HEADER: &'static [&'static str] =
        &["address_number", "public_key", "private_key", "seed_phrase"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.index.to_string(),
            self.address.clone(),
            self.private_key.clone(),
            self.source_mnemonic.clone(),
        ]
    }
}

impl fmt::Debug for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressRecord")
            .field("index", &self.index)
            .field("address", &redact_address(&self.address))
            .field("private_key", &"***")
            .field("source_mnemonic", &"***")
            .finish()
    }
}
