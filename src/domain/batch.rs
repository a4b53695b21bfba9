//! 批次请求模型

use std::fmt;

use crate::domain::seed_words::SeedWords;
use crate::error::ValidationError;

/// 单批次最小数量
pub const MIN_BATCH_COUNT: u32 = 1;
/// 单批次最大数量
pub const MAX_BATCH_COUNT: u32 = 1000;

/// 已校验的批次数量（1..=1000）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchCount(u32);

impl BatchCount {
    pub fn new(count: u32) -> Result<Self, ValidationError> {
        if (MIN_BATCH_COUNT..=MAX_BATCH_COUNT).contains(&count) {
            Ok(Self(count))
        } else {
            Err(ValidationError::out_of_range())
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for BatchCount {
    type Error = ValidationError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl fmt::Display for BatchCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 生成流水线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipeline {
    /// 批量生成新钱包（助记词）
    Wallets,
    /// 从同一助记词批量派生地址
    Addresses,
}

impl Pipeline {
    /// 导出文件名前缀
    pub fn file_prefix(self) -> &'static str {
        match self {
            Pipeline::Wallets => "wallets",
            Pipeline::Addresses => "wallet_addresses",
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pipeline::Wallets => f.write_str("wallet"),
            Pipeline::Addresses => f.write_str("address"),
        }
    }
}

/// 钱包批量生成请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub count: BatchCount,
}

/// 地址批量派生请求
#[derive(Debug, Clone)]
pub struct AddressDerivationRequest {
    pub seed_words: SeedWords,
    pub count: BatchCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_count_bounds() {
        assert!(BatchCount::new(0).is_err());
        assert_eq!(BatchCount::new(1).unwrap().get(), 1);
        assert_eq!(BatchCount::new(1000).unwrap().get(), 1000);
        assert_eq!(
            BatchCount::try_from(1001),
            Err(ValidationError::OutOfRange { max: 1000 })
        );
    }

    #[test]
    fn test_pipeline_prefix() {
        assert_eq!(Pipeline::Wallets.file_prefix(), "wallets");
        assert_eq!(Pipeline::Addresses.file_prefix(), "wallet_addresses");
    }
}
