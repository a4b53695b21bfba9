//! 输入验证模块
//!
//! 在任何密码学运算之前完成批次数量与助记词的校验；纯函数，无副作用

use std::num::IntErrorKind;

use crate::domain::{BatchCount, SeedWords, ValidMnemonic, MAX_BATCH_COUNT, MIN_BATCH_COUNT};
use crate::error::ValidationError;

/// 验证批次数量（十进制整数，1..=1000）
pub fn validate_count(raw: &str) -> Result<BatchCount, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let value = trimmed.parse::<i64>().map_err(|e| match e.kind() {
        // 纯数字但超出 i64 范围，按越界处理
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationError::out_of_range(),
        _ => ValidationError::NotANumber,
    })?;

    if value < i64::from(MIN_BATCH_COUNT) || value > i64::from(MAX_BATCH_COUNT) {
        return Err(ValidationError::out_of_range());
    }

    // 上面已保证范围
    BatchCount::new(value as u32)
}

/// 验证 12 个助记词槽位
///
/// 仍有空槽位时返回 `Incomplete`（尚不可校验）；否则以单个空格拼接后做
/// BIP39 词表与校验和检查
pub fn validate_mnemonic(words: &SeedWords) -> Result<ValidMnemonic, ValidationError> {
    let missing = words.missing();
    if missing > 0 {
        return Err(ValidationError::Incomplete { missing });
    }

    ValidMnemonic::parse(&words.joined())
}
