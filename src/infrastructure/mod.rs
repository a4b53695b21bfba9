//! 基础设施：输入验证、日志、日志脱敏

pub mod log_redact;
pub mod logging;
pub mod validation;

pub use validation::{validate_count, validate_mnemonic};
