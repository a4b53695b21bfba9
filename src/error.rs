//! 错误类型
//!
//! 校验错误在界面内联展示，生成/导出错误以弹窗提示；任何错误都不会终止进程，
//! 调用方只需恢复到提交前的状态。

use thiserror::Error;

use crate::domain::{Pipeline, MAX_BATCH_COUNT};

pub type AppResult<T> = std::result::Result<T, AppError>;

/// 输入校验错误
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// 输入为空：尚无可展示的错误，但不允许提交
    #[error("input is empty")]
    EmptyInput,

    /// 助记词仍有空位：尚不可校验，不作为用户可见错误
    #[error("mnemonic incomplete: {missing} of 12 words still empty")]
    Incomplete { missing: usize },

    #[error("input is not a base-10 integer")]
    NotANumber,

    #[error("count must be between 1 and {max}")]
    OutOfRange { max: u32 },

    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),
}

impl ValidationError {
    pub fn out_of_range() -> Self {
        Self::OutOfRange {
            max: MAX_BATCH_COUNT,
        }
    }

    /// 是否需要向用户展示（EmptyInput / Incomplete 只是“尚未可校验”）
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::EmptyInput | Self::Incomplete { .. })
    }
}

/// 应用错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{pipeline} generation failed at #{index}: {reason}")]
    GenerationFailure {
        pipeline: Pipeline,
        index: u32,
        reason: String,
    },

    #[error("export failed: {reason}")]
    ExportFailure {
        reason: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("a {0} batch is already in progress")]
    BatchInProgress(Pipeline),
}

impl AppError {
    pub fn generation_failure(pipeline: Pipeline, index: u32, reason: impl Into<String>) -> Self {
        Self::GenerationFailure {
            pipeline,
            index,
            reason: reason.into(),
        }
    }

    pub fn export_failure(reason: impl Into<String>, source: std::io::Error) -> Self {
        Self::ExportFailure {
            reason: reason.into(),
            source: Some(source),
        }
    }

    /// 稳定的错误码
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(e) => match e {
                ValidationError::EmptyInput => "empty_input",
                ValidationError::Incomplete { .. } => "incomplete",
                ValidationError::NotANumber => "not_a_number",
                ValidationError::OutOfRange { .. } => "out_of_range",
                ValidationError::InvalidMnemonic(_) => "invalid_mnemonic",
            },
            AppError::GenerationFailure { .. } => "generation_failure",
            AppError::ExportFailure { .. } => "export_failure",
            AppError::BatchInProgress(_) => "batch_in_progress",
        }
    }

    /// 内联展示（校验错误）还是弹窗提示
    pub fn is_inline(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    /// 面向用户的提示文本
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(ValidationError::EmptyInput) => String::new(),
            AppError::Validation(ValidationError::Incomplete { .. }) => String::new(),
            AppError::Validation(ValidationError::NotANumber) => {
                "Please enter a valid number!".to_string()
            }
            AppError::Validation(ValidationError::OutOfRange { max }) => {
                format!("Must be greater than 0 and smaller than {}!", max + 1)
            }
            AppError::Validation(ValidationError::InvalidMnemonic(_)) => {
                "Invalid seed phrase!".to_string()
            }
            AppError::GenerationFailure { pipeline, .. } => match pipeline {
                Pipeline::Wallets => "Failed to generate wallets. Please try again.".to_string(),
                Pipeline::Addresses => {
                    "Failed to generate addresses. Please try again.".to_string()
                }
            },
            AppError::ExportFailure { .. } => "Failed to export CSV file. Please try again.".to_string(),
            AppError::BatchInProgress(_) => "Generation already in progress.".to_string(),
        }
    }
}
