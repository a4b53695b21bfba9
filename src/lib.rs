//! ewallgen - 以太坊钱包批量生成库
//!
//! 批量生成 BIP39 助记词，或从同一助记词批量派生地址与私钥，并导出为 CSV。
//! 全部在本地完成，无网络访问。

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod service;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ValidationError};

// 统一模块导出
pub mod prelude {
    pub use crate::{
        config::Config,
        domain::{
            ActiveView, AddressDerivationRequest, AddressRecord, BatchCount, Pipeline, SeedWords,
            ValidMnemonic, WalletRecord,
        },
        error::{AppError, AppResult, ValidationError},
        infrastructure::{validate_count, validate_mnemonic},
        service::{
            AddressBatchGenerator, BatchSession, CsvDocument, CsvExporter, ExportedFile,
            MnemonicBatchGenerator,
        },
    };
}
