//! Domain 模块
//!
//! 批次请求、输出记录、助记词与派生路径等领域模型

pub mod batch;
pub mod derivation;
pub mod derivation_path;
pub mod records;
pub mod seed_words;
pub mod view;

// 重新导出常用类型
pub use batch::{
    AddressDerivationRequest, BatchCount, GenerationRequest, Pipeline, MAX_BATCH_COUNT,
    MIN_BATCH_COUNT,
};
pub use derivation::{DerivationStrategy, DerivedKey, Secp256k1EthereumStrategy};
pub use derivation_path::{address_path, ETHEREUM_COIN_TYPE};
pub use records::{AddressRecord, CsvRecord, WalletRecord};
pub use seed_words::{SeedWords, ValidMnemonic, SEED_WORD_COUNT};
pub use view::ActiveView;
