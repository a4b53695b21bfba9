pub mod address_batch;
pub mod batch_session; // 表现层入口
pub mod csv_export;
pub mod mnemonic_batch;

pub use address_batch::AddressBatchGenerator;
pub use batch_session::BatchSession;
pub use csv_export::{CsvDocument, CsvExporter, ExportedFile};
pub use mnemonic_batch::MnemonicBatchGenerator;
