//! 批次流水线集成测试：校验 → 生成 → 导出

mod common;

use common::{read_lines, seed_words, test_config, test_session, HARDHAT_ACCOUNTS, HARDHAT_MNEMONIC};
use ewallgen::domain::{BatchCount, Pipeline, ValidMnemonic};
use ewallgen::error::{AppError, ValidationError};
use ewallgen::infrastructure::validate_count;
use ewallgen::service::{AddressBatchGenerator, BatchSession, MnemonicBatchGenerator};
use rand::{CryptoRng, Error, RngCore};

#[tokio::test]
async fn test_generate_wallets_csv() {
    let dir = tempfile::tempdir().unwrap();
    let session = test_session(dir.path());

    let file = session.generate_wallets("5").await.unwrap();
    assert!(file.file_name.starts_with("wallets_"));
    assert!(file.file_name.ends_with(".csv"));

    let lines = read_lines(&file.path);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "wallet_number,seed_phrase");

    for (i, line) in lines[1..].iter().enumerate() {
        let (number, phrase) = line.split_once(',').unwrap();
        assert_eq!(number, (i + 1).to_string());
        assert!(ValidMnemonic::parse(phrase).is_ok());
    }
}

#[tokio::test]
async fn test_generate_addresses_csv() {
    let dir = tempfile::tempdir().unwrap();
    let session = test_session(dir.path());

    let file = session
        .generate_addresses(&seed_words(HARDHAT_MNEMONIC), "3")
        .await
        .unwrap();
    assert!(file.file_name.starts_with("wallet_addresses_"));

    let lines = read_lines(&file.path);
    assert_eq!(lines[0], "address_number,public_key,private_key,seed_phrase");
    assert_eq!(lines.len(), 4);

    for (i, (address, private_key)) in HARDHAT_ACCOUNTS.iter().enumerate() {
        let expected = format!("{},{},{},{}", i + 1, address, private_key, HARDHAT_MNEMONIC);
        assert_eq!(lines[i + 1], expected);
    }
}

#[tokio::test]
async fn test_invalid_input_produces_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let session = test_session(dir.path());

    for (raw, expected) in [
        ("", ValidationError::EmptyInput),
        ("abc", ValidationError::NotANumber),
        ("0", ValidationError::out_of_range()),
        ("1001", ValidationError::out_of_range()),
    ] {
        let err = session.generate_wallets(raw).await.unwrap_err();
        assert!(matches!(&err, AppError::Validation(e) if *e == expected), "{raw}");
    }

    let bad = seed_words(
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon",
    );
    let err = session.generate_addresses(&bad, "2").await.unwrap_err();
    assert_eq!(err.code(), "invalid_mnemonic");
    assert!(err.is_inline());

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert!(!session.is_generating(Pipeline::Wallets));
    assert!(!session.is_generating(Pipeline::Addresses));
}

#[test]
fn test_user_facing_messages() {
    let err: AppError = validate_count("12abc").unwrap_err().into();
    assert_eq!(err.user_message(), "Please enter a valid number!");

    let err: AppError = validate_count("5000").unwrap_err().into();
    assert_eq!(err.user_message(), "Must be greater than 0 and smaller than 1001!");
}

#[tokio::test]
async fn test_concurrent_submission_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.generation.render_delay_ms = 50;
    let session = BatchSession::new(&config);

    let (first, second) = tokio::join!(session.generate_wallets("2"), session.generate_wallets("2"));

    assert!(first.is_ok());
    assert!(matches!(second, Err(AppError::BatchInProgress(Pipeline::Wallets))));
    assert!(!session.is_generating(Pipeline::Wallets));

    // 两条流水线互不影响
    let words = seed_words(HARDHAT_MNEMONIC);
    let (wallets, addresses) = tokio::join!(
        session.generate_wallets("1"),
        session.generate_addresses(&words, "1")
    );
    assert!(wallets.is_ok());
    assert!(addresses.is_ok());
}

#[tokio::test]
async fn test_export_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir.path().join("missing"));
    let session = BatchSession::new(&config);

    let err = session.generate_wallets("1").await.unwrap_err();
    assert_eq!(err.user_message(), "Failed to export CSV file. Please try again.");
    assert!(!err.is_inline());
    assert!(!session.is_generating(Pipeline::Wallets));
}

/// 第 `fail_at` 次抽取熵时失败的随机源
struct FailingRng {
    draws: u32,
    fail_at: u32,
}

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0x5a);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.draws += 1;
        if self.draws == self.fail_at {
            return Err(Error::new("entropy source unavailable"));
        }
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FailingRng {}

#[test]
fn test_entropy_failure_discards_batch() {
    let mut rng = FailingRng { draws: 0, fail_at: 4 };
    let err = MnemonicBatchGenerator::new()
        .generate_with_rng(BatchCount::new(10).unwrap(), &mut rng)
        .unwrap_err();

    match &err {
        AppError::GenerationFailure { pipeline, index, .. } => {
            assert_eq!(*pipeline, Pipeline::Wallets);
            assert_eq!(*index, 4);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message(), "Failed to generate wallets. Please try again.");
}

#[test]
fn test_maximum_batch() {
    let request = ewallgen::domain::AddressDerivationRequest {
        seed_words: seed_words(HARDHAT_MNEMONIC),
        count: validate_count("1000").unwrap(),
    };
    let records = AddressBatchGenerator::new().generate(&request).unwrap();
    assert_eq!(records.len(), 1000);
    assert_eq!(records[999].index, 1000);
}

#[test]
fn test_single_wallet_passes_mnemonic_validation() {
    let records = MnemonicBatchGenerator::new()
        .generate(validate_count("1").unwrap())
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].index, 1);

    let words = seed_words(&records[0].mnemonic_phrase);
    assert!(ewallgen::infrastructure::validate_mnemonic(&words).is_ok());
}

#[test]
fn test_empty_slots_are_incomplete_not_invalid() {
    let words = ewallgen::domain::SeedWords::default();
    assert_eq!(
        ewallgen::infrastructure::validate_mnemonic(&words).unwrap_err(),
        ValidationError::Incomplete { missing: 12 }
    );
}
