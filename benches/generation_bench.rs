//! 性能基准测试
//! 使用criterion测量批量生成与CSV序列化

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ewallgen::domain::{AddressDerivationRequest, BatchCount, SeedWords};
use ewallgen::service::{AddressBatchGenerator, CsvDocument, MnemonicBatchGenerator};

const HARDHAT_MNEMONIC: &str = "test test test test test test test test test test test junk";

fn bench_wallet_batch(c: &mut Criterion) {
    let generator = MnemonicBatchGenerator::new();
    let count = BatchCount::new(100).unwrap();

    c.bench_function("generate_100_wallets", |b| {
        b.iter(|| black_box(generator.generate(black_box(count)).unwrap()))
    });
}

fn bench_address_batch(c: &mut Criterion) {
    let generator = AddressBatchGenerator::new();
    let request = AddressDerivationRequest {
        seed_words: SeedWords::from_phrase(HARDHAT_MNEMONIC).unwrap(),
        count: BatchCount::new(100).unwrap(),
    };

    c.bench_function("derive_100_addresses", |b| {
        b.iter(|| black_box(generator.generate(black_box(&request)).unwrap()))
    });
}

fn bench_csv_serialize(c: &mut Criterion) {
    let request = AddressDerivationRequest {
        seed_words: SeedWords::from_phrase(HARDHAT_MNEMONIC).unwrap(),
        count: BatchCount::new(1000).unwrap(),
    };
    let records = AddressBatchGenerator::new().generate(&request).unwrap();
    let document = CsvDocument::from_records(&records);

    c.bench_function("serialize_1000_address_rows", |b| {
        b.iter(|| black_box(document.serialize()))
    });
}

criterion_group!(
    benches,
    bench_wallet_batch,
    bench_address_batch,
    bench_csv_serialize
);
criterion_main!(benches);
