//! 测试辅助模块
//! 提供测试向量和辅助函数

#![allow(dead_code)]

use std::path::Path;

use ewallgen::config::Config;
use ewallgen::domain::SeedWords;
use ewallgen::service::BatchSession;

/// BIP39 标准测试向量
pub const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

/// Hardhat / Anvil 默认助记词
pub const HARDHAT_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// Hardhat 默认账户 0..2 (地址, 私钥)
pub const HARDHAT_ACCOUNTS: [(&str, &str); 3] = [
    (
        "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
    ),
    (
        "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
        "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
    ),
    (
        "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC",
        "0x5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a",
    ),
];

pub fn seed_words(phrase: &str) -> SeedWords {
    SeedWords::from_phrase(phrase).expect("at most 12 words")
}

/// 无渲染延迟、导出到指定目录的配置
pub fn test_config(dir: &Path) -> Config {
    let mut config = Config::from_env().expect("config from env");
    config.generation.render_delay_ms = 0;
    config.export.output_dir = dir.to_path_buf();
    config
}

pub fn test_session(dir: &Path) -> BatchSession {
    BatchSession::new(&test_config(dir))
}

/// 读取导出文件的全部行
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("exported file readable")
        .split('\n')
        .map(str::to_string)
        .collect()
}
