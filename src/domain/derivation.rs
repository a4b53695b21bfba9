//! 密钥派生策略
//!
//! 从 BIP39 种子按 BIP32 路径派生 secp256k1 密钥，并计算以太坊地址

use anyhow::{Context, Result};
use coins_bip32::path::DerivationPath;
use zeroize::Zeroizing;

use crate::domain::derivation_path::validate_path;
use crate::utils::address_validator::to_checksum_address;

/// 派生结果
#[derive(Clone)]
pub struct DerivedKey {
    /// EIP-55 校验和地址
    pub address: String,
    /// 未压缩公钥（hex，去掉 0x04 前缀）
    pub public_key: String,
    /// 私钥（0x 前缀 hex）
    pub private_key: Zeroizing<String>,
}

/// 派生策略 trait
pub trait DerivationStrategy: Send + Sync {
    /// 按路径从种子派生密钥
    ///
    /// # Arguments
    /// * `seed` - BIP39 种子（64 字节）
    /// * `path` - BIP32 派生路径，如 m/44'/60'/0'/0/0
    fn derive(&self, seed: &[u8], path: &str) -> Result<DerivedKey>;
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Secp256k1 策略 (Ethereum)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1EthereumStrategy;

impl DerivationStrategy for Secp256k1EthereumStrategy {
    fn derive(&self, seed: &[u8], path: &str) -> Result<DerivedKey> {
        use coins_bip32::prelude::XPriv;
        use k256::ecdsa::SigningKey;
        use sha3::{Digest, Keccak256};

        validate_path(path).map_err(|e| anyhow::anyhow!(e))?;

        // 解析派生路径
        let derivation_path = path
            .parse::<DerivationPath>()
            .context("Invalid derivation path")?;

        // 从种子派生密钥
        let master_key =
            XPriv::root_from_seed(seed, None).context("Failed to derive master key")?;

        let derived_key = master_key
            .derive_path(&derivation_path)
            .context("Failed to derive key")?;

        // XPriv 实现 AsRef<SigningKey>
        let signing_key: &SigningKey = derived_key.as_ref();
        let private_key_bytes = Zeroizing::new(signing_key.to_bytes().to_vec());

        let verifying_key = signing_key.verifying_key();
        let public_key_bytes = verifying_key.to_encoded_point(false); // 未压缩格式
        let public_key_slice = &public_key_bytes.as_bytes()[1..]; // 去掉 0x04 前缀

        // Keccak256 哈希，取后 20 字节
        let hash = Keccak256::digest(public_key_slice);
        let mut address_bytes = [0u8; 20];
        address_bytes.copy_from_slice(&hash[12..]);

        Ok(DerivedKey {
            address: to_checksum_address(&address_bytes),
            public_key: hex::encode(public_key_slice),
            private_key: Zeroizing::new(format!("0x{}", hex::encode(private_key_bytes.as_slice()))),
        })
    }
}
