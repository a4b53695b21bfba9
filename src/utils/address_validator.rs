//! 以太坊地址工具（EIP-55）
//!
//! https://eips.ethereum.org/EIPS/eip-55

use sha3::{Digest, Keccak256};

/// 20 字节地址 → EIP-55 校验和地址
pub fn to_checksum_address(address: &[u8; 20]) -> String {
    let addr_lower = hex::encode(address);
    let hash = Keccak256::digest(addr_lower.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (i, ch) in addr_lower.chars().enumerate() {
        if ch.is_ascii_alphabetic() && hash_nibble(&hash, i) >= 8 {
            checksummed.push(ch.to_ascii_uppercase());
        } else {
            checksummed.push(ch);
        }
    }
    checksummed
}

/// 验证 EVM 地址（包含大写字母时校验 EIP-55 Checksum）
pub fn validate_evm_address(address: &str) -> bool {
    // 1. 基本格式检查
    let Some(hex_part) = address.strip_prefix("0x") else {
        return false;
    };
    if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    // 2. 全小写 / 全大写不带校验和
    let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
    if !(has_upper && has_lower) {
        return true;
    }

    verify_eip55_checksum(hex_part)
}

fn verify_eip55_checksum(hex_part: &str) -> bool {
    let hash = Keccak256::digest(hex_part.to_ascii_lowercase().as_bytes());

    hex_part.chars().enumerate().all(|(i, ch)| {
        if ch.is_ascii_alphabetic() {
            let should_be_uppercase = hash_nibble(&hash, i) >= 8;
            ch.is_ascii_uppercase() == should_be_uppercase
        } else {
            true
        }
    })
}

fn hash_nibble(hash: &[u8], i: usize) -> u8 {
    let byte = hash[i / 2];
    if i % 2 == 0 {
        byte >> 4
    } else {
        byte & 0x0f
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_address_eip55_vector() {
        let bytes: [u8; 20] = hex::decode("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")
            .unwrap()
            .try_into()
            .unwrap();
        assert_eq!(
            to_checksum_address(&bytes),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }

    #[test]
    fn test_validate_evm_address() {
        assert!(validate_evm_address(
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        ));
        // 全小写无 checksum
        assert!(validate_evm_address(
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        ));
        // 大小写错误
        assert!(!validate_evm_address(
            "0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        ));
        assert!(!validate_evm_address("0x123"));
        assert!(!validate_evm_address("invalid"));
    }
}
