//! BIP44 以太坊派生路径
//!
//! 所有地址均派生自 m/44'/60'/0'/0/i（外部链，账户 0）

/// BIP44 purpose
pub const BIP44_PURPOSE: u32 = 44;
/// SLIP-44 以太坊 coin type
pub const ETHEREUM_COIN_TYPE: u32 = 60;

/// 硬化派生起始索引
const HARDENED_OFFSET: u32 = 0x8000_0000;

/// 构建派生路径
///
/// # Arguments
/// * `account` - 账户索引（硬化）
/// * `change` - 找零索引（0=外部地址，1=找零地址）
/// * `address_index` - 地址索引
pub fn build_path(account: u32, change: u32, address_index: u32) -> String {
    format!(
        "m/{}'/{}'/{}'/{}/{}",
        BIP44_PURPOSE, ETHEREUM_COIN_TYPE, account, change, address_index
    )
}

/// 批量派生使用的路径：m/44'/60'/0'/0/{index}
pub fn address_path(index: u32) -> String {
    build_path(0, 0, index)
}

/// 验证派生路径格式
///
/// 要求 `m/44'/60'/account'/change/index` 五段结构，前三段硬化、后两段非硬化
pub fn validate_path(path: &str) -> Result<(), String> {
    let rest = path
        .strip_prefix("m/")
        .ok_or_else(|| "Path must start with 'm/'".to_string())?;

    let components: Vec<&str> = rest.split('/').collect();
    if components.len() != 5 {
        return Err(format!(
            "Path must have 5 components, got {}",
            components.len()
        ));
    }

    if components[0] != format!("{}'", BIP44_PURPOSE) {
        return Err("First component must be 44' (BIP44)".to_string());
    }
    if components[1] != format!("{}'", ETHEREUM_COIN_TYPE) {
        return Err("Second component must be 60' (Ethereum)".to_string());
    }

    let account = components[2]
        .strip_suffix('\'')
        .ok_or_else(|| "Account component must be hardened".to_string())?;
    parse_index(account)?;

    for component in &components[3..] {
        if component.ends_with('\'') {
            return Err(format!("Component {} must not be hardened", component));
        }
        parse_index(component)?;
    }

    Ok(())
}

fn parse_index(component: &str) -> Result<u32, String> {
    let index = component
        .parse::<u32>()
        .map_err(|_| format!("Invalid path component: {}", component))?;
    if index >= HARDENED_OFFSET {
        return Err(format!("Path component out of range: {}", component));
    }
    Ok(index)
}
