//! 日志脱敏
//!
//! 助记词与私钥永不进入日志；地址只记录前缀与后缀

use std::sync::LazyLock;

use regex::Regex;

// 私钥正则（64个十六进制字符，可选0x前缀）
static PRIVATE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:0x)?[a-f0-9]{64}\b").expect("valid regex"));

// 以太坊地址正则（0x + 40个十六进制字符）
static ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b0x[a-f0-9]{40}\b").expect("valid regex"));

// 助记词正则（12~24 个连续的小写单词）
static MNEMONIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:[a-z]+\s+){11,23}[a-z]+\b").expect("valid regex"));

/// 脱敏地址（显示前6位和后4位）
pub fn redact_address(address: &str) -> String {
    if address.len() < 10 || !address.is_ascii() {
        return "*".repeat(address.len());
    }

    let prefix = &address[..6];
    let suffix = &address[address.len() - 4..];
    format!("{}...{}", prefix, suffix)
}

/// 脱敏字符串中的敏感信息
///
/// 私钥先于地址处理，避免私钥的前 40 位被当作地址部分保留
pub fn sanitize_log_message(msg: &str) -> String {
    let sanitized = PRIVATE_KEY_REGEX.replace_all(msg, "***PRIVATE_KEY***");

    let sanitized = ADDRESS_REGEX.replace_all(&sanitized, |caps: &regex::Captures| {
        caps.get(0)
            .map(|m| redact_address(m.as_str()))
            .unwrap_or_else(|| "***".to_string())
    });

    MNEMONIC_REGEX
        .replace_all(&sanitized, "***MNEMONIC***")
        .into_owned()
}
