//! 助记词输入模型
//!
//! `SeedWords` 是界面上 12 个单词输入框的内容，`ValidMnemonic` 是通过
//! BIP39 词表与校验和检查后的助记词。

use std::fmt;

use bip39::{Language, Mnemonic};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::ValidationError;

/// 助记词单词数（128 位熵）
pub const SEED_WORD_COUNT: usize = 12;

/// 12 个有序单词槽位
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SeedWords([String; SEED_WORD_COUNT]);

impl SeedWords {
    pub fn new(words: [String; SEED_WORD_COUNT]) -> Self {
        Self(words)
    }

    /// 按空白切分一段短语并依次填入槽位（粘贴整段助记词）
    ///
    /// 多于 12 个单词时返回 `None`
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        let mut words = Self::default();
        for (slot, word) in phrase.split_whitespace().enumerate() {
            if slot >= SEED_WORD_COUNT {
                return None;
            }
            words.0[slot] = word.to_string();
        }
        Some(words)
    }

    /// 更新单个槽位（越界返回 false）
    pub fn set(&mut self, slot: usize, word: impl Into<String>) -> bool {
        match self.0.get_mut(slot) {
            Some(current) => {
                current.zeroize();
                *current = word.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }

    /// 空槽位数量（仅含空白视为空）
    pub fn missing(&self) -> usize {
        self.0.iter().filter(|w| w.trim().is_empty()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.missing() == 0
    }

    /// 去除首尾空白后以单个空格拼接
    pub fn joined(&self) -> Zeroizing<String> {
        let mut phrase = Zeroizing::new(String::new());
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                phrase.push(' ');
            }
            phrase.push_str(word.trim());
        }
        phrase
    }
}

impl fmt::Debug for SeedWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedWords")
            .field("filled", &(SEED_WORD_COUNT - self.missing()))
            .finish_non_exhaustive()
    }
}

/// 通过 BIP39 校验的 12 词英文助记词
#[derive(Clone)]
pub struct ValidMnemonic(Mnemonic);

impl ValidMnemonic {
    /// 解析并校验助记词（词表 + 校验和 + 12 词）
    pub fn parse(phrase: &str) -> Result<Self, ValidationError> {
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase)
            .map_err(|e| ValidationError::InvalidMnemonic(e.to_string()))?;

        if mnemonic.word_count() != SEED_WORD_COUNT {
            return Err(ValidationError::InvalidMnemonic(format!(
                "expected {} words, got {}",
                SEED_WORD_COUNT,
                mnemonic.word_count()
            )));
        }

        Ok(Self(mnemonic))
    }

    /// 从熵构造（16 字节 → 12 词）
    pub fn from_entropy(entropy: &[u8]) -> Result<Self, bip39::Error> {
        Mnemonic::from_entropy_in(Language::English, entropy).map(Self)
    }

    /// 空格分隔的助记词短语
    pub fn phrase(&self) -> Zeroizing<String> {
        Zeroizing::new(self.0.to_string())
    }

    /// BIP39 种子（空密码）
    pub fn to_seed(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.0.to_seed_normalized(""))
    }
}

impl fmt::Debug for ValidMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValidMnemonic(***)")
    }
}
