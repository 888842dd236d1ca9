// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a word inside a sorted lexicon.
/// Lower ids sort first, so ids double as the tie-break order.
pub type WordId = usize;

/// A group of labeled tokens as delivered by a language identifier
/// (typically one group per sentence).
pub type TokenGroup = Vec<LabeledToken>;

/// Writing systems the transliterator converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Devanagari,
}

/// Per-token language tag.
///
/// `English` is the home label: tokens carrying it are never transliterated.
/// `Hindi` is the target label and the only one that gets spell-corrected.
/// Any other code is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageLabel {
    Hindi,
    English,
    Other(String),
}

impl LanguageLabel {
    pub fn from_code(code: &str) -> Self {
        match code {
            "HI" => LanguageLabel::Hindi,
            "EN" => LanguageLabel::English,
            other => LanguageLabel::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            LanguageLabel::Hindi => "HI",
            LanguageLabel::English => "EN",
            LanguageLabel::Other(code) => code,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, LanguageLabel::English)
    }

    pub fn is_target(&self) -> bool {
        matches!(self, LanguageLabel::Hindi)
    }
}

impl fmt::Display for LanguageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledToken {
    pub word: String,
    pub label: LanguageLabel,
}

impl LabeledToken {
    pub fn new(word: impl Into<String>, label: LanguageLabel) -> Self {
        Self { word: word.into(), label }
    }

    /// Builds a token from a raw identifier code such as `"HI"`.
    pub fn from_code(word: impl Into<String>, code: &str) -> Self {
        Self::new(word, LanguageLabel::from_code(code))
    }
}

/// A romanized profane spelling and its canonical Devanagari form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfanityEntry {
    pub roman: String,
    pub deva: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_codes_round_trip() {
        assert_eq!(LanguageLabel::from_code("HI"), LanguageLabel::Hindi);
        assert_eq!(LanguageLabel::from_code("EN"), LanguageLabel::English);
        let other = LanguageLabel::from_code("UN");
        assert_eq!(other, LanguageLabel::Other("UN".to_string()));
        assert_eq!(other.code(), "UN");
    }

    #[test]
    fn only_english_is_home() {
        assert!(LanguageLabel::English.is_home());
        assert!(!LanguageLabel::Hindi.is_home());
        assert!(!LanguageLabel::Other("NE".into()).is_home());
        assert!(LanguageLabel::Hindi.is_target());
        assert!(!LanguageLabel::Other("HIN".into()).is_target());
    }
}
