// File: src/oracle.rs
//! The three external collaborators the normalizer consults.
//!
//! Each one is a single-method trait and is implemented for plain closures,
//! so callers can wrap any model, service or test stub without a type of
//! their own. Default implementations live alongside: a script/vocabulary
//! language identifier here, a dictionary spell checker here, and the
//! rule-based transliterator in `core::converter`.

use crate::core::types::{LabeledToken, LanguageLabel, Script, TokenGroup};
use crate::error::OracleError;
use std::collections::HashSet;

pub trait LanguageIdentifier: Send + Sync {
    /// Tokens of `text` with a language label each, possibly split into groups.
    fn identify(&self, text: &str) -> Result<Vec<TokenGroup>, OracleError>;
}

pub trait Transliterator: Send + Sync {
    fn transliterate(&self, word: &str, from: Script, to: Script) -> Result<String, OracleError>;
}

pub trait SpellChecker: Send + Sync {
    /// `true` when `word` is a valid spelling in the target script.
    fn check(&self, word: &str) -> Result<bool, OracleError>;
}

impl<F> LanguageIdentifier for F
where
    F: Fn(&str) -> Result<Vec<TokenGroup>, OracleError> + Send + Sync,
{
    fn identify(&self, text: &str) -> Result<Vec<TokenGroup>, OracleError> {
        self(text)
    }
}

impl<F> Transliterator for F
where
    F: Fn(&str, Script, Script) -> Result<String, OracleError> + Send + Sync,
{
    fn transliterate(&self, word: &str, from: Script, to: Script) -> Result<String, OracleError> {
        self(word, from, to)
    }
}

impl<F> SpellChecker for F
where
    F: Fn(&str) -> Result<bool, OracleError> + Send + Sync,
{
    fn check(&self, word: &str) -> Result<bool, OracleError> {
        self(word)
    }
}

/// Exact-match spell checker over a fixed word set.
#[derive(Debug, Default, Clone)]
pub struct DictionarySpellChecker {
    words: HashSet<String>,
}

impl DictionarySpellChecker {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for DictionarySpellChecker {
    fn check(&self, word: &str) -> Result<bool, OracleError> {
        Ok(self.words.contains(word))
    }
}

/// Labels tokens by script, with a vocabulary of romanized Hindi words for
/// Latin-script tokens. Devanagari tokens are `HI`, Latin tokens found in the
/// vocabulary are `HI`, everything else is `EN`. Tokens are whitespace
/// separated; a sentence ends at `.`, `!`, `?` or `।` and starts a new group.
#[derive(Debug, Default, Clone)]
pub struct ScriptLanguageIdentifier {
    hindi_vocabulary: HashSet<String>,
}

impl ScriptLanguageIdentifier {
    pub fn new<I, S>(hindi_vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hindi_vocabulary: hindi_vocabulary.into_iter().map(Into::into).collect(),
        }
    }

    fn label(&self, token: &str) -> LanguageLabel {
        if token.chars().any(is_devanagari) {
            return LanguageLabel::Hindi;
        }
        let bare = token.trim_matches(|c: char| !c.is_alphanumeric());
        if self.hindi_vocabulary.contains(bare) {
            LanguageLabel::Hindi
        } else {
            LanguageLabel::English
        }
    }
}

impl LanguageIdentifier for ScriptLanguageIdentifier {
    fn identify(&self, text: &str) -> Result<Vec<TokenGroup>, OracleError> {
        let mut groups = Vec::new();
        let mut current = Vec::new();

        for token in text.split_whitespace() {
            current.push(LabeledToken::new(token, self.label(token)));
            if token.ends_with(&['.', '!', '?', '।'][..]) {
                groups.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            groups.push(current);
        }

        Ok(groups)
    }
}

fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_oracles() {
        let checker = |word: &str| Ok::<_, OracleError>(word == "नाम");
        assert!(checker.check("नाम").unwrap());
        assert!(!checker.check("नम").unwrap());
    }

    #[test]
    fn dictionary_checker_is_exact() {
        let checker = DictionarySpellChecker::new(["मेरा", "नाम"]);
        assert!(checker.check("मेरा").unwrap());
        assert!(!checker.check("मेर").unwrap());
        assert_eq!(checker.len(), 2);
    }

    #[test]
    fn identifier_labels_by_script_and_vocabulary() {
        let identifier = ScriptLanguageIdentifier::new(["mera", "naam", "hai"]);
        let groups = identifier.identify("mera naam roshan hai").unwrap();
        assert_eq!(groups.len(), 1);
        let labels: Vec<&str> = groups[0].iter().map(|t| t.label.code()).collect();
        assert_eq!(labels, vec!["HI", "HI", "EN", "HI"]);
    }

    #[test]
    fn identifier_groups_by_sentence() {
        let identifier = ScriptLanguageIdentifier::default();
        let groups = identifier.identify("hello there. नमस्ते दोस्त").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1][0].label, LanguageLabel::Hindi);
    }

    #[test]
    fn identifier_on_blank_text_is_empty() {
        let identifier = ScriptLanguageIdentifier::default();
        assert!(identifier.identify("   ").unwrap().is_empty());
    }
}
