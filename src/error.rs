// File: src/error.rs
use crate::core::types::Script;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Which external oracle a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleKind {
    Identifier,
    Transliterator,
    SpellChecker,
}

impl fmt::Display for OracleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OracleKind::Identifier => "language identifier",
            OracleKind::Transliterator => "transliterator",
            OracleKind::SpellChecker => "spell checker",
        };
        f.write_str(name)
    }
}

/// Errors reported by an oracle implementation.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("cannot transliterate from {from:?} to {to:?}")]
    Unsupported { from: Script, to: Script },

    #[error("{0}")]
    Failed(String),
}

#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Both correction lexicons are empty.
    #[error("no correction lexicon is loaded")]
    LexiconUnavailable,

    #[error("{oracle} failed: {source}")]
    OracleFailure {
        oracle: OracleKind,
        #[source]
        source: OracleError,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {reason}", .path.display())]
    MalformedEntry {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NormalizeError {
    pub(crate) fn oracle(oracle: OracleKind) -> impl FnOnce(OracleError) -> Self {
        move |source| NormalizeError::OracleFailure { oracle, source }
    }
}
