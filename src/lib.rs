// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod oracle;
pub mod persistence;

pub use crate::config::NormalizerConfig;
pub use crate::core::engine::NormalizerEngine;
pub use crate::core::types::{LabeledToken, LanguageLabel, Script};
pub use crate::error::{NormalizeError, OracleError, Result};
