// File: src/config.rs
use crate::error::{NormalizeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_INDEX_DISTANCE: usize = 1;

/// Normalizer configuration, read from a JSON file. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub fuzzy: FuzzyConfig,
}

/// Reference data locations. A missing path means an empty set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Curated Hindi word forms (small lexicon).
    pub hindi_words: Option<PathBuf>,
    /// Proper nouns, merged into the small lexicon.
    pub proper_nouns: Option<PathBuf>,
    /// Comprehensive Hindi word forms (large lexicon).
    pub hindi_dictionary: Option<PathBuf>,
    /// CSV with `roman` and `deva` columns.
    pub profanity: Option<PathBuf>,
    /// Words the spell checker accepts. Defaults to both lexicons.
    pub spelling_dictionary: Option<PathBuf>,
    /// Romanized Hindi words the default language identifier labels `HI`.
    pub hindi_vocabulary: Option<PathBuf>,
    /// Binary snapshot of the loaded lexicons; rewritten whenever a reference
    /// file changes.
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzyConfig {
    /// Maximum delete distance of the nearest-neighbour candidate index.
    #[serde(default = "default_index_distance")]
    pub index_distance: usize,
}

fn default_index_distance() -> usize {
    DEFAULT_INDEX_DISTANCE
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            index_distance: DEFAULT_INDEX_DISTANCE,
        }
    }
}

impl NormalizerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| NormalizeError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
