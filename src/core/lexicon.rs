// src/core/lexicon.rs
use crate::core::types::{ProfanityEntry, WordId};
use crate::error::{NormalizeError, Result};
use crate::fuzzy::SymSpell;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use strsim::levenshtein;
use tracing::{debug, info};

/// An immutable set of valid Devanagari word forms.
///
/// Words are kept sorted and deduplicated, so a word's id is its
/// lexicographic rank and nearest-neighbour ties resolve to the
/// lexicographically smallest candidate.
#[derive(Debug)]
pub struct Lexicon {
    words: Vec<String>,
    index: OnceCell<SymSpell>,
    index_distance: usize,
    searches: AtomicU64,
}

impl Lexicon {
    pub fn new<I>(words: I, index_distance: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut words: Vec<String> = words.into_iter().filter(|w| !w.is_empty()).collect();
        words.sort_unstable();
        words.dedup();
        Self {
            words,
            index: OnceCell::new(),
            index_distance,
            searches: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of nearest-neighbour searches run against this lexicon.
    pub fn search_count(&self) -> u64 {
        self.searches.load(Ordering::Relaxed)
    }

    /// The entry with the smallest edit distance to `word`, or `None` when
    /// the lexicon is empty.
    pub fn nearest(&self, word: &str) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        self.searches.fetch_add(1, Ordering::Relaxed);

        // Any word within the index distance shares a delete variant with the
        // query, so a candidate that close is the global minimum.
        let index = self.index.get_or_init(|| self.build_index());
        let best = index
            .lookup(word)
            .into_iter()
            .map(|id| (levenshtein(word, &self.words[id]), id))
            .min();

        let id = match best {
            Some((distance, id)) if distance <= index.max_edit_distance() => id,
            _ => {
                debug!(candidates = self.words.len(), "Falling back to a full lexicon scan");
                self.full_scan(word)?
            }
        };
        Some(self.words[id].as_str())
    }

    fn full_scan(&self, word: &str) -> Option<WordId> {
        self.words
            .iter()
            .enumerate()
            .map(|(id, candidate)| (levenshtein(word, candidate), id))
            .min()
            .map(|(_, id)| id)
    }

    fn build_index(&self) -> SymSpell {
        let mut index = SymSpell::new(self.index_distance);
        for (id, word) in self.words.iter().enumerate() {
            index.add_word(word, id);
        }
        debug!(words = self.words.len(), distance = self.index_distance, "Built fuzzy index");
        index
    }
}

/// The reference data the normalizer reads: the curated lexicon (with proper
/// nouns), the comprehensive fallback lexicon and the profanity table.
/// Nothing here changes after construction.
#[derive(Debug)]
pub struct LexiconStore {
    small: Lexicon,
    large: Lexicon,
    profanity: Vec<ProfanityEntry>,
    /// roman spelling -> index of its first entry in `profanity`
    profanity_index: HashMap<String, usize>,
}

impl LexiconStore {
    pub fn new<S, L, P>(small: S, large: L, profanity: P, index_distance: usize) -> Self
    where
        S: IntoIterator<Item = String>,
        L: IntoIterator<Item = String>,
        P: IntoIterator<Item = ProfanityEntry>,
    {
        let profanity: Vec<ProfanityEntry> = profanity.into_iter().collect();
        let mut profanity_index = HashMap::with_capacity(profanity.len());
        for (i, entry) in profanity.iter().enumerate() {
            profanity_index.entry(entry.roman.clone()).or_insert(i);
        }

        Self {
            small: Lexicon::new(small, index_distance),
            large: Lexicon::new(large, index_distance),
            profanity,
            profanity_index,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::<String>::new(), Vec::<String>::new(), Vec::<ProfanityEntry>::new(), 0)
    }

    /// Loads the reference files. Any path may be absent, which yields an
    /// empty set for that part. The small lexicon is the union of the curated
    /// word list and the proper nouns.
    pub fn load(
        hindi_words: Option<&Path>,
        proper_nouns: Option<&Path>,
        hindi_dictionary: Option<&Path>,
        profanity: Option<&Path>,
        index_distance: usize,
    ) -> Result<Self> {
        let mut small = read_optional_word_list(hindi_words)?;
        small.extend(read_optional_word_list(proper_nouns)?);
        let large = read_optional_word_list(hindi_dictionary)?;
        let profanity = match profanity {
            Some(path) => read_profanity_table(path)?,
            None => Vec::new(),
        };

        let store = Self::new(small, large, profanity, index_distance);
        info!(
            small = store.small.len(),
            large = store.large.len(),
            profanity = store.profanity.len(),
            "Loaded reference lexicons"
        );
        Ok(store)
    }

    pub fn small(&self) -> &Lexicon {
        &self.small
    }

    pub fn large(&self) -> &Lexicon {
        &self.large
    }

    pub fn profanity_entries(&self) -> &[ProfanityEntry] {
        &self.profanity
    }

    pub fn is_profane(&self, word: &str) -> bool {
        self.profanity_index.contains_key(word)
    }

    /// Canonical Devanagari spelling for a profane roman spelling.
    /// With duplicate roman keys the first loaded entry wins.
    pub fn profanity_canonical(&self, word: &str) -> Option<&str> {
        self.profanity_index
            .get(word)
            .map(|&i| self.profanity[i].deva.as_str())
    }

    /// Nearest valid form: the small lexicon first, the large one only when
    /// the small one is empty.
    pub fn nearest(&self, word: &str) -> Result<String> {
        self.small
            .nearest(word)
            .or_else(|| self.large.nearest(word))
            .map(str::to_string)
            .ok_or(NormalizeError::LexiconUnavailable)
    }

    /// Total searches across both lexicons.
    pub fn search_count(&self) -> u64 {
        self.small.search_count() + self.large.search_count()
    }
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| NormalizeError::Load {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional_word_list(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => read_word_list(path),
        None => Ok(Vec::new()),
    }
}

/// Reads a word list: cells separated by newlines or commas, trimmed, with
/// empty cells and `#` comment lines skipped.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    Ok(parse_word_list(&read_to_string(path)?))
}

fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the profanity CSV. The header must name a `roman` and a `deva`
/// column; other columns are ignored.
pub fn read_profanity_table(path: &Path) -> Result<Vec<ProfanityEntry>> {
    parse_profanity_table(&read_to_string(path)?).map_err(|(line, reason)| {
        NormalizeError::MalformedEntry {
            path: path.to_path_buf(),
            line,
            reason,
        }
    })
}

fn parse_profanity_table(contents: &str) -> std::result::Result<Vec<ProfanityEntry>, (usize, String)> {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or((1, "missing header".to_string()))?;
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let column = |name: &str| {
        columns
            .iter()
            .position(|c| *c == name)
            .ok_or((header_line, format!("header has no `{name}` column")))
    };
    let roman_col = column("roman")?;
    let deva_col = column("deva")?;

    lines
        .map(|(line_no, line)| {
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            match (cells.get(roman_col), cells.get(deva_col)) {
                (Some(roman), Some(deva)) if !roman.is_empty() && !deva.is_empty() => Ok(ProfanityEntry {
                    roman: roman.to_string(),
                    deva: deva.to_string(),
                }),
                _ => Err((line_no, "expected both a roman and a deva value".to_string())),
            }
        })
        .collect()
}
