use crate::config::NormalizerConfig;
use crate::core::cache::CorrectionCache;
use crate::core::cleaner;
use crate::core::converter::HindiTransliterator;
use crate::core::lexicon::{read_word_list, LexiconStore};
use crate::core::types::{LabeledToken, Script};
use crate::error::{NormalizeError, OracleKind, Result};
use crate::oracle::{
    DictionarySpellChecker, LanguageIdentifier, ScriptLanguageIdentifier, SpellChecker,
    Transliterator,
};
use crate::persistence::{load_from_disk, save_to_disk, SourceStamp};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The normalization context: reference lexicons, the shared correction cache
/// and the three oracles. Build one per process and share it behind an `Arc`.
pub struct NormalizerEngine {
    lexicons: Arc<LexiconStore>,
    cache: Arc<CorrectionCache>,
    identifier: Box<dyn LanguageIdentifier>,
    transliterator: Box<dyn Transliterator>,
    spell_checker: Box<dyn SpellChecker>,
}

impl NormalizerEngine {
    pub fn new(
        lexicons: Arc<LexiconStore>,
        identifier: Box<dyn LanguageIdentifier>,
        transliterator: Box<dyn Transliterator>,
        spell_checker: Box<dyn SpellChecker>,
    ) -> Self {
        Self {
            lexicons,
            cache: Arc::new(CorrectionCache::new()),
            identifier,
            transliterator,
            spell_checker,
        }
    }

    /// Shares an existing correction cache instead of starting a new one.
    pub fn with_cache(mut self, cache: Arc<CorrectionCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Builds an engine with the bundled oracles from a configuration.
    pub fn from_config(config: &NormalizerConfig) -> Result<Self> {
        let lexicons = Arc::new(load_lexicons(config)?);

        let spell_checker = match &config.data.spelling_dictionary {
            Some(path) => DictionarySpellChecker::new(read_word_list(path)?),
            None => DictionarySpellChecker::new(
                lexicons
                    .small()
                    .words()
                    .iter()
                    .chain(lexicons.large().words())
                    .cloned(),
            ),
        };
        let identifier = match &config.data.hindi_vocabulary {
            Some(path) => ScriptLanguageIdentifier::new(read_word_list(path)?),
            None => ScriptLanguageIdentifier::default(),
        };

        Ok(Self::new(
            lexicons,
            Box::new(identifier),
            Box::new(HindiTransliterator::new()),
            Box::new(spell_checker),
        ))
    }

    pub fn lexicons(&self) -> &Arc<LexiconStore> {
        &self.lexicons
    }

    pub fn cache(&self) -> &Arc<CorrectionCache> {
        &self.cache
    }

    /// Raw text in, normalized text out: clean, tag, normalize.
    pub fn normalize_text(&self, raw: &str) -> Result<String> {
        let cleaned = self.clean(raw);
        let tokens = self.tag(&cleaned)?;
        self.normalize(&tokens)
    }

    pub fn clean(&self, text: &str) -> String {
        cleaner::clean(text)
    }

    /// Labels every token of `text`, flattening the identifier's groups.
    pub fn tag(&self, text: &str) -> Result<Vec<LabeledToken>> {
        let groups = self
            .identifier
            .identify(text)
            .map_err(NormalizeError::oracle(OracleKind::Identifier))?;
        Ok(groups.into_iter().flatten().collect())
    }

    /// Normalizes each token in order and joins them with single spaces.
    pub fn normalize(&self, tokens: &[LabeledToken]) -> Result<String> {
        let words = tokens
            .iter()
            .map(|token| self.normalize_token(token))
            .collect::<Result<Vec<String>>>()?;
        Ok(words.join(" "))
    }

    fn normalize_token(&self, token: &LabeledToken) -> Result<String> {
        let mut word = token.word.clone();

        // Profane spellings skip the general transliterator; the table has
        // their canonical form.
        if !token.label.is_home() && !self.lexicons.is_profane(&word) {
            word = self
                .transliterator
                .transliterate(&word, Script::Latin, Script::Devanagari)
                .map_err(NormalizeError::oracle(OracleKind::Transliterator))?;
        }

        if let Some(canonical) = self.lexicons.profanity_canonical(&word) {
            return Ok(canonical.to_string());
        }

        if token.label.is_target() {
            let valid = self
                .spell_checker
                .check(&word)
                .map_err(NormalizeError::oracle(OracleKind::SpellChecker))?;
            if !valid {
                word = self.correct(&word)?;
            }
        }

        Ok(word)
    }

    /// Nearest valid lexicon form of `word`, memoized in the correction cache.
    pub fn correct(&self, word: &str) -> Result<String> {
        if let Some(cached) = self.cache.get(word) {
            debug!("Correction cache hit");
            return Ok(cached);
        }

        let nearest = self.lexicons.nearest(word)?;
        debug!("Correction cache miss, stored new entry");
        Ok(self.cache.insert(word, nearest))
    }

    /// Devanagari words in `text` rendered in Latin script. Not part of
    /// `normalize_text`.
    pub fn romanize(&self, text: &str) -> Result<String> {
        let words = text
            .split_whitespace()
            .map(|word| {
                self.transliterator
                    .transliterate(word, Script::Devanagari, Script::Latin)
                    .map_err(NormalizeError::oracle(OracleKind::Transliterator))
            })
            .collect::<Result<Vec<String>>>()?;
        Ok(words.join(" "))
    }
}

/// Loads the lexicons from the snapshot when it was built from the current
/// reference files, otherwise from the files themselves, writing a fresh
/// snapshot for next time.
fn load_lexicons(config: &NormalizerConfig) -> Result<LexiconStore> {
    let index_distance = config.fuzzy.index_distance;
    let data = &config.data;
    let sources: Vec<Option<SourceStamp>> = [
        &data.hindi_words,
        &data.proper_nouns,
        &data.hindi_dictionary,
        &data.profanity,
    ]
    .into_iter()
    .map(|path| path.as_deref().map(SourceStamp::read))
    .collect();

    if let Some(snapshot) = &data.snapshot {
        if snapshot.exists() {
            match load_from_disk(snapshot, &sources, index_distance) {
                Ok(Some(store)) => return Ok(store),
                Ok(None) => info!(path = %snapshot.display(), "Reference files changed, rebuilding lexicon snapshot"),
                Err(e) => warn!(path = %snapshot.display(), error = %e, "Ignoring unreadable lexicon snapshot"),
            }
        }
    }

    let store = LexiconStore::load(
        data.hindi_words.as_deref(),
        data.proper_nouns.as_deref(),
        data.hindi_dictionary.as_deref(),
        data.profanity.as_deref(),
        index_distance,
    )?;

    if let Some(snapshot) = &data.snapshot {
        if let Err(e) = save_to_disk(&store, &sources, snapshot) {
            warn!(path = %snapshot.display(), error = %e, "Could not write lexicon snapshot");
        }
    }
    Ok(store)
}
