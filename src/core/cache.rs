// src/core/cache.rs
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Memoized nearest-neighbour corrections, shared by every normalization.
///
/// Entries are never evicted or replaced: the first value stored for a key is
/// the value for the lifetime of the cache.
#[derive(Debug, Default)]
pub struct CorrectionCache {
    entries: RwLock<HashMap<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CorrectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<String> {
        let found = self.entries.read().get(word).cloned();
        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Stores `correction` unless `word` already has one, and returns the
    /// value that is now cached. A racing writer never overwrites an entry.
    pub fn insert(&self, word: &str, correction: String) -> String {
        self.entries
            .write()
            .entry(word.to_string())
            .or_insert(correction)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn first_write_wins() {
        let cache = CorrectionCache::new();
        assert_eq!(cache.insert("नम", "नाम".to_string()), "नाम");
        assert_eq!(cache.insert("नम", "काम".to_string()), "नाम");
        assert_eq!(cache.get("नम").as_deref(), Some("नाम"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn counts_hits_and_misses() {
        let cache = CorrectionCache::new();
        assert!(cache.get("x").is_none());
        cache.insert("x", "y".to_string());
        assert!(cache.get("x").is_some());
        assert_eq!(cache.stats(), CacheStats { entries: 1, hits: 1, misses: 1 });
    }

    #[test]
    fn concurrent_writers_agree() {
        let cache = Arc::new(CorrectionCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.insert("shabd", format!("value-{i}")))
            })
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let stored = cache.get("shabd").unwrap();
        assert!(results.iter().all(|r| *r == stored));
    }
}
