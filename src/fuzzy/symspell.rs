// File: src/fuzzy/symspell.rs
use crate::core::types::WordId;
use std::collections::{HashMap, HashSet};

/// Candidate index based on the Symmetric Delete (SymSpell) idea. Every word is
/// stored under all of its delete variants up to `max_edit_distance`, so any
/// word within that Levenshtein distance of a query shares at least one
/// variant with it. Lookups return a superset of those words; callers still
/// compute the real distance.
#[derive(Clone, Debug)]
pub struct SymSpell {
    /// Maps a delete variant (e.g., "नम") to the ids of the words it came from.
    deletes: HashMap<String, Vec<WordId>>,
    max_edit_distance: usize,
}

impl SymSpell {
    pub fn new(max_edit_distance: usize) -> Self {
        Self {
            deletes: HashMap::new(),
            max_edit_distance,
        }
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    /// Complexity: amortized O(k^d) variants for a word of k characters.
    pub fn add_word(&mut self, word: &str, word_id: WordId) {
        for edit in self.generate_edits(word) {
            let ids = self.deletes.entry(edit).or_default();
            if ids.last() != Some(&word_id) {
                ids.push(word_id);
            }
        }
    }

    /// Ids of every word that shares a delete variant with `input`, ascending.
    /// Independent of dictionary size.
    pub fn lookup(&self, input: &str) -> Vec<WordId> {
        let mut candidates = HashSet::new();
        for edit in self.generate_edits(input) {
            if let Some(word_ids) = self.deletes.get(&edit) {
                candidates.extend(word_ids.iter().copied());
            }
        }
        let mut candidates: Vec<WordId> = candidates.into_iter().collect();
        candidates.sort_unstable();
        candidates
    }

    /// All unique variants reachable by deleting up to `max_edit_distance`
    /// characters, including the word itself. Works on chars, never bytes,
    /// so Devanagari is safe.
    fn generate_edits(&self, word: &str) -> HashSet<String> {
        let mut edits = HashSet::new();
        edits.insert(word.to_string()); // Distance 0

        let mut current_edits = vec![word.chars().collect::<Vec<char>>()];

        for _ in 0..self.max_edit_distance {
            let mut next_edits = Vec::new();
            for edit in &current_edits {
                for i in 0..edit.len() {
                    let mut deleted_variant = edit.clone();
                    deleted_variant.remove(i);
                    if edits.insert(deleted_variant.iter().collect()) {
                        next_edits.push(deleted_variant);
                    }
                }
            }
            current_edits = next_edits;
        }

        edits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(words: &[&str], distance: usize) -> SymSpell {
        let mut symspell = SymSpell::new(distance);
        for (id, word) in words.iter().enumerate() {
            symspell.add_word(word, id);
        }
        symspell
    }

    #[test]
    fn finds_words_within_distance() {
        let symspell = index(&["नाम", "काम", "मेरा"], 1);
        let found = symspell.lookup("नम");
        assert!(found.contains(&0));
        assert!(!found.contains(&2));
    }

    #[test]
    fn substitution_is_found_through_shared_delete() {
        let symspell = index(&["kaam", "naam"], 1);
        assert_eq!(symspell.lookup("taam"), vec![0, 1]);
    }

    #[test]
    fn zero_distance_is_exact_only() {
        let symspell = index(&["naam", "kaam"], 0);
        assert_eq!(symspell.lookup("naam"), vec![0]);
        assert!(symspell.lookup("nam").is_empty());
    }

    #[test]
    fn edits_are_unicode_safe() {
        let symspell = SymSpell::new(2);
        let edits = symspell.generate_edits("मेरा");
        assert!(edits.contains("मेरा"));
        assert!(edits.contains("मरा"));
        assert!(edits.contains("रा"));
    }
}
