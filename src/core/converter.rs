// src/core/converter.rs
use crate::core::types::Script;
use crate::error::OracleError;
use crate::oracle::Transliterator;

const HALANT: char = '\u{094d}';
const NUKTA: char = '\u{093c}';
const ANUSVARA: char = '\u{0902}';
const CHANDRABINDU: char = '\u{0901}';
const VISARGA: char = '\u{0903}';

/// Roman consonant clusters, longest first so greedy matching prefers "chh" over "ch".
const CONSONANTS: &[(&str, &str)] = &[
    ("chh", "छ"),
    ("kh", "ख"), ("gh", "घ"), ("ch", "च"), ("jh", "झ"),
    ("th", "थ"), ("dh", "ध"), ("ph", "फ"), ("bh", "भ"),
    ("sh", "श"),
    ("k", "क"), ("g", "ग"), ("c", "क"), ("j", "ज"),
    ("t", "त"), ("d", "द"), ("n", "न"), ("p", "प"),
    ("b", "ब"), ("m", "म"), ("y", "य"), ("r", "र"),
    ("l", "ल"), ("v", "व"), ("w", "व"), ("s", "स"),
    ("h", "ह"), ("f", "फ़"), ("z", "ज़"), ("q", "क़"),
    ("x", "क्स"),
];

/// (roman, independent vowel, matra). `a` has no matra: it is the inherent vowel.
const VOWELS: &[(&str, char, Option<char>)] = &[
    ("aa", 'आ', Some('ा')),
    ("ai", 'ऐ', Some('ै')),
    ("au", 'औ', Some('ौ')),
    ("ee", 'ई', Some('ी')),
    ("ii", 'ई', Some('ी')),
    ("oo", 'ऊ', Some('ू')),
    ("uu", 'ऊ', Some('ू')),
    ("a", 'अ', None),
    ("i", 'इ', Some('ि')),
    ("u", 'उ', Some('ु')),
    ("e", 'ए', Some('े')),
    ("o", 'ओ', Some('ो')),
];

/// A rule-based Hindi transliterator between Latin and Devanagari.
///
/// Good enough to make romanized Hindi look like Hindi; it is not a
/// linguistic model and makes no attempt at schwa or nasal subtleties
/// beyond the word-final `a`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HindiTransliterator;

impl HindiTransliterator {
    pub fn new() -> Self {
        Self
    }

    /// Latin -> Devanagari, one word or a whole phrase.
    pub fn to_devanagari(&self, roman: &str) -> String {
        let chars: Vec<char> = roman.chars().collect();
        let mut result = String::with_capacity(roman.len() * 3);
        let mut pos = 0;
        // The last thing emitted was a bare consonant still carrying its inherent vowel.
        let mut after_consonant = false;

        while pos < chars.len() {
            if let Some((len, deva)) = match_prefix(&chars[pos..], CONSONANTS) {
                if after_consonant {
                    result.push(HALANT);
                }
                result.push_str(deva);
                after_consonant = true;
                pos += len;
                continue;
            }

            if let Some((len, &(roman_vowel, independent, matra))) = match_vowel(&chars[pos..]) {
                let word_final = chars.get(pos + len).map_or(true, |c| !c.is_alphabetic());
                if after_consonant {
                    match matra {
                        Some(m) => result.push(m),
                        // A word-final "a" is almost always long in romanized Hindi: "mera" -> "मेरा".
                        None if word_final && roman_vowel == "a" => result.push('ा'),
                        None => {}
                    }
                } else {
                    result.push(independent);
                }
                after_consonant = false;
                pos += len;
                continue;
            }

            result.push(chars[pos]);
            after_consonant = false;
            pos += 1;
        }

        result
    }

    /// Devanagari -> Latin. Inherent vowels are written out except at the end of a word.
    pub fn to_latin(&self, deva: &str) -> String {
        let chars: Vec<char> = deva.chars().collect();
        let mut result = String::with_capacity(deva.len());

        for (i, &c) in chars.iter().enumerate() {
            if let Some(roman) = consonant_to_latin(c) {
                result.push_str(roman);
                let next = chars.get(i + 1).copied();
                let next = if next == Some(NUKTA) { chars.get(i + 2).copied() } else { next };
                let needs_schwa = match next {
                    Some(n) if n == HALANT || matra_to_latin(n).is_some() => false,
                    Some(n) if is_devanagari_letter(n) || n == ANUSVARA || n == CHANDRABINDU => true,
                    _ => false,
                };
                if needs_schwa {
                    result.push('a');
                }
            } else if let Some(roman) = matra_to_latin(c).or_else(|| independent_to_latin(c)) {
                result.push_str(roman);
            } else {
                match c {
                    HALANT | NUKTA => {}
                    ANUSVARA | CHANDRABINDU => result.push('n'),
                    VISARGA => result.push('h'),
                    '।' => result.push('.'),
                    other => result.push(other),
                }
            }
        }

        result
    }
}

impl Transliterator for HindiTransliterator {
    fn transliterate(&self, word: &str, from: Script, to: Script) -> Result<String, OracleError> {
        match (from, to) {
            (Script::Latin, Script::Devanagari) => Ok(self.to_devanagari(word)),
            (Script::Devanagari, Script::Latin) => Ok(self.to_latin(word)),
            (from, to) if from == to => Ok(word.to_string()),
            (from, to) => Err(OracleError::Unsupported { from, to }),
        }
    }
}

fn match_prefix(chars: &[char], table: &'static [(&'static str, &'static str)]) -> Option<(usize, &'static str)> {
    table.iter().find_map(|&(roman, deva)| {
        let len = roman.chars().count();
        (chars.len() >= len && roman.chars().zip(chars).all(|(a, &b)| a == b)).then_some((len, deva))
    })
}

fn match_vowel(chars: &[char]) -> Option<(usize, &'static (&'static str, char, Option<char>))> {
    VOWELS.iter().find_map(|entry| {
        let len = entry.0.chars().count();
        (chars.len() >= len && entry.0.chars().zip(chars).all(|(a, &b)| a == b)).then_some((len, entry))
    })
}

fn is_devanagari_letter(c: char) -> bool {
    consonant_to_latin(c).is_some() || independent_to_latin(c).is_some()
}

fn consonant_to_latin(c: char) -> Option<&'static str> {
    let roman = match c {
        'क' => "k", 'ख' => "kh", 'ग' => "g", 'घ' => "gh", 'ङ' => "n",
        'च' => "ch", 'छ' => "chh", 'ज' => "j", 'झ' => "jh", 'ञ' => "n",
        'ट' => "t", 'ठ' => "th", 'ड' => "d", 'ढ' => "dh", 'ण' => "n",
        'त' => "t", 'थ' => "th", 'द' => "d", 'ध' => "dh", 'न' => "n",
        'प' => "p", 'फ' => "ph", 'ब' => "b", 'भ' => "bh", 'म' => "m",
        'य' => "y", 'र' => "r", 'ल' => "l", 'व' => "v",
        'श' => "sh", 'ष' => "sh", 'स' => "s", 'ह' => "h",
        _ => return None,
    };
    Some(roman)
}

fn matra_to_latin(c: char) -> Option<&'static str> {
    let roman = match c {
        'ा' => "aa", 'ि' => "i", 'ी' => "ee", 'ु' => "u", 'ू' => "oo",
        'ृ' => "ri", 'े' => "e", 'ै' => "ai", 'ो' => "o", 'ौ' => "au",
        _ => return None,
    };
    Some(roman)
}

fn independent_to_latin(c: char) -> Option<&'static str> {
    let roman = match c {
        'अ' => "a", 'आ' => "aa", 'इ' => "i", 'ई' => "ee", 'उ' => "u",
        'ऊ' => "oo", 'ऋ' => "ri", 'ए' => "e", 'ऐ' => "ai", 'ओ' => "o",
        'औ' => "au",
        _ => return None,
    };
    Some(roman)
}
