// src/core/cleaner.rs
use once_cell::sync::Lazy;
use regex::Regex;

static MENTION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").unwrap());
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());
// ZWJ/ZWNJ are deliberately absent: Devanagari conjuncts use them.
static EMOJI_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "[\u{1F000}-\u{1FAFF}\u{2600}-\u{27BF}\u{2B00}-\u{2BFF}\
         \u{231A}\u{231B}\u{2328}\u{23CF}\u{23E9}-\u{23FA}\
         \u{2194}-\u{2199}\u{21A9}\u{21AA}\u{25AA}\u{25AB}\u{25B6}\u{25C0}\u{25FB}-\u{25FE}\
         \u{2934}\u{2935}\u{3030}\u{303D}\u{3297}\u{3299}\
         \u{00A9}\u{00AE}\u{203C}\u{2049}\u{2122}\u{2139}\u{20E3}\u{FE0F}]",
    )
    .unwrap()
});

/// Lowercases the text and strips mentions, markup tags, URLs and emoji.
/// Whitespace left behind by the removals is kept as is.
pub fn clean(text: &str) -> String {
    let text = text.to_lowercase();
    let text = MENTION_PATTERN.replace_all(&text, "");
    let text = TAG_PATTERN.replace_all(&text, "");
    let text = URL_PATTERN.replace_all(&text, "");
    EMOJI_PATTERN.replace_all(&text, "").into_owned()
}
