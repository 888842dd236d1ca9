use hinglish_core::core::converter::HindiTransliterator;
use hinglish_core::core::lexicon::LexiconStore;
use hinglish_core::core::types::ProfanityEntry;
use hinglish_core::oracle::{DictionarySpellChecker, ScriptLanguageIdentifier};
use hinglish_core::{LabeledToken, NormalizeError, NormalizerEngine, OracleError, Script};
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

const SMALL: &[&str] = &["मेरा", "नाम", "है", "मैन", "एक", "हून", "काम"];

fn lexicons() -> Arc<LexiconStore> {
    Arc::new(LexiconStore::new(
        SMALL.iter().map(|w| w.to_string()),
        vec!["इंजीनियर".to_string()],
        vec![ProfanityEntry {
            roman: "mulle".into(),
            deva: "मुल्ले".into(),
        }],
        1,
    ))
}

fn bundled_engine() -> NormalizerEngine {
    NormalizerEngine::new(
        lexicons(),
        Box::new(ScriptLanguageIdentifier::new(["mera", "naam", "hai", "main", "ek", "hoon", "kaam"])),
        Box::new(HindiTransliterator::new()),
        Box::new(DictionarySpellChecker::new(SMALL.iter().copied())),
    )
}

#[test]
fn spec_example_with_stub_oracles() {
    let table: HashMap<&str, &str> = [("mera", "मेरा"), ("naam", "नाम")].into_iter().collect();
    let engine = NormalizerEngine::new(
        lexicons(),
        Box::new(ScriptLanguageIdentifier::default()),
        Box::new(move |word: &str, _: Script, _: Script| {
            Ok::<_, OracleError>(table.get(word).map_or_else(|| word.to_string(), |w| w.to_string()))
        }),
        Box::new(|_: &str| Ok::<_, OracleError>(true)),
    );
    let tokens = vec![
        LabeledToken::from_code("mera", "HI"),
        LabeledToken::from_code("naam", "HI"),
        LabeledToken::from_code("roshan", "EN"),
    ];
    assert_eq!(engine.normalize(&tokens).unwrap(), "मेरा नाम roshan");
}

#[test]
fn end_to_end_with_bundled_oracles() {
    let engine = bundled_engine();
    let out = engine
        .normalize_text("@pikachu Mera naam roshan hai main ek https://example.com engineer hoon")
        .unwrap();
    assert_eq!(out, "मेरा नाम roshan है मैन एक engineer हून");
}

#[test]
fn profanity_is_canonicalized_in_english_context() {
    let engine = bundled_engine();
    let out = engine
        .normalize_text("old video saar, last time also mulle got piped #LMFAO")
        .unwrap();
    assert_eq!(out, "old video saar, last time also मुल्ले got piped #lmfao");
}

#[test]
fn english_text_is_a_fixed_point() {
    let engine = bundled_engine();
    let text = "this is plain english text";
    let once = engine.normalize_text(text).unwrap();
    assert_eq!(once, text);
    assert_eq!(engine.normalize_text(&once).unwrap(), once);
}

#[test]
fn output_keeps_one_word_per_token() {
    let engine = bundled_engine();
    let tokens: Vec<LabeledToken> = ["kaam", "hai", "xyz", "boss", "mulle"]
        .iter()
        .zip(["HI", "HI", "HI", "EN", "EN"])
        .map(|(w, l)| LabeledToken::from_code(*w, l))
        .collect();
    let out = engine.normalize(&tokens).unwrap();
    assert_eq!(out.split(' ').count(), tokens.len());
    assert!(out.ends_with("boss मुल्ले"));
}

#[test]
fn identifier_failure_is_reported() {
    let engine = NormalizerEngine::new(
        lexicons(),
        Box::new(|_: &str| Err::<Vec<Vec<LabeledToken>>, _>(OracleError::Failed("model not loaded".into()))),
        Box::new(HindiTransliterator::new()),
        Box::new(DictionarySpellChecker::default()),
    );
    let err = engine.normalize_text("kuch bhi").unwrap_err();
    assert!(matches!(err, NormalizeError::OracleFailure { .. }));
}

#[test]
fn concurrent_normalization_matches_sequential() {
    let engine = Arc::new(bundled_engine());
    let inputs = ["mera naam hai", "kaam hai", "naam mulle", "ek xyz hoon"];
    let expected: Vec<String> = inputs
        .iter()
        .map(|text| bundled_engine().normalize_text(text).unwrap())
        .collect();

    let handles: Vec<_> = (0..4)
        .flat_map(|_| inputs.iter().enumerate())
        .map(|(i, text)| {
            let engine = Arc::clone(&engine);
            let text = text.to_string();
            thread::spawn(move || (i, engine.normalize_text(&text).unwrap()))
        })
        .collect();

    for handle in handles {
        let (i, out) = handle.join().unwrap();
        assert_eq!(out, expected[i]);
    }
}
