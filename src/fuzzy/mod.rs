// src/fuzzy/mod.rs

pub mod symspell;

pub use symspell::SymSpell;
