// src/core/mod.rs

pub mod cache;
pub mod cleaner;
pub mod converter;
pub mod engine;
pub mod lexicon;
pub mod types;
