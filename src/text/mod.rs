//! Text normalization: tokenization, stop-word filtering, and lemmatization.
//!
//! The pipeline mirrors a classic linguistic preprocessing chain: lowercase,
//! tokenize, keep alphabetic non-stop-word tokens, reduce each to its lemma.
//! [`Normalizer`] ties the pieces together and supports a degraded blank mode
//! when no language model is available.

/// Rule-based English lemmatizer.
pub mod lemmatizer;
/// Text normalization pipeline with full/blank modes.
pub mod normalizer;
/// Static English stop-word set.
pub mod stopwords;
/// Lowercasing tokenizer over alphanumeric runs.
pub mod tokenizer;

pub use normalizer::{ModelError, Normalizer};
