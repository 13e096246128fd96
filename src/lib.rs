//! # textmatch
//!
//! A small relevance-scoring service: given a free-text query and a list of
//! candidate items, it normalizes the text, builds a per-request TF-IDF
//! vector space, and returns the items most similar to the query by cosine
//! similarity.
//!
//! ## Architecture
//!
//! ```text
//! HTTP API (Axum) → Normalizer (lowercase, lemmatize, stop words)
//!                 → Corpus (query + one entry per item)
//!                 → TF-IDF fit per request → cosine ranking
//!                 → threshold 0.35, top 5
//! ```
//!
//! The linguistic pipeline is loaded once at startup and shared read-only
//! across requests; everything else is request-scoped, so there is no
//! persistent state of any kind.

/// REST API layer: Axum router, HTTP handlers, and request/response models.
pub mod api;
/// Global configuration constants: thresholds, caps, and server defaults.
pub mod config;
/// Relevance ranking: corpus assembly, TF-IDF, and cosine scoring.
pub mod ranking;
/// Text normalization: tokenizer, stop words, lemmatizer, pipeline.
pub mod text;
