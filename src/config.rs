//! Global configuration constants for textmatch.
//!
//! All tuning parameters and server defaults are defined here. These are
//! compile-time constants; runtime configuration is handled via CLI arguments
//! and environment variables in `main.rs`.

/// Minimum cosine similarity for an item to count as a match.
///
/// Scores below this cutoff are dropped from the response. TF-IDF vectors are
/// non-negative, so similarities fall in [0, 1].
pub const SCORE_THRESHOLD: f64 = 0.35;

/// Maximum number of matches returned per request.
pub const MAX_MATCHES: usize = 5;

/// Maximum length of the `query_label` echoed back with each match,
/// in characters. The label is the query truncated to this length,
/// with no ellipsis.
pub const QUERY_LABEL_MAX_CHARS: usize = 60;

/// Minimum term length considered by the TF-IDF vectorizer.
///
/// Single-character tokens carry no relevance signal and are skipped when
/// building the vocabulary.
pub const MIN_TOKEN_LEN: usize = 2;

/// Default language model name, overridable via `SPACY_MODEL`.
pub const DEFAULT_MODEL: &str = "en_core_web_sm";

/// Default HTTP server port, overridable via `PORT`.
pub const DEFAULT_PORT: u16 = 5001;

/// Maximum HTTP request body size in bytes (2 MB).
pub const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;
