//! Relevance ranking: corpus assembly, TF-IDF vectorization, and cosine
//! scoring of candidate items against a query.
//!
//! The vector space is re-fit for every request over the query plus its
//! items, so there is no persistent model state and no cross-request caching.

/// Corpus builder: query first, one normalized entry per item.
pub mod corpus;
/// Score, sort, filter, and cap matches.
pub mod ranker;
/// Cosine similarity.
pub mod similarity;
/// Per-request TF-IDF vectorizer.
pub mod tfidf;
/// Item and Match types.
pub mod types;

pub use corpus::build_corpus;
pub use ranker::rank_matches;
pub use types::{Item, Match};
