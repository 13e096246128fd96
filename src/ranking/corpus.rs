//! Corpus assembly for a match request.

use crate::ranking::types::Item;
use crate::text::Normalizer;

/// Build the normalized corpus for a request: the query at index 0, then one
/// entry per item (name, description, and location concatenated) in input
/// order. The result always has exactly `1 + items.len()` entries, so row 0
/// of the fitted vector space is the query and row `i + 1` is item `i`.
pub fn build_corpus(normalizer: &Normalizer, query: &str, items: &[Item]) -> Vec<String> {
    let mut corpus = Vec::with_capacity(1 + items.len());
    corpus.push(normalizer.normalize(query));
    for item in items {
        corpus.push(normalizer.normalize(&item.search_text()));
    }
    corpus
}
