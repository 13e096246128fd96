//! Per-request TF-IDF vectorizer.
//!
//! The vector space is fit on the whole request corpus (query + items
//! together), so vocabulary and IDF weights are shaped by the specific
//! request rather than a persistent global model. With corpora this small,
//! raw term counts let a long document's repeated terms drown out genuine
//! overlap with the query, so term frequency is presence-weighted (binary):
//! each term contributes its IDF once. Rows are L2-normalized, which makes
//! cosine similarity a plain dot product.
//!
//! IDF uses the smoothed form `ln((1 + n) / (1 + df)) + 1`, never negative
//! or zero even for terms present in every document.

use crate::config;
use crate::text::tokenizer::tokenize;
use std::collections::{HashMap, HashSet};

/// TF-IDF vectorizer: learns a vocabulary and IDF weights from a corpus,
/// then transforms documents into L2-normalized dense `f64` rows.
#[derive(Debug, Default)]
pub struct TfidfVectorizer {
    /// term → column index, assigned in sorted term order for determinism
    vocabulary: HashMap<String, usize>,
    /// IDF weight per column
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Create an unfitted vectorizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn vocabulary and IDF weights from the corpus.
    ///
    /// A corpus with no extractable terms (every entry empty or collapsed to
    /// punctuation) yields an empty vocabulary; `transform` then produces
    /// zero-length rows and every similarity downstream is 0.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) {
        let n = documents.len() as f64;
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            for term in unique_terms(doc.as_ref()) {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Sorted term order keeps column indices deterministic
        let mut terms: Vec<(String, usize)> = doc_freq.into_iter().collect();
        terms.sort_by(|a, b| a.0.cmp(&b.0));

        self.idf = terms
            .iter()
            .map(|&(_, df)| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term, idx))
            .collect();
    }

    /// Transform documents into L2-normalized TF-IDF rows using the learned
    /// vocabulary. Unknown terms are ignored.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Vec<Vec<f64>> {
        let vocab_size = self.vocabulary.len();
        documents
            .iter()
            .map(|doc| {
                let mut row = vec![0.0; vocab_size];
                for term in unique_terms(doc.as_ref()) {
                    if let Some(&idx) = self.vocabulary.get(&term) {
                        row[idx] = self.idf[idx];
                    }
                }
                l2_normalize(&mut row);
                row
            })
            .collect()
    }

    /// Fit on the corpus and transform it in one pass.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<Vec<f64>> {
        self.fit(documents);
        self.transform(documents)
    }

    /// Number of learned vocabulary terms.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Distinct terms of a document: alphanumeric runs of at least
/// [`config::MIN_TOKEN_LEN`] characters.
fn unique_terms(text: &str) -> HashSet<String> {
    tokenize(text)
        .iter()
        .filter(|t| t.chars().count() >= config::MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Scale a vector to unit L2 norm in place; zero vectors are left untouched.
fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in row.iter_mut() {
            *x /= norm;
        }
    }
}
