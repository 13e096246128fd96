//! Relevance ranking: score items against the query and keep the best.

use crate::config;
use crate::ranking::similarity::cosine_similarity;
use crate::ranking::tfidf::TfidfVectorizer;
use crate::ranking::types::{Item, Match};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Rank items against the query over a prepared corpus.
///
/// Fits a TF-IDF space on the whole corpus, scores row 0 (the query) against
/// every item row, then sorts descending by score with a stable sort so equal
/// scores keep original item order. Matches below
/// [`config::SCORE_THRESHOLD`] are dropped and at most
/// [`config::MAX_MATCHES`] survive.
///
/// `corpus` must come from [`build_corpus`](crate::ranking::corpus::build_corpus)
/// for the same `query` and `items` (query at index 0, one entry per item).
pub fn rank_matches(query: &str, items: &[Item], corpus: &[String]) -> Vec<Match> {
    if corpus.len() != 1 + items.len() {
        return Vec::new();
    }

    let mut vectorizer = TfidfVectorizer::new();
    let rows = vectorizer.fit_transform(corpus);
    let query_row = &rows[0];
    let query_label: String = query.chars().take(config::QUERY_LABEL_MAX_CHARS).collect();

    let mut matches: Vec<Match> = items
        .iter()
        .zip(&rows[1..])
        .map(|(item, row)| Match {
            item_id: item.id.clone(),
            item_name: item.item_name.clone(),
            description: item.description.clone(),
            location: item.location.clone(),
            item_type: item.item_type.clone(),
            score: cosine_similarity(query_row, row).clamp(0.0, 1.0),
            query_label: query_label.clone(),
        })
        .collect();

    // Vec::sort_by_key is stable: ties stay in original item order
    matches.sort_by_key(|m| Reverse(OrderedFloat(m.score)));
    matches.retain(|m| m.score >= config::SCORE_THRESHOLD);
    matches.truncate(config::MAX_MATCHES);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::corpus::build_corpus;
    use crate::text::Normalizer;
    use serde_json::json;

    fn item(id: u64, name: &str) -> Item {
        Item {
            id: Some(json!(id)),
            item_name: Some(name.to_string()),
            description: None,
            location: None,
            item_type: None,
        }
    }

    fn rank(query: &str, items: &[Item]) -> Vec<Match> {
        let normalizer = Normalizer::load("en_core_web_sm").expect("known model");
        let corpus = build_corpus(&normalizer, query, items);
        rank_matches(query, items, &corpus)
    }

    #[test]
    fn identical_text_scores_one() {
        let items = vec![item(1, "lost blue backpack")];
        let matches = rank("lost blue backpack", &items);
        assert_eq!(matches.len(), 1);
        assert!((matches[0].score - 1.0).abs() < 1e-9);
        assert_eq!(matches[0].item_id, Some(json!(1)));
    }

    #[test]
    fn dissimilar_text_is_filtered_out() {
        let items = vec![item(2, "Plastic spoon")];
        let matches = rank("red umbrella", &items);
        assert!(matches.is_empty());
    }

    #[test]
    fn sorted_descending_and_capped() {
        let mut items: Vec<Item> = (1..=8).map(|i| item(i, "lost blue backpack")).collect();
        items.push(item(9, "Plastic spoon"));
        let matches = rank("lost blue backpack", &items);

        assert_eq!(matches.len(), 5);
        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // Stable tie-break: first five items in original order
        let ids: Vec<_> = matches.iter().map(|m| m.item_id.clone()).collect();
        assert_eq!(
            ids,
            vec![
                Some(json!(1)),
                Some(json!(2)),
                Some(json!(3)),
                Some(json!(4)),
                Some(json!(5))
            ]
        );
    }

    #[test]
    fn query_label_is_truncated_to_60_chars() {
        let query = "lost blue backpack with laptop charger and two heavy textbooks inside";
        assert!(query.chars().count() > 60);
        let items = vec![item(1, "Lost blue backpack with laptop charger and textbooks")];
        let matches = rank(query, &items);
        assert_eq!(matches.len(), 1);
        let expected: String = query.chars().take(60).collect();
        assert_eq!(matches[0].query_label, expected);
        assert_eq!(matches[0].query_label.chars().count(), 60);
    }

    #[test]
    fn degenerate_corpus_returns_no_matches() {
        let items = vec![item(1, "!!!")];
        let matches = rank("???", &items);
        assert!(matches.is_empty());
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let items = vec![
            item(1, "lost blue backpack"),
            item(2, "blue backpack"),
            item(3, "umbrella"),
        ];
        let normalizer = Normalizer::load("en_core_web_sm").expect("known model");
        let corpus = build_corpus(&normalizer, "lost blue backpack", &items);
        let matches = rank_matches("lost blue backpack", &items, &corpus);
        for m in &matches {
            assert!(m.score >= 0.0 && m.score <= 1.0);
        }
    }
}
