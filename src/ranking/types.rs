//! Core ranking types: candidate items and scored matches.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A candidate item supplied with a match request.
///
/// Every field is optional; missing text fields are treated as empty strings
/// during normalization and serialize back as `null` in match output. The
/// `id` is an opaque JSON value echoed back verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub item_type: Option<String>,
}

impl Item {
    /// The text used for relevance scoring: name, description, and location
    /// joined by single spaces, missing fields as empty strings.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.item_name.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or(""),
            self.location.as_deref().unwrap_or("")
        )
    }
}

/// A scored match, computed and returned within a single request.
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    pub item_id: Option<Value>,
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub item_type: Option<String>,
    /// Cosine similarity to the query, in [0, 1].
    pub score: f64,
    /// The query truncated to 60 characters, no ellipsis.
    pub query_label: String,
}
