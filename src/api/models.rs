//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON marshalling via
//! Axum. `Item` and `Match` live in [`crate::ranking::types`].

use crate::ranking::{Item, Match};
use serde::{Deserialize, Serialize};

/// Request body for `POST /match`.
///
/// Both fields default so a malformed or empty body deserializes to an empty
/// request, which then fails validation the same way as missing fields.
#[derive(Debug, Default, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Response body for `POST /match`.
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<Match>,
    pub count: usize,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
