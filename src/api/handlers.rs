//! HTTP request handlers and shared application state.
//!
//! Each public async function corresponds to an API route registered in
//! [`create_router`](crate::api::create_router). The match handler validates
//! input, delegates to the corpus builder and ranker, and serializes the
//! result; there is no per-request state beyond the computation itself.

use crate::api::errors::ApiError;
use crate::api::models::{HealthResponse, MatchRequest, MatchResponse};
use crate::ranking::{build_corpus, rank_matches};
use crate::text::Normalizer;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

/// Shared application state passed to every handler via Axum's `State`
/// extractor. The normalizer is loaded once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub normalizer: Arc<Normalizer>,
}

/// `POST /match` — rank the supplied items against the query.
///
/// The body is parsed leniently: malformed or missing JSON is treated as an
/// empty payload, which fails the same validation as missing fields. A valid
/// request returns the matches scoring at least the threshold, descending,
/// capped, with `count == matches.len()`.
pub async fn match_items(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MatchResponse>, ApiError> {
    let req: MatchRequest = serde_json::from_slice(&body).unwrap_or_default();

    let query = req.query.trim();
    if query.is_empty() || req.items.is_empty() {
        return Err(ApiError::BadRequest(
            "Query and items data required".to_string(),
        ));
    }

    let corpus = build_corpus(&state.normalizer, query, &req.items);
    let matches = rank_matches(query, &req.items, &corpus);

    tracing::debug!(
        items = req.items.len(),
        matches = matches.len(),
        "match request processed"
    );

    Ok(Json(MatchResponse {
        count: matches.len(),
        matches,
    }))
}

/// `GET /health` — liveness probe, always `{"status": "ok"}`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
