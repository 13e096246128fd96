//! REST API layer built on Axum.
//!
//! Provides the match and health routes plus request tracing, permissive
//! CORS, and a body size limit. Each request is a single synchronous
//! computation; there are no timeouts, retries, or rate limits.

/// API error types mapped to HTTP status codes.
pub mod errors;
/// HTTP request handlers and application state.
pub mod handlers;
/// Request and response data transfer objects.
pub mod models;

use crate::config;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use handlers::AppState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router with all routes and middleware layers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/match", post(handlers::match_items))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(config::MAX_REQUEST_BODY_BYTES))
        .with_state(state)
}
