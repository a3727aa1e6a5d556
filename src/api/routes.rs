//! API route configuration.

use crate::api::handlers::{api_health_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /health`        - API health with link count
/// - `POST /shorten`       - Create a shortened URL
/// - `GET  /stats/{code}`  - Statistics for a specific link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(api_health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
}
