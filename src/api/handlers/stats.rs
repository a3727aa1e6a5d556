//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "url": "https://example.com/path?a=1",
///   "clicks": 3,
///   "created_at": "2026-08-07T12:34:56.789Z"
/// }
/// ```
///
/// Reading stats does not count as a click.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.link_service.link_stats(&code).await?;

    Ok(Json(StatsResponse {
        url: record.long_url,
        clicks: record.clicks,
        created_at: record.created_at,
    }))
}
