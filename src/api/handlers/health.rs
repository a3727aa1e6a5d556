//! Handlers for the health endpoints.

use axum::{Json, extract::State};

use crate::api::dto::health::{ApiHealthResponse, LivenessResponse, ServiceInfoResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the service banner.
///
/// # Endpoint
///
/// `GET /`
pub async fn service_info_handler() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        status: "healthy".to_string(),
        service: "URL Shortener API".to_string(),
    })
}

/// Returns API health with a live reading from the store.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// The message embeds the current link count so the endpoint exercises the
/// store rather than reporting a constant.
pub async fn api_health_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiHealthResponse>, AppError> {
    let links = state.link_service.stored_links().await?;

    Ok(Json(ApiHealthResponse {
        status: "ok".to_string(),
        message: format!("URL Shortener API is running ({links} links)"),
    }))
}

/// Bare liveness probe.
///
/// # Endpoint
///
/// `GET /health`
pub async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok".to_string(),
    })
}
