//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host_from_headers;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// { "short_code": "aB3xY9", "short_url": "http://localhost:5000/aB3xY9" }
/// ```
///
/// The short URL base is the configured `BASE_URL` when set, otherwise the
/// request's `Host` header.
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL (bad syntax, non-HTTP(S)
/// scheme, missing host). Returns 500 if no unique code could be allocated
/// within the attempt budget.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let code = state.link_service.create_short_link(&payload.url).await?;

    let base_url = request_base_url(&state, &headers)?;
    let short_url = state.link_service.short_url(&base_url, &code);

    tracing::debug!(%code, url = %payload.url, "shortened URL");

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: code,
            short_url,
        }),
    ))
}

/// Resolves the base URL that short links are advertised under.
///
/// Prefers the configured override; otherwise reconstructs it from the
/// request's `Host` header. A plain HTTP listener cannot know it is served
/// over TLS, so deployments behind a terminating proxy set `BASE_URL`.
fn request_base_url(state: &AppState, headers: &HeaderMap) -> Result<String, AppError> {
    if let Some(base_url) = &state.base_url {
        return Ok(base_url.clone());
    }

    let host = extract_host_from_headers(headers)?;
    Ok(format!("http://{host}"))
}
