//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// The click counter is incremented before the response is produced; a
/// stats request issued right after the redirect sees the updated count.
///
/// # Response
///
/// A literal `302 Found` with the target in the `Location` header. Axum's
/// `Redirect` helpers emit 303/307/308, none of which is the contract here,
/// so the response is assembled by hand.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.link_service.follow_link(&code).await?;

    debug!(%code, %target, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]))
}
