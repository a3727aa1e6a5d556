//! Host extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Extracts the host (including any port) from the `Host` request header.
///
/// The port is kept, unlike a bare domain lookup, because short URLs must
/// reproduce the host URL the client used (`localhost:5000`,
/// `sho.rt:8080`, ...).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// let host = extract_host_from_headers(&headers).unwrap();
/// assert_eq!(host, "example.com:8080");
/// ```
pub fn extract_host_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?;

    if host.is_empty() {
        return Err(AppError::bad_request(
            "Empty Host header",
            serde_json::json!({}),
        ));
    }

    Ok(host.to_string())
}
