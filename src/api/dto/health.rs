//! DTOs for the health endpoints.
//!
//! Three fixed payload shapes, one per endpoint; the shapes are part of the
//! public API contract and must not grow fields.

use serde::Serialize;

/// `GET /` service banner.
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub status: String,
    pub service: String,
}

/// `GET /api/health` status with a human-readable message.
#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    pub status: String,
    pub message: String,
}

/// `GET /health` bare liveness probe.
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: String,
}
