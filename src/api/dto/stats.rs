//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Statistics for one short link.
///
/// `created_at` serializes as an ISO-8601 / RFC 3339 UTC timestamp.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}
