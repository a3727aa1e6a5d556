//! URL record entity representing one shortened URL.

use chrono::{DateTime, Utc};

/// A stored URL mapping with its click counter.
///
/// The `created_at` timestamp is captured once at creation and never changes.
/// `clicks` starts at zero and only ever grows, through the store's
/// increment operation.
///
/// Records handed out by the store are snapshots; mutating a returned value
/// has no effect on the stored state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl UrlRecord {
    /// Creates a fresh record for a newly shortened URL.
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            created_at: Utc::now(),
            clicks: 0,
        }
    }
}
