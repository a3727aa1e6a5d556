//! Shared application state.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::storage::MemoryUrlStore;

/// State injected into every handler.
///
/// Constructed once at startup (or per test) and cloned into handlers;
/// there is no module-level singleton, so tests can run any number of
/// independent instances.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryUrlStore>>,
    /// Optional public base URL override for generated short links.
    /// When `None`, the request's `Host` header is used.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<MemoryUrlStore>>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
