#![allow(dead_code)]

use std::sync::Arc;

use shorturl::prelude::*;

/// Base URL configured on test states, so generated short links are
/// predictable without a real Host header.
pub const TEST_BASE_URL: &str = "http://sho.rt";

/// Builds an app state over a fresh in-memory store with default settings.
///
/// Returns the store handle alongside the state so tests can seed and
/// inspect records directly.
pub fn create_test_state() -> (AppState, Arc<MemoryUrlStore>) {
    create_test_state_with(CodeGenerator::new(6), 10)
}

/// Builds an app state with a custom generator and attempt budget.
pub fn create_test_state_with(
    generator: CodeGenerator,
    alloc_attempts: usize,
) -> (AppState, Arc<MemoryUrlStore>) {
    let store = Arc::new(MemoryUrlStore::new());
    let link_service = Arc::new(LinkService::new(store.clone(), generator, alloc_attempts));
    let state = AppState::new(link_service, Some(TEST_BASE_URL.to_string()));

    (state, store)
}

/// Builds an app state with no configured base URL, so short links derive
/// from the request's Host header.
pub fn create_test_state_without_base_url() -> (AppState, Arc<MemoryUrlStore>) {
    let store = Arc::new(MemoryUrlStore::new());
    let link_service = Arc::new(LinkService::new(store.clone(), CodeGenerator::new(6), 10));
    let state = AppState::new(link_service, None);

    (state, store)
}

pub async fn seed_link(store: &MemoryUrlStore, code: &str, url: &str) {
    store.insert(code, url).await.unwrap();
}
