//! In-memory implementation of the URL store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlStore;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;

/// Lock-guarded map from short code to [`UrlRecord`].
///
/// A single mutex over the whole map keeps every operation linearizable;
/// critical sections are bounded by map-access cost and never touch I/O, so
/// a `std` mutex is sufficient even under async callers. State lives for the
/// process lifetime; there is no eviction and no persistence.
pub struct MemoryUrlStore {
    links: Mutex<HashMap<String, UrlRecord>>,
}

impl MemoryUrlStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
        }
    }

    /// Acquires the map lock, converting poisoning into an internal error
    /// instead of panicking in the request path.
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, UrlRecord>>, AppError> {
        self.links
            .lock()
            .map_err(|_| AppError::internal("URL store lock poisoned", json!({})))
    }
}

impl Default for MemoryUrlStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlStore for MemoryUrlStore {
    async fn insert(&self, code: &str, long_url: &str) -> Result<UrlRecord, AppError> {
        let record = UrlRecord::new(long_url);
        self.lock()?.insert(code.to_string(), record.clone());
        Ok(record)
    }

    async fn insert_if_absent(&self, code: &str, long_url: &str) -> Result<bool, AppError> {
        let mut links = self.lock()?;

        if links.contains_key(code) {
            return Ok(false);
        }

        links.insert(code.to_string(), UrlRecord::new(long_url));
        Ok(true)
    }

    async fn get(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.lock()?.get(code).cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        match self.lock()?.get_mut(code) {
            Some(record) => {
                record.clicks += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn len(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_insert_then_get_returns_equal_record() {
        let store = MemoryUrlStore::new();

        let inserted = store
            .insert("abc123", "https://example.com/page")
            .await
            .unwrap();
        let fetched = store.get("abc123").await.unwrap().unwrap();

        assert_eq!(fetched, inserted);
        assert_eq!(fetched.long_url, "https://example.com/page");
        assert_eq!(fetched.clicks, 0);
    }

    #[tokio::test]
    async fn test_get_unknown_code_is_none() {
        let store = MemoryUrlStore::new();

        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_is_idempotent() {
        let store = MemoryUrlStore::new();
        store.insert("abc123", "https://example.com").await.unwrap();

        let first = store.get("abc123").await.unwrap().unwrap();
        let second = store.get("abc123").await.unwrap().unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_insert_overwrites_existing_record() {
        let store = MemoryUrlStore::new();

        store.insert("abc123", "https://old.example.com").await.unwrap();
        store.increment_clicks("abc123").await.unwrap();
        store.insert("abc123", "https://new.example.com").await.unwrap();

        let record = store.get("abc123").await.unwrap().unwrap();
        assert_eq!(record.long_url, "https://new.example.com");
        assert_eq!(record.clicks, 0);
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_if_absent_claims_free_code() {
        let store = MemoryUrlStore::new();

        let inserted = store
            .insert_if_absent("abc123", "https://example.com")
            .await
            .unwrap();

        assert!(inserted);
        assert!(store.get("abc123").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_insert_if_absent_keeps_existing_record() {
        let store = MemoryUrlStore::new();
        store
            .insert_if_absent("abc123", "https://first.example.com")
            .await
            .unwrap();

        let inserted = store
            .insert_if_absent("abc123", "https://second.example.com")
            .await
            .unwrap();

        assert!(!inserted);
        let record = store.get("abc123").await.unwrap().unwrap();
        assert_eq!(record.long_url, "https://first.example.com");
    }

    #[tokio::test]
    async fn test_increment_clicks_counts_up() {
        let store = MemoryUrlStore::new();
        store.insert("abc123", "https://example.com").await.unwrap();

        assert!(store.increment_clicks("abc123").await.unwrap());
        assert!(store.increment_clicks("abc123").await.unwrap());

        let record = store.get("abc123").await.unwrap().unwrap();
        assert_eq!(record.clicks, 2);
    }

    #[tokio::test]
    async fn test_increment_clicks_unknown_code_has_no_effect() {
        let store = MemoryUrlStore::new();

        assert!(!store.increment_clicks("missing").await.unwrap());
        assert_eq!(store.len().await.unwrap(), 0);
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_increment_does_not_touch_created_at() {
        let store = MemoryUrlStore::new();
        let inserted = store.insert("abc123", "https://example.com").await.unwrap();

        store.increment_clicks("abc123").await.unwrap();

        let record = store.get("abc123").await.unwrap().unwrap();
        assert_eq!(record.created_at, inserted.created_at);
    }

    #[tokio::test]
    async fn test_len_tracks_distinct_codes() {
        let store = MemoryUrlStore::new();

        store.insert("a", "https://example.com/1").await.unwrap();
        store.insert("b", "https://example.com/2").await.unwrap();
        store.insert("a", "https://example.com/3").await.unwrap();

        assert_eq!(store.len().await.unwrap(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_lose_no_updates() {
        const TASKS: usize = 16;
        const INCREMENTS_PER_TASK: usize = 50;

        let store = Arc::new(MemoryUrlStore::new());
        store.insert("hot", "https://example.com").await.unwrap();

        let mut handles = Vec::with_capacity(TASKS);
        for _ in 0..TASKS {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..INCREMENTS_PER_TASK {
                    assert!(store.increment_clicks("hot").await.unwrap());
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let record = store.get("hot").await.unwrap().unwrap();
        assert_eq!(record.clicks, (TASKS * INCREMENTS_PER_TASK) as u64);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_claims_on_one_code_admit_single_winner() {
        const TASKS: usize = 32;

        let store = Arc::new(MemoryUrlStore::new());

        let mut handles = Vec::with_capacity(TASKS);
        for i in 0..TASKS {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let url = format!("https://example.com/{i}");
                store.insert_if_absent("contested", &url).await.unwrap()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(store.len().await.unwrap(), 1);
    }
}
