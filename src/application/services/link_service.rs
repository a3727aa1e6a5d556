//! Link creation, redirect resolution, and stats lookup service.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlStore;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// Service for creating and resolving shortened links.
///
/// Owns the allocation policy: random candidate codes are claimed through
/// the store's atomic insert-if-absent, retried up to a bounded number of
/// attempts. The submitted URL is validated, then stored exactly as given.
pub struct LinkService<S: UrlStore> {
    store: Arc<S>,
    generator: CodeGenerator,
    max_attempts: usize,
}

impl<S: UrlStore> LinkService<S> {
    /// Creates a new link service.
    ///
    /// `max_attempts` bounds the allocation retry loop; the default used by
    /// the server comes from [`crate::config::Config`].
    pub fn new(store: Arc<S>, generator: CodeGenerator, max_attempts: usize) -> Self {
        Self {
            store,
            generator,
            max_attempts,
        }
    }

    /// Shortens a URL, returning the newly allocated code.
    ///
    /// # Allocation
    ///
    /// Each attempt draws a fresh random code and tries to claim it with a
    /// single atomic store call, so two concurrent requests can never end up
    /// sharing a code. After `max_attempts` collisions the request fails
    /// with [`AppError::AllocationExhausted`]; with the full 62-symbol
    /// alphabet that only happens when the store is nearly saturated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is syntactically invalid
    /// or uses a scheme other than `http`/`https`; the store is not touched
    /// in that case.
    pub async fn create_short_link(&self, long_url: &str) -> Result<String, AppError> {
        validate_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        for _ in 0..self.max_attempts {
            let code = self.generator.generate();

            if self.store.insert_if_absent(&code, long_url).await? {
                return Ok(code);
            }

            tracing::debug!(%code, "short code collision, retrying");
        }

        Err(AppError::allocation_exhausted(
            "Could not generate unique short code",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    /// Resolves a short code for redirecting, counting the click.
    ///
    /// The increment happens before this returns: a stats lookup immediately
    /// after the redirect observes the new count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn follow_link(&self, code: &str) -> Result<String, AppError> {
        let record = self.store.get(code).await?.ok_or_else(|| {
            AppError::not_found("Short code not found", json!({ "code": code }))
        })?;

        // Records are never removed, so the code is still present here.
        self.store.increment_clicks(code).await?;

        Ok(record.long_url)
    }

    /// Retrieves the stored record for a stats view, without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn link_stats(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.store.get(code).await?.ok_or_else(|| {
            AppError::not_found("Short code not found", json!({ "code": code }))
        })
    }

    /// Number of links currently stored.
    pub async fn stored_links(&self) -> Result<usize, AppError> {
        self.store.len().await
    }

    /// Constructs the full short URL from a base URL and a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
