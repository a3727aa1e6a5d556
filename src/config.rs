//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `BASE_URL` - Public base URL for generated short links; when unset the
//!   request's `Host` header is used (set this behind a TLS proxy)
//! - `CODE_LENGTH` - Short code length (default: 6, max: 32)
//! - `ALLOC_ATTEMPTS` - Code allocation retry budget (default: 10)
//! - `RUST_LOG` - Log level filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

/// Default number of allocation attempts before giving up.
pub const DEFAULT_ALLOC_ATTEMPTS: usize = 10;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL override for short links, e.g. `https://sho.rt`.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    /// Characters per generated short code.
    pub code_length: usize,
    /// Maximum candidate codes tried per shorten request.
    pub alloc_attempts: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let base_url = env::var("BASE_URL").ok();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_LENGTH);

        let alloc_attempts = env::var("ALLOC_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ALLOC_ATTEMPTS);

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            code_length,
            alloc_attempts,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `log_format` is not `text` or `json`
    /// - `code_length` is 0 or larger than 32
    /// - `alloc_attempts` is 0 or larger than 1000
    /// - `base_url` does not start with `http://` or `https://`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.code_length == 0 || self.code_length > 32 {
            anyhow::bail!(
                "CODE_LENGTH must be between 1 and 32, got {}",
                self.code_length
            );
        }

        if self.alloc_attempts == 0 || self.alloc_attempts > 1000 {
            anyhow::bail!(
                "ALLOC_ATTEMPTS must be between 1 and 1000, got {}",
                self.alloc_attempts
            );
        }

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match &self.base_url {
            Some(base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: derived from request Host header"),
        }

        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Allocation attempts: {}", self.alloc_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
