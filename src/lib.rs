//! # shorturl
//!
//! A minimal URL shortener API with in-memory state, built with Axum.
//!
//! ## Architecture
//!
//! The crate follows a layered structure with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the store trait
//! - **Application Layer** ([`application`]) - Code allocation and link resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - The lock-guarded in-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 6-character alphanumeric short codes with bounded collision retry
//! - Atomic claim of a free code, safe under concurrent shorten requests
//! - Synchronous click counting with no lost updates
//! - Health endpoints and structured request logging
//!
//! State is process-local and not persisted; a restart starts empty.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export LISTEN="0.0.0.0:5000"
//! export BASE_URL="https://sho.rt"   # public short-link base behind a proxy
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::UrlStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::storage::MemoryUrlStore;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::CodeGenerator;
}
