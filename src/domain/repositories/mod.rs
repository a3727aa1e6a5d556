//! Store trait definitions for the domain layer.
//!
//! Traits here define the contract for data access; the concrete in-memory
//! implementation lives in `crate::infrastructure::storage`. Mock
//! implementations are auto-generated via `mockall` for testing.

pub mod url_store;

pub use url_store::UrlStore;

#[cfg(test)]
pub use url_store::MockUrlStore;
