//! Concrete store implementations.

pub mod memory_url_store;

pub use memory_url_store::MemoryUrlStore;
