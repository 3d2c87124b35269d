//! Cache Module
//!
//! Provides the in-memory TTL cache that sits between handlers and the NHL API.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;
