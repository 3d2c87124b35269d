//! Cache Entry Module
//!
//! Defines the last successful payload fetched for one URL.

use std::time::Duration;

use serde_json::Value;
use tokio::time::Instant;

// == Cache Entry ==
/// Payload fetched from upstream along with when it was fetched.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The parsed JSON body
    pub payload: Value,
    /// When the payload was fetched
    pub fetched_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            fetched_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the payload was fetched.
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served under `ttl`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is stale.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.age() < ttl
    }
}
