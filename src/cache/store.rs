//! TTL Cache Module
//!
//! Read-through cache keyed by upstream URL. Serves fresh payloads locally and
//! refreshes stale or missing ones through the remote client.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::Result;
use crate::upstream::RemoteClient;

// == TTL Cache ==
/// Process-wide response cache in front of the NHL API.
///
/// Locks are held only around the table lookup and the insert, never across
/// the upstream call. Two requests for the same stale URL may therefore both
/// go upstream; the later insert wins and both payloads are complete.
/// Coalescing concurrent refreshes per key would change that and is not done here.
pub struct TtlCache {
    /// URL -> last successful payload
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Performance statistics
    stats: RwLock<CacheStats>,
    /// Where misses are fetched from
    client: Arc<dyn RemoteClient>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache that refreshes through `client`.
    pub fn new(client: Arc<dyn RemoteClient>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stats: RwLock::new(CacheStats::new()),
            client,
        }
    }

    // == Fetch ==
    /// Returns the payload for `url`, going upstream only if the cached one is
    /// missing or at least `ttl` old.
    ///
    /// A failed refresh propagates the error and leaves any stale entry in
    /// place without serving it. Failures are never cached.
    pub async fn fetch(&self, url: &str, ttl: Duration) -> Result<Value> {
        let cached = {
            let entries = self.entries.read().await;
            entries
                .get(url)
                .filter(|entry| entry.is_fresh(ttl))
                .map(|entry| entry.payload.clone())
        };

        if let Some(payload) = cached {
            debug!("Cache hit: {}", url);
            self.stats.write().await.record_hit();
            return Ok(payload);
        }

        debug!("Cache miss: {}", url);
        self.stats.write().await.record_miss();

        match self.client.get_json(url).await {
            Ok(payload) => {
                let count = {
                    let mut entries = self.entries.write().await;
                    entries.insert(url.to_string(), CacheEntry::new(payload.clone()));
                    entries.len()
                };
                let mut stats = self.stats.write().await;
                stats.record_refresh();
                stats.set_total_entries(count);
                Ok(payload)
            }
            Err(err) => {
                debug!("Refresh failed for {}: {}", url, err);
                self.stats.write().await.record_refresh_failure();
                Err(err)
            }
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let mut stats = self.stats.read().await.clone();
        stats.set_total_entries(self.len().await);
        stats
    }

    // == Length ==
    /// Returns the number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
