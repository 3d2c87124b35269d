//! Remote Client
//!
//! Issues GET requests to the NHL web API and classifies failures.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, UpstreamError};

// == Remote Client Trait ==
/// Source of raw JSON payloads, keyed by absolute URL.
///
/// The cache only talks to this trait so tests can swap in a fake upstream.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Fetches `url` and parses the body as JSON. Never retries.
    async fn get_json(&self, url: &str) -> Result<Value>;
}

// == HTTP Client ==
/// reqwest-backed client with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("nhl_explorer/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            timeout,
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

#[async_trait]
impl RemoteClient for HttpClient {
    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(UpstreamError::from_reqwest)?;

        // Anything outside 2xx is a status error, redirects reqwest did not follow included
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(UpstreamError::from_reqwest)
    }
}
