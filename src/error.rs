//! Error types for the explorer
//!
//! Classifies upstream failures using thiserror.

use thiserror::Error;
use tracing::{error, warn};

// == Upstream Error Enum ==
/// Failure raised while fetching from the NHL API.
///
/// Every variant maps to one user-facing message via [`UpstreamError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// Upstream did not answer within the client timeout
    #[error("Upstream request timed out")]
    Timeout,

    /// Upstream answered with a non-2xx status
    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    /// Connection-level failure (refused, DNS, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Anything else, including a body that is not valid JSON
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl UpstreamError {
    // == Classification ==
    /// Maps a reqwest failure onto the taxonomy.
    ///
    /// Timeouts are checked first since reqwest also flags them as request errors.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if let Some(status) = err.status() {
            UpstreamError::Status(status.as_u16())
        } else if err.is_connect() || err.is_request() {
            UpstreamError::Network(err.to_string())
        } else {
            UpstreamError::Unexpected(err.to_string())
        }
    }

    // == User Message ==
    /// Returns the short message shown next to an empty page section.
    ///
    /// Logs the failure at the level matching its kind.
    pub fn user_message(&self) -> String {
        match self {
            UpstreamError::Timeout => {
                warn!("NHL API request timed out");
                "The request timed out. Please try again.".to_string()
            }
            UpstreamError::Status(code) => {
                error!("NHL API returned HTTP {}", code);
                format!("NHL API error ({}). Try again later.", code)
            }
            UpstreamError::Network(detail) => {
                error!("Network error contacting NHL API: {}", detail);
                "A network error occurred.".to_string()
            }
            UpstreamError::Unexpected(detail) => {
                error!("Unexpected error in NHL API call: {}", detail);
                "An unexpected error occurred.".to_string()
            }
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for upstream fetches.
pub type Result<T> = std::result::Result<T, UpstreamError>;
