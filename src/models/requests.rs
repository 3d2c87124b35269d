//! Request DTOs for the explorer API
//!
//! Query strings are taken as raw text so that malformed values reach the
//! validator instead of being rejected by the extractor.

use serde::Deserialize;

/// Query parameters accepted by the data endpoints.
///
/// Each endpoint reads only the fields it uses. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExplorerQuery {
    /// `All`, `Eastern` or `Western`
    #[serde(default)]
    pub conference: Option<String>,
    /// Stat category key, e.g. `goals`
    #[serde(default)]
    pub category: Option<String>,
    /// Leaderboard size; kept as text so `limit=abc` is coerced, not refused
    #[serde(default)]
    pub limit: Option<String>,
    /// Three-letter team code
    #[serde(default)]
    pub team: Option<String>,
}
