//! Response DTOs for the explorer API
//!
//! Defines the shaped payloads handed to the presentation layer.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

// == Shaped Response ==
/// Data for one page section plus an optional error message.
///
/// When `error` is set, `data` holds only empty collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedResponse<T> {
    pub data: T,
    pub error: Option<String>,
}

impl<T> ShapedResponse<T> {
    /// Successful response
    pub fn ok(data: T) -> Self {
        Self { data, error: None }
    }

    /// Errored response carrying `empty` as its data
    pub fn failed(empty: T, message: impl Into<String>) -> Self {
        Self {
            data: empty,
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// One day of the schedule (GET /scores)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameDay {
    /// ISO date, empty when there is no scheduled day
    pub date: String,
    pub games: Vec<Value>,
}

pub type ScoresData = GameDay;

/// GET /standings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsData {
    /// Validated conference filter
    pub conference: &'static str,
    pub standings: Vec<Value>,
}

/// GET /leaders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadersData {
    pub category: &'static str,
    pub category_label: &'static str,
    pub limit: u32,
    pub players: Vec<Value>,
}

/// Roster split by position
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RosterGroups {
    pub forwards: Vec<Value>,
    pub defensemen: Vec<Value>,
    pub goalies: Vec<Value>,
}

/// GET /roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterData {
    pub team: &'static str,
    pub team_name: &'static str,
    #[serde(flatten)]
    pub groups: RosterGroups,
}

// == Metadata ==
/// Entry of GET /teams
#[derive(Debug, Clone, Serialize)]
pub struct TeamOption {
    pub code: &'static str,
    pub name: &'static str,
}

/// Entry of GET /categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub refreshes: u64,
    pub refresh_failures: u64,
    /// Cached URLs, stale ones included
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            refreshes: stats.refreshes,
            refresh_failures: stats.refresh_failures,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
