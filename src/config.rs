//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default upstream base URL
pub const DEFAULT_API_BASE: &str = "https://api-web.nhle.com/v1";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the NHL web API, without trailing slash
    pub api_base: String,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
    /// Cache TTL in seconds for the current schedule
    pub schedule_ttl: u64,
    /// Cache TTL in seconds for standings
    pub standings_ttl: u64,
    /// Cache TTL in seconds for stat leaders
    pub leaders_ttl: u64,
    /// Cache TTL in seconds for team rosters
    pub roster_ttl: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `NHL_API_BASE` - Upstream base URL (default: https://api-web.nhle.com/v1)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds (default: 10)
    /// - `SCHEDULE_TTL` - Schedule cache TTL in seconds (default: 60)
    /// - `STANDINGS_TTL` - Standings cache TTL in seconds (default: 300)
    /// - `LEADERS_TTL` - Leaders cache TTL in seconds (default: 300)
    /// - `ROSTER_TTL` - Roster cache TTL in seconds (default: 300)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            api_base: env::var("NHL_API_BASE")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base),
            upstream_timeout: env_or("UPSTREAM_TIMEOUT", defaults.upstream_timeout),
            schedule_ttl: env_or("SCHEDULE_TTL", defaults.schedule_ttl),
            standings_ttl: env_or("STANDINGS_TTL", defaults.standings_ttl),
            leaders_ttl: env_or("LEADERS_TTL", defaults.leaders_ttl),
            roster_ttl: env_or("ROSTER_TTL", defaults.roster_ttl),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            api_base: DEFAULT_API_BASE.to_string(),
            upstream_timeout: 10,
            schedule_ttl: 60,
            standings_ttl: 300,
            leaders_ttl: 300,
            roster_ttl: 300,
        }
    }
}

/// Parses an env var, falling back to `default` when unset or malformed.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
