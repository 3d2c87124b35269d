//! Explorer Service
//!
//! The four data operations behind the HTTP API. Each one validates its
//! parameters, fetches through the TTL cache and shapes the payload. Upstream
//! failures become the message of an empty response and never escape.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    GameDay, LeadersData, RosterData, RosterGroups, ScoresData, ShapedResponse, StandingsData,
};
use crate::params::{self, category_label, team_name};
use crate::shaper;
use crate::upstream::{HttpClient, RemoteClient};

// == Endpoint ==
/// Upstream endpoints consumed by the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Schedule,
    Standings,
    Leaders { category: &'static str, limit: u32 },
    Roster { team: &'static str },
}

impl Endpoint {
    /// Path below the API base, query string included.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Schedule => "/schedule/now".to_string(),
            Endpoint::Standings => "/standings/now".to_string(),
            Endpoint::Leaders { category, limit } => format!(
                "/skater-stats-leaders/current?categories={}&limit={}",
                category, limit
            ),
            Endpoint::Roster { team } => format!("/roster/{}/current", team),
        }
    }
}

// == Endpoint TTLs ==
/// Cache lifetime declared for each endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointTtls {
    pub schedule: Duration,
    pub standings: Duration,
    pub leaders: Duration,
    pub roster: Duration,
}

impl EndpointTtls {
    pub fn from_config(config: &Config) -> Self {
        Self {
            schedule: Duration::from_secs(config.schedule_ttl),
            standings: Duration::from_secs(config.standings_ttl),
            leaders: Duration::from_secs(config.leaders_ttl),
            roster: Duration::from_secs(config.roster_ttl),
        }
    }

    pub fn ttl(&self, endpoint: &Endpoint) -> Duration {
        match endpoint {
            Endpoint::Schedule => self.schedule,
            Endpoint::Standings => self.standings,
            Endpoint::Leaders { .. } => self.leaders,
            Endpoint::Roster { .. } => self.roster,
        }
    }
}

impl Default for EndpointTtls {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

// == Explorer ==
/// Fetch-cache-validate core shared by all handlers.
pub struct Explorer {
    cache: Arc<TtlCache>,
    base_url: String,
    ttls: EndpointTtls,
}

impl Explorer {
    /// Creates an explorer that fetches `base_url` endpoints through `client`.
    pub fn new(
        client: Arc<dyn RemoteClient>,
        base_url: impl Into<String>,
        ttls: EndpointTtls,
    ) -> Self {
        Self {
            cache: Arc::new(TtlCache::new(client)),
            base_url: base_url.into(),
            ttls,
        }
    }

    /// Creates an explorer backed by the real NHL API client.
    pub fn from_config(config: &Config) -> Self {
        let client = HttpClient::new(Duration::from_secs(config.upstream_timeout));
        Self::new(
            Arc::new(client),
            config.api_base.clone(),
            EndpointTtls::from_config(config),
        )
    }

    pub fn cache(&self) -> &Arc<TtlCache> {
        &self.cache
    }

    /// Absolute upstream URL for `endpoint`; also the cache key.
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn load(&self, endpoint: Endpoint) -> Result<Value> {
        self.cache
            .fetch(&self.url(&endpoint), self.ttls.ttl(&endpoint))
            .await
    }

    // == Scores ==
    /// First day of the current schedule week.
    pub async fn get_scores(&self) -> ShapedResponse<ScoresData> {
        match self.load(Endpoint::Schedule).await {
            Ok(payload) => ShapedResponse::ok(shaper::schedule(&payload)),
            Err(err) => ShapedResponse::failed(GameDay::default(), err.user_message()),
        }
    }

    // == Standings ==
    /// League standings, optionally limited to one conference.
    pub async fn get_standings(&self, conference: Option<&str>) -> ShapedResponse<StandingsData> {
        let conference = params::conference(conference);
        let standings = self
            .load(Endpoint::Standings)
            .await
            .map(|payload| shaper::standings(&payload, conference));

        match standings {
            Ok(standings) => ShapedResponse::ok(StandingsData {
                conference,
                standings,
            }),
            Err(err) => ShapedResponse::failed(
                StandingsData {
                    conference,
                    standings: Vec::new(),
                },
                err.user_message(),
            ),
        }
    }

    // == Leaders ==
    /// Skater leaderboard for one stat category.
    pub async fn get_leaders(
        &self,
        category: Option<&str>,
        limit: Option<&str>,
    ) -> ShapedResponse<LeadersData> {
        let category = params::category(category);
        let limit = params::limit(limit);
        let mut data = LeadersData {
            category,
            category_label: category_label(category).unwrap_or_default(),
            limit,
            players: Vec::new(),
        };

        match self.load(Endpoint::Leaders { category, limit }).await {
            Ok(payload) => {
                data.players = shaper::leaders(&payload, category);
                ShapedResponse::ok(data)
            }
            Err(err) => ShapedResponse::failed(data, err.user_message()),
        }
    }

    // == Roster ==
    /// Current roster of one team, split by position.
    pub async fn get_roster(&self, team: Option<&str>) -> ShapedResponse<RosterData> {
        let team = params::team(team);
        let mut data = RosterData {
            team,
            team_name: team_name(team).unwrap_or_default(),
            groups: RosterGroups::default(),
        };

        match self.load(Endpoint::Roster { team }).await {
            Ok(payload) => {
                data.groups = shaper::roster(&payload);
                ShapedResponse::ok(data)
            }
            Err(err) => ShapedResponse::failed(data, err.user_message()),
        }
    }
}
