//! API Handlers
//!
//! HTTP request handlers for each explorer endpoint. Data handlers are
//! infallible: bad query values are coerced and upstream failures travel in
//! the response body, so every request answers 200.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::config::Config;
use crate::models::{
    CategoryOption, ExplorerQuery, HealthResponse, LeadersData, RosterData, ScoresData,
    ShapedResponse, StandingsData, StatsResponse, TeamOption,
};
use crate::params::{STAT_CATEGORIES, TEAMS};
use crate::service::Explorer;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Fetch-cache-validate core, constructed once at startup
    pub explorer: Arc<Explorer>,
}

impl AppState {
    /// Creates a new AppState around an explorer.
    pub fn new(explorer: Explorer) -> Self {
        Self {
            explorer: Arc::new(explorer),
        }
    }

    /// Creates a new AppState from configuration, talking to the real API.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Explorer::from_config(config))
    }
}

/// Handler for GET /scores
pub async fn scores_handler(State(state): State<AppState>) -> Json<ShapedResponse<ScoresData>> {
    Json(state.explorer.get_scores().await)
}

/// Handler for GET /standings?conference=
pub async fn standings_handler(
    State(state): State<AppState>,
    Query(query): Query<ExplorerQuery>,
) -> Json<ShapedResponse<StandingsData>> {
    Json(
        state
            .explorer
            .get_standings(query.conference.as_deref())
            .await,
    )
}

/// Handler for GET /leaders?category=&limit=
pub async fn leaders_handler(
    State(state): State<AppState>,
    Query(query): Query<ExplorerQuery>,
) -> Json<ShapedResponse<LeadersData>> {
    Json(
        state
            .explorer
            .get_leaders(query.category.as_deref(), query.limit.as_deref())
            .await,
    )
}

/// Handler for GET /roster?team=
pub async fn roster_handler(
    State(state): State<AppState>,
    Query(query): Query<ExplorerQuery>,
) -> Json<ShapedResponse<RosterData>> {
    Json(state.explorer.get_roster(query.team.as_deref()).await)
}

/// Handler for GET /teams
pub async fn teams_handler() -> Json<Vec<TeamOption>> {
    Json(
        TEAMS
            .iter()
            .map(|&(code, name)| TeamOption { code, name })
            .collect(),
    )
}

/// Handler for GET /categories
pub async fn categories_handler() -> Json<Vec<CategoryOption>> {
    Json(
        STAT_CATEGORIES
            .iter()
            .map(|&(key, label)| CategoryOption { key, label })
            .collect(),
    )
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.explorer.cache().stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
