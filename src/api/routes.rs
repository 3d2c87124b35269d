//! API Routes
//!
//! Configures the Axum router with all explorer endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    categories_handler, health_handler, leaders_handler, roster_handler, scores_handler,
    standings_handler, stats_handler, teams_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /scores` - Today's games
/// - `GET /standings?conference=` - League standings
/// - `GET /leaders?category=&limit=` - Skater stat leaders
/// - `GET /roster?team=` - Team roster by position
/// - `GET /teams`, `GET /categories` - Allowed parameter values
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin so a separate front end can call in
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/scores", get(scores_handler))
        .route("/standings", get(standings_handler))
        .route("/leaders", get(leaders_handler))
        .route("/roster", get(roster_handler))
        .route("/teams", get(teams_handler))
        .route("/categories", get(categories_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
