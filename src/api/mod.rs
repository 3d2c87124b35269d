//! API Module
//!
//! HTTP handlers and routing for the explorer's JSON API.
//!
//! # Endpoints
//! - `GET /scores` - Current day's games
//! - `GET /standings` - Standings, optionally by conference
//! - `GET /leaders` - Skater stat leaders
//! - `GET /roster` - Team roster
//! - `GET /teams`, `GET /categories` - Parameter metadata
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
