//! NHL Explorer - cached, validated JSON front for the NHL web API
//!
//! Fetches schedule, standings, stat leaders and rosters, keeps responses in a
//! short-lived TTL cache and hands shaped data to a presentation layer.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod service;
pub mod shaper;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use service::Explorer;
