//! Request and Response models for the explorer API
//!
//! This module defines the DTOs used for deserializing query strings and
//! serializing shaped responses.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::ExplorerQuery;
pub use responses::{
    CategoryOption, GameDay, HealthResponse, LeadersData, RosterData, RosterGroups, ScoresData,
    ShapedResponse, StandingsData, StatsResponse, TeamOption,
};
