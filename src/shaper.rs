//! Response Shaper
//!
//! Pulls the parts each page needs out of raw NHL API payloads. The upstream
//! shape is not guaranteed, so every lookup treats a missing key or a value of
//! the wrong type as empty (or zero for numbers).

use std::cmp::Ordering;

use serde_json::Value;

use crate::models::{GameDay, RosterGroups};
use crate::params::DEFAULT_CONFERENCE;

/// First day of `gameWeek`: its date and games.
pub fn schedule(payload: &Value) -> GameDay {
    match payload
        .get("gameWeek")
        .and_then(Value::as_array)
        .and_then(|week| week.first())
    {
        Some(day) => GameDay {
            date: day
                .get("date")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            games: list(day, "games"),
        },
        None => GameDay::default(),
    }
}

/// Standings rows, filtered to `conference` unless it is `All`, best first.
///
/// Ordered by points then wins, both descending. The sort is stable so teams
/// tied on both keep upstream order.
pub fn standings(payload: &Value, conference: &str) -> Vec<Value> {
    let mut rows = list(payload, "standings");
    if conference != DEFAULT_CONFERENCE {
        rows.retain(|row| row.get("conferenceName").and_then(Value::as_str) == Some(conference));
    }
    rows.sort_by(|a, b| by_points_then_wins(b, a));
    rows
}

/// Leaderboard rows stored under the category key.
pub fn leaders(payload: &Value, category: &str) -> Vec<Value> {
    list(payload, category)
}

/// Roster position groups; each missing group is empty.
pub fn roster(payload: &Value) -> RosterGroups {
    RosterGroups {
        forwards: list(payload, "forwards"),
        defensemen: list(payload, "defensemen"),
        goalies: list(payload, "goalies"),
    }
}

fn list(value: &Value, key: &str) -> Vec<Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn number(row: &Value, key: &str) -> f64 {
    row.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn by_points_then_wins(a: &Value, b: &Value) -> Ordering {
    number(a, "points")
        .total_cmp(&number(b, "points"))
        .then_with(|| number(a, "wins").total_cmp(&number(b, "wins")))
}
