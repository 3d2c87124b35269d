//! Parameter Validation Module
//!
//! Coerces raw query-string values onto fixed allow-lists. Invalid input is
//! never an error: anything not found exactly falls back to the default.

mod allow_lists;


use std::borrow::Borrow;

pub use allow_lists::{
    category_label, team_name, CONFERENCES, DEFAULT_CATEGORY, DEFAULT_CONFERENCE, DEFAULT_LIMIT,
    DEFAULT_TEAM, LIMITS, STAT_CATEGORIES, TEAMS,
};

// == Validate ==
/// Returns the allow-list member equal to `raw`, or `default`.
///
/// Exact, case-sensitive match. Pure: the same input always yields the same value.
pub fn validate<T, Q>(raw: Option<&Q>, allow_list: impl IntoIterator<Item = T>, default: T) -> T
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    match raw {
        Some(value) => allow_list
            .into_iter()
            .find(|candidate| <T as Borrow<Q>>::borrow(candidate) == value)
            .unwrap_or(default),
        None => default,
    }
}

pub fn conference(raw: Option<&str>) -> &'static str {
    validate(raw, CONFERENCES.iter().copied(), DEFAULT_CONFERENCE)
}

pub fn category(raw: Option<&str>) -> &'static str {
    validate(raw, STAT_CATEGORIES.iter().map(|(key, _)| *key), DEFAULT_CATEGORY)
}

/// Non-numeric input is treated like any other value outside the list.
pub fn limit(raw: Option<&str>) -> u32 {
    let parsed = raw.and_then(|v| v.parse::<u32>().ok());
    validate(parsed.as_ref(), LIMITS.iter().copied(), DEFAULT_LIMIT)
}

pub fn team(raw: Option<&str>) -> &'static str {
    validate(raw, TEAMS.iter().map(|(code, _)| *code), DEFAULT_TEAM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_values_pass_through() {
        assert_eq!(conference(Some("Eastern")), "Eastern");
        assert_eq!(category(Some("ppGoals")), "ppGoals");
        assert_eq!(limit(Some("50")), 50);
        assert_eq!(team(Some("TOR")), "TOR");
    }

    #[test]
    fn test_missing_values_use_defaults() {
        assert_eq!(conference(None), "All");
        assert_eq!(category(None), "points");
        assert_eq!(limit(None), 20);
        assert_eq!(team(None), "BOS");
    }

    #[test]
    fn test_invalid_values_use_defaults() {
        assert_eq!(conference(Some("INVALID")), "All");
        assert_eq!(conference(Some("eastern")), "All");
        assert_eq!(category(Some("Goals")), "points");
        assert_eq!(limit(Some("999")), 20);
        assert_eq!(limit(Some("ten")), 20);
        assert_eq!(limit(Some("-10")), 20);
        assert_eq!(team(Some("XXX")), "BOS");
        assert_eq!(team(Some("tor")), "BOS");
        assert_eq!(team(Some("")), "BOS");
    }

    #[test]
    fn test_validate_generic_over_numbers() {
        assert_eq!(validate(Some(&7u8), [1u8, 7, 9], 1), 7);
        assert_eq!(validate(Some(&8u8), [1u8, 7, 9], 1), 1);
    }
}
