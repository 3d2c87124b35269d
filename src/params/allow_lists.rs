//! Allow-lists
//!
//! Fixed value sets accepted for each query parameter.

/// Team codes and display names
pub const TEAMS: &[(&str, &str)] = &[
    ("ANA", "Anaheim Ducks"),
    ("BOS", "Boston Bruins"),
    ("BUF", "Buffalo Sabres"),
    ("CGY", "Calgary Flames"),
    ("CAR", "Carolina Hurricanes"),
    ("CHI", "Chicago Blackhawks"),
    ("COL", "Colorado Avalanche"),
    ("CBJ", "Columbus Blue Jackets"),
    ("DAL", "Dallas Stars"),
    ("DET", "Detroit Red Wings"),
    ("EDM", "Edmonton Oilers"),
    ("FLA", "Florida Panthers"),
    ("LAK", "Los Angeles Kings"),
    ("MIN", "Minnesota Wild"),
    ("MTL", "Montreal Canadiens"),
    ("NSH", "Nashville Predators"),
    ("NJD", "New Jersey Devils"),
    ("NYI", "New York Islanders"),
    ("NYR", "New York Rangers"),
    ("OTT", "Ottawa Senators"),
    ("PHI", "Philadelphia Flyers"),
    ("PIT", "Pittsburgh Penguins"),
    ("SJS", "San Jose Sharks"),
    ("SEA", "Seattle Kraken"),
    ("STL", "St. Louis Blues"),
    ("TBL", "Tampa Bay Lightning"),
    ("TOR", "Toronto Maple Leafs"),
    ("UTA", "Utah Hockey Club"),
    ("VAN", "Vancouver Canucks"),
    ("VGK", "Vegas Golden Knights"),
    ("WSH", "Washington Capitals"),
    ("WPG", "Winnipeg Jets"),
];

/// Skater stat categories and their labels
pub const STAT_CATEGORIES: &[(&str, &str)] = &[
    ("points", "Points"),
    ("goals", "Goals"),
    ("assists", "Assists"),
    ("plusMinus", "Plus/Minus"),
    ("ppGoals", "Power Play Goals"),
    ("gameWinningGoals", "Game Winning Goals"),
    ("shots", "Shots"),
];

pub const CONFERENCES: &[&str] = &["All", "Eastern", "Western"];

pub const LIMITS: &[u32] = &[10, 20, 30, 50];

// == Defaults ==
pub const DEFAULT_CONFERENCE: &str = "All";
pub const DEFAULT_CATEGORY: &str = "points";
pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_TEAM: &str = "BOS";

/// Looks up the display name for a team code.
pub fn team_name(code: &str) -> Option<&'static str> {
    lookup(TEAMS, code)
}

/// Looks up the label for a stat category key.
pub fn category_label(key: &str) -> Option<&'static str> {
    lookup(STAT_CATEGORIES, key)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
