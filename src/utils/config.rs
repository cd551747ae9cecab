//! Configuration and constants for the CLI and the query engine.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Nationality matched (exactly, case-sensitive) by the most-expensive-German query
pub const GERMAN_NATIONALITY: &str = "Germany";

/// Number of teams kept by the goals leaderboard
pub const TOP_TEAMS_LIMIT: usize = 5;

// Roster file defaults
pub const DEFAULT_DELIMITER: u8 = b',';
pub const DEFAULT_REPORT_PATH: &str = "report.json";

// Chart defaults
pub const DEFAULT_CHART_TITLE: &str = "Player share by country";
pub const DEFAULT_CHART_WIDTH: usize = 800;
pub const MIN_CHART_WIDTH: usize = 200;
pub const MAX_CHART_WIDTH: usize = 4000;

/// Legend text for the bucket of players with no nationality
pub const UNKNOWN_BUCKET_LABEL: &str = "(unknown)";
