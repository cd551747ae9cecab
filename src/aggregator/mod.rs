//! Aggregation of roster data into analytical answers.
//!
//! This module turns an in-memory roster into:
//! - Counts and extrema (agency-less players, defender goals)
//! - Groupings and rankings (names by position, top teams by goals)
//! - Label → count distributions (players per nationality)

pub mod distribution;
pub mod queries;
pub mod summary;

// Re-export main types and functions
pub use distribution::{distribution_by, nationality_distribution, Distribution};
pub use queries::{
    agency_with_fewest_players, count_without_agency, distinct_teams, group_names_by_position,
    max_defender_goals, most_expensive_german_player_position, most_expensive_player_from,
    rudest_team_by_average_red_cards, team_red_card_averages, top5_teams_by_goals,
    top_teams_by_goals, TeamGoals,
};
pub use summary::{RosterReport, RosterSummary};
