//! One-shot evaluation of every roster query.
//!
//! [`RosterSummary`] bundles the answers so the CLI can print them and the
//! JSON writer can persist them. [`RosterReport`] is the versioned document
//! written to disk.

use super::distribution::{nationality_distribution, Distribution};
use super::queries::{
    agency_with_fewest_players, count_without_agency, distinct_teams, group_names_by_position,
    max_defender_goals, most_expensive_german_player_position, rudest_team_by_average_red_cards,
    top5_teams_by_goals, TeamGoals,
};
use crate::model::{Player, Position, PositionLabels};
use crate::utils::config::SCHEMA_VERSION;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Answers to all roster questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSummary {
    /// Number of players analysed
    pub player_count: usize,

    /// Players with no agency
    pub without_agency: usize,

    /// Best goal tally among defenders
    pub max_defender_goals: u32,

    /// Position label of the most expensive German player
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub most_expensive_german_position: Option<String>,

    /// Player names per position, in roster order
    pub names_by_position: BTreeMap<Position, Vec<String>>,

    pub teams: BTreeSet<String>,

    /// Top five teams by total goals
    pub top_teams_by_goals: Vec<TeamGoals>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub agency_with_fewest_players: Option<String>,

    /// Team with the highest average red cards (empty for an empty roster)
    pub rudest_team: String,

    /// Players per nationality
    pub nationality_distribution: Distribution,
}

impl RosterSummary {
    /// Run every query over the roster
    ///
    /// **Public** - main entry point for the report command
    ///
    /// # Arguments
    /// * `players` - Roster to analyse (`None` yields the empty summary)
    /// * `labels` - Display labels for positions
    pub fn compute(players: Option<&[Player]>, labels: &PositionLabels) -> Self {
        debug!(
            "Computing roster summary over {} players",
            players.map_or(0, |p| p.len())
        );

        Self {
            player_count: players.map_or(0, |p| p.len()),
            without_agency: count_without_agency(players),
            max_defender_goals: max_defender_goals(players),
            most_expensive_german_position: most_expensive_german_player_position(players, labels),
            names_by_position: group_names_by_position(players),
            teams: distinct_teams(players),
            top_teams_by_goals: top5_teams_by_goals(players),
            agency_with_fewest_players: agency_with_fewest_players(players),
            rudest_team: rudest_team_by_average_red_cards(players),
            nationality_distribution: nationality_distribution(players),
        }
    }
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Roster file the report was computed from
    pub source: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    pub summary: RosterSummary,
}

impl RosterReport {
    /// Wrap a summary with version and timestamp
    pub fn new(source: impl Into<String>, summary: RosterSummary) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            source: source.into(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            summary,
        }
    }
}
