//! Roster Insight
//!
//! Analytical queries over football player rosters: counts, extrema,
//! groupings, ranked leaderboards and players-per-country distributions.
//!
//! This crate provides the core implementation for the `roster` CLI tool.
//!
//! ## Getting Started
//!
//! ```ignore
//! use roster_insight::aggregator::{top5_teams_by_goals, RosterSummary};
//! use roster_insight::model::PositionLabels;
//! use roster_insight::parser::parse_roster_file;
//!
//! let players = parse_roster_file("players.csv", b',')?;
//! let leaders = top5_teams_by_goals(Some(&players));
//! let summary = RosterSummary::compute(Some(&players), &PositionLabels::english());
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod model;
pub mod output;
pub mod parser;
pub mod utils;
