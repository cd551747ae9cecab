//! Roster ingestion.
//!
//! This module handles:
//! - Reading delimited roster files
//! - Mapping rows onto [`crate::model::Player`]
//! - Rejecting rows with unknown positions or malformed numbers

pub mod csv_roster;

// Re-export main functions
pub use csv_roster::{parse_roster_file, parse_roster_reader};
