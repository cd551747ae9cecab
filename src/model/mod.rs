//! Roster data model.
//!
//! Plain immutable records produced by the parser and consumed by the
//! aggregator. No behavior beyond field normalization helpers.

pub mod player;
pub mod position;

// Re-export main types
pub use player::Player;
pub use position::{Position, PositionLabels};
