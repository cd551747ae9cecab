//! Playing positions and their display labels.
//!
//! The position set is closed: every player is a goalkeeper, defender,
//! midfielder or forward. Display text lives in [`PositionLabels`] so that
//! reports can be localized without touching the aggregation code.

use crate::utils::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a player holds in the squad
///
/// Ordering follows declaration order (goalkeeper first), which keeps
/// position-keyed maps stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfield,
    Forward,
}

impl Position {
    /// All positions in canonical order
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfield,
        Position::Forward,
    ];

    /// Canonical upper-case token as it appears in roster files
    pub fn code(self) -> &'static str {
        match self {
            Self::Goalkeeper => "GOALKEEPER",
            Self::Defender => "DEFENDER",
            Self::Midfield => "MIDFIELD",
            Self::Forward => "FORWARD",
        }
    }
}

impl std::str::FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GOALKEEPER" | "GK" => Ok(Self::Goalkeeper),
            "DEFENDER" => Ok(Self::Defender),
            "MIDFIELD" | "MIDFIELDER" => Ok(Self::Midfield),
            "FORWARD" => Ok(Self::Forward),
            _ => Err(ParseError::UnknownPosition(s.to_string())),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Display labels for each position
///
/// **Public** - injected into queries and summaries that print positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionLabels {
    goalkeeper: String,
    defender: String,
    midfield: String,
    forward: String,
}

impl PositionLabels {
    /// Build a custom label table
    pub fn new(
        goalkeeper: impl Into<String>,
        defender: impl Into<String>,
        midfield: impl Into<String>,
        forward: impl Into<String>,
    ) -> Self {
        Self {
            goalkeeper: goalkeeper.into(),
            defender: defender.into(),
            midfield: midfield.into(),
            forward: forward.into(),
        }
    }

    pub fn english() -> Self {
        Self::new("Goalkeeper", "Defender", "Midfielder", "Forward")
    }

    pub fn russian() -> Self {
        Self::new("Вратарь", "Защитник", "Полузащитник", "Нападающий")
    }

    /// Label for a position
    pub fn label(&self, position: Position) -> &str {
        match position {
            Position::Goalkeeper => &self.goalkeeper,
            Position::Defender => &self.defender,
            Position::Midfield => &self.midfield,
            Position::Forward => &self.forward,
        }
    }
}

impl Default for PositionLabels {
    fn default() -> Self {
        Self::english()
    }
}
