//! Player record.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A single roster entry
///
/// `nationality` and `agency` keep the distinction between a missing value
/// (`None`) and an empty one (`Some("")`). Queries normalize both the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name (not unique)
    pub name: String,

    pub team: String,

    pub position: Position,

    pub nationality: Option<String>,

    /// Representing agency, if any
    pub agency: Option<String>,

    /// Market value
    pub transfer_cost: u64,

    pub goals: u32,

    pub red_cards: u32,
}

impl Player {
    /// Create a player with no nationality and no agency
    ///
    /// **Public** - constructor, use the `with_*` methods for the optional fields
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        position: Position,
        transfer_cost: u64,
        goals: u32,
        red_cards: u32,
    ) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            position,
            nationality: None,
            agency: None,
            transfer_cost,
            goals,
            red_cards,
        }
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn with_agency(mut self, agency: impl Into<String>) -> Self {
        self.agency = Some(agency.into());
        self
    }

    /// Nationality used for grouping: absent collapses to `""`
    pub fn nationality_key(&self) -> &str {
        self.nationality.as_deref().unwrap_or("")
    }

    /// True when the player is represented by a non-empty agency
    pub fn has_agency(&self) -> bool {
        self.agency.as_deref().is_some_and(|a| !a.is_empty())
    }
}
