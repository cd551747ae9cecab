//! Roster file parser.
//!
//! Reads delimited text with a header row into [`Player`] records, in file
//! order. Expected columns:
//!
//! `name, team, position, nationality, agency, transfer_cost, goals, red_cards`
//!
//! camelCase headers (`transferCost`, `redCards`) are accepted too. Empty
//! `nationality` / `agency` cells become `None`.

use crate::model::{Player, Position};
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row as it appears in the file
#[derive(Debug, Deserialize)]
struct RawPlayer {
    name: String,
    team: String,
    position: String,
    #[serde(default)]
    nationality: Option<String>,
    #[serde(default)]
    agency: Option<String>,
    #[serde(alias = "transferCost")]
    transfer_cost: u64,
    goals: u32,
    #[serde(alias = "redCards")]
    red_cards: u32,
}

impl RawPlayer {
    fn into_player(self, line: u64) -> Result<Player, ParseError> {
        let position: Position = self.position.parse().map_err(|e: ParseError| {
            ParseError::InvalidRecord {
                line,
                reason: e.to_string(),
            }
        })?;

        Ok(Player {
            name: self.name,
            team: self.team,
            position,
            nationality: self.nationality,
            agency: self.agency,
            transfer_cost: self.transfer_cost,
            goals: self.goals,
            red_cards: self.red_cards,
        })
    }
}

/// Parse a roster file
///
/// **Public** - main entry point for ingestion
///
/// # Arguments
/// * `path` - Path to the roster file
/// * `delimiter` - Field separator (usually `b','`)
///
/// # Returns
/// Players in file order
///
/// # Errors
/// * `ParseError::Io` - File cannot be opened
/// * `ParseError::Csv` - Malformed delimited text
/// * `ParseError::InvalidRecord` - A row has an unknown position or bad number
pub fn parse_roster_file(path: impl AsRef<Path>, delimiter: u8) -> Result<Vec<Player>, ParseError> {
    let path = path.as_ref();
    info!("Reading roster from: {}", path.display());

    let file = File::open(path)?;
    let players = parse_roster_reader(file, delimiter)?;

    if players.is_empty() {
        warn!("No players found in {}", path.display());
    }

    info!("Loaded {} players", players.len());
    Ok(players)
}

/// Parse a roster from any reader
///
/// The whole input is rejected on the first bad row.
pub fn parse_roster_reader<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Player>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    debug!("Roster columns: {:?}", headers);

    let mut players = Vec::new();
    let mut record = csv::StringRecord::new();

    while reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());

        let raw: RawPlayer = record
            .deserialize(Some(&headers))
            .map_err(|e| ParseError::InvalidRecord {
                line,
                reason: e.to_string(),
            })?;

        players.push(raw.into_player(line)?);
    }

    debug!("Parsed {} roster rows", players.len());
    Ok(players)
}
