use anyhow::Result;
use std::path::PathBuf;
use crate::model::Position;
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Generated: {}", report.generated_at);
    println!("  Players: {}", report.summary.player_count);
    println!("  Teams: {}", report.summary.teams.len());

    if report.version != SCHEMA_VERSION {
        println!("  ⚠ Schema version differs from current ({})", SCHEMA_VERSION);
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    print!("{}", schema_description(show_details));
}

/// Schema description printed by the `schema` command
fn schema_description(show_details: bool) -> String {
    let mut out = String::new();
    out.push_str("Roster Insight Report Schema\n");
    out.push_str(&format!("Current Version: {}\n\n", SCHEMA_VERSION));

    if !show_details {
        out.push_str("Use --show for detailed schema information\n");
        return out;
    }

    let positions: Vec<&str> = Position::ALL.iter().map(|p| p.code()).collect();

    out.push_str("Schema Structure:\n");
    out.push_str("  version: string                 - Schema version (e.g., '1.0.0')\n");
    out.push_str("  source: string                  - Roster file the report was built from\n");
    out.push_str("  generated_at: string            - ISO 8601 timestamp\n");
    out.push_str("  summary: object\n");
    out.push_str("    player_count: number          - Players analysed\n");
    out.push_str("    without_agency: number        - Players with no agency\n");
    out.push_str("    max_defender_goals: number    - Best goal tally among defenders\n");
    out.push_str("    most_expensive_german_position: string? - Position label\n");
    out.push_str("    names_by_position: object     - Position -> player names\n");
    out.push_str("    teams: array                  - Distinct team names\n");
    out.push_str("    top_teams_by_goals: array     - Up to 5 {team, goals}\n");
    out.push_str("    agency_with_fewest_players: string?\n");
    out.push_str("    rudest_team: string           - Highest average red cards\n");
    out.push_str("    nationality_distribution: object - Country -> player count\n");
    out.push_str(&format!("\nPosition keys: {}\n", positions.join(", ")));
    out
}

/// Display version information
pub fn display_version() {
    println!("Roster Insight v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Analytical queries and nationality charts over football player rosters.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{RosterReport, RosterSummary};
    use crate::model::{Player, PositionLabels};
    use crate::output::write_report;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_written_report() {
        let players = vec![Player::new("Ivan", "Bulldogs", Position::Forward, 1000, 10, 3)];
        let summary = RosterSummary::compute(Some(&players), &PositionLabels::default());
        let temp_file = NamedTempFile::new().unwrap();
        write_report(&RosterReport::new("players.csv", summary), temp_file.path()).unwrap();

        assert!(validate_report_file(temp_file.path().to_path_buf()).is_ok());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "{\"version\": 1}").unwrap();

        assert!(validate_report_file(temp_file.path().to_path_buf()).is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing.json");

        assert!(validate_report_file(missing).is_err());
    }

    #[test]
    fn test_schema_details_list_every_position() {
        let details = schema_description(true);
        for position in Position::ALL {
            assert!(details.contains(position.code()));
        }
        assert!(details.contains("nationality_distribution"));
    }

    #[test]
    fn test_schema_brief() {
        let brief = schema_description(false);
        assert!(brief.contains(SCHEMA_VERSION));
        assert!(brief.contains("--show"));
        assert!(!brief.contains("Position keys"));
    }
}
