//! Report command implementation.
//!
//! The report command:
//! 1. Reads the roster file
//! 2. Runs every roster query
//! 3. Writes the JSON report
//! 4. Optionally prints a text summary

use super::models::ReportArgs;
use crate::aggregator::{RosterReport, RosterSummary};
use crate::chart::generate_text_summary;
use crate::output::write_report;
use crate::parser::parse_roster_file;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Roster file missing or malformed
/// * Report file cannot be written
pub fn execute_report(args: ReportArgs) -> Result<RosterReport> {
    let start_time = Instant::now();

    info!("Starting report for roster: {}", args.input.display());

    // Step 1: Read roster
    info!("Step 1/3: Reading roster...");
    let players = parse_roster_file(&args.input, delimiter_byte(args.delimiter)?)
        .with_context(|| format!("Failed to read roster {}", args.input.display()))?;

    // Step 2: Aggregate
    info!("Step 2/3: Running roster queries over {} players...", players.len());
    let labels = args.labels.to_labels();
    let summary = RosterSummary::compute(Some(&players), &labels);

    debug!("Top teams: {:?}", summary.top_teams_by_goals);

    // Step 3: Write outputs
    info!("Step 3/3: Writing report...");
    let report = RosterReport::new(args.input.display().to_string(), summary);

    write_report(&report, &args.output_json)
        .context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("ROSTER SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Source: {}", report.source);
        println!("\n{}", generate_text_summary(&report.summary, &labels));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Convert a delimiter character to the byte the CSV reader expects
pub(crate) fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() || delimiter == '"' || delimiter == '\n' || delimiter == '\r' {
        anyhow::bail!("Delimiter must be a single ASCII character other than quote or newline");
    }
    Ok(delimiter as u8)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_report_args(args: &ReportArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input roster path cannot be empty");
    }

    if !args.input.exists() {
        anyhow::bail!("Roster file not found: {}", args.input.display());
    }

    if args.input == args.output_json {
        anyhow::bail!("Report output would overwrite the roster file");
    }

    delimiter_byte(args.delimiter)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::models::LabelSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ROSTER: &str = "\
name,team,position,nationality,agency,transfer_cost,goals,red_cards
Ivan Ivanov,Bulldogs,FORWARD,Russia,Agency1,1000,10,3
Manuel Neuer,Bayern,GOALKEEPER,Germany,Agency2,5000,0,1
";

    fn roster_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(ROSTER.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_report_args_valid() {
        let roster = roster_file();
        let args = ReportArgs {
            input: roster.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_report_args(&args).is_ok());
    }

    #[test]
    fn test_validate_report_args_missing_input() {
        let args = ReportArgs {
            input: "/definitely/not/here.csv".into(),
            ..Default::default()
        };

        assert!(validate_report_args(&args).is_err());
    }

    #[test]
    fn test_validate_report_args_same_paths() {
        let roster = roster_file();
        let args = ReportArgs {
            input: roster.path().to_path_buf(),
            output_json: roster.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_report_args(&args).is_err());
    }

    #[test]
    fn test_validate_report_args_bad_delimiter() {
        let roster = roster_file();
        let args = ReportArgs {
            input: roster.path().to_path_buf(),
            delimiter: '→',
            ..Default::default()
        };

        assert!(validate_report_args(&args).is_err());
    }

    #[test]
    fn test_execute_report_writes_json() {
        let roster = roster_file();
        let out_dir = tempfile::tempdir().unwrap();
        let args = ReportArgs {
            input: roster.path().to_path_buf(),
            output_json: out_dir.path().join("report.json"),
            labels: LabelSet::Russian,
            ..Default::default()
        };

        let report = execute_report(args.clone()).unwrap();

        assert!(args.output_json.exists());
        assert_eq!(report.summary.player_count, 2);
        assert_eq!(report.summary.most_expensive_german_position.as_deref(), Some("Вратарь"));
    }
}
