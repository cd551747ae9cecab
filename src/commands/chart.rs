//! Chart command implementation.
//!
//! Reads a roster and renders the players-per-country distribution as an
//! SVG pie chart.

use super::models::ChartArgs;
use super::report::delimiter_byte;
use crate::aggregator::nationality_distribution;
use crate::chart::generate_pie_chart;
use crate::output::write_svg;
use crate::parser::parse_roster_file;
use anyhow::{Context, Result};
use log::info;

/// Execute the chart command
///
/// **Public** - main entry point called from main.rs
pub fn execute_chart(args: ChartArgs) -> Result<()> {
    info!("Starting chart for roster: {}", args.input.display());

    let players = parse_roster_file(&args.input, delimiter_byte(args.delimiter)?)
        .with_context(|| format!("Failed to read roster {}", args.input.display()))?;

    let distribution = nationality_distribution(Some(&players));
    info!(
        "{} countries across {} players",
        distribution.len(),
        distribution.total()
    );

    let svg = generate_pie_chart(&distribution, Some(&args.chart_config))
        .context("Failed to generate pie chart")?;

    write_svg(&svg, &args.output_svg)
        .context("Failed to write chart SVG")?;

    info!("✓ Chart written to: {}", args.output_svg.display());

    Ok(())
}

/// Validate chart arguments
pub fn validate_chart_args(args: &ChartArgs) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Roster file not found: {}", args.input.display());
    }

    if args.chart_config.title.trim().is_empty() {
        anyhow::bail!("Chart title cannot be empty");
    }

    delimiter_byte(args.delimiter)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn roster_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_execute_chart_writes_svg() {
        let roster = roster_file(
            "name,team,position,nationality,agency,transfer_cost,goals,red_cards\n\
             Ivan,Bulldogs,FORWARD,Russia,,1000,10,3\n\
             John,Team USA,DEFENDER,USA,,1500,5,1\n",
        );
        let out_dir = tempfile::tempdir().unwrap();
        let args = ChartArgs {
            input: roster.path().to_path_buf(),
            output_svg: out_dir.path().join("chart.svg"),
            ..Default::default()
        };

        execute_chart(args.clone()).unwrap();

        let svg = std::fs::read_to_string(&args.output_svg).unwrap();
        assert!(svg.contains("Russia"));
        assert!(svg.contains("USA"));
    }

    #[test]
    fn test_execute_chart_empty_roster_fails() {
        let roster = roster_file("name,team,position,nationality,agency,transfer_cost,goals,red_cards\n");
        let out_dir = tempfile::tempdir().unwrap();
        let args = ChartArgs {
            input: roster.path().to_path_buf(),
            output_svg: out_dir.path().join("chart.svg"),
            ..Default::default()
        };

        assert!(execute_chart(args).is_err());
    }

    #[test]
    fn test_validate_chart_args_blank_title() {
        let roster = roster_file("name\n");
        let mut args = ChartArgs {
            input: roster.path().to_path_buf(),
            ..Default::default()
        };
        args.chart_config.title = "   ".to_string();

        assert!(validate_chart_args(&args).is_err());
    }
}
