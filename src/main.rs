//! Roster Insight CLI
//!
//! Answers analytical questions about a football player roster and draws
//! the players-per-country pie chart.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use roster_insight::chart::PieChartConfig;
use roster_insight::commands::{
    display_schema, display_version, execute_chart, execute_report, validate_chart_args,
    validate_report_args, validate_report_file, ChartArgs, LabelSet, ReportArgs,
};
use roster_insight::utils::config::{DEFAULT_CHART_WIDTH, DEFAULT_REPORT_PATH};

/// Roster Insight - analytics for football player rosters
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run every roster query and write a JSON report
    Report {
        /// Roster file (delimited text with a header row)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for JSON report
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Field delimiter of the roster file
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Language of position labels
        #[arg(long, value_enum, default_value_t = LabelSet::English)]
        labels: LabelSet,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Draw the players-per-country pie chart as SVG
    Chart {
        /// Roster file (delimited text with a header row)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for SVG chart
        #[arg(short, long, default_value = "nationalities.svg")]
        output: PathBuf,

        /// Field delimiter of the roster file
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: usize,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            input,
            output,
            delimiter,
            labels,
            summary,
        } => {
            let args = ReportArgs {
                input,
                output_json: output,
                delimiter,
                labels,
                print_summary: summary,
            };

            validate_report_args(&args)?;
            execute_report(args)?;
        }

        Commands::Chart {
            input,
            output,
            delimiter,
            title,
            width,
        } => {
            let mut chart_config = PieChartConfig::new().with_width(width);
            if let Some(title_str) = title {
                chart_config = chart_config.with_title(title_str);
            }

            let args = ChartArgs {
                input,
                output_svg: output,
                delimiter,
                chart_config,
            };

            validate_chart_args(&args)?;
            execute_chart(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
