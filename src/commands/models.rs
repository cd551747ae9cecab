use crate::chart::PieChartConfig;
use crate::model::PositionLabels;
use crate::utils::config::{DEFAULT_DELIMITER, DEFAULT_REPORT_PATH};
use clap::ValueEnum;
use std::path::PathBuf;

/// Built-in position label tables selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LabelSet {
    #[default]
    English,
    Russian,
}

impl LabelSet {
    pub fn to_labels(self) -> PositionLabels {
        match self {
            Self::English => PositionLabels::english(),
            Self::Russian => PositionLabels::russian(),
        }
    }
}

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Roster file to analyse
    pub input: PathBuf,

    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Field separator of the roster file
    pub delimiter: char,

    /// Position labels used in the report
    pub labels: LabelSet,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("players.csv"),
            output_json: PathBuf::from(DEFAULT_REPORT_PATH),
            delimiter: DEFAULT_DELIMITER as char,
            labels: LabelSet::default(),
            print_summary: false,
        }
    }
}

/// Arguments for the chart command
#[derive(Debug, Clone)]
pub struct ChartArgs {
    /// Roster file to analyse
    pub input: PathBuf,

    /// Output path for SVG chart
    pub output_svg: PathBuf,

    pub delimiter: char,

    pub chart_config: PieChartConfig,
}

impl Default for ChartArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("players.csv"),
            output_svg: PathBuf::from("nationalities.svg"),
            delimiter: DEFAULT_DELIMITER as char,
            chart_config: PieChartConfig::default(),
        }
    }
}
