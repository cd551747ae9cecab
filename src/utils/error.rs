//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//! The aggregation engine itself never fails.

use thiserror::Error;

/// Errors that can occur while reading a roster file
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown position: {0:?}")]
    UnknownPosition(String),

    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Distribution has no entries to plot")]
    EmptyDistribution,

    #[error("Invalid chart configuration: {0}")]
    InvalidConfig(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
