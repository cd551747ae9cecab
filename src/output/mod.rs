//! Output writers for roster reports and charts.
//!
//! This module handles writing data to disk in various formats:
//! - JSON reports (pretty printed)
//! - SVG charts

pub mod json;
pub mod svg;

// Re-export main functions
pub use json::{read_report, validate_output_path, write_report};
pub use svg::write_svg;
