//! Presentation of roster results.
//!
//! This module turns aggregation results into things people look at:
//! - SVG pie charts of a distribution
//! - Plain-text summaries for the terminal

pub mod pie;
pub mod text;

// Re-export main types
pub use pie::{generate_pie_chart, PieChartConfig};
pub use text::generate_text_summary;
