//! SVG pie chart generation.
//!
//! Renders a [`Distribution`] as a self-contained SVG document: a pie with
//! one slice per label and a legend listing label, count and percentage.
//! Slices are drawn largest first, ties by label.

use crate::aggregator::Distribution;
use crate::utils::config::{
    DEFAULT_CHART_TITLE, DEFAULT_CHART_WIDTH, MAX_CHART_WIDTH, MIN_CHART_WIDTH,
    UNKNOWN_BUCKET_LABEL,
};
use crate::utils::error::ChartError;
use log::{debug, info};
use std::f64::consts::PI;

/// Pie chart configuration
#[derive(Debug, Clone)]
pub struct PieChartConfig {
    pub title: String,
    pub width: usize,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHART_TITLE.to_string(),
            width: DEFAULT_CHART_WIDTH,
        }
    }
}

impl PieChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

const PALETTE: [&str; 10] = [
    "rgb(70, 130, 180)",  // Steel Blue
    "rgb(255, 140, 0)",   // Dark Orange
    "rgb(34, 139, 34)",   // Forest Green
    "rgb(220, 20, 60)",   // Crimson
    "rgb(138, 43, 226)",  // Blue Violet
    "rgb(218, 165, 32)",  // Goldenrod
    "rgb(0, 139, 139)",   // Dark Cyan
    "rgb(199, 21, 133)",  // Medium Violet Red
    "rgb(100, 149, 237)", // Cornflower Blue
    "rgb(169, 169, 169)", // Gray
];

const TITLE_HEIGHT: usize = 50;
const LEGEND_ROW_HEIGHT: usize = 22;
const MAX_RADIUS: f64 = 200.0;

/// Color for the n-th of `count` slices
///
/// The last slice touches the first one, so it never reuses the first color.
fn slice_color(index: usize, count: usize) -> &'static str {
    let mut slot = index % PALETTE.len();
    if count > 1 && index == count - 1 && slot == 0 {
        slot = 1;
    }
    PALETTE[slot]
}

/// Legend text for a bucket label
fn display_label(label: &str) -> &str {
    if label.is_empty() {
        UNKNOWN_BUCKET_LABEL
    } else {
        label
    }
}

/// Generate an SVG pie chart from a distribution
///
/// **Public** - main entry point for chart rendering
///
/// # Arguments
/// * `distribution` - Label → count mapping to plot
/// * `config` - Title and width (defaults if `None`)
///
/// # Returns
/// SVG document as a string
///
/// # Errors
/// * `ChartError::EmptyDistribution` - Nothing to plot
/// * `ChartError::InvalidConfig` - Width out of range
pub fn generate_pie_chart(
    distribution: &Distribution,
    config: Option<&PieChartConfig>,
) -> Result<String, ChartError> {
    if distribution.is_empty() || distribution.total() == 0 {
        return Err(ChartError::EmptyDistribution);
    }

    let config = config.cloned().unwrap_or_default();
    if !(MIN_CHART_WIDTH..=MAX_CHART_WIDTH).contains(&config.width) {
        return Err(ChartError::InvalidConfig(format!(
            "width must be between {} and {} pixels, got {}",
            MIN_CHART_WIDTH, MAX_CHART_WIDTH, config.width
        )));
    }

    info!("Generating pie chart with {} slices", distribution.len());

    let entries = distribution.ranked();
    let total = distribution.total() as f64;

    let width = config.width;
    let radius = (width as f64 / 2.0 - 40.0).min(MAX_RADIUS);
    let cx = width as f64 / 2.0;
    let cy = TITLE_HEIGHT as f64 + radius;
    let legend_top = TITLE_HEIGHT + (2.0 * radius) as usize + 40;
    let total_height = legend_top + entries.len() * LEGEND_ROW_HEIGHT + 20;

    let mut svg = String::new();

    // Header
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, total_height, width, total_height
    ));
    svg.push_str(
        r#"<style>.slice { stroke: white; stroke-width: 1; } .slice:hover { opacity: 0.85; cursor: pointer; }</style>"#,
    );

    // Title
    svg.push_str(&format!(
        r#"<text x="{}" y="30" font-size="18" text-anchor="middle" font-weight="bold">{}</text>"#,
        width / 2,
        escape_xml(&config.title)
    ));

    // Slices
    let mut start = -PI / 2.0;
    for (i, (label, count)) in entries.iter().enumerate() {
        let fraction = *count as f64 / total;
        let color = slice_color(i, entries.len());
        let tooltip = format!(
            "{}: {} ({:.1}%)",
            escape_xml(display_label(label)),
            count,
            fraction * 100.0
        );

        if entries.len() == 1 {
            // A full-circle arc has identical endpoints and renders nothing
            svg.push_str(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" class="slice"><title>{}</title></circle>"#,
                cx, cy, radius, color, tooltip
            ));
            break;
        }

        let end = start + fraction * 2.0 * PI;
        let large_arc = if fraction > 0.5 { 1 } else { 0 };
        let (x1, y1) = (cx + radius * start.cos(), cy + radius * start.sin());
        let (x2, y2) = (cx + radius * end.cos(), cy + radius * end.sin());

        svg.push_str(&format!(
            r#"<path d="M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z" fill="{}" class="slice"><title>{}</title></path>"#,
            cx, cy, x1, y1, radius, radius, large_arc, x2, y2, color, tooltip
        ));

        start = end;
    }

    render_legend(&mut svg, &entries, total, legend_top);

    svg.push_str("</svg>");

    debug!("Pie chart generated ({} bytes)", svg.len());
    Ok(svg)
}

fn render_legend(out: &mut String, entries: &[(&str, u64)], total: f64, top: usize) {
    for (i, (label, count)) in entries.iter().enumerate() {
        let y = top + i * LEGEND_ROW_HEIGHT;
        out.push_str(&format!(
            r#"<rect x="20" y="{}" width="15" height="15" fill="{}" rx="2"/>"#,
            y,
            slice_color(i, entries.len())
        ));
        out.push_str(&format!(
            r#"<text x="42" y="{}" font-size="13">{}: {} ({:.1}%)</text>"#,
            y + 12,
            escape_xml(display_label(label)),
            count,
            *count as f64 / total * 100.0
        ));
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
