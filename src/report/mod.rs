//! Report module: chart images and PDF export
//!
//! The session hands a [`ChartSpec`] and a [`Report`] to two seams:
//!
//! - [`ChartRenderer`] - rasterizes a chart to an image file
//! - [`ReportWriter`] - combines that image with the report text into a document
//!
//! Text flow is computed here, independent of the PDF backend: lines are
//! wrapped to the page width by [`wrap_line`] and assigned to pages by
//! [`layout_lines`].

pub mod chart;
pub mod pdf;

pub use chart::{ChartSeries, ChartSpec, PngChartRenderer, SeriesColor, SeriesStyle};
pub use pdf::PdfReportWriter;

use crate::analysis::Verdict;
use crate::config::ReportLayout;
use crate::error::Result;
use chrono::{DateTime, Local};
use std::path::Path;

/// Report title
pub const REPORT_TITLE: &str = "Simple Harmonic Motion Analysis Report";

/// Rasterizes a chart to an image file
#[cfg_attr(test, mockall::automock)]
pub trait ChartRenderer {
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<()>;
}

/// Writes the final document
#[cfg_attr(test, mockall::automock)]
pub trait ReportWriter {
    fn write(&self, report: &Report, chart_image: &Path, output: &Path) -> Result<()>;
}

/// Title and body text of an exported report
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    /// Unwrapped body lines
    pub lines: Vec<String>,
}

impl Report {
    /// Report for one verdict
    pub fn new(verdict: &Verdict, source: Option<&Path>, generated: DateTime<Local>) -> Self {
        let mut lines = Vec::new();
        if let Some(name) = source.and_then(|p| p.file_name()) {
            lines.push(format!("Data file: {}", name.to_string_lossy()));
        }
        lines.push(format!("Generated: {}", generated.format("%Y-%m-%d %H:%M")));
        lines.push(format!("Chart: {}", verdict.mode.display_name()));
        lines.push(String::new());
        lines.push("Analysis:".to_string());
        lines.extend(verdict.lines());

        Self {
            title: REPORT_TITLE.to_string(),
            lines,
        }
    }
}

/// A wrapped line placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Zero-based page index
    pub page: usize,
    /// Baseline y in points from the page bottom
    pub y: f32,
    pub text: String,
}

/// Word-wrap one line to at most `max_chars` characters per line.
///
/// Words longer than a whole line are split. An empty line stays one empty
/// line so paragraph spacing survives.
pub fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        // Break words that cannot fit on any line
        while word.len() > max_chars {
            if current_len > 0 {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            out.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > max_chars {
            out.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || out.is_empty() {
        out.push(current);
    }
    out
}

/// Wrap every line and assign each to a page and baseline.
///
/// The first page starts below the chart image; a line that would sit
/// below the bottom margin moves to a fresh page.
pub fn layout_lines(lines: &[String], layout: &ReportLayout) -> Vec<PlacedLine> {
    let max_chars = layout.max_chars_per_line();
    let mut placed = Vec::new();
    let mut page = 0;
    let mut y = layout.page_height - layout.text_offset;

    for text in lines.iter().flat_map(|l| wrap_line(l, max_chars)) {
        if y < layout.bottom_margin {
            page += 1;
            y = layout.page_height - layout.continuation_offset;
        }
        placed.push(PlacedLine { page, y, text });
        y -= layout.line_height;
    }

    placed
}
