//! Settings structs built from the configuration constants
//!
//! # Main Types
//!
//! - [`Thresholds`] - Decision rules for position, velocity and energy modes
//! - [`ChartConfig`] - PNG size for the exported chart
//! - [`ReportLayout`] - Page geometry, fonts and text flow of the PDF report
//!
//! Report geometry is expressed in PDF points (1/72 inch) with the origin at
//! the bottom-left corner of the page.

use super::{
    ENERGY_TOLERANCE, MAX_ENERGY_SLOPE, MIN_AMPLITUDE, MIN_CROSSINGS, MIN_POSITION_STDDEV,
    MIN_VELOCITY_STDDEV,
};
use serde::{Deserialize, Serialize};

/// Decision-rule constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Crossings required in position and velocity modes (inclusive)
    pub min_crossings: usize,
    /// Position standard deviation that must be exceeded
    pub min_position_stddev: f64,
    /// Position amplitude that must be exceeded
    pub min_amplitude: f64,
    /// Velocity standard deviation that must be exceeded
    pub min_velocity_stddev: f64,
    /// Allowed absolute deviation of total energy from its mean (inclusive)
    pub energy_tolerance: f64,
    /// Regression slope magnitude must stay below this
    pub max_energy_slope: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_crossings: MIN_CROSSINGS,
            min_position_stddev: MIN_POSITION_STDDEV,
            min_amplitude: MIN_AMPLITUDE,
            min_velocity_stddev: MIN_VELOCITY_STDDEV,
            energy_tolerance: ENERGY_TOLERANCE,
            max_energy_slope: MAX_ENERGY_SLOPE,
        }
    }
}

/// Exported chart raster configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Image width in pixels
    pub width_px: u32,
    /// Image height in pixels
    pub height_px: u32,
    /// Caption font size in pixels
    pub caption_size: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width_px: 800,
            height_px: 400,
            caption_size: 22,
        }
    }
}

/// PDF report layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLayout {
    /// Page width (US Letter)
    pub page_width: f32,
    /// Page height (US Letter)
    pub page_height: f32,
    /// Title baseline x
    pub title_x: f32,
    /// Title baseline distance from the page top
    pub title_offset: f32,
    pub title_font_size: f32,
    /// Chart image left edge
    pub image_x: f32,
    /// Chart image bottom edge distance from the page top
    pub image_offset: f32,
    /// Chart image width; height follows the image aspect ratio
    pub image_width: f32,
    /// Left margin of the body text
    pub text_x: f32,
    /// First body line distance from the page top on the first page
    pub text_offset: f32,
    /// First body line distance from the page top on continuation pages
    pub continuation_offset: f32,
    /// Lines are not placed below this y
    pub bottom_margin: f32,
    pub body_font_size: f32,
    /// Vertical advance per line
    pub line_height: f32,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            title_x: 150.0,
            title_offset: 40.0,
            title_font_size: 14.0,
            image_x: 100.0,
            image_offset: 300.0,
            image_width: 400.0,
            text_x: 40.0,
            text_offset: 320.0,
            continuation_offset: 50.0,
            bottom_margin: 50.0,
            body_font_size: 11.0,
            line_height: 15.0,
        }
    }
}

impl ReportLayout {
    /// Characters that fit on one body line.
    ///
    /// Uses half the font size as the average Helvetica glyph advance.
    pub fn max_chars_per_line(&self) -> usize {
        let usable = self.page_width - 2.0 * self.text_x;
        let per_char = (self.body_font_size * 0.5).max(1.0);
        ((usable / per_char) as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_page() {
        let layout = ReportLayout::default();
        assert_eq!(layout.page_width, 612.0);
        assert_eq!(layout.page_height, 792.0);
    }

    #[test]
    fn test_max_chars_per_line() {
        let layout = ReportLayout::default();
        // 532pt usable at 5.5pt per glyph
        assert_eq!(layout.max_chars_per_line(), 96);

        let tiny = ReportLayout {
            page_width: 80.0,
            ..Default::default()
        };
        assert_eq!(tiny.max_chars_per_line(), 1);
    }
}
