//! Configuration module for the SHM analyzer
//!
//! All configuration lives in code; nothing is read from or written to disk.
//! The classification thresholds are fixed empirical constants, grouped in
//! [`Thresholds`] so the engine can be exercised with other values in tests.
//!
//! # Main Types
//!
//! - [`AppConfig`] - Everything a session needs
//! - [`Thresholds`] - Decision-rule constants for the four analysis modes
//! - [`ChartConfig`] - Raster size of the exported chart image
//! - [`ReportLayout`] - Page geometry of the PDF report

pub mod settings;

pub use settings::*;

use serde::{Deserialize, Serialize};

/// Window title
pub const APP_TITLE: &str = "Simple Harmonic Motion Analysis";

/// Spreadsheet extensions offered by the open dialog
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

// ==================== Classification Thresholds ====================

/// Minimum number of mean crossings for a series to count as periodic
pub const MIN_CROSSINGS: usize = 4;

/// Position standard deviation (m) that must be exceeded
pub const MIN_POSITION_STDDEV: f64 = 0.1;

/// Position amplitude (m) that must be exceeded
pub const MIN_AMPLITUDE: f64 = 0.1;

/// Velocity standard deviation (m/s) that must be exceeded
pub const MIN_VELOCITY_STDDEV: f64 = 0.1;

/// Absolute tolerance (J) around the mean total energy
pub const ENERGY_TOLERANCE: f64 = 0.2;

/// Largest |slope| (J/s) of total energy over time still read as conserved
pub const MAX_ENERGY_SLOPE: f64 = 1e-3;

/// Fewest samples the spectral frequency estimate runs on
pub const MIN_SPECTRAL_SAMPLES: usize = 8;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Decision-rule constants
    pub thresholds: Thresholds,
    /// Exported chart raster size
    pub chart: ChartConfig,
    /// PDF page geometry
    pub report: ReportLayout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_match_constants() {
        let config = AppConfig::default();
        assert_eq!(config.thresholds.min_crossings, MIN_CROSSINGS);
        assert_eq!(config.thresholds.min_amplitude, MIN_AMPLITUDE);
        assert_eq!(config.thresholds.max_energy_slope, MAX_ENERGY_SLOPE);
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_string(&AppConfig::default()).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AppConfig::default());
    }
}
