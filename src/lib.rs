//! # SHM Analyzer: simple harmonic motion from motion-sensor data
//!
//! A desktop tool that loads one spreadsheet of motion-sensor samples (time,
//! position, velocity, kinetic and potential energy), decides with fixed
//! heuristics whether the motion looks like simple harmonic motion, plots
//! the chosen series and exports a PDF report of the chart and its analysis.
//!
//! ## Architecture
//!
//! - **Backend**: reads spreadsheets with calamine into a [`SampleSet`]
//! - **Analysis**: the classification engine, a pure function of
//!   `(SampleSet, AnalysisMode)` returning a [`Verdict`]
//! - **Session**: holds the loaded data and the shown chart; all actions go through it
//! - **Report**: chart images via plotters and PDF documents via printpdf
//! - **Frontend**: the eframe/egui window, with egui_plot for the chart
//!
//! ## Analysis modes
//!
//! | Mode | Rule for "SHM-like" |
//! |------|---------------------|
//! | Position | at least 4 mean crossings, stddev > 0.1 m, amplitude > 0.1 m |
//! | Velocity | at least 4 mean crossings, stddev > 0.1 m/s |
//! | Energy | every Etot sample within 0.2 J of the mean |
//! | Energy regression | abs(slope) of the Etot fit below 1e-3 J/s |
//!
//! ## Example
//!
//! ```no_run
//! use shm_analyzer::{AnalysisMode, AppConfig, Session};
//! use std::path::Path;
//!
//! fn main() -> shm_analyzer::Result<()> {
//!     let mut session = Session::new(AppConfig::default());
//!     session.load_file(Path::new("spring.xlsx"))?;
//!
//!     let chart = session.show_chart(AnalysisMode::Position)?;
//!     println!("{}", chart.verdict);
//!
//!     session.export_pdf(Path::new("spring_report.pdf"))?;
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod backend;
pub mod config;
pub mod error;
pub mod frontend;
pub mod report;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use analysis::{analyze, AnalysisMode, Verdict};
pub use config::AppConfig;
pub use error::{LoadError, Result, ShmError};
pub use frontend::ShmApp;
pub use session::Session;
pub use types::{Cell, SampleSet};
