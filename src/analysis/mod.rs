//! Analysis module for motion classification
//!
//! This module provides:
//! - Descriptive statistics and mean-crossing detection
//! - Ordinary least-squares regression
//! - FFT-based dominant frequency estimation
//! - The classification engine that turns a sample set into a verdict

pub mod engine;
pub mod fft;
pub mod regression;
pub mod stats;

pub use engine::{
    analyze, analyze_with, AnalysisMode, EnergyMetrics, Metrics, PositionMetrics, Verdict,
    VelocityMetrics,
};
pub use fft::{FftAnalyzer, FftResult, WindowFunction};
pub use regression::LinearFit;
