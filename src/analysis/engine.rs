//! Motion classification engine
//!
//! [`analyze`] is a pure function of a [`SampleSet`] and an [`AnalysisMode`]:
//! it computes the metrics for that mode and applies the mode's decision rule.
//! Nothing here touches the UI or the filesystem.
//!
//! # Decision rules
//!
//! | Mode | Looks like SHM when |
//! |------|---------------------|
//! | Position | crossings >= 4, std dev > 0.1, amplitude > 0.1 |
//! | Velocity | crossings >= 4, std dev > 0.1 |
//! | Energy | every total-energy sample within 0.2 J of the mean |
//! | Energy regression | abs(slope of total energy over time) < 1e-3 |

use super::fft::FftAnalyzer;
use super::regression::LinearFit;
use super::stats;
use crate::config::{Thresholds, MIN_SPECTRAL_SAMPLES};
use crate::types::SampleSet;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The four analysis modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    #[default]
    Position,
    Velocity,
    Energy,
    EnergyRegression,
}

impl AnalysisMode {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisMode::Position => "Position vs Time",
            AnalysisMode::Velocity => "Velocity vs Time",
            AnalysisMode::Energy => "Energies (Ec, Ep, Etot) vs Time",
            AnalysisMode::EnergyRegression => "Total Energy Linear Regression",
        }
    }

    /// Short name used on the command line
    pub fn key(&self) -> &'static str {
        match self {
            AnalysisMode::Position => "position",
            AnalysisMode::Velocity => "velocity",
            AnalysisMode::Energy => "energy",
            AnalysisMode::EnergyRegression => "regression",
        }
    }

    /// Get all modes
    pub fn all() -> &'static [AnalysisMode] {
        &[
            AnalysisMode::Position,
            AnalysisMode::Velocity,
            AnalysisMode::Energy,
            AnalysisMode::EnergyRegression,
        ]
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisMode::all()
            .iter()
            .copied()
            .find(|m| m.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown mode {s:?}, expected one of: position, velocity, energy, regression"
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionMetrics {
    /// Half the peak-to-peak range (m)
    pub amplitude: f64,
    /// Mean position (m)
    pub mean: f64,
    /// Population standard deviation (m)
    pub std_dev: f64,
    /// Number of crossings of the mean
    pub crossings: usize,
    /// Period from crossing times (s), when computable
    pub period: Option<f64>,
    /// `1 / period` (Hz)
    pub frequency: Option<f64>,
    /// Strongest spectral component (Hz)
    pub spectral_frequency: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VelocityMetrics {
    pub max: f64,
    pub min: f64,
    pub std_dev: f64,
    pub crossings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyMetrics {
    pub mean_kinetic: f64,
    pub mean_potential: f64,
    pub mean_total: f64,
    /// Largest distance of a total-energy sample from its mean (J)
    pub max_deviation: f64,
    /// Whether every sample lies within the tolerance of the mean
    pub constant: bool,
}

/// Mode-specific metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Metrics {
    Position(PositionMetrics),
    Velocity(VelocityMetrics),
    Energy(EnergyMetrics),
    EnergyRegression(LinearFit),
}

/// Outcome of one analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub mode: AnalysisMode,
    pub metrics: Metrics,
    /// The mode's decision rule passed
    pub is_shm: bool,
}

impl Verdict {
    /// Fitted total-energy line, for regression mode only
    pub fn fit(&self) -> Option<&LinearFit> {
        match &self.metrics {
            Metrics::EnergyRegression(fit) => Some(fit),
            _ => None,
        }
    }

    /// Explanation lines; the last one is the conclusion
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match &self.metrics {
            Metrics::Position(m) => {
                lines.push(format!("• Estimated amplitude: {:.2} m", m.amplitude));
                lines.push(format!("• Mean value: {:.2} m", m.mean));
                lines.push(format!("• Mean crossings: {}", m.crossings));
                if let (Some(period), Some(frequency)) = (m.period, m.frequency) {
                    lines.push(format!(
                        "• Estimated period: {:.2} s | Frequency: {:.2} Hz",
                        period, frequency
                    ));
                }
                if let Some(f) = m.spectral_frequency {
                    lines.push(format!("• Spectral peak: {:.2} Hz", f));
                }
                lines.push(if self.is_shm {
                    "Position: the motion oscillates regularly about a midpoint, with steady amplitude and repeated crossings. Looks like SHM.".to_string()
                } else {
                    "Position: not enough crossings or the amplitude is too small. Does not look like SHM.".to_string()
                });
            }
            Metrics::Velocity(m) => {
                lines.push(format!("• Maximum velocity: {:.2} m/s", m.max));
                lines.push(format!("• Minimum velocity: {:.2} m/s", m.min));
                lines.push(format!("• Velocity std dev: {:.2} m/s", m.std_dev));
                lines.push(format!("• Mean crossings: {}", m.crossings));
                lines.push(if self.is_shm {
                    "Velocity: periodic behaviour typical of SHM.".to_string()
                } else {
                    "Velocity: not enough crossings or variation. Does not look like SHM."
                        .to_string()
                });
            }
            Metrics::Energy(m) => {
                lines.push(format!("• Mean Ec: {:.2} J", m.mean_kinetic));
                lines.push(format!("• Mean Ep: {:.2} J", m.mean_potential));
                lines.push(format!("• Mean Etot: {:.2} J", m.mean_total));
                lines.push(if self.is_shm {
                    "Total energy is constant: ideal SHM.".to_string()
                } else {
                    "Total energy varies: non-ideal system.".to_string()
                });
            }
            Metrics::EnergyRegression(fit) => {
                lines.push(format!("• Slope: {:.2e}", fit.slope));
                lines.push(format!("• Intercept: {:.2}", fit.intercept));
                lines.push(format!("• R²: {:.4}", fit.r_squared));
                lines.push(if self.is_shm {
                    "Etot is constant: energy is conserved, possible SHM.".to_string()
                } else {
                    "Etot changes: not ideal SHM.".to_string()
                });
            }
        }
        lines
    }

    /// Multi-line explanation ending in the conclusion
    pub fn explanation(&self) -> String {
        self.lines().join("\n")
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.explanation())
    }
}

/// Analyze with the default thresholds
pub fn analyze(samples: &SampleSet, mode: AnalysisMode) -> Verdict {
    analyze_with(samples, mode, &Thresholds::default())
}

/// Analyze with explicit thresholds
pub fn analyze_with(samples: &SampleSet, mode: AnalysisMode, thresholds: &Thresholds) -> Verdict {
    let (metrics, is_shm) = match mode {
        AnalysisMode::Position => {
            let m = position_metrics(samples);
            let is_shm = m.crossings >= thresholds.min_crossings
                && m.std_dev > thresholds.min_position_stddev
                && m.amplitude > thresholds.min_amplitude;
            (Metrics::Position(m), is_shm)
        }
        AnalysisMode::Velocity => {
            let m = velocity_metrics(samples);
            let is_shm = m.crossings >= thresholds.min_crossings
                && m.std_dev > thresholds.min_velocity_stddev;
            (Metrics::Velocity(m), is_shm)
        }
        AnalysisMode::Energy => {
            let m = energy_metrics(samples, thresholds.energy_tolerance);
            let is_shm = m.constant;
            (Metrics::Energy(m), is_shm)
        }
        AnalysisMode::EnergyRegression => {
            let fit = LinearFit::fit(samples.t(), samples.etot());
            let is_shm = fit.slope.abs() < thresholds.max_energy_slope;
            (Metrics::EnergyRegression(fit), is_shm)
        }
    };

    tracing::debug!("{} analysis over {} samples: shm={}", mode, samples.len(), is_shm);

    Verdict {
        mode,
        metrics,
        is_shm,
    }
}

fn position_metrics(samples: &SampleSet) -> PositionMetrics {
    let x = samples.x();
    let crossings = stats::mean_crossings(x);
    let period = stats::period_from_crossings(samples.t(), &crossings);

    PositionMetrics {
        amplitude: stats::amplitude(x),
        mean: stats::mean(x),
        std_dev: stats::std_dev(x),
        crossings: crossings.len(),
        period,
        frequency: period.map(|p| 1.0 / p),
        spectral_frequency: FftAnalyzer::new().dominant_frequency(
            samples.t(),
            x,
            MIN_SPECTRAL_SAMPLES,
        ),
    }
}

fn velocity_metrics(samples: &SampleSet) -> VelocityMetrics {
    let v = samples.v();
    VelocityMetrics {
        max: stats::max(v),
        min: stats::min(v),
        std_dev: stats::std_dev(v),
        crossings: stats::mean_crossings(v).len(),
    }
}

fn energy_metrics(samples: &SampleSet, tolerance: f64) -> EnergyMetrics {
    let etot = samples.etot();
    let mean_total = stats::mean(etot);
    let max_deviation = etot
        .iter()
        .map(|e| (e - mean_total).abs())
        .fold(0.0, f64::max);

    EnergyMetrics {
        mean_kinetic: stats::mean(samples.ec()),
        mean_potential: stats::mean(samples.ep()),
        mean_total,
        max_deviation,
        constant: etot.iter().all(|e| (e - mean_total).abs() <= tolerance),
    }
}
