//! FFT (Fast Fourier Transform) frequency estimate
//!
//! Gives a second, independent estimate of the oscillation frequency next to
//! the crossing-based one. The recorded time axis is assumed close to
//! uniform; the sample rate is taken from the mean time step.

use rustfft::{num_complex::Complex, FftPlanner};
use std::f64::consts::PI;

/// Window function type for FFT preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowFunction {
    /// Rectangular window (no windowing)
    Rectangular,
    /// Hann window (good general purpose)
    #[default]
    Hann,
}

impl WindowFunction {
    /// Compute window coefficient at position i out of n samples
    pub fn coefficient(&self, i: usize, n: usize) -> f64 {
        match self {
            WindowFunction::Rectangular => 1.0,
            WindowFunction::Hann => 0.5 * (1.0 - (2.0 * PI * i as f64 / n as f64).cos()),
        }
    }
}

/// One-sided magnitude spectrum
#[derive(Debug, Clone)]
pub struct FftResult {
    /// Frequency bins (Hz)
    pub frequencies: Vec<f64>,
    /// Magnitude values (linear)
    pub magnitudes: Vec<f64>,
    /// Frequency resolution (Hz per bin)
    pub frequency_resolution: f64,
}

impl FftResult {
    /// Strongest non-DC bin as `(frequency, magnitude)`
    pub fn peak(&self) -> Option<(f64, f64)> {
        let (idx, &max_mag) = self
            .magnitudes
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))?;

        if max_mag <= 1e-12 {
            return None;
        }
        Some((self.frequencies[idx], max_mag))
    }
}

/// FFT Analyzer for computing frequency spectra
pub struct FftAnalyzer {
    planner: FftPlanner<f64>,
    window: WindowFunction,
    /// Minimum transform length; input is zero-padded up to a power of two
    min_size: usize,
}

impl FftAnalyzer {
    /// Create a new FFT analyzer with a Hann window
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
            window: WindowFunction::Hann,
            min_size: 1024,
        }
    }

    /// Set window function
    pub fn window(mut self, window: WindowFunction) -> Self {
        self.window = window;
        self
    }

    /// Spectrum of `samples` taken at `sample_rate` Hz, mean removed.
    pub fn compute(&mut self, samples: &[f64], sample_rate: f64) -> FftResult {
        let n = samples.len();
        if n == 0 || sample_rate <= 0.0 {
            return FftResult {
                frequencies: Vec::new(),
                magnitudes: Vec::new(),
                frequency_resolution: 0.0,
            };
        }

        let fft_size = self.min_size.max(n).next_power_of_two();
        let mean = samples.iter().sum::<f64>() / n as f64;

        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .enumerate()
            .map(|(i, &s)| Complex::new((s - mean) * self.window.coefficient(i, n), 0.0))
            .collect();
        buffer.resize(fft_size, Complex::new(0.0, 0.0));

        let fft = self.planner.plan_fft_forward(fft_size);
        fft.process(&mut buffer);

        let freq_resolution = sample_rate / fft_size as f64;
        let num_bins = fft_size / 2 + 1;

        FftResult {
            frequencies: (0..num_bins).map(|i| i as f64 * freq_resolution).collect(),
            magnitudes: buffer
                .iter()
                .take(num_bins)
                .map(|c| 2.0 * c.norm() / n as f64)
                .collect(),
            frequency_resolution: freq_resolution,
        }
    }

    /// Dominant frequency of a series sampled at times `t`.
    ///
    /// Returns `None` for fewer than `min_samples` points, a non-increasing
    /// time axis, or a spectrum without a peak.
    pub fn dominant_frequency(
        &mut self,
        t: &[f64],
        samples: &[f64],
        min_samples: usize,
    ) -> Option<f64> {
        let n = t.len().min(samples.len());
        if n < min_samples.max(2) {
            return None;
        }
        let mean_step = (t[n - 1] - t[0]) / (n - 1) as f64;
        if !mean_step.is_finite() || mean_step <= 0.0 {
            return None;
        }
        self.compute(&samples[..n], 1.0 / mean_step)
            .peak()
            .map(|(f, _)| f)
    }
}

impl Default for FftAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
