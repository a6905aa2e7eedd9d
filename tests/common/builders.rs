//! Test data builders for creating sample sets

use shm_analyzer::SampleSet;
use std::f64::consts::PI;

/// Builder for a sampled mass-spring oscillator
///
/// `x = A e^(-γt) sin(ωt)` with the matching velocity; energies use mass `m`
/// and `k = m ω²`. An optional drift is added to the potential energy.
pub struct OscillatorBuilder {
    samples: usize,
    dt: f64,
    amplitude: f64,
    period: f64,
    mass: f64,
    damping: f64,
    drift: f64,
}

impl OscillatorBuilder {
    pub fn new() -> Self {
        Self {
            samples: 1000,
            dt: 0.01,
            amplitude: 1.0,
            period: 2.0,
            mass: 1.0,
            damping: 0.0,
            drift: 0.0,
        }
    }

    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn period(mut self, period: f64) -> Self {
        self.period = period;
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Exponential decay rate γ (1/s)
    pub fn damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Linear energy drift added to Ep (J/s)
    pub fn drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    /// Rows of `[t, x, v, Ec, Ep]`
    pub fn rows(&self) -> Vec<[f64; 5]> {
        let omega = 2.0 * PI / self.period;
        let k = self.mass * omega * omega;
        (0..self.samples)
            .map(|i| {
                let t = i as f64 * self.dt;
                let envelope = self.amplitude * (-self.damping * t).exp();
                let x = envelope * (omega * t).sin();
                let v = envelope * (omega * (omega * t).cos() - self.damping * (omega * t).sin());
                let ec = 0.5 * self.mass * v * v;
                let ep = 0.5 * k * x * x + self.drift * t;
                [t, x, v, ec, ep]
            })
            .collect()
    }

    pub fn build(&self) -> SampleSet {
        let rows = self.rows();
        let column = |i: usize| rows.iter().map(|r| r[i]).collect::<Vec<f64>>();
        SampleSet::from_columns(column(0), column(1), column(2), column(3), column(4))
            .expect("oscillator has at least one sample")
    }
}

impl Default for OscillatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
