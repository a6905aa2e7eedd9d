//! Ordinary least-squares line fit

use super::stats::mean;
use serde::Serialize;

/// Result of fitting `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
}

impl LinearFit {
    /// Least-squares fit of `y` against `x`.
    ///
    /// Degenerate inputs never fail: when every `x` is identical the slope is
    /// zero and the intercept is the mean of `y`; when `y` is flat (or `x`
    /// is) `r_squared` is zero. Extra elements of the longer slice are ignored.
    pub fn fit(x: &[f64], y: &[f64]) -> Self {
        let n = x.len().min(y.len());
        let (x, y) = (&x[..n], &y[..n]);
        let x_mean = mean(x);
        let y_mean = mean(y);

        let mut sxx = 0.0;
        let mut syy = 0.0;
        let mut sxy = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            let dx = xi - x_mean;
            let dy = yi - y_mean;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }

        if sxx == 0.0 {
            return Self {
                slope: 0.0,
                intercept: y_mean,
                r_squared: 0.0,
            };
        }

        let slope = sxy / sxx;
        let r_squared = if syy == 0.0 {
            0.0
        } else {
            (sxy * sxy / (sxx * syy)).min(1.0)
        };

        Self {
            slope,
            intercept: y_mean - slope * x_mean,
            r_squared,
        }
    }

    /// Fitted value at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let fit = LinearFit::fit(&x, &y);
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert!((fit.predict(10.0) - 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_flat_y() {
        let fit = LinearFit::fit(&[0.0, 1.0, 2.0], &[5.0, 5.0, 5.0]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 5.0);
        assert_eq!(fit.r_squared, 0.0);
    }

    #[test]
    fn test_identical_x() {
        let fit = LinearFit::fit(&[1.0, 1.0], &[2.0, 4.0]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 3.0);
        assert_eq!(fit.r_squared, 0.0);

        let single = LinearFit::fit(&[0.5], &[9.0]);
        assert_eq!(single.intercept, 9.0);
    }

    #[test]
    fn test_noisy_fit_matches_closed_form() {
        // Reference values from the normal equations solved by hand
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        let fit = LinearFit::fit(&x, &y);
        assert!((fit.slope - 0.6).abs() < 1e-12);
        assert!((fit.intercept - 2.2).abs() < 1e-12);
        assert!((fit.r_squared - 0.6).abs() < 1e-12);
    }
}
