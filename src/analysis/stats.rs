//! Descriptive statistics over a single series
//!
//! All functions accept any slice. Empty input yields `0.0` rather than NaN.

/// Arithmetic mean
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by n)
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Smallest value
pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Largest value
pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Half the peak-to-peak range
pub fn amplitude(values: &[f64]) -> f64 {
    (max(values) - min(values)) / 2.0
}

/// Indices at which a series crosses its own mean.
///
/// Samples exactly equal to the mean carry no sign and are skipped. A
/// crossing is recorded whenever a signed sample differs in sign from the
/// previous signed sample; the recorded index is that previous sample, the
/// last one before the change.
pub fn mean_crossings(values: &[f64]) -> Vec<usize> {
    let m = mean(values);
    let mut crossings = Vec::new();
    let mut last: Option<(usize, bool)> = None;

    for (i, &value) in values.iter().enumerate() {
        let deviation = value - m;
        if deviation == 0.0 {
            continue;
        }
        let positive = deviation > 0.0;
        if let Some((prev_index, prev_positive)) = last {
            if prev_positive != positive {
                crossings.push(prev_index);
            }
        }
        last = Some((i, positive));
    }

    crossings
}

/// Period estimate from crossing times.
///
/// Consecutive crossings are half a period apart. Needs at least two
/// crossings and at least one positive time difference between them.
pub fn period_from_crossings(t: &[f64], crossings: &[usize]) -> Option<f64> {
    if crossings.len() < 2 {
        return None;
    }
    let times: Vec<f64> = crossings.iter().filter_map(|&i| t.get(i).copied()).collect();
    let positive: Vec<f64> = times
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| *d > 0.0)
        .collect();
    if positive.is_empty() {
        return None;
    }
    Some(2.0 * mean(&positive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert_eq!(std_dev(&values), 2.0);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(amplitude(&[]), 0.0);
        assert!(mean_crossings(&[]).is_empty());
    }

    #[test]
    fn test_single_sample() {
        assert_eq!(std_dev(&[3.0]), 0.0);
        assert_eq!(amplitude(&[3.0]), 0.0);
        assert!(mean_crossings(&[3.0]).is_empty());
    }

    #[test]
    fn test_crossings_alternating() {
        // mean is 0, signs + - + -
        let values = [1.0, -1.0, 1.0, -1.0];
        assert_eq!(mean_crossings(&values), vec![0, 1, 2]);
    }

    #[test]
    fn test_samples_on_the_mean_do_not_cross() {
        // mean 0; passing through zero counts once, touching zero counts never
        let through = [1.0, 0.0, -1.0];
        assert_eq!(mean_crossings(&through), vec![0]);

        let touch = [2.0, 0.0, 1.0, -3.0];
        assert_eq!(mean(&touch), 0.0);
        assert_eq!(mean_crossings(&touch), vec![2]);
    }

    #[test]
    fn test_flat_series_has_no_crossings() {
        assert!(mean_crossings(&[1.0; 5]).is_empty());
    }

    #[test]
    fn test_period_from_crossings() {
        let t = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert_eq!(period_from_crossings(&t, &[0, 2, 4]), Some(4.0));
        assert_eq!(period_from_crossings(&t, &[1]), None);
        // Equal times give no positive difference
        let flat_t = [1.0, 1.0, 1.0];
        assert_eq!(period_from_crossings(&flat_t, &[0, 1]), None);
    }
}
