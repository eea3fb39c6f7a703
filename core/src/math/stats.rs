pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    /// Largest finite, positive sample, or 1.0 when there is none.
    ///
    /// Used as a normalization divisor, so it never returns zero or NaN.
    pub fn safe_max(samples: &[f64]) -> f64 {
        let max = samples
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);
        if max > 0.0 {
            max
        } else {
            1.0
        }
    }
}
