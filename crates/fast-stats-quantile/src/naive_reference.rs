//! Naive reference implementations of sample quantiles
//!
//! These implementations are intentionally simple and unoptimized.
//! They serve as a reference for verifying the production quantile code.
//!
//! DO NOT USE IN PRODUCTION - these are for testing only!

/// Textbook sample quantiles on `f64` data
pub struct NaiveQuantile;

impl NaiveQuantile {
    fn sorted(data: &[f64]) -> Vec<f64> {
        assert!(!data.is_empty(), "Cannot compute quantile of empty data");
        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        sorted
    }

    /// R type 7: 1-based position `1 + (n - 1)p`
    pub fn linear(data: &[f64], p: f64) -> f64 {
        assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");
        let sorted = Self::sorted(data);
        let n = sorted.len();

        let position = 1.0 + (n as f64 - 1.0) * p;
        let below = position.floor() as usize;
        if below >= n {
            return sorted[n - 1];
        }
        let weight = position - below as f64;
        (1.0 - weight) * sorted[below - 1] + weight * sorted[below]
    }

    /// Smallest value with at least `pn` values at or below it
    pub fn nearest_rank(data: &[f64], p: f64) -> f64 {
        assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");
        let sorted = Self::sorted(data);
        for (i, &value) in sorted.iter().enumerate() {
            if (i + 1) as f64 >= p * sorted.len() as f64 {
                return value;
            }
        }
        sorted[sorted.len() - 1]
    }

    /// Middle value, or the mean of the two middle values
    pub fn median(data: &[f64]) -> f64 {
        let sorted = Self::sorted(data);
        let n = sorted.len();
        if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        }
    }
}
