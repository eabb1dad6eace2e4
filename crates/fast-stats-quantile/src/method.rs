//! Quantile definitions over sorted data
//!
//! Methods follow the Hyndman & Fan (1996) taxonomy. [`QuantileMethod::Linear`]
//! (type 7) is the default, matching R's `quantile()` and NumPy's
//! `percentile()` defaults.

use fast_stats_core::Element;
use num_traits::NumCast;
use serde::{Deserialize, Serialize};

/// How a quantile is picked from sorted order statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantileMethod {
    /// Linear interpolation between closest ranks, `h = (n - 1)p` (type 7)
    Linear,
    /// Approximately median-unbiased, `h = (n + 1/3)p + 1/3` (type 8)
    MedianUnbiased,
    /// Smallest value whose rank is at least `pn` (type 1)
    NearestRank,
}

impl Default for QuantileMethod {
    fn default() -> Self {
        Self::Linear
    }
}

impl QuantileMethod {
    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::MedianUnbiased => "median_unbiased",
            Self::NearestRank => "nearest_rank",
        }
    }

    /// Quantile `p` of ascending, non-empty `sorted`
    ///
    /// Callers guarantee `p` is in `[0, 1]` and `sorted` is not empty.
    pub fn quantile_sorted<T: Element>(&self, sorted: &[T], p: f64) -> T {
        debug_assert!(!sorted.is_empty(), "quantile of empty data");
        debug_assert!((0.0..=1.0).contains(&p), "probability {p} outside [0, 1]");

        let n = sorted.len();
        match self {
            Self::Linear => {
                let h = (n - 1) as f64 * p;
                interpolate(sorted, h.floor() as usize, h - h.floor())
            }
            Self::MedianUnbiased => {
                let h = (n as f64 + 1.0 / 3.0) * p + 1.0 / 3.0;
                if h < 1.0 {
                    sorted[0]
                } else if h >= n as f64 {
                    sorted[n - 1]
                } else {
                    // h is 1-based
                    interpolate(sorted, h.floor() as usize - 1, h - h.floor())
                }
            }
            Self::NearestRank => {
                let rank = ((p * n as f64).ceil() as usize).clamp(1, n);
                sorted[rank - 1]
            }
        }
    }
}

/// `sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])`, clamped to the last element
fn interpolate<T: Element>(sorted: &[T], lo: usize, frac: f64) -> T {
    let lo = lo.min(sorted.len() - 1);
    let hi = (lo + 1).min(sorted.len() - 1);
    let (a, b) = (sorted[lo], sorted[hi]);
    if frac == 0.0 || a == b {
        return a;
    }
    let frac: T = NumCast::from(frac).unwrap_or_else(T::zero);
    a + frac * (b - a)
}
