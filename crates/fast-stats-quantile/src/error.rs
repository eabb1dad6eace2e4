//! Error types for order statistics

use thiserror::Error;

/// Errors that can occur while computing order statistics
#[derive(Error, Debug)]
pub enum Error {
    /// Empty data provided
    #[error("Cannot compute order statistics of empty data")]
    EmptyData,

    /// Invalid quantile probability
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// A value that cannot be ordered
    #[error("Cannot order non-finite value at index {index}")]
    NonFinite { index: usize },

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] fast_stats_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if probability is valid
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }
}
