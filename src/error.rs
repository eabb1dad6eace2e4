//! Error type for the public entry points

use thiserror::Error;

/// Errors from any stage of a statistics call
#[derive(Error, Debug)]
pub enum Error {
    /// Shape, type, degenerate-input or capability error from the engine
    #[error(transparent)]
    Core(#[from] fast_stats_core::Error),

    /// Order statistics failed
    #[error(transparent)]
    Quantile(#[from] fast_stats_quantile::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The engine error behind this one, if any
    pub fn core(&self) -> Option<&fast_stats_core::Error> {
        match self {
            Error::Core(err) => Some(err),
            Error::Quantile(fast_stats_quantile::Error::Core(err)) => Some(err),
            Error::Quantile(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_display() {
        let err: Error = fast_stats_core::Error::empty_input("test").into();
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 1 rows, got 0"
        );
        assert!(matches!(
            err.core(),
            Some(fast_stats_core::Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_core_through_quantile() {
        let inner: fast_stats_quantile::Error = fast_stats_core::Error::empty_input("test").into();
        let err = Error::from(inner);
        assert!(err.core().is_some());

        let err = Error::from(fast_stats_quantile::Error::EmptyData);
        assert!(err.core().is_none());
    }
}
