//! Error types for columnar descriptive statistics
//!
//! Input is rejected before any reduction runs. A reduction whose
//! accumulators leave the finite range fails with [`Error::Overflow`]. A
//! failed call never yields partial results.

use crate::numeric::Precision;
use thiserror::Error;

/// Core error type for the statistics engine
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not a homogeneous collection of numeric columns
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A column's length differs from the first column's
    #[error("Ragged columns: column {column} has {actual} rows, expected {expected}")]
    RaggedColumns {
        column: usize,
        expected: usize,
        actual: usize,
    },

    /// A value cannot be represented as a finite float of the target precision
    #[error("Value {value:e} at column {column}, row {row} is not representable as {precision}")]
    NonRepresentable {
        column: usize,
        row: usize,
        value: f64,
        precision: Precision,
    },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} rows, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A column's sum or squared deviations left the finite range of its precision
    #[error("Overflow in column {column}: {stage} is not finite in {precision}")]
    Overflow {
        column: usize,
        stage: &'static str,
        precision: Precision,
    },

    /// Row index past the end of a lane group
    #[error("Row {row} out of bounds for columns of {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    /// A lane width was requested that this build cannot provide
    #[error("Feature not available: {0}")]
    FeatureNotAvailable(String),

    /// Result serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a dataset without rows
    pub fn empty_input(operation: &str) -> Self {
        tracing::debug!(operation, "rejecting dataset without rows");
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for an accumulator that overflowed
    pub fn overflow(column: usize, stage: &'static str, precision: Precision) -> Self {
        tracing::debug!(column, stage, %precision, "reduction overflowed");
        Self::Overflow {
            column,
            stage,
            precision,
        }
    }

    /// Shift a group-relative column index to its dataset position
    pub(crate) fn offset_column(self, offset: usize) -> Self {
        match self {
            Self::Overflow {
                column,
                stage,
                precision,
            } => Self::Overflow {
                column: column + offset,
                stage,
                precision,
            },
            other => other,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a value outside the target precision
    pub fn non_representable(column: usize, row: usize, value: f64, precision: Precision) -> Self {
        Self::NonRepresentable {
            column,
            row,
            value,
            precision,
        }
    }
}
