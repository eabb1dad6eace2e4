//! Dataset validation and coercion at the host boundary
//!
//! The host supplies an ordered collection of `f64` columns. Before any
//! reduction runs the shape is checked (equal lengths, at least one row) and
//! every value is checked for representability in the target precision.

use crate::error::{Error, Result};
use crate::numeric::Element;

/// Validated shape of a columnar dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub cols: usize,
    pub rows: usize,
}

/// Check that all columns share the first column's length
///
/// An empty collection is a valid `0 x 0` shape. Columns without rows are
/// rejected, since mean and variance are undefined for them.
pub fn validate_shape<T, C: AsRef<[T]>>(columns: &[C]) -> Result<Shape> {
    let Some(first) = columns.first() else {
        return Ok(Shape { cols: 0, rows: 0 });
    };

    let rows = first.as_ref().len();
    for (column, values) in columns.iter().enumerate().skip(1) {
        let actual = values.as_ref().len();
        if actual != rows {
            return Err(Error::RaggedColumns {
                column,
                expected: rows,
                actual,
            });
        }
    }

    if rows == 0 {
        return Err(Error::empty_input("descriptive statistics"));
    }

    Ok(Shape {
        cols: columns.len(),
        rows,
    })
}

/// Check every value of already-typed columns is finite
pub fn check_finite<T: Element, C: AsRef<[T]>>(columns: &[C]) -> Result<()> {
    for (column, values) in columns.iter().enumerate() {
        if let Some(row) = values.as_ref().iter().position(|v| !v.is_finite()) {
            let value = values.as_ref()[row].to_f64();
            return Err(Error::non_representable(column, row, value, T::PRECISION));
        }
    }
    Ok(())
}

/// Materialize host columns in precision `T`
///
/// The first value that does not fit is reported with its column and row.
pub fn narrow<T: Element, C: AsRef<[f64]>>(columns: &[C]) -> Result<Vec<Vec<T>>> {
    columns
        .iter()
        .enumerate()
        .map(|(column, values)| {
            values
                .as_ref()
                .iter()
                .enumerate()
                .map(|(row, &value)| {
                    T::from_f64_checked(value)
                        .ok_or_else(|| Error::non_representable(column, row, value, T::PRECISION))
                })
                .collect()
        })
        .collect()
}
