//! Order statistics for one column: median and quartiles
//!
//! The input slice is never reordered. A sorted working copy is taken once
//! and every quantile is read from it.

use crate::error::{Error, Result};
use crate::method::QuantileMethod;
use fast_stats_core::Element;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Median and quartiles of one column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderStats<T> {
    pub median: T,
    pub q1: T,
    pub q3: T,
}

impl<T: Element> OrderStats<T> {
    pub fn to_f64(self) -> OrderStats<f64> {
        OrderStats {
            median: self.median.to_f64(),
            q1: self.q1.to_f64(),
            q3: self.q3.to_f64(),
        }
    }
}

/// Ascending copy of a column, ready for repeated quantile queries
#[derive(Debug, Clone)]
pub struct SortedColumn<T> {
    values: Vec<T>,
}

impl<T: Element> SortedColumn<T> {
    /// Sort a copy of `column`
    ///
    /// Fails on empty input and on the first NaN or infinite value.
    pub fn new(column: &[T]) -> Result<Self> {
        if column.is_empty() {
            return Err(Error::EmptyData);
        }
        if let Some(index) = column.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFinite { index });
        }

        // Widening to f64 is exact, so the key preserves f32 order too.
        let mut values = column.to_vec();
        values.sort_unstable_by_key(|&v| OrderedFloat(v.to_f64()));
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Quantile at probability `p` in `[0, 1]`
    pub fn quantile(&self, p: f64, method: QuantileMethod) -> Result<T> {
        Error::check_probability(p)?;
        Ok(method.quantile_sorted(&self.values, p))
    }

    /// Median and quartiles under `method`
    pub fn order_stats(&self, method: QuantileMethod) -> OrderStats<T> {
        OrderStats {
            median: method.quantile_sorted(&self.values, 0.5),
            q1: method.quantile_sorted(&self.values, 0.25),
            q3: method.quantile_sorted(&self.values, 0.75),
        }
    }
}

/// Median, first and third quartile of `column`
pub fn order_stats<T: Element>(column: &[T], method: QuantileMethod) -> Result<OrderStats<T>> {
    let sorted = SortedColumn::new(column)?;
    trace!(rows = sorted.len(), method = method.name(), "order statistics");
    Ok(sorted.order_stats(method))
}

/// Single quantile of `column`
pub fn quantile<T: Element>(column: &[T], p: f64, method: QuantileMethod) -> Result<T> {
    Error::check_probability(p)?;
    SortedColumn::new(column)?.quantile(p, method)
}

/// Order statistics of every column, in column order
pub fn order_stats_columns<T, C>(columns: &[C], method: QuantileMethod) -> Result<Vec<OrderStats<T>>>
where
    T: Element,
    C: AsRef<[T]>,
{
    columns
        .iter()
        .map(|column| order_stats(column.as_ref(), method))
        .collect()
}
