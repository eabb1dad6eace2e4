//! Persistent handle over a materialized dataset
//!
//! [`Array2D`] copies the columns once, validates them once, and can then
//! be queried repeatedly. The copy is owned exclusively by the handle and
//! freed when it is dropped.

use crate::error::Result;
use crate::extended::extended_typed;
use fast_stats_core::dataset::check_finite;
use fast_stats_core::{narrow, validate_shape, EngineConfig, LaneDispatch, StatsRecord};
use fast_stats_quantile::QuantileMethod;
use tracing::debug;

/// Column-major owned copy of a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Array2D<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
    method: QuantileMethod,
}

impl<T: LaneDispatch> Array2D<T> {
    /// Copy columns already in precision `T`
    pub fn new<C: AsRef<[T]>>(columns: &[C]) -> Result<Self> {
        let shape = validate_shape::<T, C>(columns)?;
        check_finite::<T, C>(columns)?;

        let mut data = Vec::with_capacity(shape.rows * shape.cols);
        for column in columns {
            data.extend_from_slice(column.as_ref());
        }
        debug!(rows = shape.rows, cols = shape.cols, precision = %T::PRECISION, "materialized dataset");

        Ok(Self {
            data,
            rows: shape.rows,
            cols: shape.cols,
            method: QuantileMethod::default(),
        })
    }

    /// Copy host `f64` columns, narrowing to `T`
    pub fn from_f64<C: AsRef<[f64]>>(columns: &[C]) -> Result<Self> {
        validate_shape::<f64, C>(columns)?;
        let narrowed = narrow::<T, C>(columns)?;
        Self::new(&narrowed)
    }

    /// Quantile method used for median and quartiles
    pub fn with_method(mut self, method: QuantileMethod) -> Self {
        self.method = method;
        self
    }

    pub fn method(&self) -> QuantileMethod {
        self.method
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Column `index`, or `None` past the last column
    pub fn column(&self, index: usize) -> Option<&[T]> {
        if index >= self.cols {
            return None;
        }
        let start = index * self.rows;
        Some(&self.data[start..start + self.rows])
    }

    /// Columns in input order
    pub fn columns(&self) -> impl Iterator<Item = &[T]> {
        (0..self.cols).filter_map(move |index| self.column(index))
    }

    /// Extended statistics at the widest supported width for `T`
    pub fn descriptive_statistics(&self) -> Result<Vec<StatsRecord>> {
        self.descriptive_statistics_with(&EngineConfig::default().with_precision(T::PRECISION))
    }

    /// Extended statistics under `config`
    ///
    /// The element type fixes the precision; `config.precision` is ignored.
    pub fn descriptive_statistics_with(&self, config: &EngineConfig) -> Result<Vec<StatsRecord>> {
        let columns: Vec<&[T]> = self.columns().collect();
        extended_typed::<T, &[T]>(&columns, config, self.method)
    }
}
