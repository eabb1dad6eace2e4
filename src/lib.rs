//! Columnar descriptive statistics
//!
//! `fast-stats` computes min, max, mean, population variance and standard
//! deviation for every column of a dataset, packing adjacent columns into
//! vector lanes so that several columns are reduced in one pass. The
//! extended entry points add median and quartiles.
//!
//! # Crates
//!
//! - [`fast_stats_core`] - lanes, packer, two-pass engine, width selection
//! - [`fast_stats_quantile`] - order statistics over sorted working copies
//!
//! # Example
//!
//! ```rust
//! use fast_stats::{descriptive_statistics, descriptive_statistics_extended};
//!
//! let columns = vec![vec![1.0, 2.0, 3.0, 4.0], vec![10.0, 20.0, 30.0, 40.0]];
//!
//! let records = descriptive_statistics(&columns).unwrap();
//! assert_eq!(records[0].variance, 1.25);
//! assert_eq!(records[1].mean, 25.0);
//!
//! let extended = descriptive_statistics_extended(&columns).unwrap();
//! assert_eq!(extended[0].median, Some(2.5));
//! ```
//!
//! # Features
//!
//! - `simd` (default): vector lane types; without it every variant runs on
//!   the scalar lane
//! - `parallel`: reduce lane groups and sort columns on the rayon pool when
//!   [`EngineConfig::parallel`] is set

pub mod api;
pub mod array2d;
pub mod error;
pub mod extended;

pub use api::{
    descriptive_statistics, descriptive_statistics_f32x4, descriptive_statistics_f32x8,
    descriptive_statistics_f64x2, descriptive_statistics_f64x4, descriptive_statistics_scalar,
    descriptive_statistics_strict, descriptive_statistics_with, simd_enabled,
};
pub use array2d::Array2D;
pub use error::{Error, Result};
pub use extended::{descriptive_statistics_extended, descriptive_statistics_extended_with};

// Re-export workspace crates
pub use fast_stats_core;
pub use fast_stats_quantile;

pub use fast_stats_core::{
    records_to_json, Capabilities, EngineConfig, LaneWidth, Precision, StatsRecord, WidthPolicy,
};
pub use fast_stats_quantile::{OrderStats, QuantileMethod};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        descriptive_statistics, descriptive_statistics_extended, descriptive_statistics_with,
        simd_enabled, Array2D, EngineConfig, Error, LaneWidth, Precision, QuantileMethod, Result,
        StatsRecord, WidthPolicy,
    };
}
