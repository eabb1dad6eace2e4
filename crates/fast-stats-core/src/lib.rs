//! Core engine for lane-packed columnar descriptive statistics
//!
//! This crate reduces several columns at once by packing one row of `W`
//! adjacent columns into a single vector lane and running a two-pass
//! reduction over all rows.
//!
//! # Architecture Overview
//!
//! 1. **Lanes** ([`lane`]) - fixed-width float vectors: the scalar lane plus
//!    `f64x2`, `f64x4`, `f32x4` and `f32x8` from `wide`
//! 2. **Packer** ([`packer`]) - gathers a row of a lane group, lane `k` =
//!    column `k`
//! 3. **Engine** ([`engine`]) - generic two-pass reduction, scalar fallback
//!    for columns left over after the last full lane group
//! 4. **Selector** ([`capabilities`]) - process-wide lane width detection
//! 5. **Assembler** ([`record`]) - one record per column, in input order
//!
//! # Example
//!
//! ```rust
//! use fast_stats_core::{describe, EngineConfig};
//!
//! let columns = vec![vec![1.0, 2.0, 3.0, 4.0], vec![10.0, 20.0, 30.0, 40.0]];
//! let records = describe(&columns, &EngineConfig::default()).unwrap();
//!
//! assert_eq!(records[0].mean, 2.5);
//! assert_eq!(records[1].variance, 125.0);
//! ```

pub mod capabilities;
pub mod config;
pub mod dataset;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod lane;
pub mod numeric;
pub mod packer;
pub mod record;

pub use error::{Error, Result};

pub use capabilities::{simd_enabled, Capabilities, HostFeatures, LaneWidths};
pub use config::{EngineConfig, WidthPolicy};
pub use dataset::{narrow, validate_shape, Shape};
pub use dispatch::{describe, describe_typed, LaneDispatch};
pub use engine::{reduce, reduce_group, ColumnStats, IndexedStats};
pub use lane::{Lane, LaneWidth, Scalar};
pub use numeric::{Element, Precision};
pub use packer::ColumnPacker;
pub use record::{assemble, records_to_json, StatsRecord};

#[cfg(feature = "simd")]
pub use lane::{f32x4, f32x8, f64x2, f64x4};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        describe, simd_enabled, Capabilities, EngineConfig, Error, Lane, LaneWidth, Precision,
        Result, StatsRecord, WidthPolicy,
    };
}
