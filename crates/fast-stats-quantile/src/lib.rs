//! Order statistics for columnar data
//!
//! Median and quartiles of each column, read from a sorted working copy.
//! The lane-packed engine in `fast-stats-core` has no use for ordering, so
//! these statistics live here and are merged into records by the caller.
//!
//! # Example
//!
//! ```rust
//! use fast_stats_quantile::{order_stats, QuantileMethod};
//!
//! let stats = order_stats(&[4.0, 1.0, 3.0, 2.0], QuantileMethod::Linear).unwrap();
//! assert_eq!(stats.median, 2.5);
//! assert_eq!(stats.q1, 1.75);
//! assert_eq!(stats.q3, 3.25);
//! ```

pub mod error;
pub mod method;
pub mod order;

pub use error::{Error, Result};
pub use method::QuantileMethod;
pub use order::{order_stats, order_stats_columns, quantile, OrderStats, SortedColumn};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{order_stats, Error, OrderStats, QuantileMethod, Result, SortedColumn};
}
