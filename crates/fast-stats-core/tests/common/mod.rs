//! Shared utilities for integration tests

#![allow(dead_code)]

use fast_stats_core::{EngineConfig, LaneWidth, Precision};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use approx::assert_relative_eq;

/// Column counts around every lane width
pub fn edge_case_column_counts() -> Vec<usize> {
    vec![
        1,  // Single column
        2,  // f64x2 width
        3,  // f64x2 width + 1
        4,  // f64x4 / f32x4 width
        5,  // width 4 + 1
        7,  // f32x8 width - 1
        8,  // f32x8 width
        9,  // f32x8 width + 1
        13, // Prime
        16, // Two full f32x8 groups
    ]
}

/// Every forced configuration for a precision, scalar first
pub fn forced_configs(precision: Precision) -> Vec<EngineConfig> {
    LaneWidth::ALL
        .into_iter()
        .map(|w| EngineConfig::forced(precision, w))
        .collect()
}

/// Seeded uniform columns
pub fn random_columns(cols: usize, rows: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..cols)
        .map(|c| {
            let offset = c as f64 * 100.0 - 400.0;
            (0..rows).map(|_| offset + rng.gen_range(-50.0..50.0)).collect()
        })
        .collect()
}

/// Column `c` holds `c + 1` in every row
pub fn constant_columns(cols: usize, rows: usize) -> Vec<Vec<f64>> {
    (0..cols).map(|c| vec![(c + 1) as f64; rows]).collect()
}
