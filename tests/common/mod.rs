//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use approx::assert_relative_eq;

/// `[[1,2,3,4],[10,20,30,40]]`
pub fn reference_columns() -> Vec<Vec<f64>> {
    vec![vec![1.0, 2.0, 3.0, 4.0], vec![10.0, 20.0, 30.0, 40.0]]
}

/// Seeded columns with a distinct offset per column
pub fn random_columns(cols: usize, rows: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..cols)
        .map(|c| {
            let offset = 100.0 + c as f64 * 10.0;
            (0..rows).map(|_| offset + rng.gen_range(-5.0..5.0)).collect()
        })
        .collect()
}

/// Install a test subscriber so `RUST_LOG=fast_stats=trace` shows engine events
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
