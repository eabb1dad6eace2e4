//! Equivalence tests comparing order statistics with reference implementations
//!
//! `MedianUnbiased` is compared against statrs, which uses the same
//! definition. `Linear` and `NearestRank` are compared against the naive
//! textbook versions.

use approx::assert_relative_eq;
use fast_stats_quantile::{order_stats, order_stats_columns, quantile, QuantileMethod};
use proptest::prelude::*;
use statrs::statistics::{Data, Median, OrderStatistics};

#[path = "../src/naive_reference.rs"]
mod naive_reference;

use naive_reference::NaiveQuantile;

const TOLERANCE: f64 = 1e-10;

fn generate_test_datasets() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("tiny", vec![1.0, 2.0, 3.0]),
        ("small", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ("even", vec![4.0, 1.0, 3.0, 2.0]),
        ("single", vec![42.0]),
        ("pair", vec![-1.0, 1.0]),
        ("duplicates", vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]),
        ("negative", vec![-10.0, -3.5, -7.25, -0.5, -100.0]),
        ("uniform_100", (1..=100).map(|x| x as f64).collect()),
        ("random_normal", generate_normal(257, 0.0, 1.0, 42)),
        ("random_uniform", generate_uniform(64, -5.0, 10.0, 7)),
        ("large_values", (1000..1100).rev().map(|x| x as f64).collect()),
    ]
}

fn generate_normal(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();

    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

fn generate_uniform(n: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(min..max)).collect()
}

#[test]
fn test_median_unbiased_matches_statrs() {
    for (name, data) in generate_test_datasets() {
        let stats = order_stats(&data, QuantileMethod::MedianUnbiased).unwrap();
        let mut reference = Data::new(data.clone());

        let expected_q1 = reference.lower_quartile();
        let expected_q3 = reference.upper_quartile();
        let expected_median = reference.median();

        assert!(
            (stats.q1 - expected_q1).abs() <= TOLERANCE * expected_q1.abs().max(1.0),
            "{name}: q1 {} vs statrs {}",
            stats.q1,
            expected_q1
        );
        assert!(
            (stats.q3 - expected_q3).abs() <= TOLERANCE * expected_q3.abs().max(1.0),
            "{name}: q3 {} vs statrs {}",
            stats.q3,
            expected_q3
        );
        assert!(
            (stats.median - expected_median).abs() <= TOLERANCE * expected_median.abs().max(1.0),
            "{name}: median {} vs statrs {}",
            stats.median,
            expected_median
        );
    }
}

#[test]
fn test_medians_agree_across_definitions() {
    for (name, data) in generate_test_datasets() {
        let expected = NaiveQuantile::median(&data);
        let linear = order_stats(&data, QuantileMethod::Linear).unwrap();
        let unbiased = order_stats(&data, QuantileMethod::MedianUnbiased).unwrap();

        assert_relative_eq!(linear.median, expected, epsilon = TOLERANCE);
        assert!(
            (unbiased.median - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
            "{name}: median {} vs {}",
            unbiased.median,
            expected
        );
    }
}

#[test]
fn test_linear_matches_naive() {
    let probabilities = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0, 0.123, 0.999];
    for (name, data) in generate_test_datasets() {
        for &p in &probabilities {
            let expected = NaiveQuantile::linear(&data, p);
            let actual = quantile(&data, p, QuantileMethod::Linear).unwrap();
            assert!(
                (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
                "{name}: p={p} linear {actual} vs naive {expected}"
            );
        }
    }
}

#[test]
fn test_nearest_rank_matches_naive() {
    let probabilities = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];
    for (name, data) in generate_test_datasets() {
        for &p in &probabilities {
            let expected = NaiveQuantile::nearest_rank(&data, p);
            let actual = quantile(&data, p, QuantileMethod::NearestRank).unwrap();
            assert_eq!(actual, expected, "{name}: p={p}");
        }
    }
}

#[test]
fn test_known_linear_quartiles() {
    // Same values as numpy.percentile(..., method="linear")
    let stats = order_stats(&[1.0, 2.0, 3.0, 4.0], QuantileMethod::Linear).unwrap();
    assert_eq!((stats.q1, stats.median, stats.q3), (1.75, 2.5, 3.25));

    let stats = order_stats(&[10.0, 20.0, 30.0, 40.0, 50.0], QuantileMethod::Linear).unwrap();
    assert_eq!((stats.q1, stats.median, stats.q3), (20.0, 30.0, 40.0));
}

#[test]
fn test_f32_columns() {
    let columns = vec![vec![4.0f32, 1.0, 3.0, 2.0], vec![0.5f32, 0.25]];
    let stats = order_stats_columns(&columns, QuantileMethod::Linear).unwrap();
    assert_eq!(stats[0].median, 2.5f32);
    assert_eq!(stats[1].q3, 0.4375f32);
}

proptest! {
    #[test]
    fn prop_quartiles_are_ordered(
        data in prop::collection::vec(-1e6f64..1e6, 1..200),
        method in prop_oneof![
            Just(QuantileMethod::Linear),
            Just(QuantileMethod::MedianUnbiased),
            Just(QuantileMethod::NearestRank),
        ],
    ) {
        let stats = order_stats(&data, method).unwrap();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // Interpolation may round one ulp past its bracketing values
        let slack = 1e-9 * (max.abs().max(min.abs()).max(1.0));

        prop_assert!(min <= stats.q1 + slack);
        prop_assert!(stats.q1 <= stats.median + slack);
        prop_assert!(stats.median <= stats.q3 + slack);
        prop_assert!(stats.q3 <= max + slack);
    }

    #[test]
    fn prop_input_order_is_irrelevant(data in prop::collection::vec(-1e3f64..1e3, 1..100)) {
        let mut reversed = data.clone();
        reversed.reverse();
        prop_assert_eq!(
            order_stats(&data, QuantileMethod::Linear).unwrap(),
            order_stats(&reversed, QuantileMethod::Linear).unwrap()
        );
    }
}
