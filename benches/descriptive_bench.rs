//! Benchmarks comparing every lane width of the reduction engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fast_stats::{
    descriptive_statistics_extended, descriptive_statistics_with, EngineConfig, LaneWidth,
    Precision,
};

/// Generate `cols` columns of `rows` values with a distinct pattern per column
fn generate_columns(cols: usize, rows: usize) -> Vec<Vec<f64>> {
    (0..cols)
        .map(|c| {
            (0..rows)
                .map(|r| ((r * (c + 1)) as f64 * 0.1).sin() * 100.0 + c as f64)
                .collect()
        })
        .collect()
}

fn bench_lane_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptive_statistics");

    for &(cols, rows) in &[(8, 10_000), (64, 10_000), (9, 100_000)] {
        let columns = generate_columns(cols, rows);
        for precision in [Precision::F64, Precision::F32] {
            for width in LaneWidth::ALL {
                let config = EngineConfig::forced(precision, width);
                group.bench_with_input(
                    BenchmarkId::new(format!("{precision}/{width}"), format!("{cols}x{rows}")),
                    &columns,
                    |b, columns| b.iter(|| black_box(descriptive_statistics_with(columns, &config))),
                );
            }
        }
    }

    group.finish();
}

fn bench_extended(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptive_statistics_extended");

    for &rows in &[1_000, 100_000] {
        let columns = generate_columns(8, rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &columns, |b, columns| {
            b.iter(|| black_box(descriptive_statistics_extended(columns)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lane_widths, bench_extended);
criterion_main!(benches);
