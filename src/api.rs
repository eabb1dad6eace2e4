//! Entry-point matrix
//!
//! Every variant accepts the same input, a slice of equal-length `f64`
//! columns, and returns one [`StatsRecord`] per column in input order. The
//! named variants fix a lane width and precision; results agree across
//! variants up to rounding.

use crate::error::Result;
use fast_stats_core::{
    describe, Capabilities, EngineConfig, LaneWidth, Precision, StatsRecord, WidthPolicy,
};

/// Statistics at the widest width supported for `f64`
pub fn descriptive_statistics<C>(columns: &[C]) -> Result<Vec<StatsRecord>>
where
    C: AsRef<[f64]> + Sync,
{
    descriptive_statistics_with(columns, &EngineConfig::default())
}

/// Statistics under an explicit configuration
pub fn descriptive_statistics_with<C>(columns: &[C], config: &EngineConfig) -> Result<Vec<StatsRecord>>
where
    C: AsRef<[f64]> + Sync,
{
    Ok(describe(columns, config)?)
}

/// Like [`descriptive_statistics_with`], but a forced width the build
/// cannot provide is an error instead of a substitution
pub fn descriptive_statistics_strict<C>(columns: &[C], config: &EngineConfig) -> Result<Vec<StatsRecord>>
where
    C: AsRef<[f64]> + Sync,
{
    let width = Capabilities::get().resolve_strict(config.precision, config.width)?;
    let config = config.with_width(WidthPolicy::Forced(width));
    descriptive_statistics_with(columns, &config)
}

/// Scalar `f64` reduction, available on every build
pub fn descriptive_statistics_scalar<C>(columns: &[C]) -> Result<Vec<StatsRecord>>
where
    C: AsRef<[f64]> + Sync,
{
    descriptive_statistics_with(columns, &EngineConfig::scalar())
}

/// Two `f64` lanes
pub fn descriptive_statistics_f64x2<C>(columns: &[C]) -> Result<Vec<StatsRecord>>
where
    C: AsRef<[f64]> + Sync,
{
    descriptive_statistics_with(columns, &EngineConfig::forced(Precision::F64, LaneWidth::W2))
}

/// Four `f64` lanes
pub fn descriptive_statistics_f64x4<C>(columns: &[C]) -> Result<Vec<StatsRecord>>
where
    C: AsRef<[f64]> + Sync,
{
    descriptive_statistics_with(columns, &EngineConfig::forced(Precision::F64, LaneWidth::W4))
}

/// Four `f32` lanes; values must be representable as `f32`
pub fn descriptive_statistics_f32x4<C>(columns: &[C]) -> Result<Vec<StatsRecord>>
where
    C: AsRef<[f64]> + Sync,
{
    descriptive_statistics_with(columns, &EngineConfig::forced(Precision::F32, LaneWidth::W4))
}

/// Eight `f32` lanes; values must be representable as `f32`
pub fn descriptive_statistics_f32x8<C>(columns: &[C]) -> Result<Vec<StatsRecord>>
where
    C: AsRef<[f64]> + Sync,
{
    descriptive_statistics_with(columns, &EngineConfig::forced(Precision::F32, LaneWidth::W8))
}

/// Whether vector acceleration is active in this build on this host
pub fn simd_enabled() -> bool {
    fast_stats_core::simd_enabled()
}
