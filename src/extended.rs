//! Extended statistics: the engine's moments plus median and quartiles

use crate::error::Result;
use fast_stats_core::{
    describe_typed, narrow, validate_shape, EngineConfig, LaneDispatch, Precision, StatsRecord,
};
use fast_stats_quantile::{order_stats_columns, OrderStats, QuantileMethod};
use tracing::{debug, instrument};

/// Statistics with median, q1 and q3 at the default configuration
pub fn descriptive_statistics_extended<C>(columns: &[C]) -> Result<Vec<StatsRecord>>
where
    C: AsRef<[f64]> + Sync,
{
    descriptive_statistics_extended_with(columns, &EngineConfig::default(), QuantileMethod::default())
}

/// Statistics with median, q1 and q3
///
/// For `f32` precision the order statistics are taken over the narrowed
/// values, so every field of a record describes the same data.
#[instrument(skip_all, fields(columns = columns.len(), precision = %config.precision, method = method.name()))]
pub fn descriptive_statistics_extended_with<C>(
    columns: &[C],
    config: &EngineConfig,
    method: QuantileMethod,
) -> Result<Vec<StatsRecord>>
where
    C: AsRef<[f64]> + Sync,
{
    validate_shape::<f64, C>(columns)?;
    match config.precision {
        Precision::F64 => extended_typed::<f64, C>(columns, config, method),
        Precision::F32 => {
            let narrowed = narrow::<f32, C>(columns)?;
            extended_typed::<f32, Vec<f32>>(&narrowed, config, method)
        }
    }
}

/// Extended statistics over columns already in precision `T`
pub(crate) fn extended_typed<T, C>(
    columns: &[C],
    config: &EngineConfig,
    method: QuantileMethod,
) -> Result<Vec<StatsRecord>>
where
    T: LaneDispatch,
    C: AsRef<[T]> + Sync,
{
    // Moments first: they validate shape, values and row count.
    let records = describe_typed::<T, C>(columns, config)?;
    let order = column_order_stats::<T, C>(columns, method, config.parallel)?;
    debug!(columns = records.len(), method = method.name(), "merging order statistics");

    Ok(records
        .into_iter()
        .zip(order)
        .map(|(record, stats)| {
            let stats = stats.to_f64();
            record.with_order_stats(stats.median, stats.q1, stats.q3)
        })
        .collect())
}

fn column_order_stats<T, C>(
    columns: &[C],
    method: QuantileMethod,
    parallel: bool,
) -> Result<Vec<OrderStats<T>>>
where
    T: LaneDispatch,
    C: AsRef<[T]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            let stats = columns
                .par_iter()
                .map(|column| fast_stats_quantile::order_stats(column.as_ref(), method))
                .collect::<fast_stats_quantile::Result<Vec<_>>>()?;
            return Ok(stats);
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    Ok(order_stats_columns(columns, method)?)
}
