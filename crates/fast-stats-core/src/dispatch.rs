//! Width and precision dispatch
//!
//! Maps a resolved [`LaneWidth`] to the concrete lane type for an element
//! type, so every entry point funnels into the one generic engine.

use crate::capabilities::Capabilities;
use crate::config::EngineConfig;
use crate::dataset::{check_finite, narrow, validate_shape};
use crate::engine::{reduce, IndexedStats};
use crate::error::Result;
use crate::lane::{LaneWidth, Scalar};
use crate::numeric::{Element, Precision};
use crate::record::{assemble, StatsRecord};
use tracing::{debug, instrument};

/// Element types that can pick a lane type per width
pub trait LaneDispatch: Element {
    /// Reduce `columns` with the lane type of `width`
    ///
    /// Widths without a lane type in this build run on the scalar lane.
    fn reduce_at<C>(width: LaneWidth, columns: &[C], parallel: bool) -> Result<Vec<IndexedStats<Self>>>
    where
        C: AsRef<[Self]> + Sync;
}

impl LaneDispatch for f64 {
    fn reduce_at<C>(width: LaneWidth, columns: &[C], parallel: bool) -> Result<Vec<IndexedStats<f64>>>
    where
        C: AsRef<[f64]> + Sync,
    {
        match width {
            #[cfg(feature = "simd")]
            LaneWidth::W2 => reduce::<crate::lane::f64x2, C>(columns, parallel),
            #[cfg(feature = "simd")]
            LaneWidth::W4 => reduce::<crate::lane::f64x4, C>(columns, parallel),
            _ => reduce::<Scalar<f64>, C>(columns, parallel),
        }
    }
}

impl LaneDispatch for f32 {
    fn reduce_at<C>(width: LaneWidth, columns: &[C], parallel: bool) -> Result<Vec<IndexedStats<f32>>>
    where
        C: AsRef<[f32]> + Sync,
    {
        match width {
            #[cfg(feature = "simd")]
            LaneWidth::W4 => reduce::<crate::lane::f32x4, C>(columns, parallel),
            #[cfg(feature = "simd")]
            LaneWidth::W8 => reduce::<crate::lane::f32x8, C>(columns, parallel),
            _ => reduce::<Scalar<f32>, C>(columns, parallel),
        }
    }
}

/// Statistics over columns already materialized in precision `T`
///
/// `config.precision` is ignored; the element type decides it.
pub fn describe_typed<T, C>(columns: &[C], config: &EngineConfig) -> Result<Vec<StatsRecord>>
where
    T: LaneDispatch,
    C: AsRef<[T]> + Sync,
{
    let shape = validate_shape::<T, C>(columns)?;
    check_finite::<T, C>(columns)?;
    if shape.cols == 0 {
        return Ok(Vec::new());
    }

    let width = Capabilities::get().resolve(T::PRECISION, config.width);
    debug!(
        cols = shape.cols,
        rows = shape.rows,
        precision = %T::PRECISION,
        %width,
        parallel = config.parallel,
        "dispatching reduction"
    );
    let stats = T::reduce_at(width, columns, config.parallel)?;
    assemble(stats, shape.cols)
}

/// Statistics over host `f64` columns, reduced at `config.precision`
#[instrument(skip_all, fields(columns = columns.len(), precision = %config.precision))]
pub fn describe<C>(columns: &[C], config: &EngineConfig) -> Result<Vec<StatsRecord>>
where
    C: AsRef<[f64]> + Sync,
{
    // Shape first, so ragged input is reported before any value error.
    validate_shape::<f64, C>(columns)?;
    match config.precision {
        Precision::F64 => describe_typed::<f64, C>(columns, config),
        Precision::F32 => {
            let narrowed = narrow::<f32, C>(columns)?;
            describe_typed::<f32, Vec<f32>>(&narrowed, config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidthPolicy;
    use crate::error::Error;
    use approx::assert_relative_eq;

    fn example() -> Vec<Vec<f64>> {
        vec![vec![1.0, 2.0, 3.0, 4.0], vec![10.0, 20.0, 30.0, 40.0]]
    }

    #[test]
    fn test_describe_default() {
        let records = describe(&example(), &EngineConfig::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].mean, 2.5);
        assert_eq!(records[1].variance, 125.0);
        assert_relative_eq!(records[1].standard_deviation, 125f64.sqrt());
    }

    #[test]
    fn test_describe_every_forced_width() {
        for precision in [Precision::F32, Precision::F64] {
            for width in LaneWidth::ALL {
                let config = EngineConfig::forced(precision, width);
                let records = describe(&example(), &config).unwrap();
                assert_eq!(records[0].min, 1.0);
                assert_eq!(records[0].max, 4.0);
                assert_eq!(records[0].variance, 1.25);
                assert_eq!(records[1].mean, 25.0);
            }
        }
    }

    #[test]
    fn test_describe_empty_dataset() {
        let columns: Vec<Vec<f64>> = Vec::new();
        assert!(describe(&columns, &EngineConfig::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_describe_rejects_before_computing() {
        let ragged = vec![vec![1.0, 2.0], vec![f64::NAN]];
        assert!(matches!(
            describe(&ragged, &EngineConfig::default()),
            Err(Error::RaggedColumns { .. })
        ));

        let overflow = vec![vec![1.0, 1e39]];
        let config = EngineConfig::default().with_precision(Precision::F32);
        assert!(matches!(
            describe(&overflow, &config),
            Err(Error::NonRepresentable { row: 1, .. })
        ));
    }

    #[test]
    fn test_describe_typed_f32() {
        let columns = vec![vec![1.0f32, 3.0], vec![-1.0, -3.0]];
        let config = EngineConfig::default().with_width(WidthPolicy::Forced(LaneWidth::W8));
        let records = describe_typed::<f32, _>(&columns, &config).unwrap();
        assert_eq!(records[0].mean, 2.0);
        assert_eq!(records[1].max, -1.0);
    }
}
