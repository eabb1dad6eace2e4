//! Two-pass reduction engine
//!
//! One generic engine serves every lane width. Pass one accumulates sum, min
//! and max; pass two accumulates squared deviations from the mean, each
//! divided by the row count (population variance). The `E[X²] - E[X]²`
//! shortcut and online updates are not used.
//!
//! The mean is clamped into `[min, max]` before the second pass. A sum or
//! variance that overflows its precision is reported as [`Error::Overflow`].

use crate::error::{Error, Result};
use crate::lane::{Lane, Scalar};
use crate::numeric::Element;
use crate::packer::ColumnPacker;
use num_traits::{Float, Zero};
use tracing::trace;

/// Per-column statistics in the precision of the reduction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats<T> {
    pub min: T,
    pub max: T,
    pub mean: T,
    pub variance: T,
    pub standard_deviation: T,
}

impl<T: Element> ColumnStats<T> {
    /// Widen every statistic to f64
    pub fn to_f64(self) -> ColumnStats<f64> {
        ColumnStats {
            min: self.min.to_f64(),
            max: self.max.to_f64(),
            mean: self.mean.to_f64(),
            variance: self.variance.to_f64(),
            standard_deviation: self.standard_deviation.to_f64(),
        }
    }
}

/// Statistics tagged with the input column they belong to
pub type IndexedStats<T> = (usize, ColumnStats<T>);

/// Reduce one lane group of exactly `L::WIDTH` columns
///
/// Returns one [`ColumnStats`] per column, in column order.
pub fn reduce_group<L, C>(columns: &[C]) -> Result<Vec<ColumnStats<L::Element>>>
where
    L: Lane,
    C: AsRef<[L::Element]>,
{
    let packer = ColumnPacker::<L, C>::new(columns)?;
    let rows = packer.rows();
    if rows == 0 {
        return Err(Error::empty_input("lane group reduction"));
    }

    let count = L::broadcast(L::Element::from_count(rows));
    let mut sum = L::broadcast(<L::Element as Zero>::zero());
    // Finite extremes, never MIN_POSITIVE: an all-negative column must still
    // raise its max above the sentinel.
    let mut min = L::broadcast(<L::Element as Float>::max_value());
    let mut max = L::broadcast(<L::Element as Float>::min_value());

    for lane in packer.lanes() {
        sum = sum + lane;
        min = min.lane_min(lane);
        max = max.lane_max(lane);
    }
    check_finite_lanes(sum, "sum")?;
    // Rounding in the sum can push the quotient past the extremes; a
    // constant column must keep mean == min == max and zero variance.
    let mean = (sum / count).lane_max(min).lane_min(max);

    let mut variance = L::broadcast(<L::Element as Zero>::zero());
    for lane in packer.lanes() {
        let deviation = lane - mean;
        variance = variance + deviation * deviation / count;
    }
    check_finite_lanes(variance, "variance")?;
    let standard_deviation = variance.lane_sqrt();

    Ok((0..L::WIDTH.lanes())
        .map(|k| ColumnStats {
            min: min.extract(k),
            max: max.extract(k),
            mean: mean.extract(k),
            variance: variance.extract(k),
            standard_deviation: standard_deviation.extract(k),
        })
        .collect())
}

/// Fail with the first lane of `acc` that is no longer finite
fn check_finite_lanes<L: Lane>(acc: L, stage: &'static str) -> Result<()> {
    match acc.to_array().as_ref().iter().position(|v| !v.is_finite()) {
        Some(column) => Err(Error::overflow(
            column,
            stage,
            <L::Element as Element>::PRECISION,
        )),
        None => Ok(()),
    }
}

/// Contiguous column range reduced as one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Group {
    start: usize,
    len: usize,
}

/// Split `n_columns` into full lane groups followed by width-1 remainder groups
fn plan_groups(n_columns: usize, lanes: usize) -> Vec<Group> {
    let full = n_columns / lanes;
    let mut groups: Vec<Group> = (0..full)
        .map(|g| Group {
            start: g * lanes,
            len: lanes,
        })
        .collect();
    groups.extend((full * lanes..n_columns).map(|start| Group { start, len: 1 }));
    groups
}

fn reduce_planned<L, C>(columns: &[C], group: Group) -> Result<Vec<IndexedStats<L::Element>>>
where
    L: Lane,
    C: AsRef<[L::Element]>,
{
    let slice = &columns[group.start..group.start + group.len];
    let (stats, lane) = if group.len == L::WIDTH.lanes() {
        (reduce_group::<L, C>(slice), L::name())
    } else {
        (
            reduce_group::<Scalar<L::Element>, C>(slice),
            Scalar::<L::Element>::name(),
        )
    };
    let stats = stats.map_err(|err| err.offset_column(group.start))?;
    trace!(start = group.start, len = group.len, %lane, "reduced lane group");
    Ok(stats
        .into_iter()
        .enumerate()
        .map(|(k, s)| (group.start + k, s))
        .collect())
}

/// Reduce every column with lane type `L`
///
/// Columns are consumed `L::WIDTH` at a time; the columns left over when
/// the count is not a multiple of the width go through the scalar lane.
/// The returned pairs carry their column index; hand them to
/// [`assemble`](crate::record::assemble) to restore input order.
pub fn reduce<L, C>(columns: &[C], parallel: bool) -> Result<Vec<IndexedStats<L::Element>>>
where
    L: Lane,
    C: AsRef<[L::Element]> + Sync,
{
    let groups = plan_groups(columns.len(), L::WIDTH.lanes());

    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            let per_group: Vec<Vec<IndexedStats<L::Element>>> = groups
                .par_iter()
                .map(|&group| reduce_planned::<L, C>(columns, group))
                .collect::<Result<_>>()?;
            return Ok(per_group.into_iter().flatten().collect());
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    let mut out = Vec::with_capacity(columns.len());
    for group in groups {
        out.extend(reduce_planned::<L, C>(columns, group)?);
    }
    Ok(out)
}
