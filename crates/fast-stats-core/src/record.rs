//! Result assembler: per-column records in original column order

use crate::engine::{ColumnStats, IndexedStats};
use crate::error::{Error, Result};
use crate::numeric::Element;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistics record for one input column
///
/// `median`, `q1` and `q3` are only present for the extended entry points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub variance: f64,
    pub standard_deviation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q3: Option<f64>,
}

impl<T: Element> From<ColumnStats<T>> for StatsRecord {
    fn from(stats: ColumnStats<T>) -> Self {
        let stats = stats.to_f64();
        Self {
            min: stats.min,
            max: stats.max,
            mean: stats.mean,
            variance: stats.variance,
            standard_deviation: stats.standard_deviation,
            median: None,
            q1: None,
            q3: None,
        }
    }
}

impl StatsRecord {
    /// Attach order statistics
    pub fn with_order_stats(mut self, median: f64, q1: f64, q3: f64) -> Self {
        self.median = Some(median);
        self.q1 = Some(q1);
        self.q3 = Some(q3);
        self
    }

    /// Key/value view of the record
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        let mut map = BTreeMap::from([
            ("min", self.min),
            ("max", self.max),
            ("mean", self.mean),
            ("variance", self.variance),
            ("standard_deviation", self.standard_deviation),
        ]);
        for (key, value) in [("median", self.median), ("q1", self.q1), ("q3", self.q3)] {
            if let Some(value) = value {
                map.insert(key, value);
            }
        }
        map
    }
}

/// Place indexed statistics into a record per column, ordered `0..n_columns`
///
/// Accepts the pairs in any order. Every index must appear exactly once.
pub fn assemble<T, I>(stats: I, n_columns: usize) -> Result<Vec<StatsRecord>>
where
    T: Element,
    I: IntoIterator<Item = IndexedStats<T>>,
{
    let mut slots: Vec<Option<StatsRecord>> = vec![None; n_columns];
    for (index, column_stats) in stats {
        let slot = slots.get_mut(index).ok_or_else(|| {
            Error::InvalidInput(format!(
                "statistics for column {index} but only {n_columns} columns"
            ))
        })?;
        if slot.replace(column_stats.into()).is_some() {
            return Err(Error::InvalidInput(format!(
                "duplicate statistics for column {index}"
            )));
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.ok_or_else(|| Error::InvalidInput(format!("missing statistics for column {index}")))
        })
        .collect()
}

/// Render records as a JSON array
pub fn records_to_json(records: &[StatsRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}
