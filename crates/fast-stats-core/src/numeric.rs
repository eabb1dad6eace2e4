//! Floating-point element types the engine reduces over
//!
//! The host always hands over `f64` values; an [`Element`] knows how to
//! narrow such a value into its own precision and how to widen results back.

use bytemuck::Pod;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Floating-point precision of a reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precision {
    /// 32-bit IEEE 754
    F32,
    /// 64-bit IEEE 754
    F64,
}

impl Precision {
    pub fn name(&self) -> &'static str {
        match self {
            Precision::F32 => "f32",
            Precision::F64 => "f64",
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::F64
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scalar element of a column
pub trait Element: Float + Pod + Default + Debug + Display + Send + Sync + 'static {
    /// Precision tag for this element type
    const PRECISION: Precision;

    /// Narrow a host value, returning `None` when it is not finite in this precision
    fn from_f64_checked(value: f64) -> Option<Self>;

    /// Widen to f64 for result records
    fn to_f64(self) -> f64;

    /// Row count as an element, used as the divisor of both passes
    fn from_count(count: usize) -> Self;
}

impl Element for f64 {
    const PRECISION: Precision = Precision::F64;

    fn from_f64_checked(value: f64) -> Option<Self> {
        value.is_finite().then_some(value)
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_count(count: usize) -> Self {
        count as f64
    }
}

impl Element for f32 {
    const PRECISION: Precision = Precision::F32;

    fn from_f64_checked(value: f64) -> Option<Self> {
        let narrowed = value as f32;
        narrowed.is_finite().then_some(narrowed)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_count(count: usize) -> Self {
        count as f32
    }
}
