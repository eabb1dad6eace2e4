//! Configuration for a statistics call

use crate::lane::LaneWidth;
use crate::numeric::Precision;
use serde::{Deserialize, Serialize};

/// How the lane width of a call is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidthPolicy {
    /// Widest width the host and build support for the precision
    Preferred,
    /// A fixed width, regardless of host capability
    Forced(LaneWidth),
}

impl Default for WidthPolicy {
    fn default() -> Self {
        Self::Preferred
    }
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Precision values are reduced in
    pub precision: Precision,
    /// Lane width selection
    pub width: WidthPolicy,
    /// Reduce lane groups on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precision: Precision::F64,
            width: WidthPolicy::Preferred,
            parallel: false,
        }
    }
}

impl EngineConfig {
    /// Scalar f64 reduction
    pub fn scalar() -> Self {
        Self::default().with_width(WidthPolicy::Forced(LaneWidth::W1))
    }

    /// Fixed width and precision
    pub fn forced(precision: Precision, width: LaneWidth) -> Self {
        Self::default()
            .with_precision(precision)
            .with_width(WidthPolicy::Forced(width))
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_width(mut self, width: WidthPolicy) -> Self {
        self.width = width;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
