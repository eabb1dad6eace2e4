//! Engine selector: process-wide lane capability detection
//!
//! Capabilities are detected once, on first use, and never change for the
//! life of the process. 128-bit lanes (`f64x2`, `f32x4`) need the `simd`
//! feature and SSE2, NEON or wasm `simd128`. 256-bit lanes (`f64x4`,
//! `f32x8`) additionally need AVX in both the build and the host.
//!
//! Setting `FAST_STATS_MAX_LANES` caps the reported widths; `1` makes the
//! default entry points run the scalar engine.

use crate::config::WidthPolicy;
use crate::error::{Error, Result};
use crate::lane::{provided_widths, LaneWidth};
use crate::numeric::Precision;
use bitflags::bitflags;
use lazy_static::lazy_static;
use tracing::{debug, warn};

/// Environment variable capping the detected lane count
pub const MAX_LANES_ENV: &str = "FAST_STATS_MAX_LANES";

bitflags! {
    /// Set of lane widths
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LaneWidths: u8 {
        const W1 = 1;
        const W2 = 1 << 1;
        const W4 = 1 << 2;
        const W8 = 1 << 3;
    }
}

impl From<LaneWidth> for LaneWidths {
    fn from(width: LaneWidth) -> Self {
        match width {
            LaneWidth::W1 => LaneWidths::W1,
            LaneWidth::W2 => LaneWidths::W2,
            LaneWidth::W4 => LaneWidths::W4,
            LaneWidth::W8 => LaneWidths::W8,
        }
    }
}

impl LaneWidths {
    /// Widest member; scalar for an empty set
    pub fn widest(self) -> LaneWidth {
        LaneWidth::ALL
            .into_iter()
            .rev()
            .find(|&w| self.contains(w.into()))
            .unwrap_or(LaneWidth::W1)
    }

    /// Members, narrowest first
    pub fn widths(self) -> Vec<LaneWidth> {
        LaneWidth::ALL
            .into_iter()
            .filter(|&w| self.contains(w.into()))
            .collect()
    }

    fn provided(precision: Precision) -> Self {
        provided_widths(precision)
            .iter()
            .fold(LaneWidths::empty(), |acc, &w| acc | w.into())
    }

    fn capped(self, max_lanes: Option<usize>) -> Self {
        match max_lanes {
            Some(max) => LaneWidths::from_iter(
                self.widths()
                    .into_iter()
                    .filter(|w| w.lanes() <= max)
                    .map(LaneWidths::from),
            ) | LaneWidths::W1,
            None => self,
        }
    }
}

/// Host facts the selector decides from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostFeatures {
    /// 128-bit float vectors are usable
    pub vector_128: bool,
    /// 256-bit float vectors are usable
    pub vector_256: bool,
}

impl HostFeatures {
    /// Probe the running host
    pub fn detect() -> Self {
        Self {
            vector_128: has_128_bit_lanes(),
            vector_256: has_256_bit_lanes(),
        }
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn has_128_bit_lanes() -> bool {
    is_x86_feature_detected!("sse2")
}

#[cfg(target_arch = "aarch64")]
fn has_128_bit_lanes() -> bool {
    std::arch::is_aarch64_feature_detected!("neon")
}

#[cfg(target_arch = "wasm32")]
fn has_128_bit_lanes() -> bool {
    cfg!(target_feature = "simd128")
}

#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "wasm32"
)))]
fn has_128_bit_lanes() -> bool {
    false
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn has_256_bit_lanes() -> bool {
    cfg!(target_feature = "avx") && is_x86_feature_detected!("avx")
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn has_256_bit_lanes() -> bool {
    false
}

/// Supported lane widths per precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    simd: bool,
    f32_widths: LaneWidths,
    f64_widths: LaneWidths,
}

lazy_static! {
    static ref CAPABILITIES: Capabilities = Capabilities::detect();
}

impl Capabilities {
    /// Process-wide capabilities, detected on first call
    pub fn get() -> &'static Capabilities {
        &CAPABILITIES
    }

    /// Detect from the running host and the `FAST_STATS_MAX_LANES` override
    pub fn detect() -> Self {
        let max_lanes = match std::env::var(MAX_LANES_ENV) {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(max) => Some(max),
                Err(_) => {
                    warn!(value = %raw, "ignoring unparsable {MAX_LANES_ENV}");
                    None
                }
            },
            Err(_) => None,
        };
        let caps = Self::from_features(cfg!(feature = "simd"), HostFeatures::detect(), max_lanes);
        debug!(
            simd = caps.simd,
            f32 = ?caps.f32_widths.widths(),
            f64 = ?caps.f64_widths.widths(),
            "detected lane capabilities"
        );
        caps
    }

    /// Capabilities implied by the given build and host facts
    pub fn from_features(simd: bool, host: HostFeatures, max_lanes: Option<usize>) -> Self {
        let mut f32_widths = LaneWidths::W1;
        let mut f64_widths = LaneWidths::W1;
        if simd && host.vector_128 {
            f32_widths |= LaneWidths::W4;
            f64_widths |= LaneWidths::W2;
            if host.vector_256 {
                f32_widths |= LaneWidths::W8;
                f64_widths |= LaneWidths::W4;
            }
        }
        let f32_widths = (f32_widths & LaneWidths::provided(Precision::F32)).capped(max_lanes);
        let f64_widths = (f64_widths & LaneWidths::provided(Precision::F64)).capped(max_lanes);
        Self {
            simd: f32_widths != LaneWidths::W1 || f64_widths != LaneWidths::W1,
            f32_widths,
            f64_widths,
        }
    }

    /// Whether vector acceleration backs the default entry points
    pub fn simd_enabled(&self) -> bool {
        self.simd
    }

    /// Widths the host accelerates for `precision`
    pub fn supported(&self, precision: Precision) -> LaneWidths {
        match precision {
            Precision::F32 => self.f32_widths,
            Precision::F64 => self.f64_widths,
        }
    }

    pub fn supports(&self, precision: Precision, width: LaneWidth) -> bool {
        self.supported(precision).contains(width.into())
    }

    /// Width the default entry point uses for `precision`
    pub fn preferred_width(&self, precision: Precision) -> LaneWidth {
        self.supported(precision).widest()
    }

    /// Width a call with `policy` will run at
    ///
    /// A forced width runs even when the host would emulate it; when the
    /// build has no lane type of that width the widest narrower one is used.
    pub fn resolve(&self, precision: Precision, policy: WidthPolicy) -> LaneWidth {
        let width = match policy {
            WidthPolicy::Preferred => self.preferred_width(precision),
            WidthPolicy::Forced(requested) => {
                let provided = LaneWidths::provided(precision);
                LaneWidths::from_iter(
                    provided
                        .widths()
                        .into_iter()
                        .filter(|w| *w <= requested)
                        .map(LaneWidths::from),
                )
                .widest()
            }
        };
        debug!(%precision, ?policy, %width, "resolved lane width");
        width
    }

    /// Like [`resolve`](Self::resolve) but refuses to substitute a width
    pub fn resolve_strict(&self, precision: Precision, policy: WidthPolicy) -> Result<LaneWidth> {
        let width = self.resolve(precision, policy);
        match policy {
            WidthPolicy::Forced(requested) if requested != width => {
                Err(Error::FeatureNotAvailable(format!(
                    "{precision} with {requested} is not provided by this build"
                )))
            }
            _ => Ok(width),
        }
    }
}

/// Whether vector acceleration is active in this build on this host
pub fn simd_enabled() -> bool {
    Capabilities::get().simd_enabled()
}
