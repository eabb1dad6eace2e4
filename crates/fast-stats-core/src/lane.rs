//! Fixed-width numeric lanes
//!
//! A [`Lane`] holds one value per packed column and supports the elementwise
//! operations the two-pass reduction needs. [`Scalar`] is the width-1 lane
//! that exists on every build; the `simd` feature adds the `wide` vector
//! types (`f64x2`, `f64x4`, `f32x4`, `f32x8`).

use crate::numeric::{Element, Precision};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

/// Number of lanes processed together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LaneWidth {
    W1 = 1,
    W2 = 2,
    W4 = 4,
    W8 = 8,
}

impl LaneWidth {
    /// All widths, narrowest first
    pub const ALL: [LaneWidth; 4] = [LaneWidth::W1, LaneWidth::W2, LaneWidth::W4, LaneWidth::W8];

    pub const fn lanes(self) -> usize {
        self as usize
    }

    pub fn from_lanes(lanes: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.lanes() == lanes)
    }
}

impl Display for LaneWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lanes", self.lanes())
    }
}

/// A vector register of `WIDTH` elements with pure value semantics
pub trait Lane:
    Copy
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Element type held in each lane
    type Element: Element;

    /// Plain array with one slot per lane
    type Array: Copy + Default + AsRef<[Self::Element]> + AsMut<[Self::Element]>;

    const WIDTH: LaneWidth;

    /// Every lane set to `value`
    fn broadcast(value: Self::Element) -> Self;

    /// Lane `k` takes `values[k]`
    fn from_array(values: Self::Array) -> Self;

    /// Lane `k` lands in slot `k`
    fn to_array(self) -> Self::Array;

    fn lane_min(self, other: Self) -> Self;

    fn lane_max(self, other: Self) -> Self;

    fn lane_sqrt(self) -> Self;

    /// Value of lane `index`
    ///
    /// # Panics
    /// Panics if `index >= WIDTH.lanes()`
    fn extract(self, index: usize) -> Self::Element {
        self.to_array().as_ref()[index]
    }

    /// Short name used in logs, e.g. `f64x4`
    fn name() -> String {
        let precision = <Self::Element as Element>::PRECISION;
        match Self::WIDTH {
            LaneWidth::W1 => precision.name().to_string(),
            width => format!("{}x{}", precision.name(), width.lanes()),
        }
    }
}

/// Width-1 lane: the scalar fallback
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Scalar<E>(pub E);

impl<E: Element> Add for Scalar<E> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Scalar(self.0 + rhs.0)
    }
}

impl<E: Element> Sub for Scalar<E> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Scalar(self.0 - rhs.0)
    }
}

impl<E: Element> Mul for Scalar<E> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Scalar(self.0 * rhs.0)
    }
}

impl<E: Element> Div for Scalar<E> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Scalar(self.0 / rhs.0)
    }
}

impl<E: Element> Lane for Scalar<E> {
    type Element = E;
    type Array = [E; 1];

    const WIDTH: LaneWidth = LaneWidth::W1;

    fn broadcast(value: E) -> Self {
        Scalar(value)
    }

    fn from_array(values: [E; 1]) -> Self {
        Scalar(values[0])
    }

    fn to_array(self) -> [E; 1] {
        [self.0]
    }

    fn lane_min(self, other: Self) -> Self {
        Scalar(self.0.min(other.0))
    }

    fn lane_max(self, other: Self) -> Self {
        Scalar(self.0.max(other.0))
    }

    fn lane_sqrt(self) -> Self {
        Scalar(self.0.sqrt())
    }

    fn extract(self, index: usize) -> E {
        assert_eq!(index, 0, "scalar lane has a single slot");
        self.0
    }
}

#[cfg(feature = "simd")]
mod vector {
    use super::{Lane, LaneWidth};
    use wide::{f32x4, f32x8, f64x2, f64x4};

    macro_rules! impl_wide_lane {
        ($lane:ident, $elem:ty, $n:literal, $width:expr) => {
            impl Lane for $lane {
                type Element = $elem;
                type Array = [$elem; $n];

                const WIDTH: LaneWidth = $width;

                #[inline(always)]
                fn broadcast(value: $elem) -> Self {
                    $lane::splat(value)
                }

                #[inline(always)]
                fn from_array(values: [$elem; $n]) -> Self {
                    $lane::from(values)
                }

                #[inline(always)]
                fn to_array(self) -> [$elem; $n] {
                    $lane::to_array(self)
                }

                #[inline(always)]
                fn lane_min(self, other: Self) -> Self {
                    $lane::min(self, other)
                }

                #[inline(always)]
                fn lane_max(self, other: Self) -> Self {
                    $lane::max(self, other)
                }

                #[inline(always)]
                fn lane_sqrt(self) -> Self {
                    $lane::sqrt(self)
                }
            }
        };
    }

    impl_wide_lane!(f64x2, f64, 2, LaneWidth::W2);
    impl_wide_lane!(f64x4, f64, 4, LaneWidth::W4);
    impl_wide_lane!(f32x4, f32, 4, LaneWidth::W4);
    impl_wide_lane!(f32x8, f32, 8, LaneWidth::W8);
}

#[cfg(feature = "simd")]
pub use wide::{f32x4, f32x8, f64x2, f64x4};

/// Lane widths with a concrete lane type for `precision` in this build
pub fn provided_widths(precision: Precision) -> &'static [LaneWidth] {
    if cfg!(feature = "simd") {
        match precision {
            Precision::F64 => &[LaneWidth::W1, LaneWidth::W2, LaneWidth::W4],
            Precision::F32 => &[LaneWidth::W1, LaneWidth::W4, LaneWidth::W8],
        }
    } else {
        &[LaneWidth::W1]
    }
}
