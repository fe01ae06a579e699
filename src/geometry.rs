//! Geometric primitives and rounding helpers shared by the rasterizers.
//!
//! Requests carry integer coordinates; the rasterizers produce ordered
//! [`PixelSample`]s. All types here are small `Copy` value objects.

use serde::{Deserialize, Serialize};

// ============================================================================
// Rounding helpers
// ============================================================================

/// Round half up: `floor(v + 0.5)`.
///
/// Used by Wu's algorithm, where `-0.5` rounds to `0` rather than `-1`.
#[inline]
#[must_use]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Round half away from zero (`2.5 -> 3`, `-2.5 -> -3`).
#[inline]
#[must_use]
pub fn round_half_away(v: f64) -> i32 {
    v.round() as i32
}

/// Integer part via floor, so `ipart(-0.25) == -1`.
#[inline]
#[must_use]
pub fn ipart(v: f64) -> i32 {
    v.floor() as i32
}

/// Fractional part via floor, always in `[0, 1)`.
#[inline]
#[must_use]
pub fn fpart(v: f64) -> f64 {
    v - v.floor()
}

/// Reverse fractional part, `1 - fpart(v)`, in `(0, 1]`.
#[inline]
#[must_use]
pub fn rfpart(v: f64) -> f64 {
    1.0 - fpart(v)
}

/// Clamp to the unit interval. NaN maps to 0.
#[inline]
#[must_use]
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Points and samples
// ============================================================================

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl PixelPoint {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Linear interpolation between two real-valued points.
#[inline]
#[must_use]
pub fn lerp2(a: (f64, f64), b: (f64, f64), t: f64) -> (f64, f64) {
    (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
}

/// A rasterized pixel with its coverage.
///
/// `alpha` is 1.0 for every opaque algorithm; only Wu's algorithm produces
/// fractional coverage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSample {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Coverage in `[0, 1]`.
    pub alpha: f64,
}

impl PixelSample {
    /// Opaque sample (alpha = 1.0).
    #[must_use]
    pub const fn opaque(x: i32, y: i32) -> Self {
        Self { x, y, alpha: 1.0 }
    }

    /// Sample with the given coverage, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_alpha(x: i32, y: i32, alpha: f64) -> Self {
        Self {
            x,
            y,
            alpha: clamp_unit(alpha),
        }
    }

    /// Pixel position without coverage.
    #[must_use]
    pub const fn point(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }
}

impl Default for PixelSample {
    fn default() -> Self {
        Self::opaque(0, 0)
    }
}

// ============================================================================
// Requests
// ============================================================================

/// A line segment between two integer endpoints. No ordering is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineRequest {
    /// First endpoint.
    pub start: PixelPoint,
    /// Second endpoint.
    pub end: PixelPoint,
}

impl LineRequest {
    /// Create a new line request.
    #[must_use]
    pub const fn new(start: PixelPoint, end: PixelPoint) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(PixelPoint::new(x1, y1), PixelPoint::new(x2, y2))
    }

    /// The same segment traversed in the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CircleRequest {
    /// Center point.
    pub center: PixelPoint,
    /// Radius in pixels.
    pub radius: u32,
}

impl CircleRequest {
    /// Create a new circle request.
    #[must_use]
    pub const fn new(center: PixelPoint, radius: u32) -> Self {
        Self { center, radius }
    }
}

/// A cubic Bézier curve given by four control points.
///
/// Control points may coincide; the result is then a degenerate curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurveRequest {
    /// Control points, start to end.
    pub control: [PixelPoint; 4],
}

impl CurveRequest {
    /// Create a new curve request.
    #[must_use]
    pub const fn new(p0: PixelPoint, p1: PixelPoint, p2: PixelPoint, p3: PixelPoint) -> Self {
        Self {
            control: [p0, p1, p2, p3],
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Floor-based split: integer part plus fraction reconstructs the value
        #[test]
        fn prop_ipart_fpart_reconstruct(v in -1.0e6f64..1.0e6) {
            let f = fpart(v);
            prop_assert!((0.0..1.0).contains(&f), "fpart({}) = {}", v, f);
            prop_assert!((f64::from(ipart(v)) + f - v).abs() < 1e-6);
            prop_assert!((f + rfpart(v) - 1.0).abs() < 1e-12);
        }

        /// Half-up and half-away rounding agree except on negative halves
        #[test]
        fn prop_rounding_within_half(v in -1.0e6f64..1.0e6) {
            prop_assert!((f64::from(round_half_up(v)) - v).abs() <= 0.5);
            prop_assert!((f64::from(round_half_away(v)) - v).abs() <= 0.5);
        }

        /// Sample alpha is always inside the unit interval
        #[test]
        fn prop_sample_alpha_in_unit(alpha in proptest::num::f64::ANY) {
            let s = PixelSample::with_alpha(0, 0, alpha);
            prop_assert!((0.0..=1.0).contains(&s.alpha));
        }
    }
}
