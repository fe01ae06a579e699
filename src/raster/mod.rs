//! Rasterization algorithms.
//!
//! Pure functions from integer geometry to an ordered sequence of
//! [`PixelSample`]s. Nothing here holds state between calls, so every
//! function may be called concurrently.
//!
//! # Algorithms
//!
//! - **Stepwise**: slope-intercept line, one sample per step of the major axis
//! - **DDA**: real-valued incremental line
//! - **Bresenham's Line**: integer decision-variable line
//! - **Midpoint Circle**: one octant mirrored eight ways
//! - **de Casteljau**: cubic Bézier sampled at fixed parameter steps
//! - **Wu's Anti-aliased Line**: paired pixels with complementary coverage
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod algorithm;
mod circle;
mod curve;
mod line;
mod wu;

pub use algorithm::{
    rasterize, rasterize_named, rasterize_with, Algorithm, RasterInput, RasterOptions,
};
pub use circle::bresenham_circle;
pub use curve::{de_casteljau_cubic, de_casteljau_cubic_with_segments, BEZIER_SEGMENTS, BEZIER_STEP};
pub use line::{bresenham_line, dda_line, stepwise_line};
pub use wu::wu_line;

use crate::geometry::{CircleRequest, CurveRequest, LineRequest, PixelSample};

/// Trait for request shapes that can be rasterized.
pub trait Rasterize {
    /// Rasterize with the shape's default opaque algorithm.
    fn rasterize(&self) -> Vec<PixelSample>;

    /// Rasterize with antialiasing if supported.
    fn rasterize_aa(&self) -> Vec<PixelSample> {
        // Default to opaque output
        self.rasterize()
    }
}

impl Rasterize for LineRequest {
    fn rasterize(&self) -> Vec<PixelSample> {
        bresenham_line(self)
    }

    fn rasterize_aa(&self) -> Vec<PixelSample> {
        wu_line(self)
    }
}

impl Rasterize for CircleRequest {
    fn rasterize(&self) -> Vec<PixelSample> {
        bresenham_circle(self)
    }
}

impl Rasterize for CurveRequest {
    fn rasterize(&self) -> Vec<PixelSample> {
        de_casteljau_cubic(self)
    }
}
