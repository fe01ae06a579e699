//! Algorithm selection and dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{bresenham_circle, bresenham_line, dda_line, de_casteljau_cubic_with_segments};
use super::{stepwise_line, wu_line, BEZIER_SEGMENTS};
use crate::error::{Error, Result};
use crate::geometry::{CircleRequest, CurveRequest, LineRequest, PixelPoint, PixelSample};

/// The rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Slope-intercept line.
    Stepwise,
    /// Digital differential analyzer line.
    Dda,
    /// Bresenham integer line.
    BresenhamLine,
    /// Bresenham midpoint circle.
    BresenhamCircle,
    /// Cubic Bézier via de Casteljau.
    BezierCubic,
    /// Wu antialiased line.
    WuAntialiased,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Stepwise,
        Self::Dda,
        Self::BresenhamLine,
        Self::BresenhamCircle,
        Self::BezierCubic,
        Self::WuAntialiased,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stepwise => "stepwise",
            Self::Dda => "dda",
            Self::BresenhamLine => "bresenham-line",
            Self::BresenhamCircle => "bresenham-circle",
            Self::BezierCubic => "bezier-cubic",
            Self::WuAntialiased => "wu-antialiased",
        }
    }

    /// Short alias also accepted by [`FromStr`].
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::Stepwise => "step",
            Self::Dda => "dda",
            Self::BresenhamLine => "bresenham-line",
            Self::BresenhamCircle => "bresenham-circle",
            Self::BezierCubic => "casteljau",
            Self::WuAntialiased => "wu",
        }
    }

    /// Whether the algorithm produces fractional coverage.
    #[must_use]
    pub const fn is_antialiased(self) -> bool {
        matches!(self, Self::WuAntialiased)
    }

    /// Number of request points the algorithm reads (the circle also reads the radius).
    #[must_use]
    pub const fn point_count(self) -> usize {
        match self {
            Self::BresenhamCircle => 1,
            Self::BezierCubic => 4,
            Self::Stepwise | Self::Dda | Self::BresenhamLine | Self::WuAntialiased => 2,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|a| a.name() == normalized || a.alias() == normalized)
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }
}

/// Dispatch tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    /// Parameter intervals for the Bézier sampler.
    pub curve_segments: u32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            curve_segments: BEZIER_SEGMENTS,
        }
    }
}

/// The union of all request fields; each algorithm reads its own subset.
///
/// Lines use `points[0]..points[1]`, the circle uses `points[0]` as center
/// with `radius`, and the curve uses all four points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterInput {
    /// Up to four request points.
    pub points: [PixelPoint; 4],
    /// Circle radius.
    pub radius: u32,
}

impl RasterInput {
    /// The line between the first two points.
    #[must_use]
    pub const fn line(&self) -> LineRequest {
        LineRequest::new(self.points[0], self.points[1])
    }

    /// The circle around the first point.
    #[must_use]
    pub const fn circle(&self) -> CircleRequest {
        CircleRequest::new(self.points[0], self.radius)
    }

    /// The curve through all four points.
    #[must_use]
    pub const fn curve(&self) -> CurveRequest {
        CurveRequest {
            control: self.points,
        }
    }
}

impl From<LineRequest> for RasterInput {
    fn from(line: LineRequest) -> Self {
        Self {
            points: [line.start, line.end, PixelPoint::ORIGIN, PixelPoint::ORIGIN],
            radius: 0,
        }
    }
}

impl From<CircleRequest> for RasterInput {
    fn from(circle: CircleRequest) -> Self {
        Self {
            points: [circle.center, PixelPoint::ORIGIN, PixelPoint::ORIGIN, PixelPoint::ORIGIN],
            radius: circle.radius,
        }
    }
}

impl From<CurveRequest> for RasterInput {
    fn from(curve: CurveRequest) -> Self {
        Self {
            points: curve.control,
            radius: 0,
        }
    }
}

/// Run `algorithm` over the fields of `input` it needs.
#[must_use]
pub fn rasterize(algorithm: Algorithm, input: &RasterInput) -> Vec<PixelSample> {
    rasterize_with(algorithm, input, &RasterOptions::default())
}

/// Run `algorithm` with explicit options.
#[must_use]
pub fn rasterize_with(
    algorithm: Algorithm,
    input: &RasterInput,
    options: &RasterOptions,
) -> Vec<PixelSample> {
    match algorithm {
        Algorithm::Stepwise => stepwise_line(&input.line()),
        Algorithm::Dda => dda_line(&input.line()),
        Algorithm::BresenhamLine => bresenham_line(&input.line()),
        Algorithm::BresenhamCircle => bresenham_circle(&input.circle()),
        Algorithm::BezierCubic => {
            de_casteljau_cubic_with_segments(&input.curve(), options.curve_segments)
        }
        Algorithm::WuAntialiased => wu_line(&input.line()),
    }
}

/// Resolve `name` and run the matching algorithm.
///
/// # Errors
///
/// Returns [`Error::UnsupportedAlgorithm`] if `name` is not recognized.
pub fn rasterize_named(name: &str, input: &RasterInput) -> Result<Vec<PixelSample>> {
    Ok(rasterize(name.parse()?, input))
}
