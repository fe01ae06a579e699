//! Cubic Bézier rasterizer using de Casteljau subdivision.
//!
//! The curve is sampled at evenly spaced parameter values; no arc-length
//! reparametrization is done, so pixel density follows the parameter
//! speed of the curve. Consecutive samples may repeat a pixel.
//!
//! # References
//!
//! - de Casteljau, P. (1959). "Outillages méthodes calcul." André Citroën.

use crate::geometry::{lerp2, round_half_away, CurveRequest, PixelSample};

/// Parameter step of the default sampling (`t = 0, 0.005, ..., 1`).
pub const BEZIER_STEP: f64 = 0.005;

/// Number of parameter intervals in the default sampling.
pub const BEZIER_SEGMENTS: u32 = 200;

/// Rasterize a cubic Bézier at the default 201 parameter values.
#[must_use]
pub fn de_casteljau_cubic(curve: &CurveRequest) -> Vec<PixelSample> {
    de_casteljau_cubic_with_segments(curve, BEZIER_SEGMENTS)
}

/// Rasterize a cubic Bézier at `segments + 1` evenly spaced parameter values.
///
/// Each `t` is computed from its index, not accumulated, so the last sample
/// is evaluated exactly at `t = 1`. `segments == 0` is treated as 1.
#[must_use]
pub fn de_casteljau_cubic_with_segments(curve: &CurveRequest, segments: u32) -> Vec<PixelSample> {
    let segments = segments.max(1);
    let control = curve
        .control
        .map(|p| (f64::from(p.x), f64::from(p.y)));

    (0..=segments)
        .map(|i| {
            let t = f64::from(i) / f64::from(segments);
            let (x, y) = evaluate(&control, t);
            PixelSample::opaque(round_half_away(x), round_half_away(y))
        })
        .collect()
}

/// Evaluate the curve at `t` by three levels of linear interpolation.
#[inline]
fn evaluate(p: &[(f64, f64); 4], t: f64) -> (f64, f64) {
    let q0 = lerp2(p[0], p[1], t);
    let q1 = lerp2(p[1], p[2], t);
    let q2 = lerp2(p[2], p[3], t);

    let r0 = lerp2(q0, q1, t);
    let r1 = lerp2(q1, q2, t);

    lerp2(r0, r1, t)
}
