//! Bresenham (midpoint) circle rasterizer.
//!
//! # Algorithm
//!
//! Walks one octant from `(0, r)` using the integer decision variable
//! `d = 3 - 2r` and mirrors each position into all eight octants.
//!
//! Samples are emitted batch by batch, eight per walked position, in the
//! fixed reflection order `(±x, +y)`, `(±x, -y)`, `(±y, +x)`, `(±y, -x)`.
//! They are not sorted by angle and coincident reflections (on the axes and
//! diagonals) are not deduplicated.

use crate::geometry::{CircleRequest, PixelSample};

/// Rasterize a circle outline.
///
/// A zero radius yields eight copies of the center.
///
/// Points that fall outside the i32 coordinate range are dropped rather than
/// wrapped, so a circle near the edge of the plane is clipped there.
#[must_use]
pub fn bresenham_circle(circle: &CircleRequest) -> Vec<PixelSample> {
    let xc = i64::from(circle.center.x);
    let yc = i64::from(circle.center.y);
    let r = i64::from(circle.radius);

    let mut x = 0_i64;
    let mut y = r;
    let mut d = 3 - 2 * r;

    // Roughly r / sqrt(2) walked positions, eight samples each.
    let mut samples = Vec::with_capacity(8 * (r as usize * 3 / 4 + 2));
    push_octants(&mut samples, xc, yc, x, y);

    if r == 0 {
        return samples;
    }

    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        push_octants(&mut samples, xc, yc, x, y);
    }

    samples
}

/// Push the eight reflections of `(x, y)` around `(xc, yc)`.
///
/// Reflections outside the i32 plane are skipped.
#[inline]
fn push_octants(samples: &mut Vec<PixelSample>, xc: i64, yc: i64, x: i64, y: i64) {
    let mut push = |px: i64, py: i64| {
        if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
            samples.push(PixelSample::opaque(px, py));
        }
    };
    push(xc + x, yc + y);
    push(xc - x, yc + y);
    push(xc + x, yc - y);
    push(xc - x, yc - y);
    push(xc + y, yc + x);
    push(xc - y, yc + x);
    push(xc + y, yc - x);
    push(xc - y, yc - x);
}
