//! Opaque line rasterizers.
//!
//! Three independent algorithms with a common contract: two integer
//! endpoints in, an ordered sequence of opaque samples out, starting at the
//! first endpoint. All of them accept either direction and degenerate input.

use crate::geometry::{round_half_away, LineRequest, PixelPoint, PixelSample};

/// Inclusive integer range from `from` to `to`, stepping by ±1.
fn axis_range(from: i32, to: i32) -> impl Iterator<Item = i32> {
    let step: i64 = if to >= from { 1 } else { -1 };
    let count = (i64::from(to) - i64::from(from)).unsigned_abs();
    (0..=count).map(move |i| (i64::from(from) + step * i as i64) as i32)
}

// ============================================================================
// Stepwise (slope-intercept)
// ============================================================================

/// Rasterize a line from its explicit equation `y = kx + b`.
///
/// Shallow lines step along x and solve for y; steep lines step along y and
/// solve `x = (y - b) / k`. Vertical lines have no slope and are emitted
/// bottom-to-top (ascending y) regardless of endpoint order.
///
/// Output length is `|dx| + 1` or `|dy| + 1`, whichever axis was stepped.
#[must_use]
pub fn stepwise_line(line: &LineRequest) -> Vec<PixelSample> {
    let (x1, y1) = (line.start.x, line.start.y);
    let (x2, y2) = (line.end.x, line.end.y);

    if x1 == x2 {
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        return axis_range(lo, hi).map(|y| PixelSample::opaque(x1, y)).collect();
    }

    let dx = f64::from(x2) - f64::from(x1);
    let dy = f64::from(y2) - f64::from(y1);
    let k = dy / dx;
    let b = f64::from(y1) - k * f64::from(x1);

    if dx.abs() >= dy.abs() {
        axis_range(x1, x2)
            .map(|x| PixelSample::opaque(x, round_half_away(k * f64::from(x) + b)))
            .collect()
    } else {
        // |dy| > |dx| > 0 here, so k is finite and non-zero.
        axis_range(y1, y2)
            .map(|y| PixelSample::opaque(round_half_away((f64::from(y) - b) / k), y))
            .collect()
    }
}

// ============================================================================
// DDA
// ============================================================================

/// Rasterize a line with the digital differential analyzer.
///
/// Takes `max(|dx|, |dy|)` equal real-valued steps from the first endpoint,
/// rounding each position to the nearest pixel. Positions are computed from
/// the step index rather than by accumulating the increment, so the last
/// sample lands exactly on the second endpoint.
///
/// A zero-length line yields the single start point.
#[must_use]
pub fn dda_line(line: &LineRequest) -> Vec<PixelSample> {
    let (x1, y1) = (line.start.x, line.start.y);
    let dx = i64::from(line.end.x) - i64::from(x1);
    let dy = i64::from(line.end.y) - i64::from(y1);
    let steps = dx.unsigned_abs().max(dy.unsigned_abs());

    if steps == 0 {
        return vec![PixelSample::opaque(x1, y1)];
    }

    let steps_f = steps as f64;
    let (dx, dy) = (dx as f64, dy as f64);

    (0..=steps)
        .map(|i| {
            let i = i as f64;
            let x = f64::from(x1) + dx * i / steps_f;
            let y = f64::from(y1) + dy * i / steps_f;
            PixelSample::opaque(round_half_away(x), round_half_away(y))
        })
        .collect()
}

// ============================================================================
// Bresenham
// ============================================================================

/// Rasterize a line with Bresenham's integer algorithm.
///
/// Uses the symmetric error term `err = dx - dy`; a single iteration may
/// advance both axes (a diagonal move). The first and last samples are
/// exactly the two endpoints.
///
/// The walk always runs from the lexicographically smaller endpoint, and the
/// result is reversed when the request runs the other way, so A→B and B→A
/// cover the same pixels even where the error term ties. On such ties the
/// pixels can differ from a walk that always starts at `line.start`: (6,6) to
/// (5,4) yields `[(6,6), (5,5), (5,4)]`, not `[(6,6), (6,5), (5,4)]`.
#[must_use]
pub fn bresenham_line(line: &LineRequest) -> Vec<PixelSample> {
    let (start, end) = (line.start, line.end);
    if (end.x, end.y) < (start.x, start.y) {
        let mut samples = bresenham_walk(end, start);
        samples.reverse();
        samples
    } else {
        bresenham_walk(start, end)
    }
}

fn bresenham_walk(from: PixelPoint, to: PixelPoint) -> Vec<PixelSample> {
    let (mut x, mut y) = (from.x, from.y);
    let (x2, y2) = (to.x, to.y);

    let dx = (i64::from(x2) - i64::from(x)).abs();
    let dy = (i64::from(y2) - i64::from(y)).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut samples = Vec::with_capacity(dx.max(dy) as usize + 1);

    loop {
        samples.push(PixelSample::opaque(x, y));

        if x == x2 && y == y2 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    samples
}
