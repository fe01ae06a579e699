//! Antialiased line rasterizer using Wu's algorithm.
//!
//! # Algorithm
//!
//! Wu's algorithm emits two pixels at each step along the major axis,
//! straddling the ideal line, with complementary coverage `1 - f` and `f`
//! where `f` is the fractional distance of the line from the lower pixel.
//! Steep lines are handled in transposed space and transposed back on
//! emission.
//!
//! Emission order: the start endpoint pair, the end endpoint pair, then the
//! interior pairs from left to right (in transposed space for steep lines).
//!
//! # References
//!
//! Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

use crate::geometry::{fpart, ipart, rfpart, round_half_up, LineRequest, PixelSample};

/// Collects coverage samples, undoing the steep-line transpose.
struct CoveragePlotter {
    steep: bool,
    samples: Vec<PixelSample>,
}

impl CoveragePlotter {
    /// Rows outside the i32 plane are dropped.
    fn plot(&mut self, x: i32, row: i64, alpha: f64) {
        let Ok(y) = i32::try_from(row) else {
            return;
        };
        let (px, py) = if self.steep { (y, x) } else { (x, y) };
        self.samples.push(PixelSample::with_alpha(px, py, alpha));
    }

    /// Plot the pixel pair straddling row position `y` in column `x`.
    fn plot_pair(&mut self, x: i32, y: f64, weight: f64) {
        let row = i64::from(ipart(y));
        self.plot(x, row, rfpart(y) * weight);
        self.plot(x, row + 1, fpart(y) * weight);
    }
}

/// Rasterize an antialiased line.
///
/// Endpoint pairs are additionally weighted by the horizontal gap of the
/// endpoint within its pixel; for integer endpoints that weight is 0.5.
/// Every interior pair sums to 1.0.
///
/// On the last representable row (`i32::MAX` in the minor axis) the upper
/// pixel of each pair has no coordinate and is omitted.
#[must_use]
pub fn wu_line(line: &LineRequest) -> Vec<PixelSample> {
    let (mut x1, mut y1) = (f64::from(line.start.x), f64::from(line.start.y));
    let (mut x2, mut y2) = (f64::from(line.end.x), f64::from(line.end.y));

    let steep = (y2 - y1).abs() > (x2 - x1).abs();
    if steep {
        std::mem::swap(&mut x1, &mut y1);
        std::mem::swap(&mut x2, &mut y2);
    }
    if x1 > x2 {
        std::mem::swap(&mut x1, &mut x2);
        std::mem::swap(&mut y1, &mut y2);
    }

    let dx = x2 - x1;
    let dy = y2 - y1;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    let span = dx as usize + 1;
    let mut plotter = CoveragePlotter {
        steep,
        samples: Vec::with_capacity(2 * span + 2),
    };

    // First endpoint
    let xpxl1 = round_half_up(x1);
    let yend1 = y1 + gradient * (f64::from(xpxl1) - x1);
    plotter.plot_pair(xpxl1, yend1, rfpart(x1 + 0.5));

    // Second endpoint
    let xpxl2 = round_half_up(x2);
    let yend2 = y2 + gradient * (f64::from(xpxl2) - x2);
    plotter.plot_pair(xpxl2, yend2, fpart(x2 + 0.5));

    // Interior: row position measured from the first endpoint, not accumulated
    for x in (xpxl1 + 1)..xpxl2 {
        let intery = yend1 + gradient * f64::from(x - xpxl1);
        plotter.plot_pair(x, intery, 1.0);
    }

    plotter.samples
}
