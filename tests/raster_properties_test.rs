//! Rasterizer property tests.
//!
//! Each test is a falsifiable claim about the output of one algorithm.
//!
//! Run: cargo test --test raster_properties_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::collections::HashSet;

use proptest::prelude::*;

use trueno_raster::geometry::{CircleRequest, CurveRequest, LineRequest, PixelPoint, PixelSample};
use trueno_raster::raster::{
    bresenham_circle, bresenham_line, dda_line, de_casteljau_cubic, rasterize, stepwise_line,
    wu_line, Algorithm, RasterInput,
};

fn point_set(samples: &[PixelSample]) -> HashSet<PixelPoint> {
    samples.iter().map(PixelSample::point).collect()
}

fn within_one(a: PixelPoint, b: PixelPoint) -> bool {
    (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1
}

// ============================================================================
// Fixed examples
// ============================================================================

#[test]
fn claim_bresenham_horizontal_exact() {
    let samples = bresenham_line(&LineRequest::from_coords(0, 0, 3, 0));
    let coords: Vec<_> = samples.iter().map(|s| (s.x, s.y)).collect();
    assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn claim_zero_radius_circle_is_center() {
    let samples = bresenham_circle(&CircleRequest::new(PixelPoint::ORIGIN, 0));
    assert!(!samples.is_empty());
    assert!(samples.iter().all(|s| s.point() == PixelPoint::ORIGIN));
}

#[test]
fn claim_radius_five_within_tolerance() {
    for s in bresenham_circle(&CircleRequest::new(PixelPoint::ORIGIN, 5)) {
        let d = f64::from(s.x * s.x + s.y * s.y).sqrt().round();
        assert!(d == 4.0 || d == 5.0, "({}, {}) rounds to {d}", s.x, s.y);
    }
}

#[test]
fn claim_coincident_curve_is_a_point() {
    let p = PixelPoint::new(10, 10);
    let samples = de_casteljau_cubic(&CurveRequest::new(p, p, p, p));
    assert_eq!(samples.len(), 201);
    assert!(samples.iter().all(|s| s.point() == p));
}

#[test]
fn claim_wu_horizontal_main_row_opaque() {
    let samples = wu_line(&LineRequest::from_coords(2, 7, 30, 7));
    let interior: Vec<_> = samples[4..].iter().filter(|s| s.y == 7).collect();
    assert_eq!(interior.len(), 27);
    assert!(interior.iter().all(|s| s.alpha == 1.0));
}

#[test]
fn claim_dda_degenerate_single_point() {
    let samples = dda_line(&LineRequest::from_coords(-4, 9, -4, 9));
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].point(), PixelPoint::new(-4, 9));
}

#[test]
fn claim_every_algorithm_handles_all_zero_input() {
    for algorithm in Algorithm::ALL {
        let samples = rasterize(algorithm, &RasterInput::default());
        assert!(!samples.is_empty(), "{algorithm} produced nothing");
        assert!(samples.iter().all(|s| (0.0..=1.0).contains(&s.alpha)));
    }
}

// ============================================================================
// Properties
// ============================================================================

fn coord() -> impl Strategy<Value = i32> {
    -300i32..300
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Opaque lines start and end at the request endpoints (±1 for the real-valued ones)
    #[test]
    fn prop_opaque_line_endpoints(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let line = LineRequest::from_coords(x1, y1, x2, y2);

        let exact = bresenham_line(&line);
        prop_assert_eq!(exact.first().unwrap().point(), line.start);
        prop_assert_eq!(exact.last().unwrap().point(), line.end);

        for samples in [stepwise_line(&line), dda_line(&line)] {
            let first = samples.first().unwrap().point();
            let last = samples.last().unwrap().point();
            let forward = within_one(first, line.start) && within_one(last, line.end);
            // vertical stepwise lines are emitted in ascending y
            let backward = within_one(first, line.end) && within_one(last, line.start);
            prop_assert!(forward || backward);
        }
    }

    /// Output length equals the major-axis span plus one
    #[test]
    fn prop_line_sample_count(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let line = LineRequest::from_coords(x1, y1, x2, y2);
        let span = (x2 - x1).unsigned_abs().max((y2 - y1).unsigned_abs()) as usize + 1;
        prop_assert_eq!(bresenham_line(&line).len(), span);
        prop_assert_eq!(dda_line(&line).len(), span);
        prop_assert_eq!(stepwise_line(&line).len(), span);
    }

    /// Consecutive opaque line samples are 8-connected
    #[test]
    fn prop_bresenham_connected(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let samples = bresenham_line(&LineRequest::from_coords(x1, y1, x2, y2));
        for w in samples.windows(2) {
            prop_assert!(within_one(w[0].point(), w[1].point()));
            prop_assert_ne!(w[0].point(), w[1].point());
        }
    }

    /// A to B and B to A cover the same pixels
    #[test]
    fn prop_bresenham_symmetric(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let line = LineRequest::from_coords(x1, y1, x2, y2);
        prop_assert_eq!(
            point_set(&bresenham_line(&line)),
            point_set(&bresenham_line(&line.reversed()))
        );
    }

    /// No hidden state: identical input gives identical output
    #[test]
    fn prop_idempotent(
        x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord(),
        x3 in coord(), y3 in coord(), x4 in coord(), y4 in coord(),
        r in 0u32..200,
    ) {
        let input = RasterInput {
            points: [
                PixelPoint::new(x1, y1),
                PixelPoint::new(x2, y2),
                PixelPoint::new(x3, y3),
                PixelPoint::new(x4, y4),
            ],
            radius: r,
        };
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(rasterize(algorithm, &input), rasterize(algorithm, &input));
        }
    }

    /// Every Wu interior pair sums to 1
    #[test]
    fn prop_wu_pairs_sum_to_one(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let samples = wu_line(&LineRequest::from_coords(x1, y1, x2, y2));
        prop_assert!(samples.len() >= 4);
        prop_assert_eq!(samples.len() % 2, 0);
        for pair in samples[4..].chunks_exact(2) {
            prop_assert!((pair[0].alpha + pair[1].alpha - 1.0).abs() < 1e-9);
        }
        for s in &samples {
            prop_assert!((0.0..=1.0).contains(&s.alpha));
        }
    }

    /// Wu covers every step of the major axis exactly once per pair
    #[test]
    fn prop_wu_interior_count(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let samples = wu_line(&LineRequest::from_coords(x1, y1, x2, y2));
        let span = (x2 - x1).unsigned_abs().max((y2 - y1).unsigned_abs()) as usize;
        prop_assert_eq!(samples.len(), 4 + 2 * span.saturating_sub(1));
    }

    /// Midpoint circle stays within one pixel inside the true radius
    #[test]
    fn prop_circle_radius_tolerance(xc in coord(), yc in coord(), r in 1u32..500) {
        let samples = bresenham_circle(&CircleRequest::new(PixelPoint::new(xc, yc), r));
        prop_assert_eq!(samples.len() % 8, 0);
        for s in samples {
            let dx = f64::from(s.x - xc);
            let dy = f64::from(s.y - yc);
            let d = (dx * dx + dy * dy).sqrt().round() as u32;
            prop_assert!(d == r || d + 1 == r, "distance {} for radius {}", d, r);
        }
    }

    /// Curves start and end exactly on the outer control points
    #[test]
    fn prop_curve_endpoints(
        x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord(),
        x3 in coord(), y3 in coord(), x4 in coord(), y4 in coord(),
    ) {
        let curve = CurveRequest::new(
            PixelPoint::new(x1, y1),
            PixelPoint::new(x2, y2),
            PixelPoint::new(x3, y3),
            PixelPoint::new(x4, y4),
        );
        let samples = de_casteljau_cubic(&curve);
        prop_assert_eq!(samples.len(), 201);
        prop_assert_eq!(samples[0].point(), PixelPoint::new(x1, y1));
        prop_assert_eq!(samples[200].point(), PixelPoint::new(x4, y4));
    }
}
