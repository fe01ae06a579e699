#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the rasterization algorithms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_raster::prelude::*;
use trueno_raster::raster::de_casteljau_cubic_with_segments;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    for length in [10, 100, 1_000, 10_000] {
        // Slope 3/7 so every algorithm takes both straight and diagonal steps
        let line = LineRequest::from_coords(0, 0, length, length * 3 / 7);

        for algorithm in [
            Algorithm::Stepwise,
            Algorithm::Dda,
            Algorithm::BresenhamLine,
            Algorithm::WuAntialiased,
        ] {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), length), &line, |b, line| {
                let input = RasterInput::from(*line);
                b.iter(|| rasterize(algorithm, black_box(&input)));
            });
        }
    }

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bresenham_circle");

    for radius in [10u32, 100, 1_000, 10_000] {
        let circle = CircleRequest::new(PixelPoint::ORIGIN, radius);
        group.bench_with_input(BenchmarkId::from_parameter(radius), &circle, |b, circle| {
            b.iter(|| bresenham_circle(black_box(circle)));
        });
    }

    group.finish();
}

fn curve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("de_casteljau");

    let curve = CurveRequest::new(
        PixelPoint::new(0, 0),
        PixelPoint::new(200, 800),
        PixelPoint::new(600, -400),
        PixelPoint::new(800, 300),
    );

    for segments in [50u32, 200, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(segments), &segments, |b, &segments| {
            b.iter(|| de_casteljau_cubic_with_segments(black_box(&curve), segments));
        });
    }

    group.finish();
}

fn handler_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("handler_json");
    let handler = Handler::default();

    let requests = [
        ("line", r#"{"algorithm":"bresenham-line","x1":0,"y1":0,"x2":500,"y2":120}"#),
        ("circle", r#"{"algorithm":"bresenham-circle","x1":0,"y1":0,"r":200}"#),
        (
            "curve",
            r#"{"algorithm":"bezier-cubic","x1":0,"y1":0,"x2":50,"y2":300,"x3":250,"y3":-100,"x4":400,"y4":0}"#,
        ),
    ];

    for (name, json) in requests {
        group.bench_with_input(BenchmarkId::from_parameter(name), &json, |b, json| {
            b.iter(|| handler.handle_json(black_box(json)).expect("request should succeed"));
        });
    }

    group.finish();
}

fn preview_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview");

    let samples = wu_line(&LineRequest::from_coords(-250, -200, 250, 180));
    let options = PreviewOptions::default();

    group.bench_function("render", |b| {
        b.iter(|| render_preview(black_box(&samples), &options).expect("preview should render"));
    });

    let fb = render_preview(&samples, &options).expect("preview should render");
    group.bench_function("png_encode", |b| {
        b.iter(|| PngEncoder::to_bytes(black_box(&fb)).expect("encoding should succeed"));
    });

    group.finish();
}

criterion_group!(
    benches,
    line_benchmark,
    circle_benchmark,
    curve_benchmark,
    handler_benchmark,
    preview_benchmark
);
criterion_main!(benches);
