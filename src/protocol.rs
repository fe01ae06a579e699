//! Draw request/response boundary.
//!
//! Wire format (JSON):
//!
//! ```text
//! request:  { "algorithm": "bresenham-line", "x1": 0, "y1": 0, "x2": 3, "y2": 0, ... , "r": 0 }
//! response: { "points": [ { "x": 0, "y": 0, "alpha": 1.0 }, ... ], "elapsed": 1234 }
//! ```
//!
//! Missing numeric fields default to 0 and fields an algorithm does not
//! need are ignored. `elapsed` is the core computation time in nanoseconds.

use std::io::{BufRead, Write};
use std::time::Instant;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::{Config, MAX_COORDINATE_CEILING};
use crate::error::{Error, Result};
use crate::geometry::{PixelPoint, PixelSample};
use crate::raster::{rasterize_with, Algorithm, RasterInput, RasterOptions};

/// A draw request as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawRequest {
    /// Algorithm name.
    pub algorithm: String,
    /// Start point / circle center x.
    pub x1: i32,
    /// Start point / circle center y.
    pub y1: i32,
    /// End point (lines) or first control point (curves) x.
    pub x2: i32,
    /// End point (lines) or first control point (curves) y.
    pub y2: i32,
    /// Second control point x.
    pub x3: i32,
    /// Second control point y.
    pub y3: i32,
    /// Curve end point x.
    pub x4: i32,
    /// Curve end point y.
    pub y4: i32,
    /// Circle radius.
    pub r: i32,
}

impl DrawRequest {
    /// Create a request for `algorithm` with all numeric fields zero.
    #[must_use]
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            ..Self::default()
        }
    }

    /// Set the first two points.
    #[must_use]
    pub fn line(mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
        self
    }

    /// Set the circle center and radius.
    #[must_use]
    pub fn circle(mut self, xc: i32, yc: i32, r: i32) -> Self {
        self.x1 = xc;
        self.y1 = yc;
        self.r = r;
        self
    }

    /// Set all four control points.
    #[must_use]
    pub fn curve(mut self, points: [(i32, i32); 4]) -> Self {
        let [p1, p2, p3, p4] = points;
        (self.x1, self.y1) = p1;
        (self.x2, self.y2) = p2;
        (self.x3, self.y3) = p3;
        (self.x4, self.y4) = p4;
        self
    }

    fn fields(&self) -> [(&'static str, i32); 9] {
        [
            ("x1", self.x1),
            ("y1", self.y1),
            ("x2", self.x2),
            ("y2", self.y2),
            ("x3", self.x3),
            ("y3", self.y3),
            ("x4", self.x4),
            ("y4", self.y4),
            ("r", self.r),
        ]
    }

    /// Resolve the algorithm and check the fields it reads.
    ///
    /// Fields the algorithm ignores are not range-checked.
    /// `max_coordinate` is capped at [`MAX_COORDINATE_CEILING`] so that
    /// accepted geometry never leaves the i32 plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAlgorithm`], [`Error::NegativeRadius`] or
    /// [`Error::CoordinateOutOfRange`].
    pub fn validate(&self, max_coordinate: i32) -> Result<(Algorithm, RasterInput)> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        let limit = max_coordinate.clamp(0, MAX_COORDINATE_CEILING);

        let used_points = algorithm.point_count() * 2;
        let uses_radius = algorithm == Algorithm::BresenhamCircle;

        for (i, (field, value)) in self.fields().into_iter().enumerate() {
            let used = if field == "r" { uses_radius } else { i < used_points };
            if !used {
                continue;
            }
            if field == "r" && value < 0 {
                return Err(Error::NegativeRadius(value));
            }
            if value.unsigned_abs() > limit.unsigned_abs() {
                return Err(Error::CoordinateOutOfRange { field, value, limit });
            }
        }

        let input = RasterInput {
            points: [
                PixelPoint::new(self.x1, self.y1),
                PixelPoint::new(self.x2, self.y2),
                PixelPoint::new(self.x3, self.y3),
                PixelPoint::new(self.x4, self.y4),
            ],
            radius: if uses_radius { self.r.unsigned_abs() } else { 0 },
        };

        Ok((algorithm, input))
    }
}

/// The rasterization result returned to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawResponse {
    /// Samples in generation order.
    pub points: Vec<PixelSample>,
    /// Core computation time in nanoseconds.
    pub elapsed: u64,
}

/// Counters from a [`Handler::serve_lines`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    /// Requests answered with points.
    pub handled: usize,
    /// Requests answered with an error object.
    pub rejected: usize,
}

/// Request handler configured with limits and dispatch options.
#[derive(Debug, Clone)]
pub struct Handler {
    options: RasterOptions,
    max_coordinate: i32,
    pretty: bool,
}

impl Default for Handler {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Handler {
    /// Build a handler from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            options: config.raster_options(),
            max_coordinate: config.limits.max_coordinate,
            pretty: config.output.pretty,
        }
    }

    /// Override JSON pretty-printing.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Validate and rasterize one request.
    ///
    /// # Errors
    ///
    /// Returns a client error if the request is invalid (see [`DrawRequest::validate`]).
    pub fn handle(&self, request: &DrawRequest) -> Result<DrawResponse> {
        let (algorithm, input) = request.validate(self.max_coordinate).map_err(|e| {
            warn!("rejected draw request: {e}");
            e
        })?;

        let start = Instant::now();
        let points = rasterize_with(algorithm, &input, &self.options);
        let elapsed = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

        debug!("{algorithm}: {} samples in {elapsed} ns", points.len());

        Ok(DrawResponse { points, elapsed })
    }

    /// Handle a JSON-encoded request and return the JSON-encoded response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed input, or any [`Handler::handle`] error.
    pub fn handle_json(&self, json: &str) -> Result<String> {
        let request: DrawRequest = serde_json::from_str(json).map_err(|e| {
            warn!("malformed draw request: {e}");
            e
        })?;
        let response = self.handle(&request)?;
        self.to_json(&response)
    }

    /// Serialize a value, honoring the pretty-print setting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    /// Answer one JSON request per input line with one JSON line.
    ///
    /// Failed requests produce `{"error": "...", "client_error": true}` and
    /// do not stop the loop. Blank lines are skipped. Pretty-printing is
    /// ignored so every response stays on one line.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading or writing fails.
    pub fn serve_lines<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<ServeStats> {
        let compact = self.clone().pretty(false);
        let mut stats = ServeStats::default();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match compact.handle_json(&line) {
                Ok(json) => {
                    writeln!(writer, "{json}")?;
                    stats.handled += 1;
                }
                Err(e) => {
                    let body = serde_json::json!({
                        "error": e.to_string(),
                        "client_error": e.is_client_error(),
                    });
                    writeln!(writer, "{body}")?;
                    stats.rejected += 1;
                }
            }
        }

        writer.flush()?;
        Ok(stats)
    }
}

/// Handle a request with the default configuration.
///
/// # Errors
///
/// See [`Handler::handle`].
pub fn handle(request: &DrawRequest) -> Result<DrawResponse> {
    Handler::default().handle(request)
}

/// Handle a JSON request with the default configuration.
///
/// # Errors
///
/// See [`Handler::handle_json`].
pub fn handle_json(json: &str) -> Result<String> {
    Handler::default().handle_json(json)
}
