//! Error types for trueno-raster operations.
//!
//! Degenerate geometry (zero-length lines, zero radius, coincident control
//! points) is never an error: the rasterizers return a degenerate-but-valid
//! sample sequence instead. Errors only arise at the request boundary and in
//! the preview/output layers.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested algorithm name is not recognized.
    #[error(
        "unsupported algorithm '{0}' (expected one of: stepwise, dda, bresenham-line, \
         bresenham-circle, bezier-cubic, wu-antialiased)"
    )]
    UnsupportedAlgorithm(String),

    /// Circle radius must be non-negative.
    #[error("circle radius must be non-negative, got {0}")]
    NegativeRadius(i32),

    /// A request coordinate exceeds the configured magnitude limit.
    #[error("field '{field}' = {value} is outside the allowed range [-{limit}, {limit}]")]
    CoordinateOutOfRange {
        /// Request field name.
        field: &'static str,
        /// Offending value.
        value: i32,
        /// Configured magnitude limit.
        limit: i32,
    },

    /// Invalid dimensions for a preview framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// Malformed request or response JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsing error.
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    /// I/O error (file operations, stdin/stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

impl Error {
    /// Whether the error was caused by the request itself (invalid-request class).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedAlgorithm(_)
                | Self::NegativeRadius(_)
                | Self::CoordinateOutOfRange { .. }
                | Self::Json(_)
        )
    }
}
