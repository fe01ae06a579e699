//! # Trueno-Raster
//!
//! Classical rasterization algorithms that turn integer geometry into an
//! ordered sequence of pixel samples.
//!
//! ## Features
//!
//! - **Lines**: stepwise (slope-intercept), DDA, Bresenham
//! - **Circles**: Bresenham midpoint with 8-way symmetry
//! - **Curves**: cubic Bézier via de Casteljau subdivision
//! - **Antialiasing**: Wu's line algorithm with fractional coverage
//! - **Boundary**: JSON draw request/response, PNG previews, YAML config
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let samples = bresenham_line(&LineRequest::from_coords(0, 0, 3, 0));
//! let coords: Vec<_> = samples.iter().map(|s| (s.x, s.y)).collect();
//! assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
//!
//! let circle = rasterize(
//!     "bresenham-circle".parse::<Algorithm>()?,
//!     &CircleRequest::new(PixelPoint::new(0, 0), 5).into(),
//! );
//! assert_eq!(circle.len(), 40);
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `wasm`: WebAssembly bindings for the JSON boundary
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Pixel samples, requests, and rounding helpers.
pub mod geometry;

/// Rasterization algorithms and dispatch.
pub mod raster;

// ============================================================================
// Boundary Modules
// ============================================================================

/// JSON draw request/response handling.
pub mod protocol;

/// YAML configuration.
pub mod config;

// ============================================================================
// Preview Modules
// ============================================================================

/// Color type for previews.
pub mod color;

/// RGBA pixel buffer.
pub mod framebuffer;

/// Sample plotting onto a framebuffer.
pub mod preview;

/// Output encoders (PNG).
pub mod output;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{CircleRequest, CurveRequest, LineRequest, PixelPoint, PixelSample};
    pub use crate::output::PngEncoder;
    pub use crate::preview::{render_preview, PreviewOptions};
    pub use crate::protocol::{DrawRequest, DrawResponse, Handler};
    pub use crate::raster::{
        bresenham_circle, bresenham_line, dda_line, de_casteljau_cubic, rasterize,
        rasterize_with, stepwise_line, wu_line, Algorithm, RasterInput, RasterOptions, Rasterize,
    };
}
