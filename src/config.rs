//! YAML configuration.
//!
//! Precedence: CLI > file > defaults. Every field is optional in the file.

use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::PixelPoint;
use crate::preview::PreviewOptions;
use crate::raster::{RasterOptions, BEZIER_SEGMENTS};

/// Largest accepted `limits.max_coordinate`.
///
/// Keeps `coordinate ± 1` and `center ± radius` inside the i32 plane.
pub const MAX_COORDINATE_CEILING: i32 = i32::MAX / 2;

/// Request limits enforced at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest accepted magnitude for any coordinate or radius.
    #[serde(default = "default_max_coordinate")]
    pub max_coordinate: i32,
}

fn default_max_coordinate() -> i32 {
    100_000
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_coordinate: default_max_coordinate(),
        }
    }
}

/// Bézier sampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Parameter intervals; 200 gives the standard 0.005 step.
    #[serde(default = "default_segments")]
    pub segments: u32,
}

fn default_segments() -> u32 {
    BEZIER_SEGMENTS
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            segments: default_segments(),
        }
    }
}

/// PNG preview canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_canvas_size")]
    pub height: u32,

    /// Horizontal offset applied to samples.
    #[serde(default)]
    pub origin_x: i32,

    /// Vertical offset applied to samples.
    #[serde(default)]
    pub origin_y: i32,

    /// Background color (`#RRGGBB`).
    #[serde(default = "default_background")]
    pub background: String,

    /// Sample color (`#RRGGBB`).
    #[serde(default = "default_foreground")]
    pub foreground: String,
}

fn default_canvas_size() -> u32 {
    512
}
fn default_background() -> String {
    "#FFFFFF".to_string()
}
fn default_foreground() -> String {
    "#000000".to_string()
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            origin_x: 0,
            origin_y: 0,
            background: default_background(),
            foreground: default_foreground(),
        }
    }
}

/// Response formatting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON responses.
    #[serde(default)]
    pub pretty: bool,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Log level: off, error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request limits.
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Bézier sampling.
    #[serde(default)]
    pub curve: CurveConfig,

    /// Preview canvas.
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Response formatting.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            log_level: default_log_level(),
            limits: LimitsConfig::default(),
            curve: CurveConfig::default(),
            preview: PreviewConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a value is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] or [`Error::InvalidColor`] for the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_coordinate <= 0 {
            return Err(Error::ConfigInvalid {
                key: "limits.max_coordinate",
                message: format!("must be positive, got {}", self.limits.max_coordinate),
            });
        }
        if self.limits.max_coordinate > MAX_COORDINATE_CEILING {
            return Err(Error::ConfigInvalid {
                key: "limits.max_coordinate",
                message: format!(
                    "must be at most {MAX_COORDINATE_CEILING}, got {}",
                    self.limits.max_coordinate
                ),
            });
        }
        if self.curve.segments == 0 {
            return Err(Error::ConfigInvalid {
                key: "curve.segments",
                message: "must be at least 1".to_string(),
            });
        }
        if self.preview.width == 0 || self.preview.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.preview.width,
                height: self.preview.height,
            });
        }
        self.level_filter()?;
        self.preview_options()?;
        Ok(())
    }

    /// Parsed log level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] for an unknown level name.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level.parse().map_err(|_| Error::ConfigInvalid {
            key: "log_level",
            message: format!("unknown level '{}'", self.log_level),
        })
    }

    /// Dispatch options derived from the config.
    #[must_use]
    pub fn raster_options(&self) -> RasterOptions {
        RasterOptions {
            curve_segments: self.curve.segments,
        }
    }

    /// Preview canvas derived from the config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if a color does not parse.
    pub fn preview_options(&self) -> Result<PreviewOptions> {
        Ok(PreviewOptions {
            width: self.preview.width,
            height: self.preview.height,
            origin: PixelPoint::new(self.preview.origin_x, self.preview.origin_y),
            background: Rgba::from_hex(&self.preview.background)?,
            foreground: Rgba::from_hex(&self.preview.foreground)?,
        })
    }
}
