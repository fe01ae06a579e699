//! Preview rendering of sample sequences.
//!
//! Plots rasterizer output onto a [`Framebuffer`] the way a canvas front end
//! would: each sample is the foreground color at `alpha` coverage, composited
//! over what is already there. Samples outside the buffer are skipped.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{PixelPoint, PixelSample};

/// Canvas settings for a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Offset added to every sample before plotting.
    pub origin: PixelPoint,
    /// Clear color.
    pub background: Rgba,
    /// Sample color at full coverage.
    pub foreground: Rgba,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            origin: PixelPoint::ORIGIN,
            background: Rgba::WHITE,
            foreground: Rgba::BLACK,
        }
    }
}

/// Composite samples onto `fb`, offset by `origin`.
///
/// Returns the number of samples that landed inside the framebuffer.
pub fn plot_samples(
    fb: &mut Framebuffer,
    samples: &[PixelSample],
    origin: PixelPoint,
    color: Rgba,
) -> usize {
    let mut plotted = 0;
    for sample in samples {
        let x = sample.x.saturating_add(origin.x);
        let y = sample.y.saturating_add(origin.y);
        if fb.get_pixel(x, y).is_some() {
            fb.blend_pixel(x, y, color.with_coverage(sample.alpha));
            plotted += 1;
        }
    }
    plotted
}

/// Render samples onto a fresh framebuffer.
///
/// # Errors
///
/// Returns an error if the preview dimensions are zero.
pub fn render_preview(samples: &[PixelSample], options: &PreviewOptions) -> Result<Framebuffer> {
    let mut fb = Framebuffer::new(options.width, options.height)?;
    fb.clear(options.background);
    plot_samples(&mut fb, samples, options.origin, options.foreground);
    Ok(fb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LineRequest;
    use crate::raster::{bresenham_line, wu_line};

    #[test]
    fn test_render_bresenham_line() {
        let samples = bresenham_line(&LineRequest::from_coords(1, 1, 8, 1));
        let options = PreviewOptions {
            width: 10,
            height: 10,
            ..PreviewOptions::default()
        };
        let fb = render_preview(&samples, &options).unwrap();

        assert_eq!(fb.get_pixel(1, 1), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(8, 1), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(1, 2), Some(Rgba::WHITE));
    }

    #[test]
    fn test_out_of_bounds_samples_skipped() {
        let samples = bresenham_line(&LineRequest::from_coords(-5, 0, 5, 0));
        let mut fb = Framebuffer::new(4, 4).unwrap();
        let plotted = plot_samples(&mut fb, &samples, PixelPoint::ORIGIN, Rgba::RED);
        assert_eq!(plotted, 4);
    }

    #[test]
    fn test_origin_offset() {
        let samples = [PixelSample::opaque(-2, -3)];
        let mut fb = Framebuffer::new(8, 8).unwrap();
        fb.clear(Rgba::WHITE);
        plot_samples(&mut fb, &samples, PixelPoint::new(4, 4), Rgba::BLUE);
        assert_eq!(fb.get_pixel(2, 1), Some(Rgba::BLUE));
    }

    #[test]
    fn test_wu_coverage_produces_gray() {
        let samples = wu_line(&LineRequest::from_coords(0, 0, 9, 4));
        let options = PreviewOptions {
            width: 12,
            height: 12,
            ..PreviewOptions::default()
        };
        let fb = render_preview(&samples, &options).unwrap();

        let partial = (0..12)
            .flat_map(|y| (0..12).map(move |x| (x, y)))
            .filter_map(|(x, y)| fb.get_pixel(x, y))
            .filter(|p| p.r > 0 && p.r < 255)
            .count();
        assert!(partial > 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let options = PreviewOptions {
            width: 0,
            ..PreviewOptions::default()
        };
        assert!(render_preview(&[], &options).is_err());
    }
}
