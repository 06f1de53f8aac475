//! Drawing surface for kernel output.
//!
//! The kernel only returns data. A [`Canvas`] owns the mutable pixels and
//! turns rasterized [`Pixel`]s and fill [`FillAction`]s into colors.

use crate::color::Rgba;
use crate::error::Result;
use crate::fill::FillAction;
use crate::framebuffer::{CoverageStats, Framebuffer};
use crate::geometry::Pixel;
use crate::scalar::intensity_to_gray;

/// Framebuffer plus the background color it was cleared to.
#[derive(Debug, Clone)]
pub struct Canvas {
    framebuffer: Framebuffer,
    background: Rgba,
}

impl Canvas {
    /// Create a white canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_background(width, height, Rgba::WHITE)
    }

    /// Create a canvas cleared to `background`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn with_background(width: u32, height: u32, background: Rgba) -> Result<Self> {
        let mut framebuffer = Framebuffer::new(width, height)?;
        framebuffer.clear(background);
        Ok(Self {
            framebuffer,
            background,
        })
    }

    /// Background color.
    #[must_use]
    pub const fn background(&self) -> Rgba {
        self.background
    }

    /// Underlying framebuffer.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Consume the canvas, keeping its pixels.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.framebuffer
    }

    /// Color of cell `(x, y)`, `None` off the surface.
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> Option<Rgba> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        self.framebuffer.get_pixel(x, y)
    }

    /// Paint cell `(x, y)`; cells off the surface are ignored.
    pub fn plot(&mut self, x: i64, y: i64, color: Rgba) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            self.framebuffer.set_pixel(x, y, color);
        }
    }

    /// Draw rasterizer output as gray levels, full intensity being black.
    pub fn draw_pixels(&mut self, pixels: &[Pixel]) {
        for pixel in pixels {
            let (x, y) = pixel.cell();
            self.plot(x, y, Rgba::gray(intensity_to_gray(pixel.intensity)));
        }
    }

    /// Paint one fill action.
    pub fn apply(&mut self, action: &FillAction, color: Rgba) {
        match *action {
            FillAction::Span { x_start, x_end, y } => {
                self.framebuffer.fill_span(x_start, x_end, y, color);
            }
            FillAction::Pixel { x, y } => self.plot(x, y, color),
        }
    }

    /// Paint every action in order.
    pub fn apply_all<I>(&mut self, actions: I, color: Rgba)
    where
        I: IntoIterator<Item = FillAction>,
    {
        for action in actions {
            self.apply(&action, color);
        }
    }

    /// Reset every pixel to the background.
    pub fn clear(&mut self) {
        self.framebuffer.clear(self.background);
    }

    /// Number of cells that differ from the background.
    #[must_use]
    pub fn painted(&self) -> usize {
        self.framebuffer.count_differing(self.background)
    }

    /// Painted count and luminance range of the whole canvas.
    #[must_use]
    pub fn coverage_stats(&self) -> CoverageStats {
        self.framebuffer.coverage_stats(self.background)
    }
}
