//! RGBA pixel surface.
//!
//! Rows are padded to a 64-byte stride so each starts on a SIMD-friendly
//! boundary. Coverage statistics are reduced with trueno vectors.

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::Vector;

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// Summary of how much of a framebuffer differs from its background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageStats {
    /// Pixels whose color differs from the background.
    pub painted: usize,
    /// Minimum luminance over all pixels.
    pub min_luminance: f32,
    /// Maximum luminance over all pixels.
    pub max_luminance: f32,
    /// Mean luminance over all pixels.
    pub mean_luminance: f32,
}

/// Row-major RGBA framebuffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// RGBA bytes, `stride` bytes per row.
    pixels: Vec<u8>,
    stride: usize,
}

impl Framebuffer {
    /// Create a framebuffer cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(80, 60).unwrap();
    /// assert_eq!(fb.width(), 80);
    /// assert_eq!(fb.height(), 60);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);

        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row width in bytes, including padding.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = (y as usize) * self.stride;
        &mut self.pixels[start..start + (self.width as usize) * 4]
    }

    /// Clear every pixel to `color`.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for y in 0..self.height {
            for chunk in self.row_mut(y).chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Color at `(x, y)`, `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.pixel_index(x, y);
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(Rgba::from_array(rgba))
    }

    /// Set the color at `(x, y)`; out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Paint columns `x_start..x_end` of row `y`, clipped to the surface.
    ///
    /// Signed coordinates are accepted so fill output can be drawn directly.
    pub fn fill_span(&mut self, x_start: i64, x_end: i64, y: i64, color: Rgba) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        let lo = x_start.clamp(0, i64::from(self.width)) as usize;
        let hi = x_end.clamp(0, i64::from(self.width)) as usize;
        if lo >= hi {
            return;
        }
        let rgba = color.to_array();
        let row = self.row_mut(y as u32);
        for chunk in row[lo * 4..hi * 4].chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Number of pixels whose color differs from `color`.
    #[must_use]
    pub fn count_differing(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        let row_bytes = (self.width as usize) * 4;
        self.pixels
            .chunks_exact(self.stride)
            .flat_map(|row| row[..row_bytes].chunks_exact(4))
            .filter(|px| *px != rgba)
            .count()
    }

    /// Luminance and painted-pixel summary relative to `background`.
    #[must_use]
    pub fn coverage_stats(&self, background: Rgba) -> CoverageStats {
        let mut luminances = Vec::with_capacity(self.pixel_count());
        let mut painted = 0;

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.pixel_index(x, y);
                let mut rgba = [0u8; 4];
                rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
                let color = Rgba::from_array(rgba);
                if color != background {
                    painted += 1;
                }
                luminances.push(color.luminance());
            }
        }

        let vec = Vector::from_vec(luminances);
        CoverageStats {
            painted,
            min_luminance: vec.min().unwrap_or(0.0),
            max_luminance: vec.max().unwrap_or(0.0),
            mean_luminance: vec.mean().unwrap_or(0.0),
        }
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Pixel bytes without row padding, as PNG expects.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;
        if self.stride == row_bytes {
            return self.pixels.clone();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for row in self.pixels.chunks_exact(self.stride) {
            compact.extend_from_slice(&row[..row_bytes]);
        }
        compact
    }
}
