//! Scalar helpers shared by every rasterizer.
//!
//! Rounding here is deliberately *not* the standard library's: `f64::round`
//! rounds half away from zero, which breaks the symmetry the conic and Wu
//! rasterizers rely on for negative coordinates. [`round_half_up`] always
//! rounds ties toward positive infinity.

/// Largest integer less than or equal to `x`.
#[inline]
#[must_use]
pub fn floor_to_int(x: f64) -> i64 {
    x.floor() as i64
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// ```
/// use trueno_raster::scalar::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(-2.5), -2);
/// ```
#[inline]
#[must_use]
pub fn round_half_up(x: f64) -> i64 {
    floor_to_int(x + 0.5)
}

/// Fractional part of a float, always in `[0, 1)`.
#[inline]
#[must_use]
pub fn fractional_part(x: f64) -> f64 {
    x - x.floor()
}

/// Reverse fractional part: `1 - fractional_part(x)`.
#[inline]
#[must_use]
pub fn complement_fraction(x: f64) -> f64 {
    1.0 - fractional_part(x)
}

/// Map a coverage value to a gray level on a white canvas.
///
/// Full coverage (1.0) is black (0), no coverage (0.0) is white (255).
/// Values outside `[0, 1]` are clamped.
#[inline]
#[must_use]
pub fn intensity_to_gray(c: f64) -> u8 {
    let c = c.clamp(0.0, 1.0);
    (255.0 * (1.0 - c)) as u8
}
