//! Line rasterization.
//!
//! Three interchangeable algorithms map a segment to an ordered pixel
//! sequence that includes both endpoints.

use crate::geometry::{Pixel, Point};
use crate::scalar::{complement_fraction, floor_to_int, fractional_part, round_half_up};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineAlgorithm {
    /// Digital differential analyzer (floating-point stepping).
    Dda,
    /// Bresenham's integer error-term algorithm.
    Bresenham,
    /// Xiaolin Wu's antialiased line.
    Wu,
}

impl LineAlgorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Self; 3] = [Self::Dda, Self::Bresenham, Self::Wu];

    /// Rasterize the segment `p1`-`p2` with this algorithm.
    #[must_use]
    pub fn rasterize(self, p1: Point, p2: Point) -> Vec<Pixel> {
        match self {
            Self::Dda => dda(p1, p2),
            Self::Bresenham => bresenham(p1, p2),
            Self::Wu => wu(p1, p2),
        }
    }
}

/// DDA line.
///
/// Takes `floor(max(|dx|, |dy|))` steps and emits `steps + 1` samples with
/// sub-pixel coordinates. A zero-length segment yields one sample.
#[must_use]
pub fn dda(p1: Point, p2: Point) -> Vec<Pixel> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let steps = floor_to_int(dx.abs().max(dy.abs()));

    if steps == 0 {
        return vec![Pixel::solid(p1.x, p1.y)];
    }

    // Position i is interpolated rather than accumulated so the last sample
    // lands on the endpoint.
    let n = steps as f64;
    (0..=steps)
        .map(|i| {
            let t = i as f64 / n;
            Pixel::solid(p1.x + dx * t, p1.y + dy * t)
        })
        .collect()
}

/// Bresenham's line (non-antialiased).
///
/// Endpoints are rounded half-up to integer pixels; all arithmetic after
/// that is integer only.
#[must_use]
pub fn bresenham(p1: Point, p2: Point) -> Vec<Pixel> {
    let (mut x, mut y) = (round_half_up(p1.x), round_half_up(p1.y));
    let (x1, y1) = (round_half_up(p2.x), round_half_up(p2.y));

    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);
    loop {
        points.push(Pixel::solid(x as f64, y as f64));

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Anti-aliased line using Wu's algorithm.
///
/// Each endpoint contributes two samples weighted by its x-gap; every interior
/// column contributes a pair whose intensities sum to exactly 1.0. Output
/// order: first endpoint pair, interior pairs left to right, last endpoint
/// pair. Steep lines are traversed along y and reflected back.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
#[must_use]
pub fn wu(p1: Point, p2: Point) -> Vec<Pixel> {
    let (mut x0, mut y0, mut x1, mut y1) = (p1.x, p1.y, p2.x, p2.y);

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    let plot = |points: &mut Vec<Pixel>, major: i64, minor: i64, intensity: f64| {
        let (x, y) = if steep { (minor, major) } else { (major, minor) };
        points.push(Pixel::new(x as f64, y as f64, intensity));
    };

    let mut points = Vec::new();

    // First endpoint
    let xend = round_half_up(x0);
    let yend = y0 + gradient * (xend as f64 - x0);
    let xgap = complement_fraction(x0 + 0.5);
    let xpxl1 = xend;
    let ypxl1 = floor_to_int(yend);
    plot(&mut points, xpxl1, ypxl1, complement_fraction(yend) * xgap);
    plot(&mut points, xpxl1, ypxl1 + 1, fractional_part(yend) * xgap);

    let mut intery = yend + gradient;

    // Second endpoint, emitted after the interior
    let xend = round_half_up(x1);
    let yend2 = y1 + gradient * (xend as f64 - x1);
    let xgap2 = fractional_part(x1 + 0.5);
    let xpxl2 = xend;
    let ypxl2 = floor_to_int(yend2);

    for x in (xpxl1 + 1)..xpxl2 {
        let ipart = floor_to_int(intery);
        plot(&mut points, x, ipart, complement_fraction(intery));
        plot(&mut points, x, ipart + 1, fractional_part(intery));
        intery += gradient;
    }

    plot(&mut points, xpxl2, ypxl2, complement_fraction(yend2) * xgap2);
    plot(&mut points, xpxl2, ypxl2 + 1, fractional_part(yend2) * xgap2);

    points
}
