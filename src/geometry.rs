//! Geometric primitives consumed and produced by the kernel.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to another point.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Midpoint between two points.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Vector from `self` to `other`.
    #[must_use]
    pub fn to(self, other: Self) -> Vector {
        Vector::new(other.x - self.x, other.y - self.y)
    }

    /// Translate by `v` scaled by `t`.
    #[must_use]
    pub fn offset(self, v: Vector, t: f64) -> Self {
        Self::new(self.x + v.x * t, self.y + v.y * t)
    }

    /// Lexicographic order on (x, y) using IEEE total ordering.
    #[must_use]
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    /// Mean of a set of points, `None` when empty.
    #[must_use]
    pub fn centroid(points: &[Self]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Self::new(sx / n, sy / n))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D direction vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 2D cross product (z component of the 3D cross product).
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Negated vector.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A rasterized sample: position plus coverage.
///
/// Integer algorithms emit integral coordinates. DDA, hyperbola and parabola
/// keep sub-pixel positions; the renderer truncates them with [`Pixel::cell`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pixel {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Coverage in `[0, 1]`; 1.0 is fully opaque.
    pub intensity: f64,
}

impl Pixel {
    /// Create a pixel with explicit coverage.
    #[must_use]
    pub const fn new(x: f64, y: f64, intensity: f64) -> Self {
        Self { x, y, intensity }
    }

    /// Create a fully covered pixel.
    #[must_use]
    pub const fn solid(x: f64, y: f64) -> Self {
        Self::new(x, y, 1.0)
    }

    /// Integer cell this sample lands in (truncation toward zero).
    #[must_use]
    pub fn cell(&self) -> (i64, i64) {
        (self.x.trunc() as i64, self.y.trunc() as i64)
    }

    /// Position without coverage.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {:.2} {:.2}", self.x, self.y, self.intensity)
    }
}

/// Axis-aligned integer bounds, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    /// Minimum x.
    pub min_x: i64,
    /// Minimum y.
    pub min_y: i64,
    /// Maximum x.
    pub max_x: i64,
    /// Maximum y.
    pub max_y: i64,
}

impl BoundingBox {
    /// Truncated bounds of a point set, `None` when empty.
    #[must_use]
    pub fn of_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = (first.x, first.y, first.x, first.y);
        let (min_x, min_y, max_x, max_y) =
            points.iter().fold(init, |(x0, y0, x1, y1), p| {
                (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y))
            });
        Some(Self {
            min_x: min_x.trunc() as i64,
            min_y: min_y.trunc() as i64,
            max_x: max_x.trunc() as i64,
            max_y: max_y.trunc() as i64,
        })
    }

    /// Check if an integer cell lies within the bounds.
    #[must_use]
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_abs_diff_eq!(p1.distance(p2), 5.0);
        assert_abs_diff_eq!(p1.distance_squared(p2), 25.0);
    }

    #[test]
    fn test_point_lex_cmp() {
        let a = Point::new(1.0, 5.0);
        let b = Point::new(1.0, 6.0);
        let c = Point::new(0.0, 9.0);
        assert_eq!(a.lex_cmp(&b), Ordering::Less);
        assert_eq!(c.lex_cmp(&a), Ordering::Less);
        assert_eq!(a.lex_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_centroid() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert_eq!(Point::centroid(&square), Some(Point::new(5.0, 5.0)));
        assert_eq!(Point::centroid(&[]), None);
    }

    #[test]
    fn test_vector_cross_and_perp() {
        let v = Vector::new(1.0, 0.0);
        assert_abs_diff_eq!(v.cross(Vector::new(0.0, 1.0)), 1.0);
        assert_eq!(v.perp(), Vector::new(0.0, 1.0));
        assert_eq!(v.perp().reversed(), Vector::new(0.0, -1.0));
    }

    #[test]
    fn test_line_length() {
        let line = Line::from_coords(0.0, 0.0, 3.0, 4.0);
        assert_abs_diff_eq!(line.length(), 5.0);
    }

    #[test]
    fn test_pixel_cell_truncates() {
        assert_eq!(Pixel::solid(2.9, 3.1).cell(), (2, 3));
        assert_eq!(Pixel::solid(-0.5, 0.0).cell(), (0, 0));
    }

    #[test]
    fn test_pixel_display() {
        let p = Pixel::new(1.0, 2.5, 0.25);
        assert_eq!(p.to_string(), "1.00 2.50 0.25");
    }

    #[test]
    fn test_bounding_box() {
        let pts = [Point::new(1.5, 2.0), Point::new(7.9, -3.2)];
        let bbox = BoundingBox::of_points(&pts).unwrap();
        assert_eq!(bbox.min_x, 1);
        assert_eq!(bbox.max_x, 7);
        assert_eq!(bbox.min_y, -3);
        assert_eq!(bbox.max_y, 2);
        assert!(bbox.contains(4, 0));
        assert!(!bbox.contains(8, 0));
        assert!(BoundingBox::of_points(&[]).is_none());
    }
}
