//! Conic rasterization.
//!
//! Every curve is defined by a center (or vertex) and a control point that
//! sets its radius or semi-axes. Output samples are fully covered; there is
//! no antialiasing for conics.

use std::collections::BTreeSet;

use crate::config::KernelConfig;
use crate::geometry::{Pixel, Point};
use crate::scalar::round_half_up;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sweep length used by open curves when the control point gives no extent.
pub const DEFAULT_OPEN_CURVE_EXTENT: f64 = 100.0;

/// Second-order curve family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConicKind {
    /// Circle through the control point.
    Circle,
    /// Axis-aligned ellipse with semi-axes `|dx|`, `|dy|`.
    Ellipse,
    /// Horizontal hyperbola, both branches.
    Hyperbola,
    /// Upward-opening parabola with the center as vertex.
    Parabola,
}

impl ConicKind {
    /// All conic kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::Circle, Self::Ellipse, Self::Hyperbola, Self::Parabola];

    /// Rasterize this conic.
    #[must_use]
    pub fn rasterize(self, center: Point, control: Point, config: &KernelConfig) -> Vec<Pixel> {
        match self {
            Self::Circle => circle(center, control),
            Self::Ellipse => ellipse(center, control),
            Self::Hyperbola => hyperbola(center, control, config.hyperbola_extent),
            Self::Parabola => parabola(center, control, config.parabola_extent),
        }
    }
}

/// Bresenham circle through `edge`.
///
/// One octant is generated incrementally and reflected into the other seven.
/// Reflections that coincide on octant boundaries are emitted once; output is
/// sorted by (x, y).
#[must_use]
pub fn circle(center: Point, edge: Point) -> Vec<Pixel> {
    let r = round_half_up(center.distance(edge));

    // Offsets are integers, so an ordered set both deduplicates and gives
    // the final (x, y) order: translation by the center is monotonic.
    let mut offsets: BTreeSet<(i64, i64)> = BTreeSet::new();
    let mut x = 0i64;
    let mut y = r;
    let mut d = 3 - 2 * r;

    while x <= y {
        offsets.extend([
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
        ]);
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }

    offsets
        .into_iter()
        .map(|(dx, dy)| Pixel::solid(center.x + dx as f64, center.y + dy as f64))
        .collect()
}

/// Midpoint ellipse with semi-axes `|dx|` and `|dy|`.
///
/// Region 1 covers the part of the quadrant where the slope magnitude is
/// below 1, region 2 the rest. Each generated point is mirrored into four
/// quadrants. A zero semi-axis is clamped to 1.
#[must_use]
pub fn ellipse(center: Point, control: Point) -> Vec<Pixel> {
    let a = clamp_axis(round_half_up((control.x - center.x).abs()) as f64, "a");
    let b = clamp_axis(round_half_up((control.y - center.y).abs()) as f64, "b");
    let (a2, b2) = (a * a, b * b);

    let mut points = Vec::new();
    let mut push_quadrants = |x: f64, y: f64| {
        points.extend([
            Pixel::solid(center.x + x, center.y + y),
            Pixel::solid(center.x - x, center.y + y),
            Pixel::solid(center.x + x, center.y - y),
            Pixel::solid(center.x - x, center.y - y),
        ]);
    };

    let mut x = 0.0;
    let mut y = b;
    let mut d1 = b2 - a2 * b + 0.25 * a2;
    let mut dx = 2.0 * b2 * x;
    let mut dy = 2.0 * a2 * y;

    // Region 1
    while dx < dy {
        push_quadrants(x, y);
        x += 1.0;
        dx += 2.0 * b2;
        if d1 < 0.0 {
            d1 += dx + b2;
        } else {
            y -= 1.0;
            dy -= 2.0 * a2;
            d1 += dx - dy + b2;
        }
    }

    // Region 2
    let mut d2 = b2 * (x + 0.5) * (x + 0.5) + a2 * (y - 1.0) * (y - 1.0) - a2 * b2;
    while y >= 0.0 {
        push_quadrants(x, y);
        y -= 1.0;
        dy -= 2.0 * a2;
        if d2 > 0.0 {
            d2 += a2 - dy;
        } else {
            x += 1.0;
            dx += 2.0 * b2;
            d2 += dx - dy + a2;
        }
    }

    points
}

/// Hyperbola `((x - cx) / a)^2 - ((y - cy) / b)^2 = 1`, both branches.
///
/// The right branch is swept over integer x from the vertex to the control
/// point, or to `extent` past the vertex when the control point does not lie
/// beyond it. Columns with a negative radicand are skipped. The left branch
/// is the mirror image across `x = cx`. Output is sorted by (x, y).
#[must_use]
pub fn hyperbola(center: Point, control: Point, extent: f64) -> Vec<Pixel> {
    let a = clamp_axis((control.x - center.x).abs(), "a");
    let b = clamp_axis((control.y - center.y).abs(), "b");

    let x_start = center.x + a;
    let x_end = if control.x > x_start {
        control.x
    } else {
        x_start + extent
    };

    let mut branch = Vec::new();
    for x in round_half_up(x_start)..=round_half_up(x_end) {
        let x = x as f64;
        let u = (x - center.x) / a;
        let radicand = u * u - 1.0;
        if radicand < 0.0 {
            continue;
        }
        let y_offset = b * radicand.sqrt();
        branch.push(Pixel::solid(x, center.y + y_offset));
        branch.push(Pixel::solid(x, center.y - y_offset));
    }

    let mirrored: Vec<Pixel> = branch
        .iter()
        .map(|p| Pixel::solid(2.0 * center.x - p.x, p.y))
        .collect();
    branch.extend(mirrored);
    branch.sort_by(|p, q| p.position().lex_cmp(&q.position()));
    branch
}

/// Upward-opening parabola `(x - cx)^2 = 4a (y - cy)` with vertex `center`.
///
/// When the control point lies above the vertex the shape parameter passes
/// through it and the sweep ends at its row; otherwise `a = 1` and the sweep
/// covers `extent` rows. Rows with a negative radicand are skipped.
#[must_use]
pub fn parabola(center: Point, control: Point, extent: f64) -> Vec<Pixel> {
    let (a, y_end) = if control.y <= center.y {
        (1.0, center.y + extent)
    } else {
        let dx = control.x - center.x;
        (dx * dx / (4.0 * (control.y - center.y)), control.y)
    };

    let mut points = Vec::new();
    for y in round_half_up(center.y)..=round_half_up(y_end) {
        let y = y as f64;
        let radicand = 4.0 * a * (y - center.y);
        if radicand < 0.0 {
            continue;
        }
        let offset = radicand.sqrt();
        points.push(Pixel::solid(center.x + offset, y));
        points.push(Pixel::solid(center.x - offset, y));
    }
    points
}

fn clamp_axis(value: f64, axis: &'static str) -> f64 {
    if value == 0.0 {
        tracing::debug!(axis, "zero semi-axis clamped to 1");
        1.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    fn cells(pixels: &[Pixel]) -> HashSet<(i64, i64)> {
        pixels.iter().map(|p| (p.x as i64, p.y as i64)).collect()
    }

    #[test]
    fn test_circle_radius_zero_is_center() {
        let pixels = circle(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert_eq!(pixels, vec![Pixel::solid(5.0, 5.0)]);
    }

    #[test]
    fn test_circle_radius_one() {
        let pixels = circle(Point::ORIGIN, Point::new(1.0, 0.0));
        let expected: HashSet<(i64, i64)> =
            [(0, 1), (0, -1), (1, 0), (-1, 0)].into_iter().collect();
        assert_eq!(cells(&pixels), expected);
    }

    #[test]
    fn test_circle_has_no_duplicates_and_is_sorted() {
        let pixels = circle(Point::new(20.0, 20.0), Point::new(32.0, 25.0));
        let unique = cells(&pixels);
        assert_eq!(unique.len(), pixels.len());
        assert!(pixels
            .windows(2)
            .all(|w| w[0].position().lex_cmp(&w[1].position()).is_lt()));
    }

    #[test]
    fn test_circle_eightfold_symmetry() {
        let center = Point::new(50.0, 40.0);
        let pixels = circle(center, Point::new(50.0, 57.0));
        let set = cells(&pixels);
        for &(x, y) in &set {
            let (dx, dy) = (x - 50, y - 40);
            for (sx, sy) in [(dx, dy), (-dx, dy), (dx, -dy), (-dx, -dy)] {
                assert!(set.contains(&(50 + sx, 40 + sy)));
                assert!(set.contains(&(50 + sy, 40 + sx)));
            }
        }
    }

    #[test]
    fn test_circle_radius_rounds_half_up() {
        // distance 2.5 rounds to 3
        let pixels = circle(Point::ORIGIN, Point::new(1.5, 2.0));
        assert!(cells(&pixels).contains(&(3, 0)));
    }

    #[test]
    fn test_ellipse_extremes() {
        let pixels = ellipse(Point::new(0.0, 0.0), Point::new(8.0, 3.0));
        let set = cells(&pixels);
        assert!(set.contains(&(0, 3)));
        assert!(set.contains(&(0, -3)));
        assert!(set.contains(&(8, 0)));
        assert!(set.contains(&(-8, 0)));
        assert!(pixels.iter().all(|p| p.x.abs() <= 8.0 && p.y.abs() <= 3.0));
    }

    #[test]
    fn test_ellipse_quadrant_groups() {
        let pixels = ellipse(Point::new(10.0, 10.0), Point::new(15.0, 12.0));
        assert_eq!(pixels.len() % 4, 0);
        for group in pixels.chunks(4) {
            assert_eq!(group[0].x - 10.0, 10.0 - group[1].x);
            assert_eq!(group[0].y - 10.0, 10.0 - group[2].y);
            assert_eq!(group[3].x, group[1].x);
            assert_eq!(group[3].y, group[2].y);
        }
    }

    #[test]
    fn test_ellipse_zero_axis_clamped() {
        let pixels = ellipse(Point::ORIGIN, Point::new(4.0, 0.0));
        assert!(!pixels.is_empty());
        assert!(pixels.iter().all(|p| p.y.abs() <= 1.0));
        assert!(cells(&pixels).contains(&(0, 1)));
    }

    #[test]
    fn test_hyperbola_satisfies_equation() {
        let center = Point::new(0.0, 0.0);
        let pixels = hyperbola(center, Point::new(4.0, 3.0), DEFAULT_OPEN_CURVE_EXTENT);
        assert!(!pixels.is_empty());
        for p in &pixels {
            let lhs = (p.x / 4.0).powi(2) - (p.y / 3.0).powi(2);
            assert_abs_diff_eq!(lhs, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hyperbola_mirrored_and_sorted() {
        let center = Point::new(100.0, 50.0);
        let pixels = hyperbola(center, Point::new(110.0, 55.0), 20.0);
        let right = pixels.iter().filter(|p| p.x > center.x).count();
        let left = pixels.iter().filter(|p| p.x < center.x).count();
        assert_eq!(left, right);
        // vertex to vertex + extent: x in 110..=130, two samples per column
        assert_eq!(right, 2 * 21);
        assert!(pixels
            .windows(2)
            .all(|w| !w[0].position().lex_cmp(&w[1].position()).is_gt()));
    }

    #[test]
    fn test_hyperbola_zero_axis_sweeps_extent() {
        // dx = 0 clamps a to 1, so the vertex sits at x = 1.
        let pixels = hyperbola(Point::ORIGIN, Point::new(0.0, 2.0), 5.0);
        let max_x = pixels.iter().map(|p| p.x).fold(f64::MIN, f64::max);
        assert_abs_diff_eq!(max_x, 6.0);
    }

    #[test]
    fn test_parabola_default_shape() {
        let pixels = parabola(Point::new(0.0, 0.0), Point::new(3.0, -2.0), 100.0);
        // y in 0..=100, two samples per row
        assert_eq!(pixels.len(), 2 * 101);
        assert_eq!(pixels[0], Pixel::solid(0.0, 0.0));
        assert_eq!(pixels[1], Pixel::solid(0.0, 0.0));
        // a = 1: offset at y = 25 is sqrt(100) = 10
        assert_abs_diff_eq!(pixels[50].x, 10.0);
        assert_abs_diff_eq!(pixels[51].x, -10.0);
    }

    #[test]
    fn test_parabola_passes_through_control() {
        let pixels = parabola(Point::new(10.0, 10.0), Point::new(16.0, 19.0), 100.0);
        let last = pixels[pixels.len() - 2];
        assert_abs_diff_eq!(last.x, 16.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.y, 19.0);
    }

    #[test]
    fn test_parabola_skips_negative_radicand() {
        // Vertex at y = 0.4 rounds the first row to 0, which lies below it.
        let pixels = parabola(Point::new(0.0, 0.4), Point::new(0.0, -1.0), 2.0);
        assert!(pixels.iter().all(|p| p.y >= 0.4));
        assert!(pixels.iter().all(|p| p.x.is_finite()));
    }

    #[test]
    fn test_dispatch_uses_config_extent() {
        let config = KernelConfig::default();
        let via_kind =
            ConicKind::Parabola.rasterize(Point::ORIGIN, Point::new(1.0, -1.0), &config);
        let direct = parabola(Point::ORIGIN, Point::new(1.0, -1.0), DEFAULT_OPEN_CURVE_EXTENT);
        assert_eq!(via_kind, direct);
    }
}
