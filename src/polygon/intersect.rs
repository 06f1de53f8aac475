//! Segment and line/polygon intersection.

use super::predicates::edges;
use crate::geometry::{Line, Point};

/// Intersection of segments `p`-`q` and `r`-`s`.
///
/// Solves `p + t (q - p) = r + u (s - r)`. When the determinant magnitude is
/// below `tolerance` the segments are treated as parallel and `None` is
/// returned, including for overlapping collinear segments. Otherwise a hit
/// requires both `t` and `u` in `[0, 1]`.
#[must_use]
pub fn segment_intersection(
    p: Point,
    q: Point,
    r: Point,
    s: Point,
    tolerance: f64,
) -> Option<Point> {
    let d1 = p.to(q);
    let d2 = r.to(s);
    let denom = d1.cross(d2);
    if denom.abs() < tolerance {
        return None;
    }

    let diff = p.to(r);
    let t = diff.cross(d2) / denom;
    let u = diff.cross(d1) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(p.offset(d1, t))
    } else {
        None
    }
}

/// Every crossing of `line` with the polygon's edges, in edge order.
///
/// A crossing through a shared vertex is reported once per edge it touches.
#[must_use]
pub fn line_polygon_intersections(line: Line, polygon: &[Point], tolerance: f64) -> Vec<Point> {
    edges(polygon)
        .filter_map(|(a, b)| segment_intersection(line.start, line.end, a, b, tolerance))
        .collect()
}
