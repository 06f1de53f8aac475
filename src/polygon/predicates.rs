//! Orientation, convexity, containment and edge normals.

use crate::geometry::{Point, Vector};

/// Twice the signed area of triangle `(o, a, b)`.
///
/// Positive for a counter-clockwise turn (y up), negative for clockwise,
/// zero when collinear.
#[inline]
#[must_use]
pub fn orientation(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Iterate the edges of a closed polygon as `(start, end)` pairs.
pub fn edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon[i], polygon[(i + 1) % n]))
}

/// Check whether a polygon is convex.
///
/// Every consecutive vertex triple must turn the same way; collinear triples
/// are ignored. Works for either winding. Fewer than three vertices is never
/// convex.
#[must_use]
pub fn is_convex(polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut positive = false;
    let mut negative = false;
    for i in 0..n {
        let turn = orientation(polygon[i], polygon[(i + 1) % n], polygon[(i + 2) % n]);
        if turn > 0.0 {
            positive = true;
        } else if turn < 0.0 {
            negative = true;
        }
        if positive && negative {
            return false;
        }
    }
    true
}

/// Even-odd ray casting toward +x.
///
/// An edge counts when it straddles the ray's row (`y1 > y` differs from
/// `y2 > y`) and the point lies strictly left of its intercept. Points
/// exactly on the boundary get whatever this half-open test yields.
#[must_use]
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    let mut inside = false;
    for (a, b) in edges(polygon) {
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Inward normal of every edge, in edge order.
///
/// The counter-clockwise perpendicular of the edge is probed at
/// `midpoint + normal * probe_offset`; if that probe is inside the polygon it
/// is the inward normal, otherwise its opposite is. Normals keep the edge's
/// length (they are not unit vectors), so the probe distance scales with it.
#[must_use]
pub fn inward_normals(polygon: &[Point], probe_offset: f64) -> Vec<Vector> {
    edges(polygon)
        .map(|(a, b)| {
            let candidate = a.to(b).perp();
            let probe = a.midpoint(b).offset(candidate, probe_offset);
            if point_in_polygon(probe, polygon) {
                candidate
            } else {
                candidate.reversed()
            }
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// The vertex centroid of a convex polygon is always inside it.
        #[test]
        fn prop_centroid_inside_convex(
            n in 3usize..16,
            radius in 5.0f64..500.0,
            phase in 0.0f64..1.0,
            cx in -100.0f64..100.0,
            cy in -100.0f64..100.0
        ) {
            let poly: Vec<Point> = (0..n)
                .map(|i| {
                    let t = std::f64::consts::TAU * (i as f64 + phase) / n as f64;
                    Point::new(cx + radius * t.cos(), cy + radius * t.sin())
                })
                .collect();
            let centroid = Point::centroid(&poly).unwrap_or_default();
            prop_assert!(is_convex(&poly));
            prop_assert!(point_in_polygon(centroid, &poly));
        }
    }
}
