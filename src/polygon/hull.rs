//! Convex hulls.
//!
//! Both methods drop collinear points on the hull boundary, so for the same
//! input they return the same vertex set (in different rotational order).

use super::predicates::orientation;
use crate::geometry::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convex hull construction method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HullMethod {
    /// Monotone-chain Graham scan, O(n log n).
    Graham,
    /// Jarvis march (gift wrapping), O(nh).
    Jarvis,
}

impl HullMethod {
    /// Build the hull of `points` with this method.
    #[must_use]
    pub fn hull(self, points: &[Point]) -> Vec<Point> {
        match self {
            Self::Graham => convex_hull_graham(points),
            Self::Jarvis => convex_hull_jarvis(points),
        }
    }
}

/// Graham scan over lexicographically sorted points.
///
/// Lower and upper chains are built separately, popping while the last turn
/// is not strictly counter-clockwise. Result is counter-clockwise (y up),
/// starting at the lexicographically smallest point. Fewer than three points
/// are returned unchanged.
#[must_use]
pub fn convex_hull_graham(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(Point::lex_cmp);

    let lower = monotone_chain(sorted.iter());
    let upper = monotone_chain(sorted.iter().rev());

    let mut hull = Vec::with_capacity(lower.len() + upper.len());
    hull.extend_from_slice(&lower[..lower.len() - 1]);
    hull.extend_from_slice(&upper[..upper.len() - 1]);
    hull
}

fn monotone_chain<'a>(points: impl Iterator<Item = &'a Point>) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::new();
    for &p in points {
        while let [.., a, b] = chain[..] {
            if orientation(a, b, p) > 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// Jarvis march from the lexicographically smallest point.
///
/// At each step the candidate is replaced by any point lying clockwise of it
/// as seen from the current hull point; collinear ties go to the farther
/// point. Fewer than three points are returned unchanged.
#[must_use]
pub fn convex_hull_jarvis(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let Some(&start) = points.iter().min_by(|a, b| a.lex_cmp(b)) else {
        return Vec::new();
    };

    let mut hull = Vec::new();
    let mut current = start;
    loop {
        hull.push(current);

        let mut candidate: Option<Point> = None;
        for &r in points {
            if r == current {
                continue;
            }
            candidate = Some(match candidate {
                None => r,
                Some(c) => {
                    let turn = orientation(current, c, r);
                    if turn < 0.0
                        || (turn == 0.0
                            && current.distance_squared(r) > current.distance_squared(c))
                    {
                        r
                    } else {
                        c
                    }
                }
            });
        }

        // All points coincide with `current`.
        let Some(next) = candidate else {
            break;
        };
        if next == start {
            break;
        }
        if hull.len() >= points.len() {
            tracing::warn!(points = points.len(), "jarvis march did not close; stopping");
            break;
        }
        current = next;
    }
    hull
}
