//! Seed (flood) fills bounded by polygon containment.
//!
//! A cell `(x, y)` is fillable when the point `(x, y)` passes the even-odd
//! containment test and the cell has not been visited. Both fills stay inside
//! the polygon's truncated bounding box.

use std::collections::HashSet;

use super::FillAction;
use crate::geometry::{BoundingBox, Point};
use crate::polygon::point_in_polygon;

/// Containment and bookkeeping shared by both seed fills.
#[derive(Debug, Clone)]
struct Region<'a> {
    polygon: &'a [Point],
    bounds: BoundingBox,
    visited: HashSet<(i64, i64)>,
}

impl<'a> Region<'a> {
    fn new(polygon: &'a [Point]) -> Self {
        Self {
            polygon,
            bounds: BoundingBox::of_points(polygon).unwrap_or_default(),
            visited: HashSet::new(),
        }
    }

    fn inside(&self, x: i64, y: i64) -> bool {
        point_in_polygon(Point::new(x as f64, y as f64), self.polygon)
    }

    fn fillable(&self, x: i64, y: i64) -> bool {
        self.bounds.contains(x, y) && !self.visited.contains(&(x, y)) && self.inside(x, y)
    }
}

/// Stack-based 4-connected seed fill, one pixel per action.
///
/// Neighbors are pushed in the order `x+1`, `x-1`, `y+1`, `y-1`, so the
/// emission order is a depth-first walk that prefers `y-1`.
#[derive(Debug, Clone)]
pub struct SimpleSeedFill<'a> {
    region: Region<'a>,
    stack: Vec<(i64, i64)>,
}

impl<'a> SimpleSeedFill<'a> {
    /// Start a fill from `seed` inside `polygon`.
    #[must_use]
    pub fn new(polygon: &'a [Point], seed: (i64, i64)) -> Self {
        Self {
            region: Region::new(polygon),
            stack: vec![seed],
        }
    }
}

impl Iterator for SimpleSeedFill<'_> {
    type Item = FillAction;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((x, y)) = self.stack.pop() {
            if !self.region.visited.insert((x, y)) || !self.region.inside(x, y) {
                continue;
            }
            for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
                if self.region.bounds.contains(nx, ny) {
                    self.stack.push((nx, ny));
                }
            }
            return Some(FillAction::Pixel { x, y });
        }
        None
    }
}

/// Scanline seed fill, one span per action.
///
/// A popped seed is extended left and right while cells stay inside, the run
/// is emitted and marked visited, and every fillable cell of the run's
/// columns on the rows above and below is pushed as a new seed.
#[derive(Debug, Clone)]
pub struct ScanlineSeedFill<'a> {
    region: Region<'a>,
    stack: Vec<(i64, i64)>,
}

impl<'a> ScanlineSeedFill<'a> {
    /// Start a fill from `seed` inside `polygon`.
    #[must_use]
    pub fn new(polygon: &'a [Point], seed: (i64, i64)) -> Self {
        Self {
            region: Region::new(polygon),
            stack: vec![seed],
        }
    }
}

impl Iterator for ScanlineSeedFill<'_> {
    type Item = FillAction;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((x, y)) = self.stack.pop() {
            if !self.region.fillable(x, y) {
                continue;
            }

            let mut left = x;
            while self.region.fillable(left - 1, y) {
                left -= 1;
            }
            let mut right = x;
            while self.region.fillable(right + 1, y) {
                right += 1;
            }

            self.region.visited.extend((left..=right).map(|cx| (cx, y)));

            for ny in [y - 1, y + 1] {
                for nx in left..=right {
                    if self.region.fillable(nx, ny) {
                        self.stack.push((nx, ny));
                    }
                }
            }

            return Some(FillAction::Span {
                x_start: left,
                x_end: right + 1,
                y,
            });
        }
        None
    }
}
