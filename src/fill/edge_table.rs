//! Scanline fills driven by polygon edges.
//!
//! [`OrderedEdgeFill`] walks the polygon's edges on every row;
//! [`ActiveEdgeFill`] builds an edge table once and keeps only the edges
//! crossing the current row. Both evaluate intercepts through [`Edge::x_at`],
//! so for the same polygon they emit the same spans in the same order.

use std::collections::VecDeque;

use super::FillAction;
use crate::geometry::Point;
use crate::polygon::edges;
use crate::scalar::floor_to_int;

/// Edge table record for a non-horizontal polygon edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Lower y of the edge.
    pub y_min: f64,
    /// Upper y of the edge (exclusive for scanline coverage).
    pub y_max: f64,
    /// X coordinate at `y_min`.
    pub x_at_y_min: f64,
    /// Change in x per unit of y.
    pub inverse_slope: f64,
    run: f64,
    rise: f64,
}

impl Edge {
    /// Build a record from an edge, `None` for horizontal edges.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Option<Self> {
        if a.y == b.y {
            return None;
        }
        let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
        let (run, rise) = (hi.x - lo.x, hi.y - lo.y);
        Some(Self {
            y_min: lo.y,
            y_max: hi.y,
            x_at_y_min: lo.x,
            inverse_slope: run / rise,
            run,
            rise,
        })
    }

    /// First integer scanline the edge covers.
    #[must_use]
    pub fn first_row(&self) -> i64 {
        self.y_min.ceil() as i64
    }

    /// First integer scanline past the edge.
    #[must_use]
    pub fn end_row(&self) -> i64 {
        self.y_max.ceil() as i64
    }

    /// Whether the half-open span `[y_min, y_max)` contains `y`.
    #[must_use]
    pub fn covers(&self, y: f64) -> bool {
        y >= self.y_min && y < self.y_max
    }

    /// X coordinate where the edge meets scanline `y`.
    ///
    /// Evaluated from the edge endpoints on every call, never accumulated.
    /// Multiplying before dividing keeps the result exact whenever the true
    /// intercept is an integer and the operands are integers below 2^53.
    #[must_use]
    pub fn x_at(&self, y: f64) -> f64 {
        self.x_at_y_min + (y - self.y_min) * self.run / self.rise
    }
}

/// Edge table of a polygon, sorted by first covered scanline.
///
/// Horizontal edges contribute no crossing and are left out. The sort is
/// stable so edges sharing a row keep polygon order.
#[must_use]
pub fn edge_table(polygon: &[Point]) -> Vec<Edge> {
    let mut table: Vec<Edge> = edges(polygon).filter_map(|(a, b)| Edge::new(a, b)).collect();
    table.sort_by_key(Edge::first_row);
    table
}

/// Pair sorted crossings into spans, dropping a trailing odd crossing.
///
/// Span ends are truncated toward zero.
fn push_spans(pending: &mut VecDeque<FillAction>, crossings: impl Iterator<Item = f64>, y: i64) {
    let crossings: Vec<f64> = crossings.collect();
    for pair in crossings.chunks_exact(2) {
        pending.push_back(FillAction::Span {
            x_start: pair[0].trunc() as i64,
            x_end: pair[1].trunc() as i64,
            y,
        });
    }
}

/// Ordered-edge-list scanline fill.
///
/// For every row from `floor(min y)` to `floor(max y)` inclusive, each
/// non-horizontal edge whose half-open span `[y_lo, y_hi)` covers the row
/// contributes one crossing. Crossings are sorted and filled pairwise.
#[derive(Debug, Clone)]
pub struct OrderedEdgeFill<'a> {
    polygon: &'a [Point],
    y: i64,
    max_y: i64,
    pending: VecDeque<FillAction>,
}

impl<'a> OrderedEdgeFill<'a> {
    /// Start a fill over `polygon`.
    #[must_use]
    pub fn new(polygon: &'a [Point]) -> Self {
        let (min_y, max_y) = polygon
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        let (y, max_y) = if polygon.is_empty() {
            (0, -1)
        } else {
            (floor_to_int(min_y), floor_to_int(max_y))
        };
        Self {
            polygon,
            y,
            max_y,
            pending: VecDeque::new(),
        }
    }

    fn scan_row(&mut self) {
        let y = self.y as f64;
        let mut crossings: Vec<f64> = edges(self.polygon)
            .filter_map(|(a, b)| Edge::new(a, b))
            .filter(|edge| edge.covers(y))
            .map(|edge| edge.x_at(y))
            .collect();
        crossings.sort_by(f64::total_cmp);
        push_spans(&mut self.pending, crossings.into_iter(), self.y);
    }
}

impl Iterator for OrderedEdgeFill<'_> {
    type Item = FillAction;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(action) = self.pending.pop_front() {
                return Some(action);
            }
            if self.y > self.max_y {
                return None;
            }
            self.scan_row();
            self.y += 1;
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveEdge {
    edge: Edge,
    end_row: i64,
    x: f64,
}

/// Active-edge-list scanline fill.
///
/// The edge table is built once. Each row admits edges starting on it and
/// evicts edges that have ended. Every active x is then set to the edge's
/// intercept with the row before the list is sorted and filled pairwise.
#[derive(Debug, Clone)]
pub struct ActiveEdgeFill {
    table: Vec<Edge>,
    next_edge: usize,
    active: Vec<ActiveEdge>,
    y: i64,
    max_y: i64,
    pending: VecDeque<FillAction>,
}

impl ActiveEdgeFill {
    /// Start a fill over `polygon`.
    #[must_use]
    pub fn new(polygon: &[Point]) -> Self {
        let table = edge_table(polygon);
        let y = table.first().map_or(0, Edge::first_row);
        let max_y = table.iter().map(Edge::end_row).max().unwrap_or(y);
        Self {
            table,
            next_edge: 0,
            active: Vec::new(),
            y,
            max_y,
            pending: VecDeque::new(),
        }
    }

    /// The edge table this fill sweeps.
    #[must_use]
    pub fn table(&self) -> &[Edge] {
        &self.table
    }

    fn scan_row(&mut self) {
        let y = self.y;

        while let Some(edge) = self.table.get(self.next_edge) {
            if edge.first_row() != y {
                break;
            }
            self.active.push(ActiveEdge {
                edge: *edge,
                end_row: edge.end_row(),
                x: 0.0,
            });
            self.next_edge += 1;
        }

        self.active.retain(|e| e.end_row > y);
        for active in &mut self.active {
            active.x = active.edge.x_at(y as f64);
        }
        self.active.sort_by(|a, b| a.x.total_cmp(&b.x));

        push_spans(&mut self.pending, self.active.iter().map(|e| e.x), y);
    }
}

impl Iterator for ActiveEdgeFill {
    type Item = FillAction;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(action) = self.pending.pop_front() {
                return Some(action);
            }
            if self.y >= self.max_y {
                return None;
            }
            self.scan_row();
            self.y += 1;
        }
    }
}
