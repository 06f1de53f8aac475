//! Polygon fill engine.
//!
//! Four methods produce a sequence of [`FillAction`]s for a polygon. Scanline
//! methods emit spans; the simple seed fill emits single pixels. Every method
//! is available both immediately ([`fill_polygon`]) and as a lazy,
//! restartable sequence ([`FillPlan::actions`]) that yields the same actions
//! in the same order, one per step.
//!
//! # Example
//!
//! ```
//! use trueno_raster::fill::{FillAction, FillMethod, FillPlan};
//! use trueno_raster::geometry::Point;
//!
//! let square = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ];
//! let plan = FillPlan::new(FillMethod::ActiveEdge, &square, None).unwrap();
//! let mut steps = plan.actions();
//! assert_eq!(steps.next(), Some(FillAction::Span { x_start: 0, x_end: 10, y: 0 }));
//! ```

pub mod edge_table;
pub mod seed;

pub use edge_table::{edge_table, ActiveEdgeFill, Edge, OrderedEdgeFill};
pub use seed::{ScanlineSeedFill, SimpleSeedFill};

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One unit of fill output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FillAction {
    /// Horizontal run on row `y` covering columns `x_start..x_end`.
    ///
    /// Drawn like a line from `x_start` to `x_end` whose end pixel is not
    /// painted.
    Span {
        /// First column.
        x_start: i64,
        /// Column past the last painted one.
        x_end: i64,
        /// Row.
        y: i64,
    },
    /// Single cell.
    Pixel {
        /// Column.
        x: i64,
        /// Row.
        y: i64,
    },
}

impl FillAction {
    /// Row this action paints.
    #[must_use]
    pub const fn row(&self) -> i64 {
        match *self {
            Self::Span { y, .. } | Self::Pixel { y, .. } => y,
        }
    }

    /// Number of cells painted.
    #[must_use]
    pub fn len(&self) -> usize {
        match *self {
            Self::Span { x_start, x_end, .. } => usize::try_from(x_end - x_start).unwrap_or(0),
            Self::Pixel { .. } => 1,
        }
    }

    /// True for a span that paints nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells painted, left to right.
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64)> {
        let (start, end, y) = match *self {
            Self::Span { x_start, x_end, y } => (x_start, x_end, y),
            Self::Pixel { x, y } => (x, x + 1, y),
        };
        (start..end).map(move |x| (x, y))
    }
}

/// Fill algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FillMethod {
    /// Per-row intercepts recomputed from every edge.
    OrderedEdge,
    /// Edge table swept with an active list of crossing edges.
    ActiveEdge,
    /// Stack flood fill, one pixel at a time.
    SimpleSeed,
    /// Flood fill by horizontal runs.
    ScanlineSeed,
}

impl FillMethod {
    /// Every method, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::OrderedEdge,
        Self::ActiveEdge,
        Self::SimpleSeed,
        Self::ScanlineSeed,
    ];

    /// Color a renderer uses for this method unless told otherwise.
    #[must_use]
    pub const fn default_color(self) -> Rgba {
        match self {
            Self::OrderedEdge => Rgba::YELLOW,
            Self::ActiveEdge => Rgba::CYAN,
            Self::SimpleSeed => Rgba::MAGENTA,
            Self::ScanlineSeed => Rgba::ORANGE,
        }
    }

    /// True for the two flood fills.
    #[must_use]
    pub const fn uses_seed(self) -> bool {
        matches!(self, Self::SimpleSeed | Self::ScanlineSeed)
    }
}

/// A validated fill request that can be replayed any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPlan {
    method: FillMethod,
    polygon: Vec<Point>,
    seed: (i64, i64),
}

impl FillPlan {
    /// Validate a fill request.
    ///
    /// The seed defaults to the vertex centroid. Seeds are truncated to a
    /// cell; edge methods ignore them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegeneratePolygon`] for fewer than three vertices.
    pub fn new(method: FillMethod, polygon: &[Point], seed: Option<Point>) -> Result<Self> {
        if polygon.len() < 3 {
            tracing::warn!(vertices = polygon.len(), ?method, "rejecting degenerate polygon");
            return Err(Error::DegeneratePolygon {
                vertices: polygon.len(),
            });
        }
        let seed = match seed {
            Some(p) => p,
            None => Point::centroid(polygon).ok_or(Error::DegeneratePolygon {
                vertices: polygon.len(),
            })?,
        };
        let (x, y) = (seed.x.trunc() as i64, seed.y.trunc() as i64);
        Ok(Self {
            method,
            polygon: polygon.to_vec(),
            seed: (x, y),
        })
    }

    /// Fill method.
    #[must_use]
    pub const fn method(&self) -> FillMethod {
        self.method
    }

    /// Polygon vertices.
    #[must_use]
    pub fn polygon(&self) -> &[Point] {
        &self.polygon
    }

    /// Seed cell used by the flood fills.
    #[must_use]
    pub const fn seed(&self) -> (i64, i64) {
        self.seed
    }

    /// A fresh lazy sequence of this plan's actions.
    #[must_use]
    pub fn actions(&self) -> FillActions<'_> {
        match self.method {
            FillMethod::OrderedEdge => {
                FillActions::OrderedEdge(OrderedEdgeFill::new(&self.polygon))
            }
            FillMethod::ActiveEdge => FillActions::ActiveEdge(ActiveEdgeFill::new(&self.polygon)),
            FillMethod::SimpleSeed => {
                FillActions::SimpleSeed(SimpleSeedFill::new(&self.polygon, self.seed))
            }
            FillMethod::ScanlineSeed => {
                FillActions::ScanlineSeed(ScanlineSeedFill::new(&self.polygon, self.seed))
            }
        }
    }
}

/// Lazy action sequence of a [`FillPlan`].
#[derive(Debug, Clone)]
pub enum FillActions<'a> {
    /// Ordered edge list.
    OrderedEdge(OrderedEdgeFill<'a>),
    /// Active edge list.
    ActiveEdge(ActiveEdgeFill),
    /// Simple seed.
    SimpleSeed(SimpleSeedFill<'a>),
    /// Scanline seed.
    ScanlineSeed(ScanlineSeedFill<'a>),
}

impl Iterator for FillActions<'_> {
    type Item = FillAction;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::OrderedEdge(it) => it.next(),
            Self::ActiveEdge(it) => it.next(),
            Self::SimpleSeed(it) => it.next(),
            Self::ScanlineSeed(it) => it.next(),
        }
    }
}

/// Fill a polygon immediately, returning every action in order.
///
/// # Errors
///
/// Returns [`Error::DegeneratePolygon`] for fewer than three vertices.
pub fn fill_polygon(
    method: FillMethod,
    polygon: &[Point],
    seed: Option<Point>,
) -> Result<Vec<FillAction>> {
    let plan = FillPlan::new(method, polygon, seed)?;
    let actions: Vec<FillAction> = plan.actions().collect();
    tracing::debug!(?method, actions = actions.len(), "polygon filled");
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    fn covered(actions: &[FillAction]) -> BTreeSet<(i64, i64)> {
        actions.iter().flat_map(FillAction::cells).collect()
    }

    #[test]
    fn test_action_cells() {
        let span = FillAction::Span {
            x_start: 2,
            x_end: 5,
            y: 7,
        };
        assert_eq!(span.cells().collect::<Vec<_>>(), vec![(2, 7), (3, 7), (4, 7)]);
        assert_eq!(span.len(), 3);
        assert_eq!(span.row(), 7);

        let pixel = FillAction::Pixel { x: -1, y: 4 };
        assert_eq!(pixel.cells().collect::<Vec<_>>(), vec![(-1, 4)]);
        assert!(!pixel.is_empty());

        let empty = FillAction::Span {
            x_start: 3,
            x_end: 3,
            y: 0,
        };
        assert!(empty.is_empty());
    }

    #[test]
    fn test_degenerate_polygon_rejected() {
        for n in 0..3 {
            let poly = vec![Point::new(1.0, 1.0); n];
            for method in FillMethod::ALL {
                let err = fill_polygon(method, &poly, None).unwrap_err();
                assert!(matches!(err, Error::DegeneratePolygon { vertices } if vertices == n));
            }
        }
    }

    #[test]
    fn test_default_seed_is_truncated_centroid() {
        let tri = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)];
        let plan = FillPlan::new(FillMethod::SimpleSeed, &tri, None).unwrap();
        assert_eq!(plan.seed(), (3, 3));

        let plan = FillPlan::new(FillMethod::SimpleSeed, &tri, Some(Point::new(1.9, 2.7))).unwrap();
        assert_eq!(plan.seed(), (1, 2));
    }

    #[test]
    fn test_all_methods_cover_square() {
        let expected: BTreeSet<(i64, i64)> =
            (0..10).flat_map(|y| (0..10).map(move |x| (x, y))).collect();
        for method in FillMethod::ALL {
            let actions = fill_polygon(method, &square(), None).unwrap();
            assert_eq!(covered(&actions), expected, "{method:?}");
        }
    }

    #[test]
    fn test_plan_restarts_from_scratch() {
        let poly = square();
        for method in FillMethod::ALL {
            let plan = FillPlan::new(method, &poly, None).unwrap();
            let first: Vec<FillAction> = plan.actions().collect();
            let mut partial = plan.actions();
            partial.next();
            let second: Vec<FillAction> = plan.actions().collect();
            assert_eq!(first, second);
            assert_eq!(first, fill_polygon(method, &poly, None).unwrap());
        }
    }

    #[test]
    fn test_seed_outside_is_empty() {
        let seed = Some(Point::new(50.0, 50.0));
        let actions = fill_polygon(FillMethod::ScanlineSeed, &square(), seed).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_default_colors_distinct() {
        let colors: BTreeSet<[u8; 4]> =
            FillMethod::ALL.iter().map(|m| m.default_color().to_array()).collect();
        assert_eq!(colors.len(), 4);
        assert!(FillMethod::SimpleSeed.uses_seed());
        assert!(!FillMethod::ActiveEdge.uses_seed());
    }
}
