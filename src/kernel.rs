//! Configured entry point to every rasterization and geometry algorithm.
//!
//! # Example
//!
//! ```
//! use trueno_raster::prelude::*;
//!
//! let kernel = Kernel::default();
//! let (start, end) = (Point::new(0.0, 0.0), Point::new(5.0, 2.0));
//! let pixels = kernel.rasterize_line(LineAlgorithm::Bresenham, start, end);
//! assert_eq!(pixels.len(), 6);
//!
//! let hit = kernel.intersect_segments(
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//!     Point::new(10.0, 0.0),
//! );
//! assert_eq!(hit, Some(Point::new(5.0, 5.0)));
//! ```

use crate::config::KernelConfig;
use crate::error::Result;
use crate::fill::{FillAction, FillMethod, FillPlan};
use crate::geometry::{Line, Pixel, Point, Vector};
use crate::polygon::{self, HullMethod};
use crate::render::{ConicKind, LineAlgorithm};

/// Stateless algorithm facade over a [`KernelConfig`].
///
/// Every call is a pure function of its arguments and the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kernel {
    config: KernelConfig,
}

impl Kernel {
    /// Kernel with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: KernelConfig::new(),
        }
    }

    pub(crate) const fn with_config(config: KernelConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Rasterize the segment `p1`-`p2`.
    #[must_use]
    pub fn rasterize_line(&self, algorithm: LineAlgorithm, p1: Point, p2: Point) -> Vec<Pixel> {
        let pixels = algorithm.rasterize(p1, p2);
        tracing::debug!(?algorithm, pixels = pixels.len(), "rasterized line");
        pixels
    }

    /// Rasterize a conic from its center and a control point.
    #[must_use]
    pub fn rasterize_conic(&self, kind: ConicKind, center: Point, control: Point) -> Vec<Pixel> {
        let pixels = kind.rasterize(center, control, &self.config);
        tracing::debug!(?kind, pixels = pixels.len(), "rasterized conic");
        pixels
    }

    /// Whether the polygon is convex.
    #[must_use]
    pub fn test_convex(&self, polygon: &[Point]) -> bool {
        let convex = polygon::is_convex(polygon);
        tracing::debug!(vertices = polygon.len(), convex, "convexity test");
        convex
    }

    /// Even-odd containment of `point`.
    #[must_use]
    pub fn point_in_polygon(&self, point: Point, polygon: &[Point]) -> bool {
        polygon::point_in_polygon(point, polygon)
    }

    /// Inward normal of every edge.
    #[must_use]
    pub fn inward_normals(&self, polygon: &[Point]) -> Vec<Vector> {
        let normals = polygon::inward_normals(polygon, self.config.normal_probe_offset);
        tracing::debug!(edges = normals.len(), "computed inward normals");
        normals
    }

    /// Convex hull of a point cloud.
    #[must_use]
    pub fn convex_hull(&self, method: HullMethod, points: &[Point]) -> Vec<Point> {
        let hull = method.hull(points);
        tracing::debug!(?method, points = points.len(), hull = hull.len(), "computed convex hull");
        hull
    }

    /// Intersection of segments `p`-`q` and `r`-`s`.
    #[must_use]
    pub fn intersect_segments(&self, p: Point, q: Point, r: Point, s: Point) -> Option<Point> {
        let hit = polygon::segment_intersection(p, q, r, s, self.config.parallel_tolerance);
        tracing::debug!(hit = hit.is_some(), "segment intersection");
        hit
    }

    /// Crossings of `line` with every polygon edge, in edge order.
    #[must_use]
    pub fn intersect_line_polygon(&self, line: Line, polygon: &[Point]) -> Vec<Point> {
        let hits =
            polygon::line_polygon_intersections(line, polygon, self.config.parallel_tolerance);
        tracing::debug!(edges = polygon.len(), hits = hits.len(), "line/polygon intersection");
        hits
    }

    /// Fill a polygon, returning every action in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegeneratePolygon`](crate::Error::DegeneratePolygon)
    /// for fewer than three vertices.
    pub fn fill_polygon(
        &self,
        method: FillMethod,
        polygon: &[Point],
        seed: Option<Point>,
    ) -> Result<Vec<FillAction>> {
        crate::fill::fill_polygon(method, polygon, seed)
    }

    /// Validate a fill request for lazy, repeatable stepping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegeneratePolygon`](crate::Error::DegeneratePolygon)
    /// for fewer than three vertices.
    pub fn fill_plan(
        &self,
        method: FillMethod,
        polygon: &[Point],
        seed: Option<Point>,
    ) -> Result<FillPlan> {
        let plan = FillPlan::new(method, polygon, seed)?;
        tracing::debug!(?method, seed = ?plan.seed(), "fill plan ready");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Kernel::default(), Kernel::new());
        assert_eq!(*Kernel::new().config(), KernelConfig::default());
    }

    #[test]
    fn test_bresenham_reference_table() {
        let pixels = Kernel::new().rasterize_line(
            LineAlgorithm::Bresenham,
            Point::new(0.0, 0.0),
            Point::new(5.0, 2.0),
        );
        let cells: Vec<(i64, i64)> = pixels.iter().map(Pixel::cell).collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_conic_uses_configured_extent() {
        let short = KernelConfig::new().parabola_extent(10.0).build().unwrap();
        let long = Kernel::new();
        let center = Point::new(0.0, 0.0);
        let control = Point::new(0.0, 0.0);
        assert!(
            short.rasterize_conic(ConicKind::Parabola, center, control).len()
                < long.rasterize_conic(ConicKind::Parabola, center, control).len()
        );
    }

    #[test]
    fn test_polygon_queries() {
        let kernel = Kernel::new();
        let sq = square();
        assert!(kernel.test_convex(&sq));
        assert!(kernel.point_in_polygon(Point::new(5.0, 5.0), &sq));
        assert_eq!(kernel.inward_normals(&sq)[0], Vector::new(0.0, 10.0));
        assert_eq!(kernel.convex_hull(HullMethod::Graham, &sq).len(), 4);
        assert_eq!(
            kernel.intersect_line_polygon(Line::from_coords(-5.0, 5.0, 15.0, 5.0), &sq).len(),
            2
        );
    }

    #[test]
    fn test_tolerance_from_config() {
        let loose = KernelConfig::new().parallel_tolerance(3.0).build().unwrap();
        let p = Point::new(0.0, 0.0);
        let q = Point::new(1.0, 0.0);
        let r = Point::new(0.5, -1.0);
        let s = Point::new(0.5, 1.0);
        assert!(Kernel::new().intersect_segments(p, q, r, s).is_some());
        assert!(loose.intersect_segments(p, q, r, s).is_none());
    }

    #[test]
    fn test_fill_entry_points_agree() {
        let kernel = Kernel::new();
        for method in FillMethod::ALL {
            let immediate = kernel.fill_polygon(method, &square(), None).unwrap();
            let plan = kernel.fill_plan(method, &square(), None).unwrap();
            assert_eq!(plan.actions().collect::<Vec<_>>(), immediate);
        }
    }

    #[test]
    fn test_fill_rejects_degenerate() {
        let err = Kernel::new()
            .fill_plan(FillMethod::OrderedEdge, &[Point::ORIGIN, Point::new(1.0, 0.0)], None)
            .unwrap_err();
        assert!(matches!(err, Error::DegeneratePolygon { vertices: 2 }));
    }
}
