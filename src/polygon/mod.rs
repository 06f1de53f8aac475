//! Polygon geometry: orientation, convexity, containment, normals, convex
//! hulls and intersections.
//!
//! Polygons are plain vertex slices, closed implicitly (the last vertex
//! connects to the first). Either winding is accepted; nothing here assumes
//! one. Consecutive duplicate vertices are a caller precondition and are not
//! checked.

pub mod hull;
pub mod intersect;
pub mod predicates;

pub use hull::{convex_hull_graham, convex_hull_jarvis, HullMethod};
pub use intersect::{line_polygon_intersections, segment_intersection};
pub use predicates::{edges, inward_normals, is_convex, orientation, point_in_polygon};
