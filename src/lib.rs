//! # Trueno-Raster
//!
//! 2D rasterization and polygon geometry kernel.
//!
//! Continuous geometry goes in, discrete pixel coverage comes out. The kernel
//! is a set of pure functions; the [`canvas::Canvas`] and [`replay::Replay`]
//! collaborators own the mutable surface the results are drawn on.
//!
//! ## Features
//!
//! - **Lines**: DDA, Bresenham and Wu antialiased rasterization
//! - **Conics**: midpoint circle and ellipse, hyperbola and parabola sweeps
//! - **Polygons**: orientation, convexity, even-odd containment, inward normals
//! - **Hulls**: Graham scan and Jarvis march
//! - **Intersections**: segment/segment and line/polygon
//! - **Fills**: ordered and active edge lists, simple and scanline seed fills,
//!   each immediate or as a lazy restartable sequence
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let kernel = Kernel::default();
//! let triangle = [Point::new(1.0, 1.0), Point::new(30.0, 4.0), Point::new(12.0, 25.0)];
//!
//! let mut canvas = Canvas::new(32, 32)?;
//! let actions = kernel.fill_polygon(FillMethod::ActiveEdge, &triangle, None)?;
//! canvas.apply_all(actions, FillMethod::ActiveEdge.default_color());
//! canvas.draw_pixels(&kernel.rasterize_line(
//!     LineAlgorithm::Wu,
//!     Point::new(0.0, 31.0),
//!     Point::new(31.0, 0.0),
//! ));
//!
//! let png = PngEncoder::to_bytes(canvas.framebuffer())?;
//! assert!(!png.is_empty());
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for geometry, actions and configuration
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Graham, R. L. (1972). "An efficient algorithm for determining the convex hull."
//! - Jarvis, R. A. (1973). "On the identification of the convex hull of a finite set."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Floor, rounding and fraction helpers shared by the rasterizers.
pub mod scalar;

/// Geometric primitives (points, vectors, lines, pixels).
pub mod geometry;

/// Kernel configuration.
pub mod config;

/// Configured facade over every algorithm.
pub mod kernel;

// ============================================================================
// Algorithm Modules
// ============================================================================

/// Line and conic rasterization.
pub mod render;

/// Polygon geometry, hulls and intersections.
pub mod polygon;

/// Polygon fill engine.
pub mod fill;

// ============================================================================
// Rendering Modules
// ============================================================================

/// RGBA colors.
pub mod color;

/// Pixel buffer.
pub mod framebuffer;

/// Drawing surface for kernel output.
pub mod canvas;

/// Step-by-step fill replay.
pub mod replay;

/// Output encoders.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgba;
    pub use crate::config::KernelConfig;
    pub use crate::error::{Error, Result};
    pub use crate::fill::{FillAction, FillMethod, FillPlan};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Pixel, Point, Vector};
    pub use crate::kernel::Kernel;
    pub use crate::output::PngEncoder;
    pub use crate::polygon::HullMethod;
    pub use crate::render::{ConicKind, LineAlgorithm};
    pub use crate::replay::Replay;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
