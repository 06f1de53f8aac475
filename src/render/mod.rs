//! Rasterization of first- and second-order curves.
//!
//! # Algorithms
//!
//! - **DDA**: Floating-point stepping along the dominant axis
//! - **Bresenham's Line**: Integer error-term line drawing
//! - **Wu's Anti-aliased Line**: Paired samples with sub-pixel coverage
//! - **Bresenham Circle / Midpoint Ellipse**: Incremental decision variables
//! - **Hyperbola / Parabola**: Explicit sweeps over integer columns or rows
//!
//! Rasterizers return data; applying it to a surface is the job of
//! [`Canvas`](crate::canvas::Canvas).
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of
//!   circular arcs."

pub mod conic;
pub mod line;

pub use conic::{circle, ellipse, hyperbola, parabola, ConicKind};
pub use line::{bresenham, dda, wu, LineAlgorithm};
