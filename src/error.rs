//! Error types for trueno-raster operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
///
/// Geometric degeneracies (zero-length lines, zero radii, parallel segments)
/// are not errors; they degrade to empty or trivial output. Only inputs the
/// kernel cannot interpret at all are reported here.
#[derive(Error, Debug)]
pub enum Error {
    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a canvas or framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A polygon operation received fewer than three vertices.
    #[error("Degenerate polygon: {vertices} vertices, at least 3 required")]
    DegeneratePolygon {
        /// Number of vertices supplied.
        vertices: usize,
    },

    /// Kernel configuration value out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_degenerate_polygon_display() {
        let err = Error::DegeneratePolygon { vertices: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = Error::InvalidConfig("hyperbola_extent must be positive".to_string());
        assert!(err.to_string().contains("hyperbola_extent"));
    }
}
