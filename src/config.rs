//! Kernel configuration.
//!
//! The defaults reproduce the reference constants; every algorithm is fully
//! deterministic for a given configuration.

use crate::error::{Error, Result};
use crate::kernel::Kernel;
use crate::render::conic::DEFAULT_OPEN_CURVE_EXTENT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default offset factor for inward-normal containment probes.
pub const DEFAULT_NORMAL_PROBE_OFFSET: f64 = 0.1;

/// Default cross-product magnitude below which segments count as parallel.
pub const DEFAULT_PARALLEL_TOLERANCE: f64 = 1e-10;

/// Builder for kernel configuration.
///
/// ```
/// use trueno_raster::config::KernelConfig;
///
/// let kernel = KernelConfig::new()
///     .hyperbola_extent(250.0)
///     .parallel_tolerance(1e-12)
///     .build()
///     .unwrap();
/// # let _ = kernel;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KernelConfig {
    pub(crate) hyperbola_extent: f64,
    pub(crate) parabola_extent: f64,
    pub(crate) normal_probe_offset: f64,
    pub(crate) parallel_tolerance: f64,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KernelConfig {
    /// Create a configuration with the reference defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hyperbola_extent: DEFAULT_OPEN_CURVE_EXTENT,
            parabola_extent: DEFAULT_OPEN_CURVE_EXTENT,
            normal_probe_offset: DEFAULT_NORMAL_PROBE_OFFSET,
            parallel_tolerance: DEFAULT_PARALLEL_TOLERANCE,
        }
    }

    /// Set the hyperbola sweep length used when the control point does not
    /// lie beyond the vertex.
    #[must_use]
    pub fn hyperbola_extent(mut self, extent: f64) -> Self {
        self.hyperbola_extent = extent;
        self
    }

    /// Set the parabola sweep length used when the control point is not
    /// above the vertex.
    #[must_use]
    pub fn parabola_extent(mut self, extent: f64) -> Self {
        self.parabola_extent = extent;
        self
    }

    /// Set the scale applied to an edge normal when probing containment.
    #[must_use]
    pub fn normal_probe_offset(mut self, offset: f64) -> Self {
        self.normal_probe_offset = offset;
        self
    }

    /// Set the parallel-segment tolerance.
    #[must_use]
    pub fn parallel_tolerance(mut self, tolerance: f64) -> Self {
        self.parallel_tolerance = tolerance;
        self
    }

    /// Check every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for non-finite values, non-positive
    /// extents or probe offset, or a negative tolerance.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("hyperbola_extent", self.hyperbola_extent),
            ("parabola_extent", self.parabola_extent),
            ("normal_probe_offset", self.normal_probe_offset),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if !self.parallel_tolerance.is_finite() || self.parallel_tolerance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "parallel_tolerance must be finite and non-negative, got {}",
                self.parallel_tolerance
            )));
        }
        Ok(())
    }

    /// Validate and build a [`Kernel`].
    ///
    /// # Errors
    ///
    /// Returns an error if [`validate`](Self::validate) fails.
    pub fn build(self) -> Result<Kernel> {
        self.validate()?;
        Ok(Kernel::with_config(self))
    }
}
