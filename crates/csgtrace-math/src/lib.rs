#![warn(missing_docs)]

//! Math types for the csgtrace CSG kernel.
//!
//! Thin wrappers around nalgebra providing the point, vector and direction
//! types used by surfaces, rays and the cell locator, plus the tolerance
//! constants shared across the kernel.

use nalgebra::{Unit, Vector3};
use thiserror::Error;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Errors raised by vector math.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// The vector has zero (or non-finite) magnitude and has no direction.
    #[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
    DegenerateVector {
        /// X component of the offending vector.
        x: f64,
        /// Y component of the offending vector.
        y: f64,
        /// Z component of the offending vector.
        z: f64,
    },
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;

/// Normalize `v` into a unit direction.
///
/// Fails with [`MathError::DegenerateVector`] when `v` has zero length or
/// any non-finite component, instead of producing a NaN direction.
pub fn unitize(v: Vec3) -> Result<Dir3> {
    let degenerate = MathError::DegenerateVector {
        x: v.x,
        y: v.y,
        z: v.z,
    };
    if !v.iter().all(|c| c.is_finite()) {
        return Err(degenerate);
    }
    Dir3::try_new(v, 0.0).ok_or(degenerate)
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Threshold below which a denominator or quadratic coefficient is
    /// treated as zero (ray parallel to a plane or cylinder axis).
    pub parallel: f64,
    /// Distance a ray is nudged past a surface after crossing it, so the
    /// same surface is not detected again at distance zero.
    pub bump: f64,
}

impl Tolerance {
    /// Default kernel tolerances (1e-12 parallel, 1e-9 bump).
    pub const DEFAULT: Self = Self {
        parallel: 1e-12,
        bump: 1e-9,
    };

    /// Parallel threshold of [`Tolerance::DEFAULT`].
    pub const PARALLEL: f64 = Self::DEFAULT.parallel;

    /// Crossing bump of [`Tolerance::DEFAULT`].
    pub const BUMP: f64 = Self::DEFAULT.bump;

    /// Check if a scalar is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.parallel
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
