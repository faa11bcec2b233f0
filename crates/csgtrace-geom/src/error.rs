//! Error types for surface and volume construction.

use csgtrace_math::MathError;
use thiserror::Error;

/// Errors that can occur while building geometry primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// A normal or axis vector could not be normalized.
    #[error(transparent)]
    DegenerateVector(#[from] MathError),

    /// Radius is zero, negative or not finite.
    #[error("invalid radius {0}: must be finite and positive")]
    InvalidRadius(f64),

    /// Bounding box corners are not finite or not ordered.
    #[error("invalid bounding box: {0}")]
    InvalidBounds(String),

    /// Unrecognized boundary condition name.
    #[error("unknown boundary condition {0:?} (expected transmission, reflective or vacuum)")]
    UnknownBoundary(String),
}

/// Result type for geometry construction.
pub type Result<T> = std::result::Result<T, GeomError>;
