//! Error types for ray tracing.

use csgtrace_csg::CsgError;
use csgtrace_math::{MathError, Point3};
use thiserror::Error;

/// Errors that can occur while advancing a ray.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraceError {
    /// No region of the cell lies ahead of the ray.
    #[error("no boundary ahead of ray at ({}, {}, {})", .0.x, .0.y, .0.z)]
    NoIntersection(Point3),

    /// The ray lies in a region's surface, so the crossing distance is
    /// undefined.
    #[error("ray is embedded in the surface of region {region}")]
    DegenerateGeometry {
        /// Index of the offending region in the scanned list.
        region: usize,
    },

    /// The crossing bump is zero, negative or not finite.
    #[error("bump distance must be finite and positive, got {0}")]
    InvalidBump(f64),

    /// Tracing settings failed validation.
    #[error("invalid trace settings: {0}")]
    InvalidSettings(String),

    /// Locating the ray's cell failed.
    #[error(transparent)]
    Csg(#[from] CsgError),

    /// A direction or normal could not be normalized.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type for ray tracing operations.
pub type Result<T> = std::result::Result<T, TraceError>;
