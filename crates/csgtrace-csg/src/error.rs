//! Error types for CSG construction and cell location.

use csgtrace_math::Point3;
use thiserror::Error;

/// Errors that can occur while building cells or locating points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CsgError {
    /// The expression tree does not fit the cell's region list.
    #[error("invalid CSG tree: {0}")]
    InvalidCsgTree(String),

    /// No cell's predicate is satisfied by the point.
    #[error("no cell contains point ({}, {}, {})", .0.x, .0.y, .0.z)]
    CellNotFound(Point3),
}

/// Result type for CSG operations.
pub type Result<T> = std::result::Result<T, CsgError>;
