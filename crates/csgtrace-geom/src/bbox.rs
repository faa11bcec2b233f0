//! Axis-aligned bounding box of a geometry.
//!
//! Defines the finite extent used for sampling and visualization. It has
//! no intersection or halfspace operation and is never part of a cell.

use csgtrace_math::{Point3, Vec3};

use crate::error::{GeomError, Result};

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: Point3,
    max: Point3,
}

impl BoundingBox {
    /// Create a box from its lower and upper corners.
    ///
    /// Corners must be finite and `min <= max` on every axis. A flat box
    /// (zero extent on some axis) is allowed, e.g. for 2-D slices.
    pub fn new(min: Point3, max: Point3) -> Result<Self> {
        if !min.iter().chain(max.iter()).all(|c| c.is_finite()) {
            return Err(GeomError::InvalidBounds("corners must be finite".into()));
        }
        for axis in 0..3 {
            if min[axis] > max[axis] {
                return Err(GeomError::InvalidBounds(format!(
                    "min[{axis}] = {} exceeds max[{axis}] = {}",
                    min[axis], max[axis]
                )));
            }
        }
        Ok(Self { min, max })
    }

    /// Cube of half-width `half` centered at the origin.
    pub fn centered_cube(half: f64) -> Result<Self> {
        Self::new(
            Point3::new(-half, -half, -half),
            Point3::new(half, half, half),
        )
    }

    /// Lower corner.
    pub fn min(&self) -> Point3 {
        self.min
    }

    /// Upper corner.
    pub fn max(&self) -> Point3 {
        self.max
    }

    /// Edge lengths along each axis.
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center point.
    pub fn center(&self) -> Point3 {
        Point3::from((self.min.coords + self.max.coords) / 2.0)
    }

    /// Test if a point lies inside the box (boundary included).
    pub fn contains(&self, p: &Point3) -> bool {
        (0..3).all(|axis| p[axis] >= self.min[axis] && p[axis] <= self.max[axis])
    }

    /// Map fractional coordinates in `[0, 1]³` to a point in the box.
    pub fn at_fraction(&self, f: [f64; 3]) -> Point3 {
        let e = self.extent();
        Point3::new(
            self.min.x + f[0] * e.x,
            self.min.y + f[1] * e.y,
            self.min.z + f[2] * e.z,
        )
    }
}
