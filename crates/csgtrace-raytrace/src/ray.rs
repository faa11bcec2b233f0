//! Ray representation.

use csgtrace_math::{unitize, Dir3, MathError, Point3, Vec3};

/// A ray in 3D space defined by origin and unit direction.
///
/// Rays are values: every crossing produces a new `Ray` rather than
/// mutating the old one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction is normalized; a zero or non-finite direction fails
    /// with [`MathError::DegenerateVector`].
    pub fn new(origin: Point3, direction: Vec3) -> Result<Self, MathError> {
        Ok(Self::from_dir(origin, unitize(direction)?))
    }

    /// Create a ray from an already normalized direction.
    pub fn from_dir(origin: Point3, direction: Dir3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }

    /// The same ray with its origin moved `t` along the direction.
    #[inline]
    pub fn advanced(&self, t: f64) -> Self {
        Self::from_dir(self.at(t), self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)).unwrap();
        let p = ray.at(5.0);
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 3.0, 4.0)).unwrap();
        assert!((ray.direction.norm() - 1.0).abs() < 1e-12);
        assert!((ray.direction.y - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_ray_zero_direction() {
        let r = Ray::new(Point3::origin(), Vec3::zeros());
        assert!(matches!(r, Err(MathError::DegenerateVector { .. })));
    }

    #[test]
    fn test_advanced_is_new_value() {
        let ray = Ray::new(Point3::origin(), Vec3::z()).unwrap();
        let moved = ray.advanced(2.0);
        assert_eq!(ray.origin, Point3::origin());
        assert!((moved.origin.z - 2.0).abs() < 1e-12);
        assert_eq!(moved.direction, ray.direction);
    }
}
