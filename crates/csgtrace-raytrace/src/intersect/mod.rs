//! Ray-surface intersection algorithms.
//!
//! Each surface type has a dedicated closed-form intersector that reports
//! the nearest crossing ahead of the ray origin.

mod cylinder;
mod plane;
mod sphere;

pub use cylinder::intersect_cylinder;
pub use plane::intersect_plane;
pub use sphere::intersect_sphere;

use csgtrace_geom::{Shape, Surface};

use crate::Ray;

/// Outcome of intersecting a ray with one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceHit {
    /// No crossing ahead of the ray.
    Miss,
    /// Nearest crossing at this non-negative distance along the ray.
    Hit(f64),
    /// The ray lies in the surface: it touches it everywhere, so there is
    /// no single crossing distance.
    Embedded,
}

impl SurfaceHit {
    /// Whether the ray touches the surface at all.
    ///
    /// True for [`SurfaceHit::Embedded`] as well as [`SurfaceHit::Hit`].
    pub fn is_hit(&self) -> bool {
        !matches!(self, SurfaceHit::Miss)
    }

    /// Distance to the crossing.
    ///
    /// `Embedded` reports NaN, the explicit degenerate-hit signal; `Miss`
    /// reports `None`.
    pub fn distance(&self) -> Option<f64> {
        match self {
            SurfaceHit::Miss => None,
            SurfaceHit::Hit(t) => Some(*t),
            SurfaceHit::Embedded => Some(f64::NAN),
        }
    }

    /// Distance of a proper (non-degenerate) crossing.
    pub fn finite_distance(&self) -> Option<f64> {
        match self {
            SurfaceHit::Hit(t) if t.is_finite() => Some(*t),
            _ => None,
        }
    }
}

/// Intersect a ray with a surface, returning the nearest crossing ahead.
pub fn intersect(ray: &Ray, surface: &Surface) -> SurfaceHit {
    match &surface.shape {
        Shape::Plane(plane) => intersect_plane(ray, plane),
        Shape::Sphere(sphere) => intersect_sphere(ray, sphere),
        Shape::InfiniteCylinder(cyl) => intersect_cylinder(ray, cyl),
    }
}

/// Pick the smallest non-negative root of a quadratic.
///
/// `near <= far` are the two roots. A ray starting inside the surface has
/// `near < 0 <= far` and exits at `far`. A `near` root of exactly zero is
/// skipped in favor of `far`, so a ray sitting on the surface reports the
/// far side rather than its own origin.
pub(crate) fn nearest_forward_root(near: f64, far: f64) -> SurfaceHit {
    if near < 0.0 && far < 0.0 {
        SurfaceHit::Miss
    } else if near < 0.0 {
        SurfaceHit::Hit(far)
    } else if near > 0.0 && near < far {
        SurfaceHit::Hit(near)
    } else {
        SurfaceHit::Hit(far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csgtrace_math::{Point3, Vec3};

    #[test]
    fn test_root_policy() {
        assert_eq!(nearest_forward_root(-3.0, -1.0), SurfaceHit::Miss);
        assert_eq!(nearest_forward_root(-1.0, 2.0), SurfaceHit::Hit(2.0));
        assert_eq!(nearest_forward_root(1.0, 2.0), SurfaceHit::Hit(1.0));
        assert_eq!(nearest_forward_root(0.0, 2.0), SurfaceHit::Hit(2.0));
        assert_eq!(nearest_forward_root(2.0, 2.0), SurfaceHit::Hit(2.0));
    }

    #[test]
    fn test_hit_accessors() {
        assert!(!SurfaceHit::Miss.is_hit());
        assert_eq!(SurfaceHit::Miss.distance(), None);
        assert_eq!(SurfaceHit::Hit(4.0).distance(), Some(4.0));
        assert!(SurfaceHit::Embedded.is_hit());
        assert!(SurfaceHit::Embedded.distance().unwrap().is_nan());
        assert_eq!(SurfaceHit::Embedded.finite_distance(), None);
    }

    #[test]
    fn test_dispatch() {
        let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vec3::x()).unwrap();
        let sphere = Surface::sphere(Point3::origin(), 1.0).unwrap();
        let plane = Surface::plane(Point3::origin(), Vec3::x()).unwrap();
        let cyl = Surface::infinite_cylinder(Point3::origin(), Vec3::z(), 2.0).unwrap();
        assert_eq!(intersect(&ray, &sphere).finite_distance().map(|t| t.round()), Some(4.0));
        assert_eq!(intersect(&ray, &plane).finite_distance().map(|t| t.round()), Some(5.0));
        assert_eq!(intersect(&ray, &cyl).finite_distance().map(|t| t.round()), Some(3.0));
    }
}
