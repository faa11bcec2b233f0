//! Ray-plane intersection (closed-form).

use csgtrace_geom::Plane;
use csgtrace_math::Tolerance;

use super::SurfaceHit;
use crate::Ray;

/// Intersect a ray with a plane.
///
/// `t = (point - origin)·n / (direction·n)`. A ray parallel to the plane
/// misses it, unless it lies in the plane, which is reported as
/// [`SurfaceHit::Embedded`]. Crossings behind the origin are misses.
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> SurfaceHit {
    let normal = plane.normal.as_ref();
    let denom = ray.direction.as_ref().dot(normal);
    let numer = (plane.point - ray.origin).dot(normal);

    // Ray is parallel to plane
    if denom.abs() < Tolerance::PARALLEL {
        return if numer.abs() < Tolerance::PARALLEL {
            SurfaceHit::Embedded
        } else {
            SurfaceHit::Miss
        };
    }

    let t = numer / denom;

    // Intersection is behind ray origin
    if t < 0.0 {
        return SurfaceHit::Miss;
    }

    SurfaceHit::Hit(t)
}
