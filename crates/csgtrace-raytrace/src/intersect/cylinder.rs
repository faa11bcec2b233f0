//! Ray-cylinder intersection (quadratic equation).

use csgtrace_geom::InfiniteCylinder;
use csgtrace_math::Tolerance;

use super::{nearest_forward_root, SurfaceHit};
use crate::Ray;

/// Intersect a ray with an infinite cylindrical surface.
///
/// With axis point `A`, axis direction `AB`, ray direction `V` and
/// `AO = origin - A`, the quadratic is
///
/// - `a = |V × AB|²`
/// - `b = 2 (V × AB)·(AO × AB)`
/// - `c = |AO × AB|² - r² |AB|²`
///
/// and the smallest non-negative root is returned.
///
/// A ray parallel to the axis (`|V × AB| ≈ 0`) keeps a constant distance
/// from the axis and never crosses the surface: it is a miss, or
/// [`SurfaceHit::Embedded`] when it runs along the surface itself. The
/// cutoff applies to `|V × AB|`, the sine of the angle to the axis, so it
/// matches the plane's `|V·n|` guard; nearly parallel rays still get their
/// (large) roots.
pub fn intersect_cylinder(ray: &Ray, cylinder: &InfiniteCylinder) -> SurfaceHit {
    let ab = cylinder.axis.as_ref();
    let v = ray.direction.as_ref();
    let ao = ray.origin - cylinder.axis_point;

    let v_x_ab = v.cross(ab);
    let ao_x_ab = ao.cross(ab);

    let a = v_x_ab.norm_squared();
    let b = 2.0 * v_x_ab.dot(&ao_x_ab);
    let c = ao_x_ab.norm_squared() - cylinder.radius * cylinder.radius * ab.norm_squared();

    // Ray is parallel to axis
    if a.sqrt() < Tolerance::PARALLEL {
        return if c.abs() < Tolerance::PARALLEL {
            SurfaceHit::Embedded
        } else {
            SurfaceHit::Miss
        };
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return SurfaceHit::Miss;
    }

    let sqrt_disc = discriminant.sqrt();
    let near = (-b - sqrt_disc) / (2.0 * a);
    let far = (-b + sqrt_disc) / (2.0 * a);
    nearest_forward_root(near, far)
}
