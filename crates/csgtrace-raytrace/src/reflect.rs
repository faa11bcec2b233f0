//! Specular reflection of rays.

use csgtrace_geom::Plane;
use csgtrace_math::Dir3;

use crate::Ray;

/// Mirror `ray` about `plane`: `d' = d - 2(d·n)n`, same origin.
pub fn reflect(ray: &Ray, plane: &Plane) -> Ray {
    reflect_about(ray, &plane.normal)
}

/// Mirror `ray` about the unit `normal`, keeping its origin.
///
/// Either orientation of the normal gives the same result.
pub fn reflect_about(ray: &Ray, normal: &Dir3) -> Ray {
    let d = ray.direction.as_ref();
    let n = normal.as_ref();
    let reflected = d - 2.0 * d.dot(n) * n;
    // Renormalize to keep rounding drift out of long reflection chains
    Ray::from_dir(ray.origin, Dir3::new_normalize(reflected))
}
