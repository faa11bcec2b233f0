//! Ray-sphere intersection (quadratic equation).

use csgtrace_geom::Sphere;

use super::{nearest_forward_root, SurfaceHit};
use crate::Ray;

/// Intersect a ray with a sphere.
///
/// With a unit direction `d` and `oc = origin - center`, the crossings are
/// at `t ± √disc` where `t = -d·oc` and `disc = t² - |oc|² + r²`. Returns
/// the smallest non-negative root; a ray starting inside the sphere
/// reports its exit.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> SurfaceHit {
    let oc = ray.origin - sphere.center;
    let d = ray.direction.as_ref();

    let t = -d.dot(&oc);
    let discriminant = t * t - oc.norm_squared() + sphere.radius * sphere.radius;
    if discriminant < 0.0 {
        return SurfaceHit::Miss;
    }

    let sqrt_disc = discriminant.sqrt();
    nearest_forward_root(t - sqrt_disc, t + sqrt_disc)
}
