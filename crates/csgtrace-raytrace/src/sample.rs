//! Uniform ray sampling inside a bounding box.

use std::f64::consts::TAU;

use csgtrace_geom::BoundingBox;
use csgtrace_math::{Dir3, Point3, Vec3};
use rand::Rng;

use crate::Ray;

/// Point drawn uniformly (per axis) from `bounds`.
pub fn sample_point<R: Rng + ?Sized>(bounds: &BoundingBox, rng: &mut R) -> Point3 {
    bounds.at_fraction([rng.gen(), rng.gen(), rng.gen()])
}

/// Direction drawn uniformly from the unit sphere.
///
/// Uses `z ~ U[-1, 1]`, `θ ~ U[0, 2π)`.
pub fn sample_direction<R: Rng + ?Sized>(rng: &mut R) -> Dir3 {
    let z: f64 = rng.gen_range(-1.0..=1.0);
    let theta = rng.gen_range(0.0..TAU);
    let s = (1.0 - z * z).max(0.0).sqrt();
    Dir3::new_normalize(Vec3::new(s * theta.cos(), s * theta.sin(), z))
}

/// Ray with a uniform origin in `bounds` and an isotropic direction.
pub fn sample_ray<R: Rng + ?Sized>(bounds: &BoundingBox, rng: &mut R) -> Ray {
    let origin = sample_point(bounds, rng);
    Ray::from_dir(origin, sample_direction(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_samples_stay_in_bounds() {
        let bounds = BoundingBox::new(Point3::new(-1.0, 2.0, 0.0), Point3::new(1.0, 3.0, 0.5)).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let ray = sample_ray(&bounds, &mut rng);
            assert!(bounds.contains(&ray.origin));
            assert!((ray.direction.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_directions_are_isotropic() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 20_000;
        let mut mean = Vec3::zeros();
        let mut upper = 0;
        for _ in 0..n {
            let d = sample_direction(&mut rng);
            mean += d.into_inner();
            if d.z > 0.0 {
                upper += 1;
            }
        }
        mean /= n as f64;
        assert!(mean.norm() < 0.05, "mean direction {mean:?}");
        let frac = upper as f64 / n as f64;
        assert!((frac - 0.5).abs() < 0.02);
    }

    #[test]
    fn test_sampling_is_seed_deterministic() {
        let bounds = BoundingBox::centered_cube(1.0).unwrap();
        let a = sample_ray(&bounds, &mut StdRng::seed_from_u64(1));
        let b = sample_ray(&bounds, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
