//! Boundary crossing: nearest surface among a cell's regions and the
//! transmit / reflect / vacuum transition applied there.

use csgtrace_csg::Geometry;
use csgtrace_geom::{BoundaryCondition, Region};
use csgtrace_math::Tolerance;
use tracing::trace;

use crate::error::{Result, TraceError};
use crate::intersect::{intersect, SurfaceHit};
use crate::reflect::reflect_about;
use crate::Ray;

/// Result of moving a ray to the nearest boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// The ray after the crossing: nudged just past the surface, and
    /// mirrored when the boundary is reflective.
    pub ray: Ray,
    /// Index of the region whose surface was hit.
    pub region: usize,
    /// Boundary condition of that surface.
    pub boundary: BoundaryCondition,
    /// Distance travelled from the old origin to the surface.
    pub distance: f64,
}

impl Crossing {
    /// Whether the ray has left modeled space.
    pub fn is_terminal(&self) -> bool {
        self.boundary == BoundaryCondition::Vacuum
    }
}

/// Move `ray` to the nearest boundary among `regions`, using the default
/// [`Tolerance::BUMP`].
///
/// See [`find_intersection_with_bump`].
pub fn find_intersection(ray: &Ray, regions: &[Region]) -> Result<Crossing> {
    find_intersection_with_bump(ray, regions, Tolerance::BUMP)
}

/// Move `ray` to the nearest boundary among `regions`.
///
/// Every region's surface is intersected and the strictly smallest
/// positive distance wins; ties go to the earliest region. The origin is
/// advanced by `distance + bump` along the original direction. Then, by
/// the boundary condition of the hit surface:
///
/// - `Transmission`: the advanced ray is returned. The caller must locate
///   the new cell.
/// - `Reflective`: the direction is mirrored about the surface normal at
///   the hit point and the origin is moved `2 * bump` along the new
///   direction, back to the side it came from.
/// - `Vacuum`: the advanced ray is returned; the history ends here.
///
/// Fails with [`TraceError::InvalidBump`] unless `bump` is finite and
/// positive, [`TraceError::NoIntersection`] when nothing lies ahead, or
/// [`TraceError::DegenerateGeometry`] when the only contact is a surface
/// the ray runs along.
pub fn find_intersection_with_bump(ray: &Ray, regions: &[Region], bump: f64) -> Result<Crossing> {
    // A ray left on the surface would relocate into the cell it just left
    if !bump.is_finite() || bump <= 0.0 {
        return Err(TraceError::InvalidBump(bump));
    }

    let mut nearest: Option<(usize, f64)> = None;
    let mut embedded: Option<usize> = None;

    for (index, region) in regions.iter().enumerate() {
        match intersect(ray, &region.surface) {
            SurfaceHit::Hit(t) if t.is_finite() && t > 0.0 => {
                if nearest.map_or(true, |(_, best)| t < best) {
                    nearest = Some((index, t));
                }
            }
            SurfaceHit::Embedded => {
                embedded.get_or_insert(index);
            }
            _ => {}
        }
    }

    let Some((index, distance)) = nearest else {
        return Err(match embedded {
            Some(region) => TraceError::DegenerateGeometry { region },
            None => TraceError::NoIntersection(ray.origin),
        });
    };

    let surface = &regions[index].surface;
    let boundary = surface.boundary;
    let advanced = ray.advanced(distance + bump);

    let ray = match boundary {
        BoundaryCondition::Reflective => {
            let normal = surface.normal_at(&ray.at(distance))?;
            reflect_about(&advanced, &normal).advanced(2.0 * bump)
        }
        BoundaryCondition::Transmission | BoundaryCondition::Vacuum => advanced,
    };

    trace!(
        region = index,
        distance,
        %boundary,
        kind = ?surface.kind(),
        "boundary crossing"
    );

    Ok(Crossing {
        ray,
        region: index,
        boundary,
        distance,
    })
}

/// Locate the cell containing `ray.origin`, then move the ray to the
/// nearest boundary among that cell's regions.
pub fn find_intersection_in_geometry(ray: &Ray, geometry: &Geometry) -> Result<Crossing> {
    let (_, cell) = geometry.find_cell(&ray.origin)?;
    find_intersection(ray, cell.regions())
}
