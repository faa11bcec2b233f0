//! Following one ray from crossing to crossing.

use csgtrace_csg::Geometry;
use csgtrace_geom::BoundaryCondition;
use csgtrace_math::Point3;
use csgtrace_raytrace::{find_intersection_with_bump, Ray, TraceError};
use tracing::{debug, warn};

use crate::settings::TraceSettings;

/// One straight segment of a history, from the ray origin to a boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStep {
    /// Cell the segment runs through.
    pub cell: usize,
    /// Where the segment starts.
    pub start: Point3,
    /// Index (within the cell) of the region whose surface ends it.
    pub region: usize,
    /// Boundary condition applied at the end.
    pub boundary: BoundaryCondition,
    /// Segment length.
    pub distance: f64,
}

/// Why a history stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The ray crossed a vacuum boundary.
    Escaped,
    /// The ray was still inside after `max_crossings` crossings.
    CrossingLimit,
}

/// The full path of one ray.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceHistory {
    /// Segments in travel order.
    pub steps: Vec<TraceStep>,
    /// The ray after the last crossing.
    pub final_ray: Ray,
    /// Why tracing stopped.
    pub termination: Termination,
}

impl TraceHistory {
    /// Total distance travelled.
    pub fn path_length(&self) -> f64 {
        self.steps.iter().map(|s| s.distance).sum()
    }

    /// Cell of each segment, in order.
    pub fn cells_visited(&self) -> Vec<usize> {
        self.steps.iter().map(|s| s.cell).collect()
    }

    /// Number of boundary crossings.
    pub fn crossings(&self) -> usize {
        self.steps.len()
    }
}

/// Follow `ray` through `geometry` until it escapes through a vacuum
/// boundary or `settings.max_crossings` is reached.
///
/// The starting cell is located once; after each transmissive crossing
/// the cell is located again at the new position. Reflective crossings
/// keep the current cell.
///
/// Settings are validated first and rejected with
/// [`TraceError::InvalidSettings`]. Any location or intersection failure
/// ends the history with that error; the caller decides whether to drop
/// the ray or abort the run.
pub fn trace_history(
    ray: &Ray,
    geometry: &Geometry,
    settings: &TraceSettings,
) -> Result<TraceHistory, TraceError> {
    settings
        .validate()
        .map_err(|e| TraceError::InvalidSettings(e.to_string()))?;

    let mut steps = Vec::new();
    let mut current = *ray;
    let mut cell = geometry.find_cell_id(&current.origin)?;

    let termination = loop {
        if steps.len() >= settings.max_crossings {
            warn!(
                crossings = steps.len(),
                cell, "history cut off at crossing limit"
            );
            break Termination::CrossingLimit;
        }

        let regions = geometry.cells()[cell].regions();
        let crossing = find_intersection_with_bump(&current, regions, settings.bump_epsilon)?;
        steps.push(TraceStep {
            cell,
            start: current.origin,
            region: crossing.region,
            boundary: crossing.boundary,
            distance: crossing.distance,
        });
        current = crossing.ray;

        match crossing.boundary {
            BoundaryCondition::Vacuum => break Termination::Escaped,
            BoundaryCondition::Transmission => {
                cell = geometry.find_cell_id(&current.origin)?;
            }
            BoundaryCondition::Reflective => {}
        }
    };

    debug!(
        crossings = steps.len(),
        ?termination,
        "history finished"
    );

    Ok(TraceHistory {
        steps,
        final_ray: current,
        termination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use csgtrace_csg::{Cell, CsgError, CsgExpr};
    use csgtrace_geom::{BoundingBox, Region, Surface};
    use csgtrace_math::Vec3;
    use std::sync::Arc;

    fn wall(x: f64, boundary: BoundaryCondition) -> Arc<Surface> {
        Arc::new(
            Surface::plane(Point3::new(x, 0.0, 0.0), Vec3::x())
                .unwrap()
                .with_boundary(boundary),
        )
    }

    /// Three slabs along x: [-3,-1], [-1,1], [1,3], vacuum outside.
    fn slabs(outer: BoundaryCondition) -> Geometry {
        let a = wall(-3.0, outer);
        let b = wall(-1.0, BoundaryCondition::Transmission);
        let c = wall(1.0, BoundaryCondition::Transmission);
        let d = wall(3.0, outer);
        let cells = vec![
            Cell::intersection_of(vec![Region::positive(a), Region::negative(Arc::clone(&b))]).unwrap(),
            Cell::intersection_of(vec![Region::positive(b), Region::negative(Arc::clone(&c))]).unwrap(),
            Cell::intersection_of(vec![Region::positive(c), Region::negative(d)]).unwrap(),
        ];
        Geometry::new(cells, BoundingBox::centered_cube(3.0).unwrap())
    }

    #[test]
    fn test_escapes_through_slabs() {
        let g = slabs(BoundaryCondition::Vacuum);
        let ray = Ray::new(Point3::new(-2.0, 0.0, 0.0), Vec3::x()).unwrap();
        let h = trace_history(&ray, &g, &TraceSettings::default()).unwrap();
        assert_eq!(h.termination, Termination::Escaped);
        assert_eq!(h.cells_visited(), vec![0, 1, 2]);
        assert_eq!(h.crossings(), 3);
        assert_relative_eq!(h.path_length(), 5.0, epsilon = 1e-6);
        assert_eq!(h.steps[2].boundary, BoundaryCondition::Vacuum);
        assert!(h.final_ray.origin.x > 3.0);
    }

    #[test]
    fn test_reflective_walls_hit_crossing_limit() {
        let g = slabs(BoundaryCondition::Reflective);
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::x()).unwrap();
        let settings = TraceSettings {
            max_crossings: 25,
            ..TraceSettings::default()
        };
        let h = trace_history(&ray, &g, &settings).unwrap();
        assert_eq!(h.termination, Termination::CrossingLimit);
        assert_eq!(h.crossings(), 25);
        // Bounces between x = -3 and x = 3, never leaving the box
        assert!(h.steps.iter().all(|s| s.start.x.abs() <= 3.0));
        assert!(h
            .steps
            .iter()
            .any(|s| s.boundary == BoundaryCondition::Reflective));
    }

    #[test]
    fn test_start_outside_every_cell() {
        let g = slabs(BoundaryCondition::Vacuum);
        let ray = Ray::new(Point3::new(10.0, 0.0, 0.0), Vec3::x()).unwrap();
        let err = trace_history(&ray, &g, &TraceSettings::default()).unwrap_err();
        assert!(matches!(err, TraceError::Csg(CsgError::CellNotFound(_))));
    }

    #[test]
    fn test_ray_with_no_boundary_ahead() {
        // Single unbounded halfspace cell: nothing to cross moving away
        let plane = Arc::new(Surface::plane(Point3::origin(), Vec3::x()).unwrap());
        let cell = Cell::new(vec![Region::positive(plane)], CsgExpr::leaf(0)).unwrap();
        let g = Geometry::new(vec![cell], BoundingBox::centered_cube(1.0).unwrap());
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::x()).unwrap();
        let err = trace_history(&ray, &g, &TraceSettings::default()).unwrap_err();
        assert!(matches!(err, TraceError::NoIntersection(_)));
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let g = slabs(BoundaryCondition::Vacuum);
        let ray = Ray::new(Point3::new(-2.0, 0.0, 0.0), Vec3::x()).unwrap();
        for bump_epsilon in [0.0, -1e-9, f64::NAN] {
            let settings = TraceSettings {
                bump_epsilon,
                ..TraceSettings::default()
            };
            let err = trace_history(&ray, &g, &settings).unwrap_err();
            assert!(matches!(err, TraceError::InvalidSettings(_)));
        }
        let settings = TraceSettings {
            max_crossings: 0,
            ..TraceSettings::default()
        };
        assert!(matches!(
            trace_history(&ray, &g, &settings),
            Err(TraceError::InvalidSettings(_))
        ));
    }
}
