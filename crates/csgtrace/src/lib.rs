#![warn(missing_docs)]

//! csgtrace: CSG cell geometry for ray and particle transport.
//!
//! Worlds are built from planes, spheres and infinite cylinders combined
//! into cells by boolean expressions. The kernel answers two questions:
//! which cell contains a point, and where a ray next crosses a boundary
//! (and whether it passes through, reflects or escapes there).
//!
//! This crate re-exports the kernel crates and adds history tracing:
//! following one ray from crossing to crossing until it escapes, plus a
//! parallel batch driver.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use csgtrace::{trace_history, Termination, TraceSettings};
//! use csgtrace::{BoundaryCondition, BoundingBox, Cell, CsgExpr, Geometry, Point3, Ray, Region, Surface, Vec3};
//!
//! let fuel = Arc::new(Surface::sphere(Point3::origin(), 1.0).unwrap());
//! let edge = Arc::new(
//!     Surface::sphere(Point3::origin(), 2.0)
//!         .unwrap()
//!         .with_boundary(BoundaryCondition::Vacuum),
//! );
//! let core = Cell::new(vec![Region::negative(Arc::clone(&fuel))], CsgExpr::leaf(0)).unwrap();
//! let shell = Cell::intersection_of(vec![Region::positive(fuel), Region::negative(edge)]).unwrap();
//! let geometry = Geometry::new(vec![core, shell], BoundingBox::centered_cube(2.0).unwrap());
//!
//! let ray = Ray::new(Point3::origin(), Vec3::x()).unwrap();
//! let history = trace_history(&ray, &geometry, &TraceSettings::default()).unwrap();
//! assert_eq!(history.termination, Termination::Escaped);
//! assert_eq!(history.cells_visited(), vec![0, 1]);
//! ```

pub mod batch;
pub mod history;
pub mod settings;

pub use batch::trace_batch;
pub use history::{trace_history, Termination, TraceHistory, TraceStep};
pub use settings::{SettingsError, TraceSettings};

pub use csgtrace_csg::{find_cell_id, is_in_cell, Cell, CsgError, CsgExpr, Geometry};
pub use csgtrace_geom::{
    halfspace, BoundaryCondition, BoundingBox, GeomError, Halfspace, InfiniteCylinder, Plane,
    Region, Shape, Sphere, Surface, SurfaceKind,
};
pub use csgtrace_math::{unitize, Dir3, MathError, Point3, Tolerance, Vec3};
pub use csgtrace_raytrace::{
    find_intersection, find_intersection_in_geometry, find_intersection_with_bump, intersect,
    reflect, reflect_about, sample, Crossing, Ray, SurfaceHit, TraceError,
};
