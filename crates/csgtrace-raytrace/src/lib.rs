#![warn(missing_docs)]

//! Ray tracing through CSG geometry for the csgtrace kernel.
//!
//! Works directly on the implicit surfaces (planes, spheres, infinite
//! cylinders) with closed-form root finding, then applies the boundary
//! condition of whichever surface the ray reaches first.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray with an origin and a unit direction
//! - [`intersect`] - Ray-surface intersection for each surface type
//! - [`reflect`] - Mirror a ray about a plane or surface normal
//! - [`crossing`] - Nearest boundary among a cell's regions, and the
//!   transmit / reflect / vacuum transition
//! - [`sample`] - Uniform origins and isotropic directions
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use csgtrace_csg::{Cell, CsgExpr, Geometry};
//! use csgtrace_geom::{BoundaryCondition, BoundingBox, Region, Surface};
//! use csgtrace_math::{Point3, Vec3};
//! use csgtrace_raytrace::{find_intersection_in_geometry, Ray};
//!
//! let ball = Arc::new(
//!     Surface::sphere(Point3::origin(), 1.0)
//!         .unwrap()
//!         .with_boundary(BoundaryCondition::Vacuum),
//! );
//! let cell = Cell::new(vec![Region::negative(ball)], CsgExpr::leaf(0)).unwrap();
//! let geometry = Geometry::new(vec![cell], BoundingBox::centered_cube(1.0).unwrap());
//!
//! let ray = Ray::new(Point3::origin(), Vec3::x()).unwrap();
//! let crossing = find_intersection_in_geometry(&ray, &geometry).unwrap();
//! assert_eq!(crossing.boundary, BoundaryCondition::Vacuum);
//! assert!((crossing.distance - 1.0).abs() < 1e-12);
//! ```

mod ray;
pub mod crossing;
pub mod error;
pub mod intersect;
pub mod reflect;
pub mod sample;

pub use crossing::{
    find_intersection, find_intersection_in_geometry, find_intersection_with_bump, Crossing,
};
pub use error::{Result, TraceError};
pub use intersect::{intersect, SurfaceHit};
pub use ray::Ray;
pub use reflect::{reflect, reflect_about};
