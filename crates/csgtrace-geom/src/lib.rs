#![warn(missing_docs)]

//! Implicit surfaces and halfspace classification for the csgtrace kernel.
//!
//! Provides the closed set of surfaces a CSG world is built from (planes,
//! spheres and infinite cylinders), the boundary condition each surface
//! carries, the halfspace predicate that sorts points onto one side of a
//! surface, and the [`Region`] that pairs a surface with a required side.
//!
//! [`BoundingBox`] lives here as well, but it is a bounding and sampling
//! volume only: it is not a [`Surface`] and cannot appear in a region.

pub mod bbox;
pub mod error;
pub mod halfspace;
pub mod region;
pub mod surface;

pub use bbox::BoundingBox;
pub use error::{GeomError, Result};
pub use halfspace::{halfspace, Halfspace};
pub use region::Region;
pub use surface::{BoundaryCondition, InfiniteCylinder, Plane, Shape, Sphere, Surface, SurfaceKind};
