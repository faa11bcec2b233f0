#![warn(missing_docs)]

//! Boolean CSG evaluation and cell location for the csgtrace kernel.
//!
//! A [`Cell`] owns an ordered list of [`Region`]s and a [`CsgExpr`] tree
//! whose leaves index into that list. A [`Geometry`] is an ordered list of
//! cells plus a bounding box.
//!
//! Every query takes the point explicitly; nothing is cached between
//! calls, so a `Geometry` can be shared across threads and queried
//! concurrently.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use csgtrace_csg::{Cell, CsgExpr, Geometry};
//! use csgtrace_geom::{BoundingBox, Region, Surface};
//! use csgtrace_math::Point3;
//!
//! let ball = Arc::new(Surface::sphere(Point3::origin(), 1.0).unwrap());
//! let inside = Cell::new(vec![Region::negative(Arc::clone(&ball))], CsgExpr::leaf(0)).unwrap();
//! let outside = Cell::new(vec![Region::positive(ball)], CsgExpr::leaf(0)).unwrap();
//! let geometry = Geometry::new(vec![inside, outside], BoundingBox::centered_cube(2.0).unwrap());
//!
//! assert_eq!(geometry.find_cell_id(&Point3::new(0.5, 0.0, 0.0)).unwrap(), 0);
//! assert_eq!(geometry.find_cell_id(&Point3::new(1.5, 0.0, 0.0)).unwrap(), 1);
//! ```

pub mod cell;
pub mod error;
pub mod expr;
pub mod geometry;

pub use cell::{is_in_cell, Cell};
pub use error::{CsgError, Result};
pub use expr::CsgExpr;
pub use geometry::{find_cell_id, Geometry};

// Re-exported so callers can build cells without naming the geom crate.
pub use csgtrace_geom::Region;
