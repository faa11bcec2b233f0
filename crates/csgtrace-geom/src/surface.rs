//! Implicit surface variants and their boundary conditions.

use std::fmt;
use std::str::FromStr;

use csgtrace_math::{unitize, Dir3, MathError, Point3, Vec3};

use crate::error::{GeomError, Result};

// =============================================================================
// Boundary conditions
// =============================================================================

/// What happens to a ray when it crosses a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryCondition {
    /// The ray continues into the neighbouring cell.
    #[default]
    Transmission,
    /// The ray is mirrored about the surface normal.
    Reflective,
    /// The ray leaves modeled space and its history ends.
    Vacuum,
}

impl BoundaryCondition {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryCondition::Transmission => "transmission",
            BoundaryCondition::Reflective => "reflective",
            BoundaryCondition::Vacuum => "vacuum",
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryCondition {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transmission" => Ok(BoundaryCondition::Transmission),
            "reflective" => Ok(BoundaryCondition::Reflective),
            "vacuum" => Ok(BoundaryCondition::Vacuum),
            _ => Err(GeomError::UnknownBoundary(s.to_string())),
        }
    }
}

// =============================================================================
// Surface shapes
// =============================================================================

/// The kind of a surface (for logging and quick dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Infinite plane.
    Plane,
    /// Sphere.
    Sphere,
    /// Cylinder of infinite extent along its axis.
    InfiniteCylinder,
}

/// An infinite plane through `point` with unit `normal`.
///
/// The positive halfspace is the side the normal points into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// A point on the plane.
    pub point: Point3,
    /// Unit normal.
    pub normal: Dir3,
}

impl Plane {
    /// Create a plane from a point and a (not necessarily unit) normal.
    pub fn new(point: Point3, normal: Vec3) -> Result<Self> {
        Ok(Self {
            point,
            normal: unitize(normal)?,
        })
    }

    /// Signed distance from `p` to the plane.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        (p - self.point).dot(self.normal.as_ref())
    }
}

/// A sphere of `radius` around `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point.
    pub center: Point3,
    /// Radius, always finite and positive.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere, rejecting non-positive or non-finite radii.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        Ok(Self {
            center,
            radius: check_radius(radius)?,
        })
    }
}

/// A cylinder of `radius` around the infinite line through `axis_point`
/// along `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteCylinder {
    /// A point on the axis.
    pub axis_point: Point3,
    /// Unit axis direction.
    pub axis: Dir3,
    /// Radius, always finite and positive.
    pub radius: f64,
}

impl InfiniteCylinder {
    /// Create a cylinder from a point on its axis, an axis direction (not
    /// necessarily unit) and a radius.
    pub fn new(axis_point: Point3, axis: Vec3, radius: f64) -> Result<Self> {
        Ok(Self {
            axis_point,
            axis: unitize(axis)?,
            radius: check_radius(radius)?,
        })
    }

    /// Component of `p - axis_point` perpendicular to the axis.
    pub fn radial(&self, p: &Point3) -> Vec3 {
        let to_point = p - self.axis_point;
        let axis = self.axis.as_ref();
        to_point - to_point.dot(axis) * axis
    }
}

fn check_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(GeomError::InvalidRadius(radius))
    }
}

/// The closed set of surface shapes usable in CSG regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Infinite plane.
    Plane(Plane),
    /// Sphere.
    Sphere(Sphere),
    /// Cylinder of infinite extent along its axis.
    InfiniteCylinder(InfiniteCylinder),
}

// =============================================================================
// Surface
// =============================================================================

/// An implicit surface tagged with exactly one boundary condition.
///
/// Surfaces are immutable once built and are shared between regions
/// through `Arc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Geometric shape.
    pub shape: Shape,
    /// Behavior applied when a ray crosses this surface.
    pub boundary: BoundaryCondition,
}

impl Surface {
    /// Wrap a shape with the default (transmission) boundary.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            boundary: BoundaryCondition::default(),
        }
    }

    /// Plane through `point` with `normal`.
    pub fn plane(point: Point3, normal: Vec3) -> Result<Self> {
        Ok(Self::new(Shape::Plane(Plane::new(point, normal)?)))
    }

    /// Sphere of `radius` around `center`.
    pub fn sphere(center: Point3, radius: f64) -> Result<Self> {
        Ok(Self::new(Shape::Sphere(Sphere::new(center, radius)?)))
    }

    /// Infinite cylinder of `radius` around the line through `axis_point`
    /// along `axis`.
    pub fn infinite_cylinder(axis_point: Point3, axis: Vec3, radius: f64) -> Result<Self> {
        Ok(Self::new(Shape::InfiniteCylinder(InfiniteCylinder::new(
            axis_point, axis, radius,
        )?)))
    }

    /// Replace the boundary condition.
    pub fn with_boundary(mut self, boundary: BoundaryCondition) -> Self {
        self.boundary = boundary;
        self
    }

    /// The kind of this surface.
    pub fn kind(&self) -> SurfaceKind {
        match self.shape {
            Shape::Plane(_) => SurfaceKind::Plane,
            Shape::Sphere(_) => SurfaceKind::Sphere,
            Shape::InfiniteCylinder(_) => SurfaceKind::InfiniteCylinder,
        }
    }

    /// Signed implicit function value at `p`.
    ///
    /// Non-positive values lie on the negative side. For spheres and
    /// cylinders this is the squared distance minus the squared radius, not
    /// a true distance.
    pub fn evaluate(&self, p: &Point3) -> f64 {
        match &self.shape {
            Shape::Plane(plane) => {
                let n = plane.normal.as_ref();
                n.dot(&p.coords) - n.dot(&plane.point.coords)
            }
            Shape::Sphere(sphere) => {
                (p - sphere.center).norm_squared() - sphere.radius * sphere.radius
            }
            Shape::InfiniteCylinder(cyl) => {
                (p - cyl.axis_point).cross(cyl.axis.as_ref()).norm_squared()
                    - cyl.radius * cyl.radius
            }
        }
    }

    /// Outward unit normal at `p`.
    ///
    /// For a plane this is the plane normal everywhere. For a sphere or
    /// cylinder it is the radial direction through `p`, which fails only
    /// when `p` sits on the center or axis.
    pub fn normal_at(&self, p: &Point3) -> std::result::Result<Dir3, MathError> {
        match &self.shape {
            Shape::Plane(plane) => Ok(plane.normal),
            Shape::Sphere(sphere) => unitize(p - sphere.center),
            Shape::InfiniteCylinder(cyl) => unitize(cyl.radial(p)),
        }
    }
}
