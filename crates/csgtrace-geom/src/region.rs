//! Regions: a surface paired with the side a point must lie on.

use std::sync::Arc;

use csgtrace_math::Point3;

use crate::halfspace::Halfspace;
use crate::surface::Surface;

/// An atomic CSG predicate: "the point lies on `sense` side of `surface`".
///
/// Surfaces are shared, so the same plane can bound several cells with
/// opposite senses.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// The bounding surface.
    pub surface: Arc<Surface>,
    /// Required side of the surface.
    pub sense: Halfspace,
}

impl Region {
    /// Create a region.
    pub fn new(surface: Arc<Surface>, sense: Halfspace) -> Self {
        Self { surface, sense }
    }

    /// Region on the negative side of `surface`.
    pub fn negative(surface: Arc<Surface>) -> Self {
        Self::new(surface, Halfspace::Negative)
    }

    /// Region on the positive side of `surface`.
    pub fn positive(surface: Arc<Surface>) -> Self {
        Self::new(surface, Halfspace::Positive)
    }

    /// Whether `p` satisfies this region's predicate.
    #[inline]
    pub fn contains(&self, p: &Point3) -> bool {
        self.surface.halfspace(p) == self.sense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_surface_opposite_senses() {
        let sphere = Arc::new(Surface::sphere(Point3::origin(), 1.0).unwrap());
        let inside = Region::negative(Arc::clone(&sphere));
        let outside = Region::positive(sphere);

        let p = Point3::new(0.1, 0.2, 0.3);
        let q = Point3::new(3.0, 0.0, 0.0);
        assert!(inside.contains(&p));
        assert!(!outside.contains(&p));
        assert!(!inside.contains(&q));
        assert!(outside.contains(&q));
    }
}
