//! Point-versus-surface halfspace classification.
//!
//! This is the atomic predicate of CSG evaluation. It is a pure function of
//! the point and the surface: no caching, no shared state.

use std::fmt;

use csgtrace_math::Point3;

use crate::surface::Surface;

/// One of the two sides a surface divides space into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Halfspace {
    /// The defining side: inside a sphere or cylinder, behind a plane.
    /// Points exactly on the surface belong here.
    Negative,
    /// The side the normal points into.
    Positive,
}

impl Halfspace {
    /// Classify a signed implicit function value.
    ///
    /// NaN compares false against zero and lands on `Positive`; callers
    /// that can see non-finite points must reject them first.
    #[inline]
    pub fn of_value(value: f64) -> Self {
        if value <= 0.0 {
            Halfspace::Negative
        } else {
            Halfspace::Positive
        }
    }

    /// The sign as `-1` or `+1`.
    pub fn sign(self) -> i8 {
        match self {
            Halfspace::Negative => -1,
            Halfspace::Positive => 1,
        }
    }

    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Halfspace::Negative => Halfspace::Positive,
            Halfspace::Positive => Halfspace::Negative,
        }
    }
}

impl TryFrom<i32> for Halfspace {
    type Error = i32;

    /// Accepts exactly `-1` and `+1`; any other value is handed back.
    fn try_from(sign: i32) -> Result<Self, Self::Error> {
        match sign {
            -1 => Ok(Halfspace::Negative),
            1 => Ok(Halfspace::Positive),
            other => Err(other),
        }
    }
}

impl fmt::Display for Halfspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Halfspace::Negative => "-",
            Halfspace::Positive => "+",
        })
    }
}

/// Which side of `surface` the point `p` lies on.
///
/// - Plane: sign of `n·p - n·q`
/// - Sphere: sign of `|p - c|² - r²`
/// - Infinite cylinder: sign of `|(p - a) × axis|² - r²`
///
/// Zero maps to [`Halfspace::Negative`].
#[inline]
pub fn halfspace(p: &Point3, surface: &Surface) -> Halfspace {
    Halfspace::of_value(surface.evaluate(p))
}

impl Surface {
    /// Which side of this surface `p` lies on. See [`halfspace`].
    pub fn halfspace(&self, p: &Point3) -> Halfspace {
        halfspace(p, self)
    }
}
