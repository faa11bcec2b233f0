//! Boolean expression trees over region indices.

use std::ops::{BitAnd, BitOr, Not};

use csgtrace_geom::Region;
use csgtrace_math::Point3;

use crate::error::{CsgError, Result};

/// A boolean combination of a cell's regions.
///
/// Leaves hold 0-based indices into the owning cell's region list. Trees
/// are built directly (or with the `&`, `|` and `!` operators) and
/// bounds-checked once, when the cell is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsgExpr {
    /// The region at this index.
    Leaf(usize),
    /// Both sub-expressions hold.
    And(Box<CsgExpr>, Box<CsgExpr>),
    /// Either sub-expression holds.
    Or(Box<CsgExpr>, Box<CsgExpr>),
    /// The sub-expression does not hold.
    Not(Box<CsgExpr>),
}

impl CsgExpr {
    /// Leaf referencing region `index`.
    pub fn leaf(index: usize) -> Self {
        CsgExpr::Leaf(index)
    }

    /// Intersection of `self` and `rhs`.
    pub fn and(self, rhs: CsgExpr) -> Self {
        CsgExpr::And(Box::new(self), Box::new(rhs))
    }

    /// Union of `self` and `rhs`.
    pub fn or(self, rhs: CsgExpr) -> Self {
        CsgExpr::Or(Box::new(self), Box::new(rhs))
    }

    /// Intersection of regions `0..count`, or `None` when `count` is zero.
    pub fn all(count: usize) -> Option<Self> {
        (0..count).map(CsgExpr::Leaf).reduce(CsgExpr::and)
    }

    /// Union of regions `0..count`, or `None` when `count` is zero.
    pub fn any(count: usize) -> Option<Self> {
        (0..count).map(CsgExpr::Leaf).reduce(CsgExpr::or)
    }

    /// Largest leaf index in the tree.
    pub fn max_leaf(&self) -> usize {
        match self {
            CsgExpr::Leaf(i) => *i,
            CsgExpr::And(l, r) | CsgExpr::Or(l, r) => l.max_leaf().max(r.max_leaf()),
            CsgExpr::Not(n) => n.max_leaf(),
        }
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            CsgExpr::Leaf(_) => 1,
            CsgExpr::And(l, r) | CsgExpr::Or(l, r) => 1 + l.node_count() + r.node_count(),
            CsgExpr::Not(n) => 1 + n.node_count(),
        }
    }

    /// Check that every leaf indexes into a list of `region_count` regions.
    pub fn validate(&self, region_count: usize) -> Result<()> {
        if region_count == 0 {
            return Err(CsgError::InvalidCsgTree("cell has no regions".into()));
        }
        let max = self.max_leaf();
        if max >= region_count {
            return Err(CsgError::InvalidCsgTree(format!(
                "leaf index {max} out of range for {region_count} regions"
            )));
        }
        Ok(())
    }

    /// Evaluate the tree at `p` against `regions`.
    ///
    /// `Leaf(i)` holds when `p` is on the required side of region `i`.
    /// Both branches of `And`/`Or` are evaluated; there is no
    /// short-circuit guarantee. Callers are expected to have validated the
    /// tree against `regions` (as [`Cell`](crate::Cell) does); a dangling
    /// leaf evaluates to `false`.
    pub fn evaluate(&self, p: &Point3, regions: &[Region]) -> bool {
        match self {
            CsgExpr::Leaf(i) => regions.get(*i).is_some_and(|region| region.contains(p)),
            CsgExpr::And(l, r) => {
                let l = l.evaluate(p, regions);
                let r = r.evaluate(p, regions);
                l && r
            }
            CsgExpr::Or(l, r) => {
                let l = l.evaluate(p, regions);
                let r = r.evaluate(p, regions);
                l || r
            }
            CsgExpr::Not(n) => !n.evaluate(p, regions),
        }
    }
}

impl BitAnd for CsgExpr {
    type Output = CsgExpr;

    fn bitand(self, rhs: CsgExpr) -> CsgExpr {
        self.and(rhs)
    }
}

impl BitOr for CsgExpr {
    type Output = CsgExpr;

    fn bitor(self, rhs: CsgExpr) -> CsgExpr {
        self.or(rhs)
    }
}

impl Not for CsgExpr {
    type Output = CsgExpr;

    fn not(self) -> CsgExpr {
        CsgExpr::Not(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csgtrace_geom::Surface;
    use csgtrace_math::Vec3;
    use std::sync::Arc;

    /// Slab -1 <= x <= 1 as two planes.
    fn slab() -> Vec<Region> {
        let left = Arc::new(Surface::plane(Point3::new(-1.0, 0.0, 0.0), Vec3::x()).unwrap());
        let right = Arc::new(Surface::plane(Point3::new(1.0, 0.0, 0.0), Vec3::x()).unwrap());
        vec![Region::positive(left), Region::negative(right)]
    }

    #[test]
    fn test_operators_build_tree() {
        let e = CsgExpr::leaf(0) & !CsgExpr::leaf(1) | CsgExpr::leaf(2);
        assert_eq!(
            e,
            CsgExpr::Or(
                Box::new(CsgExpr::And(
                    Box::new(CsgExpr::Leaf(0)),
                    Box::new(CsgExpr::Not(Box::new(CsgExpr::Leaf(1)))),
                )),
                Box::new(CsgExpr::Leaf(2)),
            )
        );
        assert_eq!(e.max_leaf(), 2);
        assert_eq!(e.node_count(), 6);
    }

    #[test]
    fn test_all_and_any() {
        assert!(CsgExpr::all(0).is_none());
        assert_eq!(CsgExpr::all(1), Some(CsgExpr::Leaf(0)));
        assert_eq!(CsgExpr::all(3).unwrap().max_leaf(), 2);
        assert_eq!(
            CsgExpr::any(2),
            Some(CsgExpr::leaf(0) | CsgExpr::leaf(1))
        );
    }

    #[test]
    fn test_validate() {
        let e = CsgExpr::leaf(0) & CsgExpr::leaf(3);
        assert!(e.validate(4).is_ok());
        assert!(matches!(e.validate(3), Err(CsgError::InvalidCsgTree(_))));
        assert!(CsgExpr::leaf(0).validate(0).is_err());
    }

    #[test]
    fn test_evaluate_and_or_not() {
        let regions = slab();
        let inside = Point3::new(0.0, 4.0, 0.0);
        let left_of = Point3::new(-2.0, 0.0, 0.0);

        let both = CsgExpr::leaf(0) & CsgExpr::leaf(1);
        assert!(both.evaluate(&inside, &regions));
        assert!(!both.evaluate(&left_of, &regions));

        let either = CsgExpr::leaf(0) | CsgExpr::leaf(1);
        assert!(either.evaluate(&left_of, &regions));

        let outside = !both;
        assert!(outside.evaluate(&left_of, &regions));
        assert!(!outside.evaluate(&inside, &regions));
    }
}
