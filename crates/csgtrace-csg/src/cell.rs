//! Cells: CSG-defined subvolumes.

use csgtrace_geom::Region;
use csgtrace_math::Point3;

use crate::error::{CsgError, Result};
use crate::expr::CsgExpr;

/// A subvolume defined by a boolean combination of regions.
///
/// The expression tree is validated against the region list when the cell
/// is built, so evaluation never sees a dangling leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    name: Option<String>,
    regions: Vec<Region>,
    expr: CsgExpr,
}

impl Cell {
    /// Create a cell, rejecting an empty region list or any leaf index
    /// outside `0..regions.len()`.
    pub fn new(regions: Vec<Region>, expr: CsgExpr) -> Result<Self> {
        expr.validate(regions.len())?;
        Ok(Self {
            name: None,
            regions,
            expr,
        })
    }

    /// Cell that is the intersection of all `regions`.
    pub fn intersection_of(regions: Vec<Region>) -> Result<Self> {
        let expr = CsgExpr::all(regions.len())
            .ok_or_else(|| CsgError::InvalidCsgTree("cell has no regions".into()))?;
        Self::new(regions, expr)
    }

    /// Attach a human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name, if one was attached.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Regions in index order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Region at `index`.
    pub fn region(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Boolean expression over the regions.
    pub fn expr(&self) -> &CsgExpr {
        &self.expr
    }

    /// Whether `p` lies in this cell.
    pub fn contains(&self, p: &Point3) -> bool {
        self.expr.evaluate(p, &self.regions)
    }
}

/// Whether `p` lies in `cell`.
pub fn is_in_cell(p: &Point3, cell: &Cell) -> bool {
    cell.contains(p)
}
