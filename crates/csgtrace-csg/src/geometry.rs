//! Geometry: the ordered cell list and the cell locator.

use csgtrace_geom::BoundingBox;
use csgtrace_math::Point3;
use tracing::debug;

use crate::cell::Cell;
use crate::error::{CsgError, Result};

/// An ordered list of cells plus the box bounding the modeled space.
///
/// Cells are expected to partition space, but this is not checked. When
/// cells overlap, location resolves to the lowest-indexed match; use
/// [`Geometry::cells_containing`] to detect overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    cells: Vec<Cell>,
    bounds: BoundingBox,
}

impl Geometry {
    /// Create a geometry from cells and a bounding box.
    pub fn new(cells: Vec<Cell>, bounds: BoundingBox) -> Self {
        Self { cells, bounds }
    }

    /// Cells in index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `id`.
    pub fn cell(&self, id: usize) -> Option<&Cell> {
        self.cells.get(id)
    }

    /// Bounding box used for sampling and visualization.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Index of the first cell containing `p`.
    ///
    /// Points with a NaN or infinite coordinate are in no cell.
    pub fn find_cell_id(&self, p: &Point3) -> Result<usize> {
        if !p.coords.iter().all(|c| c.is_finite()) {
            debug!(x = p.x, y = p.y, z = p.z, "non-finite point");
            return Err(CsgError::CellNotFound(*p));
        }
        self.cells
            .iter()
            .position(|cell| cell.contains(p))
            .ok_or_else(|| {
                debug!(x = p.x, y = p.y, z = p.z, "point is in no cell");
                CsgError::CellNotFound(*p)
            })
    }

    /// First cell containing `p`, with its index.
    pub fn find_cell(&self, p: &Point3) -> Result<(usize, &Cell)> {
        let id = self.find_cell_id(p)?;
        Ok((id, &self.cells[id]))
    }

    /// Indices of every cell containing `p`.
    ///
    /// More than one index means the cells overlap at `p`.
    pub fn cells_containing<'a>(&'a self, p: &'a Point3) -> impl Iterator<Item = usize> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| cell.contains(p))
            .map(|(id, _)| id)
    }
}

/// Index of the first cell of `geometry` containing `p`.
pub fn find_cell_id(p: &Point3, geometry: &Geometry) -> Result<usize> {
    geometry.find_cell_id(p)
}
