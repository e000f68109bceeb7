//! Mesh assembly: pairing undistorted destination cells with distorted
//! source quads.
//!
//! A [`Mesh`] is the ordered list of `(destination rectangle, source quad)`
//! pairs handed to a mesh-transform renderer. Cells are emitted in
//! row-major order, the same order the lattices are traversed in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WarpError;
use crate::geom::{is_axis_aligned, quad_to_rect, Lattice, Quad, Rect};

/// One grid cell of a mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshCell {
    /// Region written in the output image.
    pub dst: Rect,
    /// Region sampled from the input image.
    pub src: Quad,
}

/// Ordered per-cell correspondence list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mesh {
    cells: Vec<MeshCell>,
}

impl Mesh {
    pub fn new(cells: Vec<MeshCell>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[MeshCell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MeshCell> {
        self.cells.iter()
    }
}

impl IntoIterator for Mesh {
    type Item = MeshCell;
    type IntoIter = std::vec::IntoIter<MeshCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a MeshCell;
    type IntoIter = std::slice::Iter<'a, MeshCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            let d = &cell.dst;
            writeln!(
                f,
                "{i}: dst=({}, {}, {}, {}) src={:?}",
                d.x0, d.y0, d.x1, d.y1, cell.src.0
            )?;
        }
        Ok(())
    }
}

/// Reads the corners of cell `(i, j)` in TL, BL, BR, TR order.
fn cell_quad(lattice: &Lattice, i: usize, j: usize) -> Quad {
    Quad::from_corners(
        lattice.vertex(i, j),
        lattice.vertex(i + 1, j),
        lattice.vertex(i + 1, j + 1),
        lattice.vertex(i, j + 1),
    )
}

/// Builds the mesh for a distorted `src` lattice and an axis-aligned `dst`
/// lattice of the same shape.
///
/// Fails with [`WarpError::DimensionMismatch`] if the shapes differ and with
/// [`WarpError::InvalidGeometry`] if any destination cell is not an
/// axis-aligned rectangle. No partial mesh is returned on failure.
pub fn build_mesh(src: &Lattice, dst: &Lattice) -> Result<Mesh, WarpError> {
    if src.shape() != dst.shape() {
        return Err(WarpError::DimensionMismatch {
            src: src.shape(),
            dst: dst.shape(),
        });
    }

    let (rows, cols) = dst.shape();
    let cell_rows = rows.saturating_sub(1);
    let cell_cols = cols.saturating_sub(1);
    let mut cells = Vec::with_capacity(cell_rows * cell_cols);

    for i in 0..cell_rows {
        for j in 0..cell_cols {
            let dst_quad = cell_quad(dst, i, j);
            if !is_axis_aligned(&dst_quad) {
                return Err(WarpError::geometry(format!(
                    "destination cell ({i}, {j}) is not an axis-aligned rectangle: {:?}",
                    dst_quad.0
                )));
            }
            cells.push(MeshCell {
                dst: quad_to_rect(&dst_quad)?,
                src: cell_quad(src, i, j),
            });
        }
    }

    log::debug!("assembled mesh with {} cells", cells.len());

    Ok(Mesh::new(cells))
}
