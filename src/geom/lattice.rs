//! Regular vertex lattices covering a rectangle.

use super::rect::{Rect, Vertex};
use crate::error::WarpError;

/// A row-major grid of integer vertices.
///
/// Row index grows downward, column index grows rightward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    rows: usize,
    cols: usize,
    vertices: Vec<Vertex>,
}

/// Largest division count [`build_grid`] accepts on either axis.
pub const MAX_DIVISIONS: i64 = 1024;

/// Per-axis extremes of a lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisBounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Lattice {
    /// Wraps a row-major vertex list.
    ///
    /// Fails with [`WarpError::InvalidGeometry`] if `vertices.len()` is not
    /// `rows * cols`.
    pub fn from_vertices(
        rows: usize,
        cols: usize,
        vertices: Vec<Vertex>,
    ) -> Result<Self, WarpError> {
        if rows.checked_mul(cols) != Some(vertices.len()) {
            return Err(WarpError::geometry(format!(
                "a {rows}x{cols} lattice needs {} vertices, got {}",
                rows.saturating_mul(cols),
                vertices.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            vertices,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the vertex at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the lattice.
    #[inline]
    pub fn vertex(&self, row: usize, col: usize) -> Vertex {
        assert!(row < self.rows && col < self.cols, "vertex out of range");
        self.vertices[row * self.cols + col]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// Global min/max over the whole lattice, computed per axis.
    ///
    /// Returns `None` for an empty lattice.
    pub fn axis_bounds(&self) -> Option<AxisBounds> {
        let first = self.vertices.first()?;
        let init = AxisBounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(self.vertices.iter().fold(init, |b, v| AxisBounds {
            min_x: b.min_x.min(v.x),
            max_x: b.max_x.max(v.x),
            min_y: b.min_y.min(v.y),
            max_y: b.max_y.max(v.y),
        }))
    }
}

/// Builds an evenly spaced `(h_div + 1) x (w_div + 1)` lattice over `rect`.
///
/// Each coordinate is `x0 + i * (x1 - x0) / w_div` truncated toward zero, so
/// the last row and column land exactly on the far corner. Divisions must lie
/// in `1..=MAX_DIVISIONS`.
pub fn build_grid(rect: &Rect, w_div: i64, h_div: i64) -> Result<Lattice, WarpError> {
    if w_div < 1 || h_div < 1 {
        return Err(WarpError::parameter(format!(
            "grid divisions must be at least 1, got {w_div}x{h_div}"
        )));
    }
    if w_div > MAX_DIVISIONS || h_div > MAX_DIVISIONS {
        return Err(WarpError::parameter(format!(
            "grid divisions must be at most {MAX_DIVISIONS}, got {w_div}x{h_div}"
        )));
    }

    let xs = axis_samples(rect.x0, rect.x1, w_div);
    let ys = axis_samples(rect.y0, rect.y1, h_div);

    let vertices = ys
        .iter()
        .flat_map(|&y| xs.iter().map(move |&x| Vertex::new(x, y)))
        .collect();

    log::debug!(
        "built {}x{} lattice over {:?}",
        ys.len(),
        xs.len(),
        rect.to_array()
    );

    Lattice::from_vertices(ys.len(), xs.len(), vertices)
}

// Widened to i128 so the products cannot overflow; each sample lies between
// `start` and `end` and so fits back into i64. `/` truncates toward zero.
fn axis_samples(start: i64, end: i64, divisions: i64) -> Vec<i64> {
    let start = i128::from(start);
    let span = i128::from(end) - start;
    let divisions = i128::from(divisions);
    (0..=divisions)
        .map(|i| ((start * divisions + i * span) / divisions) as i64)
        .collect()
}
