//! Axis-aligned rectangles, quadrilaterals and the conversions between them.

use serde::{Deserialize, Serialize};

use crate::error::WarpError;

/// A single integer lattice point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

impl Vertex {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in XYXY format (x0, y0, x1, y1).
///
/// Construction does NOT enforce `x0 <= x1` / `y0 <= y1`, so a mesh cell read
/// off a crossed lattice can still be represented; use [`Rect::is_ordered`]
/// to check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Rect {
    /// Creates a rectangle from explicit coordinates.
    #[inline]
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Builds a rectangle from a flat coordinate list.
    ///
    /// Fails with [`WarpError::InvalidGeometry`] unless exactly four values
    /// are given.
    pub fn from_slice(coords: &[i64]) -> Result<Self, WarpError> {
        match *coords {
            [x0, y0, x1, y1] => Ok(Self::new(x0, y0, x1, y1)),
            _ => Err(WarpError::geometry(format!(
                "a rectangle needs 4 coordinates, got {}",
                coords.len()
            ))),
        }
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.y1 - self.y0
    }

    /// Returns true if min <= max on both axes.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1
    }

    #[inline]
    pub fn to_array(&self) -> [i64; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }
}

/// A quadrilateral as eight coordinates, corners ordered
/// top-left, bottom-left, bottom-right, top-right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quad(pub [i64; 8]);

impl Quad {
    /// Builds a quad from its corners in TL, BL, BR, TR order.
    pub fn from_corners(tl: Vertex, bl: Vertex, br: Vertex, tr: Vertex) -> Self {
        Self([tl.x, tl.y, bl.x, bl.y, br.x, br.y, tr.x, tr.y])
    }

    /// Builds a quad from a flat coordinate list.
    ///
    /// Fails with [`WarpError::InvalidGeometry`] unless exactly eight values
    /// are given.
    pub fn from_slice(coords: &[i64]) -> Result<Self, WarpError> {
        let coords: [i64; 8] = coords.try_into().map_err(|_| {
            WarpError::geometry(format!(
                "a quadrilateral needs 8 coordinates, got {}",
                coords.len()
            ))
        })?;
        Ok(Self(coords))
    }

    #[inline]
    pub fn top_left(&self) -> Vertex {
        Vertex::new(self.0[0], self.0[1])
    }

    #[inline]
    pub fn bottom_left(&self) -> Vertex {
        Vertex::new(self.0[2], self.0[3])
    }

    #[inline]
    pub fn bottom_right(&self) -> Vertex {
        Vertex::new(self.0[4], self.0[5])
    }

    #[inline]
    pub fn top_right(&self) -> Vertex {
        Vertex::new(self.0[6], self.0[7])
    }

    /// Returns the corners in TL, BL, BR, TR order.
    pub fn corners(&self) -> [Vertex; 4] {
        [
            self.top_left(),
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
        ]
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

/// Returns true if the quad describes an axis-aligned rectangle.
///
/// TL/BL share an x, TL/TR share a y, BR/TR share an x and BL/BR share a y.
pub fn is_axis_aligned(quad: &Quad) -> bool {
    let q = &quad.0;
    q[0] == q[2] && q[1] == q[7] && q[4] == q[6] && q[3] == q[5]
}

/// Reads a rectangle off the TL and BR corners of an axis-aligned quad.
pub fn quad_to_rect(quad: &Quad) -> Result<Rect, WarpError> {
    if !is_axis_aligned(quad) {
        return Err(WarpError::geometry(format!(
            "quadrilateral {:?} is not an axis-aligned rectangle",
            quad.0
        )));
    }
    let q = &quad.0;
    Ok(Rect::new(q[0], q[1], q[4], q[3]))
}

/// Expands a rectangle into its TL, BL, BR, TR corners.
pub fn rect_to_quad(rect: &Rect) -> Quad {
    let Rect { x0, y0, x1, y1 } = *rect;
    Quad([x0, y0, x0, y1, x1, y1, x1, y0])
}

/// Returns the canvas rectangle `(0, 0, width, height)`.
pub fn shape_to_rect(width: i64, height: i64) -> Result<Rect, WarpError> {
    if width <= 0 || height <= 0 {
        return Err(WarpError::geometry(format!(
            "image dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok(Rect::new(0, 0, width, height))
}
