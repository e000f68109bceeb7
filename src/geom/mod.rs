//! Geometry primitives: rectangles, quadrilaterals and vertex lattices.
//!
//! Coordinates are integer pixel positions with (0, 0) at the top-left of
//! the canvas, x growing rightward and y growing downward.

mod lattice;
mod rect;

pub use lattice::{build_grid, AxisBounds, Lattice, MAX_DIVISIONS};
pub use rect::{is_axis_aligned, quad_to_rect, rect_to_quad, shape_to_rect, Quad, Rect, Vertex};
