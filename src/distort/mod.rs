//! Bounded random displacement of lattice vertices.

use rand::{Rng, RngExt};

use crate::error::WarpError;
use crate::geom::Lattice;

/// Returns a copy of `lattice` with every vertex shifted by an independent
/// offset drawn uniformly from `[-max_shift, max_shift]` on each axis.
///
/// Shifted coordinates are clamped per axis to the global min/max of the
/// *input* lattice, so every vertex stays inside the original bounding
/// rectangle even when `max_shift` exceeds the lattice span. Neighbouring
/// vertices may still cross each other.
///
/// Two draws are consumed from `rng` per vertex, x first, in row-major
/// order. A zero `max_shift` returns the lattice unchanged.
pub fn distort<R: Rng + ?Sized>(
    lattice: &Lattice,
    max_shift: i64,
    rng: &mut R,
) -> Result<Lattice, WarpError> {
    if max_shift < 0 {
        return Err(WarpError::parameter(format!(
            "max shift must be non-negative, got {max_shift}"
        )));
    }

    let mut out = lattice.clone();
    let Some(bounds) = lattice.axis_bounds() else {
        return Ok(out);
    };

    for vertex in out.vertices_mut() {
        let dx = rng.random_range(-max_shift..=max_shift);
        let dy = rng.random_range(-max_shift..=max_shift);
        vertex.x = vertex
            .x
            .saturating_add(dx)
            .clamp(bounds.min_x, bounds.max_x);
        vertex.y = vertex
            .y
            .saturating_add(dy)
            .clamp(bounds.min_y, bounds.max_y);
    }

    log::debug!(
        "distorted {}x{} lattice with max shift {}",
        out.rows(),
        out.cols(),
        max_shift
    );

    Ok(out)
}
