//! Distortion orchestration: canvas → lattice → distorted lattice → mesh.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::distort::distort;
use crate::error::WarpError;
use crate::geom::{build_grid, shape_to_rect, MAX_DIVISIONS};
use crate::mesh::{build_mesh, Mesh};

/// Default maximum vertex displacement in pixels.
pub const DEFAULT_MAX_SHIFT: i64 = 200;
/// Default number of grid cells per axis.
pub const DEFAULT_SUBDIVISIONS: i64 = 5;

/// Distortion options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarpParams {
    /// Upper bound on how far a vertex moves along each axis.
    pub max_shift: i64,
    /// Grid cells per axis; the same count is used horizontally and vertically.
    pub subdivisions: i64,
    /// Seed for reproducible output. `None` draws from the thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for WarpParams {
    fn default() -> Self {
        Self {
            max_shift: DEFAULT_MAX_SHIFT,
            subdivisions: DEFAULT_SUBDIVISIONS,
            seed: None,
        }
    }
}

/// Validate image dimensions and distortion parameters before running.
pub fn validate_params(width: i64, height: i64, params: &WarpParams) -> Result<(), WarpError> {
    if width <= 0 || height <= 0 {
        return Err(WarpError::parameter(format!(
            "image dimensions must be positive, got {width}x{height}"
        )));
    }

    if params.subdivisions <= 0 {
        return Err(WarpError::parameter(format!(
            "subdivisions must be greater than 0, got {}",
            params.subdivisions
        )));
    }

    if params.subdivisions > MAX_DIVISIONS {
        return Err(WarpError::parameter(format!(
            "subdivisions must be at most {MAX_DIVISIONS}, got {}",
            params.subdivisions
        )));
    }

    if params.max_shift < 0 {
        return Err(WarpError::parameter(format!(
            "max shift must be non-negative, got {}",
            params.max_shift
        )));
    }

    Ok(())
}

/// Compute the distortion mesh for an image of the given size.
///
/// The destination lattice splits the canvas into `subdivisions` cells per
/// axis; the source lattice is the same lattice displaced by up to
/// `max_shift` pixels per vertex using `rng`. No pixels are touched.
pub fn compute_distortion_mesh<R: Rng + ?Sized>(
    image_width: i64,
    image_height: i64,
    max_shift: i64,
    subdivisions: i64,
    rng: &mut R,
) -> Result<Mesh, WarpError> {
    let params = WarpParams {
        max_shift,
        subdivisions,
        seed: None,
    };
    validate_params(image_width, image_height, &params)?;

    let dst_rect = shape_to_rect(image_width, image_height)?;
    let dst_lattice = build_grid(&dst_rect, subdivisions, subdivisions)?;
    let src_lattice = distort(&dst_lattice, max_shift, rng)?;
    build_mesh(&src_lattice, &dst_lattice)
}

/// Compute the distortion mesh, seeding a fresh generator from
/// `params.seed` when present.
pub fn compute_distortion_mesh_seeded(
    image_width: i64,
    image_height: i64,
    params: &WarpParams,
) -> Result<Mesh, WarpError> {
    if let Some(seed) = params.seed {
        let mut rng = StdRng::seed_from_u64(seed);
        compute_distortion_mesh(
            image_width,
            image_height,
            params.max_shift,
            params.subdivisions,
            &mut rng,
        )
    } else {
        let mut rng = rand::rng();
        compute_distortion_mesh(
            image_width,
            image_height,
            params.max_shift,
            params.subdivisions,
            &mut rng,
        )
    }
}
