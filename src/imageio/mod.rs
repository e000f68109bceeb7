//! Image decoding, encoding and the end-to-end distortion pipeline.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use log::info;

use crate::error::WarpError;
use crate::mesh::Mesh;
use crate::render::transform_mesh;
use crate::warp::{compute_distortion_mesh_seeded, WarpParams};

/// Extension appended to output paths without a recognised image extension.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Decode an image from disk.
pub fn open_image(path: &Path) -> Result<DynamicImage, WarpError> {
    image::open(path).map_err(|source| WarpError::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Keep `path` if its extension names an image format, otherwise append
/// `.jpg`.
pub fn resolve_output_path(path: &Path) -> PathBuf {
    let recognised = path
        .extension()
        .and_then(ImageFormat::from_extension)
        .is_some();

    if recognised {
        path.to_path_buf()
    } else {
        let mut raw = path.as_os_str().to_os_string();
        raw.push(".");
        raw.push(DEFAULT_EXTENSION);
        PathBuf::from(raw)
    }
}

/// Encode `img` to `path`, choosing the format from the extension.
///
/// Images are converted to 8-bit RGB for formats without an alpha channel.
pub fn save_image(img: &DynamicImage, path: &Path) -> Result<(), WarpError> {
    let to_err = |source| WarpError::Image {
        path: path.to_path_buf(),
        source,
    };

    match ImageFormat::from_path(path).map_err(to_err)? {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8())
            .save(path)
            .map_err(to_err),
        _ => img.save(path).map_err(to_err),
    }
}

/// Apply a mesh to a decoded image, keeping its color layout where possible.
fn render(img: &DynamicImage, mesh: &Mesh) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(transform_mesh(buf, mesh)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(transform_mesh(buf, mesh)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(transform_mesh(buf, mesh)),
        other if other.color().has_alpha() => {
            DynamicImage::ImageRgba8(transform_mesh(&other.to_rgba8(), mesh))
        }
        other => DynamicImage::ImageRgb8(transform_mesh(&other.to_rgb8(), mesh)),
    }
}

/// Distort the image at `input` and write the result.
///
/// Returns the path actually written (see [`resolve_output_path`]).
pub fn distort_image(
    input: &Path,
    output: &Path,
    params: &WarpParams,
) -> Result<PathBuf, WarpError> {
    let img = open_image(input)?;
    let (width, height) = (i64::from(img.width()), i64::from(img.height()));
    info!("loaded {} ({}x{})", input.display(), width, height);

    let mesh = compute_distortion_mesh_seeded(width, height, params)?;
    info!(
        "computed {}-cell mesh (max shift {}, {} subdivisions)",
        mesh.len(),
        params.max_shift,
        params.subdivisions
    );

    let warped = render(&img, &mesh);

    let output = resolve_output_path(output);
    save_image(&warped, &output)?;
    info!("wrote {}", output.display());

    Ok(output)
}
