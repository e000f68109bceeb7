//! Reference mesh-transform renderer.
//!
//! Resamples an image so that each mesh cell's source quad is stretched onto
//! its destination rectangle. The geometry modules never call into this;
//! it exists so the CLI can produce an image end to end.

use image::{ImageBuffer, Pixel};

use crate::geom::Quad;
use crate::mesh::Mesh;

/// Bilinear blend of the quad corners at normalized position `(u, v)`.
///
/// `(0, 0)` maps to the top-left corner, `(1, 1)` to the bottom-right.
fn quad_point(quad: &Quad, u: f64, v: f64) -> (f64, f64) {
    let [tl, bl, br, tr] = quad.corners();
    let blend = |a: i64, b: i64, c: i64, d: i64| {
        a as f64 * (1.0 - u) * (1.0 - v)
            + b as f64 * (1.0 - u) * v
            + c as f64 * u * v
            + d as f64 * u * (1.0 - v)
    };
    (blend(tl.x, bl.x, br.x, tr.x), blend(tl.y, bl.y, br.y, tr.y))
}

/// Applies `mesh` to `src`, returning a new image of the same size.
///
/// Output pixels whose centre falls inside a destination rectangle are
/// sampled (nearest neighbour, clamped to the image) from the bilinearly
/// mapped point of the paired source quad. Pixels outside every rectangle
/// keep the default value.
pub fn transform_mesh<P>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    mesh: &Mesh,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    let (width, height) = src.dimensions();
    let mut dst = ImageBuffer::new(width, height);
    if width == 0 || height == 0 {
        return dst;
    }

    let max_x = (width - 1) as f64;
    let max_y = (height - 1) as f64;

    for cell in mesh {
        let rect = cell.dst;
        let (w, h) = (rect.width(), rect.height());
        if w <= 0 || h <= 0 {
            continue;
        }

        let x_start = rect.x0.max(0);
        let y_start = rect.y0.max(0);
        let x_end = rect.x1.min(width as i64);
        let y_end = rect.y1.min(height as i64);

        for y in y_start..y_end {
            let v = ((y - rect.y0) as f64 + 0.5) / h as f64;
            for x in x_start..x_end {
                let u = ((x - rect.x0) as f64 + 0.5) / w as f64;
                let (sx, sy) = quad_point(&cell.src, u, v);
                let sx = sx.floor().clamp(0.0, max_x) as u32;
                let sy = sy.floor().clamp(0.0, max_y) as u32;
                dst.put_pixel(x as u32, y as u32, *src.get_pixel(sx, sy));
            }
        }
    }

    dst
}
