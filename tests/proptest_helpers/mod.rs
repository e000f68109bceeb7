#![allow(dead_code)]

use gridwarp::geom::{build_grid, Lattice, Rect, Vertex};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Ordered rectangles with moderate coordinates.
pub fn arb_rect() -> impl Strategy<Value = Rect> {
    (-500i64..500, -500i64..500, 0i64..2000, 0i64..2000)
        .prop_map(|(x0, y0, w, h)| Rect::new(x0, y0, x0 + w, y0 + h))
}

/// Evenly spaced lattices over arbitrary rectangles.
pub fn arb_grid() -> impl Strategy<Value = Lattice> {
    (arb_rect(), 1i64..12, 1i64..12).prop_map(|(rect, w_div, h_div)| {
        build_grid(&rect, w_div, h_div).expect("valid grid parameters")
    })
}

/// Lattices with arbitrary (not necessarily evenly spaced) vertices.
pub fn arb_lattice() -> impl Strategy<Value = Lattice> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec((-300i64..300, -300i64..300), rows * cols).prop_map(move |pts| {
            let vertices = pts.into_iter().map(|(x, y)| Vertex::new(x, y)).collect();
            Lattice::from_vertices(rows, cols, vertices).expect("matching vertex count")
        })
    })
}

/// Per-axis (min, max) of a lattice.
pub fn axis_range(lattice: &Lattice) -> ((i64, i64), (i64, i64)) {
    let xs = lattice.vertices().iter().map(|v| v.x);
    let ys = lattice.vertices().iter().map(|v| v.y);
    (
        (xs.clone().min().unwrap(), xs.max().unwrap()),
        (ys.clone().min().unwrap(), ys.max().unwrap()),
    )
}
