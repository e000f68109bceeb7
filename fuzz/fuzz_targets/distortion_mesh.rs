//! Fuzz target for mesh computation.
//!
//! Arbitrary bytes pick the image size, shift and subdivision count; the
//! computation must either succeed with a well-formed mesh or return an
//! error, never panic.

#![no_main]

use gridwarp::warp::{compute_distortion_mesh_seeded, WarpParams};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    let word = |i: usize| i16::from_le_bytes([data[i], data[i + 1]]) as i64;
    let width = word(0);
    let height = word(2);
    let max_shift = word(4);
    let subdivisions = word(6);
    let seed = u64::from_le_bytes(data[8..16].try_into().unwrap());

    let params = WarpParams {
        max_shift,
        subdivisions,
        seed: Some(seed),
    };

    if let Ok(mesh) = compute_distortion_mesh_seeded(width, height, &params) {
        assert_eq!(mesh.len() as i64, subdivisions * subdivisions);
        for cell in mesh.iter() {
            assert!(cell.dst.is_ordered());
        }
    }
});
