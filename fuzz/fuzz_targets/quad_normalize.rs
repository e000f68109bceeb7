//! Fuzz target for quad/rect normalization.
//!
//! This fuzzer reads arbitrary bytes as a list of i64 coordinates and feeds
//! them through the quad and rect constructors and conversions, checking
//! for panics.

#![no_main]

use gridwarp::geom::{is_axis_aligned, quad_to_rect, rect_to_quad, Quad, Rect};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let coords: Vec<i64> = data
        .chunks_exact(8)
        .map(|c| i64::from_le_bytes(c.try_into().unwrap()))
        .collect();

    if let Ok(quad) = Quad::from_slice(&coords) {
        match quad_to_rect(&quad) {
            Ok(rect) => assert_eq!(rect_to_quad(&rect), quad),
            Err(_) => assert!(!is_axis_aligned(&quad)),
        }
    }

    if let Ok(rect) = Rect::from_slice(&coords) {
        assert_eq!(quad_to_rect(&rect_to_quad(&rect)).unwrap(), rect);
    }
});
