use gridwarp::geom::{build_grid, is_axis_aligned, quad_to_rect, rect_to_quad, Vertex};
use proptest::prelude::*;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn rect_expansion_is_axis_aligned(rect in proptest_helpers::arb_rect()) {
        prop_assert!(is_axis_aligned(&rect_to_quad(&rect)));
    }

    #[test]
    fn quad_rect_round_trip(rect in proptest_helpers::arb_rect()) {
        let back = quad_to_rect(&rect_to_quad(&rect)).expect("axis-aligned quad");
        prop_assert_eq!(back, rect);
    }

    #[test]
    fn grid_has_expected_shape_and_corners(
        rect in proptest_helpers::arb_rect(),
        w_div in 1i64..20,
        h_div in 1i64..20,
    ) {
        let grid = build_grid(&rect, w_div, h_div).expect("valid grid");
        prop_assert_eq!(grid.shape(), (h_div as usize + 1, w_div as usize + 1));
        prop_assert_eq!(grid.vertex(0, 0), Vertex::new(rect.x0, rect.y0));
        prop_assert_eq!(
            grid.vertex(h_div as usize, w_div as usize),
            Vertex::new(rect.x1, rect.y1)
        );
    }

    #[test]
    fn grid_samples_truncate_toward_zero(
        rect in proptest_helpers::arb_rect(),
        w_div in 1i64..20,
    ) {
        let grid = build_grid(&rect, w_div, 1).expect("valid grid");
        for j in 0..=w_div {
            let exact = (rect.x0 * w_div + j * rect.width()) as f64 / w_div as f64;
            prop_assert_eq!(grid.vertex(0, j as usize).x, exact.trunc() as i64);
        }
    }

    #[test]
    fn grid_rows_and_columns_share_coordinates(grid in proptest_helpers::arb_grid()) {
        let (rows, cols) = grid.shape();
        for i in 0..rows {
            for j in 0..cols {
                prop_assert_eq!(grid.vertex(i, j).x, grid.vertex(0, j).x);
                prop_assert_eq!(grid.vertex(i, j).y, grid.vertex(i, 0).y);
            }
        }
    }
}
