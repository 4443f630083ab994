//! Tests for grid rotation, mirroring and oriented views

#[cfg(test)]
mod tests {
    use jigsawtile::spatial::grid::{
        Orientation, OrientedView, Transform, flip, rotate, strip_border,
    };
    use ndarray::{Array2, array};

    fn numbered(rows: usize, cols: usize) -> Array2<usize> {
        Array2::from_shape_fn((rows, cols), |(r, c)| r * cols + c)
    }

    // Tests counter-clockwise rotation of a non-square grid
    // Verified by inverting Axis(1) instead of Axis(0) for left turns
    #[test]
    fn test_rotate_left_moves_last_column_to_first_row() {
        let grid = array![[1, 2, 3], [4, 5, 6]];
        assert_eq!(rotate(&grid, true), array![[3, 6], [2, 5], [1, 4]]);
    }

    #[test]
    fn test_rotate_right_moves_first_column_to_first_row() {
        let grid = array![[1, 2, 3], [4, 5, 6]];
        assert_eq!(rotate(&grid, false), array![[4, 1], [5, 2], [6, 3]]);
    }

    #[test]
    fn test_rotations_compose_to_identity() {
        let grid = numbered(3, 5);
        assert_eq!(rotate(&rotate(&grid, true), false), grid);

        let four_turns = (0..4).fold(grid.clone(), |g, _| rotate(&g, true));
        assert_eq!(four_turns, grid);
    }

    #[test]
    fn test_flip_axes() {
        let grid = array![[1, 2, 3], [4, 5, 6]];
        assert_eq!(flip(&grid, true), array![[4, 5, 6], [1, 2, 3]]);
        assert_eq!(flip(&grid, false), array![[3, 2, 1], [6, 5, 4]]);
        assert_eq!(
            Transform::Flip { by_vertical: true }.apply(&grid),
            flip(&grid, true)
        );
        assert_eq!(
            Transform::Rotate { to_left: false }.apply(&grid),
            rotate(&grid, false)
        );
    }

    // Tests removal of the outer ring and the degenerate case
    // Verified by slicing width..rows instead of width..rows - width
    #[test]
    fn test_strip_border() {
        let grid = numbered(4, 4);
        assert_eq!(strip_border(&grid, 1), array![[5, 6], [9, 10]]);

        let tiny = numbered(1, 1);
        assert_eq!(strip_border(&tiny, 1).len(), 0);
    }

    // Tests that rows and columns are trimmed along their own axes
    // Verified by slicing both axes with the row range
    #[test]
    fn test_strip_border_non_square() {
        let grid = numbered(4, 6);
        assert_eq!(strip_border(&grid, 1), array![[7, 8, 9, 10], [13, 14, 15, 16]]);
        assert_eq!(strip_border(&grid, 2).dim(), (0, 2));
        assert_eq!(strip_border(&grid, 3).dim(), (0, 0));
    }

    #[test]
    fn test_orientation_wraps_turns() {
        assert_eq!(Orientation::new(true, 5), Orientation::new(true, 1));
        assert_eq!(Orientation::default(), Orientation::IDENTITY);
        assert_eq!(
            Orientation::new(true, 2).transforms(),
            vec![
                Transform::Flip { by_vertical: false },
                Transform::Rotate { to_left: true },
                Transform::Rotate { to_left: true },
            ]
        );
        assert_eq!(Orientation::new(false, 3).dims((3, 5)), (5, 3));
        assert_eq!(Orientation::new(true, 2).dims((3, 5)), (3, 5));
    }

    // Tests that every oriented view reads exactly like the materialized grid
    // Verified by mirroring before undoing the turns in source_index
    #[test]
    fn test_oriented_view_matches_applied_orientation() {
        let grid = numbered(3, 5);
        for orientation in Orientation::ALL {
            let applied = orientation.apply(&grid);
            let view = OrientedView::new(&grid, orientation);
            assert_eq!(view.dim(), applied.dim(), "{orientation:?}");
            assert_eq!(view.orientation(), orientation);

            for ((row, col), value) in applied.indexed_iter() {
                assert_eq!(view.get(row, col), Some(value), "{orientation:?}");
            }
        }
    }

    #[test]
    fn test_oriented_view_rejects_outside_positions() {
        let grid = numbered(3, 5);
        let view = OrientedView::new(&grid, Orientation::new(false, 1));
        assert_eq!(view.dim(), (5, 3));
        assert!(view.get(4, 2).is_some());
        assert!(view.get(5, 0).is_none());
        assert!(view.get(0, 3).is_none());
    }

    #[test]
    fn test_all_orientations_are_distinct() {
        let grid = numbered(3, 3);
        let views: Vec<Array2<usize>> = Orientation::ALL
            .iter()
            .map(|orientation| orientation.apply(&grid))
            .collect();
        for (index, view) in views.iter().enumerate() {
            assert_eq!(views.iter().position(|other| other == view), Some(index));
        }
    }
}
