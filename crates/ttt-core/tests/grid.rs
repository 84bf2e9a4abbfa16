// crates/ttt-core/tests/grid.rs
use ttt_core::{Grid, GridError, Operand, Vector};

#[test]
fn is_valid_matches_board_bounds() {
    let grid: Grid<u8> = Grid::new(3, 3);

    for x in -2..5 {
        for y in -2..5 {
            let expected = (0..3).contains(&x) && (0..3).contains(&y);
            assert_eq!(
                grid.is_valid(Vector::new(x, y)),
                expected,
                "is_valid({}, {})",
                x,
                y
            );
        }
    }
}

#[test]
fn set_then_get_round_trips_every_cell() {
    let mut grid: Grid<i32> = Grid::new(3, 3);

    for (i, at) in (0..9).map(|i| (i, grid.index_to_vector(i))).collect::<Vec<_>>() {
        let previous = grid.set(at, i as i32 + 10).expect("valid point");
        assert_eq!(previous, 0);
        assert_eq!(grid.get(at), Some(&(i as i32 + 10)));
    }
}

#[test]
fn out_of_bounds_access_never_aliases() {
    let mut grid: Grid<i32> = Grid::new(3, 3);

    // (-1, 1) would be linear index 2 without a bounds check.
    assert_eq!(grid.get(Vector::new(-1, 1)), None);
    assert_eq!(
        grid.set(Vector::new(-1, 1), 7),
        Err(GridError::OutOfBounds {
            at: Vector::new(-1, 1),
            width: 3,
            height: 3,
        })
    );
    assert_eq!(grid.set(Vector::new(3, 0), 7).unwrap_err().to_string(), "point (3,0) is outside the 3x3 grid");
    assert!(grid.cells().iter().all(|&v| v == 0));
}

#[test]
fn generator_runs_in_row_major_order() {
    let mut visited = Vec::new();
    let grid = Grid::from_fn(3, 2, |at| {
        visited.push(at);
        at.y * 10 + at.x
    });

    let expected: Vec<Vector> = vec![
        Vector::new(0, 0),
        Vector::new(1, 0),
        Vector::new(2, 0),
        Vector::new(0, 1),
        Vector::new(1, 1),
        Vector::new(2, 1),
    ];
    assert_eq!(visited, expected);
    assert_eq!(grid.cells(), &[0, 1, 2, 10, 11, 12]);
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.len(), 6);
}

#[test]
fn fill_overwrites_every_cell() {
    let mut grid = Grid::from_fn(2, 2, |at| at.x + at.y);
    grid.fill(9);
    assert_eq!(grid.cells(), &[9, 9, 9, 9]);
}

#[test]
fn iter_visits_linear_order_and_iter_range_visits_columns_first() {
    let grid = Grid::from_fn(3, 3, |at| at.y * 3 + at.x);

    let linear: Vec<i32> = grid.iter().map(|(_, &v)| v).collect();
    assert_eq!(linear, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);

    let coords: Vec<Vector> = grid.iter().map(|(at, _)| at).collect();
    assert_eq!(coords[4], Vector::new(1, 1));

    // x outer, y inner over the top-left 2x2 block.
    let ranged: Vec<(Vector, i32)> = grid.iter_range(0..2, 0..2).map(|(at, &v)| (at, v)).collect();
    assert_eq!(
        ranged,
        vec![
            (Vector::new(0, 0), 0),
            (Vector::new(0, 1), 3),
            (Vector::new(1, 0), 1),
            (Vector::new(1, 1), 4),
        ]
    );

    // Points off the grid are skipped.
    assert_eq!(grid.iter_range(2..5, 2..5).count(), 1);
}

#[test]
fn elementwise_ops_against_grid_and_scalar() {
    let a = Grid::from_fn(2, 2, |at| (at.y * 2 + at.x) as f64);
    let b = Grid::from_fn(2, 2, |_| 2.0);

    assert_eq!(a.add(&b).unwrap().cells(), &[2.0, 3.0, 4.0, 5.0]);
    assert_eq!(a.subtract(Operand::Scalar(1.0)).unwrap().cells(), &[-1.0, 0.0, 1.0, 2.0]);
    assert_eq!(a.multiply(&b).unwrap().cells(), &[0.0, 2.0, 4.0, 6.0]);
    assert_eq!(a.divide(Operand::Scalar(2.0)).unwrap().cells(), &[0.0, 0.5, 1.0, 1.5]);
}

#[test]
fn float_division_by_zero_yields_infinity_and_nan() {
    let a = Grid::from_fn(2, 1, |at| at.x as f64);
    let zeros: Grid<f64> = Grid::new(2, 1);

    let q = a.divide(&zeros).unwrap();
    assert!(q.cells()[0].is_nan());
    assert_eq!(q.cells()[1], f64::INFINITY);
}

#[test]
fn elementwise_ops_reject_shape_mismatch() {
    let a: Grid<i32> = Grid::new(3, 3);
    let b: Grid<i32> = Grid::new(2, 3);

    assert_eq!(
        a.add(&b),
        Err(GridError::ShapeMismatch {
            left: (3, 3),
            right: (2, 3),
        })
    );
}

#[test]
fn vector_arithmetic() {
    let v = Vector::new(4, -6);

    assert_eq!(v + Vector::new(1, 2), Vector::new(5, -4));
    assert_eq!(v - 1, Vector::new(3, -7));
    assert_eq!(v * Vector::new(2, 3), Vector::new(8, -18));
    assert_eq!(v / 2, Vector::new(2, -3));
    assert_eq!(v.inverse(), Vector::new(-4, 6));
    assert_eq!(-v, v.inverse());

    assert_eq!(v.checked_div_scalar(0), None);
    assert_eq!(v.checked_div(Vector::new(2, 0)), None);
    assert_eq!(v.checked_div(Vector::new(-2, 3)), Some(Vector::new(-2, -2)));
}

#[test]
fn vector_folds_start_from_neutral_elements() {
    let vs = [Vector::new(1, 2), Vector::new(3, 4)];

    assert_eq!(vs.iter().copied().sum::<Vector>(), Vector::new(4, 6));
    assert_eq!(vs.iter().copied().product::<Vector>(), Vector::new(3, 8));
    assert_eq!(std::iter::empty::<Vector>().sum::<Vector>(), Vector::ZERO);
    assert_eq!(std::iter::empty::<Vector>().product::<Vector>(), Vector::ONE);
}
