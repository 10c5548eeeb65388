use approx::assert_relative_eq;
use rref::{
    real_matrix::parse::{parse_matrix, parse_vector},
    reduced_row_echelon, RealMatrix, RrefError,
};

#[test]
fn solve_three_by_three_system_from_text() {
    let a = parse_matrix("2 1 -1\n-3 -1 2\n-2 1 2\n").unwrap();
    let b = parse_vector("8, -11, -3").unwrap();
    let reduction = reduced_row_echelon(&a, Some(&b)).unwrap();
    assert!(reduction.matrix.approx_eq(&RealMatrix::identity(3), 1e-12));
    let x = reduction.rhs.unwrap();
    assert_relative_eq!(x[0], 2.0, epsilon = 1e-12);
    assert_relative_eq!(x[1], 3.0, epsilon = 1e-12);
    assert_relative_eq!(x[2], -1.0, epsilon = 1e-12);
}

#[test]
fn inconsistent_system_is_returned_as_transformed() {
    // x + y = 1 and 2x + 2y = 3 have no solution; the zero row keeps the
    // leftover right-hand side instead of failing
    let a = parse_matrix("1 1\n2 2\n").unwrap();
    let reduction = reduced_row_echelon(&a, Some(&[1.0, 3.0])).unwrap();
    assert_eq!(reduction.matrix.row(1), &[0.0, 0.0]);
    assert_eq!(reduction.rhs, Some(vec![1.0, 1.0]));
}

#[test]
fn mismatched_rhs_is_an_error() {
    let a = RealMatrix::zeroes(3, 2);
    assert_eq!(
        reduced_row_echelon(&a, Some(&[0.0, 0.0])).unwrap_err(),
        RrefError::RowCountMismatch { rows: 3, rhs_len: 2 }
    );
}
