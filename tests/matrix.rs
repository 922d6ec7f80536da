use softmax_classifier::Matrix;

#[test]
fn matmul_matches_hand_computed_product() {
    let a = Matrix::from_data(vec![
        vec![1.0, 2.0],
        vec![3.0, 4.0],
        vec![5.0, 6.0],
    ]);
    let b = Matrix::from_data(vec![
        vec![7.0, 8.0, 9.0],
        vec![10.0, 11.0, 12.0],
    ]);

    let c = a * b;

    assert_eq!(c.rows, 3);
    assert_eq!(c.cols, 3);
    assert_eq!(c.data[0], vec![27.0, 30.0, 33.0]);
    assert_eq!(c.data[1], vec![61.0, 68.0, 75.0]);
    assert_eq!(c.data[2], vec![95.0, 106.0, 117.0]);
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let m = Matrix::from_data(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
    ]);

    let t = m.transpose();

    assert_eq!(t.rows, 3);
    assert_eq!(t.cols, 2);
    assert_eq!(t.data, vec![
        vec![1.0, 4.0],
        vec![2.0, 5.0],
        vec![3.0, 6.0],
    ]);
}

#[test]
fn row_reductions_and_broadcasts() {
    let m = Matrix::from_data(vec![
        vec![1.0, 5.0, 3.0],
        vec![-2.0, 0.0, 2.0],
    ]);

    assert_eq!(m.row_max(), vec![5.0, 2.0]);
    assert_eq!(m.row_sum(), vec![9.0, 0.0]);

    let shifted = m.sub_col_vector(&m.row_max());
    assert_eq!(shifted.data, vec![
        vec![-4.0, 0.0, -2.0],
        vec![-4.0, -2.0, 0.0],
    ]);

    let scaled = m.div_col_vector(&[2.0, -1.0]);
    assert_eq!(scaled.data, vec![
        vec![0.5, 2.5, 1.5],
        vec![2.0, 0.0, -2.0],
    ]);
}

#[test]
fn elementwise_add_and_sub() {
    let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = Matrix::from_data(vec![vec![0.5, -1.0], vec![2.0, 10.0]]);

    let sum = a.clone() + b.clone();
    assert_eq!(sum.data, vec![vec![1.5, 1.0], vec![5.0, 14.0]]);

    let diff = a - b;
    assert_eq!(diff.data, vec![vec![0.5, 3.0], vec![1.0, -6.0]]);
}

#[test]
fn sum_squares_is_squared_frobenius_norm() {
    let m = Matrix::from_data(vec![
        vec![1.0, -2.0],
        vec![3.0, 0.5],
    ]);
    assert!((m.sum_squares() - 14.25).abs() < 1e-12);
}

#[test]
#[should_panic(expected = "incorrect sizes")]
fn mismatched_matmul_panics() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(2, 3);
    let _ = a * b;
}

#[test]
fn matrix_round_trips_through_json() {
    let m = Matrix::from_data(vec![
        vec![1.5, -2.0],
        vec![0.0, 3.25],
    ]);

    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix = serde_json::from_str(&json).unwrap();

    assert_eq!(back, m);
}
