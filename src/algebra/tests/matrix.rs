#![allow(non_snake_case)]
use super::*;

fn test_matrix_4x4() -> CscMatrix<f64> {
    // A =
    //[ 4.0  -3.0   7.0    ⋅ ]
    //[  ⋅    8.0  -1.0    ⋅ ]
    //[ 1.0    ⋅    2.0  -3.0]
    //[  ⋅   -1.0    ⋅    1.0]
    let Ap = vec![0, 2, 5, 8, 10];
    let Ai = vec![0, 2, 0, 1, 3, 0, 1, 2, 2, 3];
    let Ax = vec![4., 1., -3., 8., -1., 7., -1., 2., -3., 1.];
    CscMatrix::new(4, 4, Ap, Ai, Ax)
}

fn test_matrix_3x4() -> CscMatrix<f64> {
    // A =
    //[ 1.0    ⋅   -2.0    ⋅ ]
    //[  ⋅    3.0    ⋅     ⋅ ]
    //[ 4.0    ⋅     ⋅   -5.0]
    let Ap = vec![0, 2, 3, 4, 5];
    let Ai = vec![0, 2, 1, 0, 2];
    let Ax = vec![1., 4., 3., -2., -5.];
    CscMatrix::new(3, 4, Ap, Ai, Ax)
}

#[test]
fn test_check_format() {
    let A = test_matrix_4x4();
    assert!(A.check_format().is_ok());

    let mut B = A.clone();
    B.rowval.swap(0, 1);
    assert_eq!(B.check_format(), Err(SparseFormatError::BadRowOrdering));

    let mut B = A.clone();
    B.rowval[1] = 7;
    assert_eq!(B.check_format(), Err(SparseFormatError::BadRowval));

    let mut B = A;
    B.colptr[1] = 6;
    assert_eq!(B.check_format(), Err(SparseFormatError::BadColptr));
}

#[test]
fn test_gemv() {
    let A = test_matrix_3x4();
    let x = vec![1., 2., 3., 4.];
    let mut y = vec![1., 1., 1.];

    // y = 2Ax + y
    A.gemv(&mut y, &x, 2., 1.).unwrap();
    assert_eq!(y, vec![-9., 13., -31.]);

    // y = A'z, with y overwritten
    let z = vec![1., -1., 2.];
    let mut y = vec![f64::NAN; 4];
    A.t().gemv(&mut y, &z, 1., 0.).unwrap();
    assert_eq!(y, vec![9., -3., -2., -10.]);

    let mut bad = vec![0.; 4];
    assert_eq!(
        A.gemv(&mut bad, &x, 1., 0.),
        Err(MatrixDimensionError::IncompatibleDimension)
    );
    assert!(A.t().gemv(&mut y, &x, 1., 0.).is_err());
}

#[test]
fn test_transpose() {
    let A = test_matrix_3x4();
    let At = A.transpose();
    assert_eq!(At.size(), (4, 3));
    assert!(At.check_format().is_ok());
    assert_eq!(At.get_entry((3, 2)), Some(-5.));
    assert_eq!(At.get_entry((2, 0)), Some(-2.));
    assert_eq!(At.transpose(), A);
}

#[test]
fn test_add_linearity() {
    let mut gen = rng();
    for &(m, n) in &[(1, 1), (5, 3), (3, 7), (10, 10), (0, 4)] {
        let A = random_coo(&mut gen, m, n, 0.3).to_csc();
        let B = random_coo(&mut gen, m, n, 0.3).to_csc();
        let (alpha, beta) = (1.5, -0.25);

        let C = CscMatrix::add(alpha, &A, beta, &B).unwrap();
        assert!(C.check_format().is_ok());
        assert!(C.nnz() <= A.nnz() + B.nnz());

        let (Ad, Bd) = (A.to_dense(), B.to_dense());
        let expected: Vec<Vec<f64>> = Ad
            .iter()
            .zip(&Bd)
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| alpha * x + beta * y).collect())
            .collect();
        assert!(max_abs_diff(&C.to_dense(), &expected) < 1e-14);
    }

    let A = test_matrix_4x4();
    let B = test_matrix_3x4();
    assert!(CscMatrix::add(1., &A, 1., &B).is_err());
}

#[test]
fn test_multiply_dense_reference() {
    let mut gen = rng();
    for &(m, k, n) in &[(4, 3, 5), (6, 6, 6), (1, 8, 2), (3, 0, 4)] {
        let A = random_coo(&mut gen, m, k, 0.4).to_csc();
        let B = random_coo(&mut gen, k, n, 0.4).to_csc();
        let C = CscMatrix::multiply(&A, &B).unwrap();
        assert_eq!(C.size(), (m, n));
        assert!(C.check_format().is_ok());

        let expected = dense_matmul(&A.to_dense(), &B.to_dense(), m, k, n);
        assert!(max_abs_diff(&C.to_dense(), &expected) < 1e-14);
        if k == 0 {
            assert_eq!(C.nnz(), 0);
        }
    }

    let A = test_matrix_3x4();
    assert!(CscMatrix::multiply(&A, &A).is_err());
}

#[test]
fn test_dropzeros() {
    let mut A = test_matrix_4x4();
    A.nzval[3] = 0.;
    A.nzval[7] = 0.;
    let expected = A.nzval.iter().filter(|v| v.abs() > 0.).count();

    let nz = A.dropzeros(0.);
    assert_eq!(nz, expected);
    assert_eq!(A.nnz(), 8);
    assert!(A.nzval.iter().all(|&v| v != 0.));
    assert!(A.check_format().is_ok());

    // tolerance drop keeps only |v| > 3
    let nz = A.dropzeros(3.);
    assert_eq!(nz, 2);
    assert_eq!(A.nzval, vec![4., 7.]);
}

#[test]
fn test_cleanup_sums_duplicates() {
    // column 0 holds row 1 twice, column 1 holds row 0 three times
    let mut A = CscMatrix::new(
        2,
        2,
        vec![0, 3, 6],
        vec![1, 0, 1, 0, 0, 0],
        vec![1., 2., 3., 4., 5., 6.],
    );
    let nz = A.cleanup();
    assert_eq!(nz, 3);
    assert_eq!(A.colptr, vec![0, 2, 3]);
    assert_eq!(A.rowval, vec![1, 0, 0]);
    assert_eq!(A.nzval, vec![4., 2., 15.]);

    A.sort_indices();
    assert_eq!(A.rowval, vec![0, 1, 0]);
    assert_eq!(A.nzval, vec![2., 4., 15.]);
}

#[test]
fn test_keep() {
    let mut A = test_matrix_4x4();
    // keep the strict upper triangle
    A.keep(|i, j, _| i < j);
    assert_eq!(A.colptr, vec![0, 0, 1, 3, 4]);
    assert_eq!(A.nzval, vec![-3., 7., -1., -3.]);
}

#[test]
fn test_norms() {
    let A = test_matrix_4x4();
    assert_eq!(A.norm(MatrixNorm::One), 12.);
    assert_eq!(A.norm(MatrixNorm::Infinity), 14.);
    assert_eq!(A.norm(MatrixNorm::MaxAbs), 8.);
    let fro: f64 = A.nzval.iter().map(|v| v * v).sum::<f64>().sqrt();
    assert!((A.norm(MatrixNorm::Frobenius) - fro).abs() < 1e-15);

    let Z = CscMatrix::<f64>::spalloc(3, 2, 0);
    assert_eq!(Z.norm(MatrixNorm::Infinity), 0.);
}

#[test]
fn test_approx_eq() {
    let A = test_matrix_4x4();
    let mut B = A.clone();
    B.nzval[2] += 1e-10;
    assert!(A.approx_eq(&B, 1e-9));
    assert!(!A.approx_eq(&B, 1e-11));

    B.dropzeros(7.5);
    assert!(!A.approx_eq(&B, 1e3));
}

#[test]
fn test_scale_negate() {
    let mut A = test_matrix_3x4();
    A.scale(2.);
    A.negate();
    assert_eq!(A.nzval, vec![-2., -8., -6., 4., 10.]);
}

#[test]
fn test_triplet_round_trip() {
    let mut gen = rng();
    let coo = random_coo(&mut gen, 7, 5, 0.8);
    let A = coo.to_csc();
    assert!(A.check_format().is_ok());

    // summing the triplets by hand gives the same dense matrix
    let mut dense = vec![vec![0.0; 5]; 7];
    for (i, j, v) in coo.triplets() {
        dense[i][j] += v;
    }
    assert!(max_abs_diff(&A.to_dense(), &dense) < 1e-14);

    // back to triplets: one entry per (row, col), the same multiset
    let back = CooMatrix::from(&A);
    let mut seen: Vec<(usize, usize)> = back.triplets().map(|(i, j, _)| (i, j)).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), back.nnz());
    assert_eq!(back.to_csc(), A);
}

#[test]
fn test_coo_skips_zeros() {
    let A = CooMatrix::from_triplets(2, 2, &[0, 1, 1], &[0, 1, 1], &[0., 2., 3.]);
    assert_eq!(A.nnz(), 2);
    let B = A.to_csc();
    assert_eq!(B.colptr, vec![0, 0, 1]);
    assert_eq!(B.nzval, vec![5.]);
}

#[test]
#[should_panic]
fn test_coo_out_of_bounds() {
    let mut A = CooMatrix::<f64>::new(2, 2);
    A.push(2, 0, 1.);
}
