#![allow(non_snake_case)]

use sparse_ordering::{algebra::*, ordering::*, permutation::*};

fn tridiagonal(n: usize) -> CscMatrix<f64> {
    let mut A = CooMatrix::new(n, n);
    for i in 0..n {
        A.push(i, i, 2.0);
        if i + 1 < n {
            A.push(i, i + 1, -1.0);
            A.push(i + 1, i, -1.0);
        }
    }
    A.to_csc()
}

#[test]
fn test_identity_needs_no_reordering() {
    let A = CscMatrix::<f64>::identity(4);

    let p = amd::generate(&A.pattern(), ColumnOrdering::MinimumDegreeAtPlusA).unwrap();
    assert_eq!(p, Some(vec![0, 1, 2, 3]));

    let dm = DulmageMendelsohn::generate(&A.pattern(), 0);
    assert_eq!(dm.block_count(), 4);
    assert_eq!(dm.structural_rank(), 4);
    assert_eq!(dm.singletons(), 4);
}

#[test]
fn test_path_graph_orders_without_fill() {
    let A = tridiagonal(5);
    let settings = OrderingSettings::default();
    let chol = SymbolicCholesky::analyze(&A.pattern(), &settings).unwrap();

    assert!(is_valid(&chol.perm));
    // L has the pattern of the lower triangle of A
    assert_eq!(chol.lnz(), 4);
    assert_eq!(chol.nnz_l(), 9);
}

#[test]
fn test_empty_row_is_structurally_singular() {
    // A =
    //[ 1  2  . ]
    //[ .  .  . ]
    //[ .  3  4 ]
    let A = CscMatrix::from_dense_rows(&[&[1., 2., 0.], &[0., 0., 0.], &[0., 3., 4.]]);
    let dm = DulmageMendelsohn::generate(&A.pattern(), 0);
    assert_eq!(dm.structural_rank(), 2);
    assert!(dm.block_count() > 1);

    // the decomposition does not depend on the matching order
    for seed in [-1, 1, 17] {
        let dm2 = DulmageMendelsohn::generate(&A.pattern(), seed);
        assert_eq!(dm2.structural_rank(), 2);
        assert_eq!(dm2.rr, dm.rr);
        assert_eq!(dm2.cc, dm.cc);
    }
}

#[test]
fn test_asymmetric_arrowhead_fill() {
    // A+A' is an arrowhead with its hub at node 0 and 7 leaves.
    // Natural order eliminates the hub first, so the leaves fill in
    // to a clique: nnz(L) = 8 + (7 + 6 + ... + 1) = 36.  With the hub
    // last every leaf column of L has one subdiagonal entry, in row
    // hub: nnz(L) = 8 + 7 = 15.
    //
    // A =
    //[ 4  1  .  1  .  1  .  1 ]
    //[ .  4  .  .  .  .  .  . ]
    //[ 1  .  4  .  .  .  .  . ]
    //[ .  .  .  4  .  .  .  . ]
    //[ 1  .  .  .  4  .  .  . ]
    //[ .  .  .  .  .  4  .  . ]
    //[ 1  .  .  .  .  .  4  . ]
    //[ .  .  .  .  .  .  .  4 ]
    let mut A = CooMatrix::new(8, 8);
    for i in 0..8 {
        A.push(i, i, 4.0);
    }
    for j in (1..8).step_by(2) {
        A.push(0, j, 1.0);
    }
    for i in (2..8).step_by(2) {
        A.push(i, 0, 1.0);
    }
    let A = A.to_csc();
    assert!(!A.pattern().is_structurally_symmetric());

    let amd = SymbolicCholesky::analyze(&A.pattern(), &OrderingSettings::default()).unwrap();
    assert_eq!(amd.nnz_l(), 15);

    let natural = OrderingSettingsBuilder::default()
        .ordering(ColumnOrdering::Natural)
        .build()
        .unwrap();
    let natural = SymbolicCholesky::analyze(&A.pattern(), &natural).unwrap();
    assert_eq!(natural.nnz_l(), 36);

    // every column of A holds a distinct diagonal entry
    let dm = DulmageMendelsohn::generate(&A.pattern(), 0);
    assert_eq!(dm.structural_rank(), 8);
}
