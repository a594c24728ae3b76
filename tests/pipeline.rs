#![allow(non_snake_case)]

use sparse_ordering::{algebra::*, ordering::*, permutation::*};

// Stiffness matrix of a bar of `nel` two-node elements, assembled from
// element contributions the way a finite element code would.
fn bar_stiffness(nel: usize) -> CscMatrix<f64> {
    let n = nel + 1;
    let mut K = CooMatrix::with_capacity(n, n, 4 * nel);
    for e in 0..nel {
        let dofs = [e, e + 1];
        let ke = [[1.0, -1.0], [-1.0, 1.0]];
        for (a, &i) in dofs.iter().enumerate() {
            for (b, &j) in dofs.iter().enumerate() {
                K.push(i, j, ke[a][b]);
            }
        }
    }
    K.to_csc()
}

#[test]
fn test_assembly_sums_duplicates() {
    let K = bar_stiffness(4);
    assert_eq!(K.size(), (5, 5));
    assert_eq!(K.nnz(), 13);
    assert_eq!(K.get_entry((0, 0)), Some(1.0));
    assert_eq!(K.get_entry((2, 2)), Some(2.0));
    assert_eq!(K.get_entry((1, 2)), Some(-1.0));
    assert_eq!(K.get_entry((0, 2)), None);
    assert!(K.check_format().is_ok());
}

#[test]
fn test_reorder_free_dofs() {
    let K = bar_stiffness(6);
    let ndof = K.n;

    // clamp both ends, reorder the interior
    let free: Vec<usize> = (1..ndof - 1).collect();
    let Kff = HollowPermutation::paqt(
        &HollowPermutation::new(free.iter().map(|&i| Some(i)).collect(), ndof),
        &HollowPermutation::new(free.iter().map(|&i| Some(i)).collect(), ndof),
        &K,
    )
    .unwrap();
    assert_eq!(Kff.size(), (5, 5));

    let p = amd::generate(&Kff.pattern(), ColumnOrdering::MinimumDegreeAtPlusA)
        .unwrap()
        .unwrap();
    assert!(is_valid(&p));

    // one map that both drops the clamped dofs and applies the ordering
    let P = HollowPermutation::new(p.iter().map(|&k| Some(free[k])).collect(), ndof);
    let Kr = HollowPermutation::paqt(&P, &P, &K).unwrap();
    let dense = K.to_dense();
    let reordered = Kr.to_dense();
    for i in 0..p.len() {
        for j in 0..p.len() {
            assert_eq!(reordered[i][j], dense[free[p[i]]][free[p[j]]]);
        }
    }

    // the reordered system factors without fill
    let chol = SymbolicCholesky::with_permutation(&Kr.pattern(), (0..p.len()).collect()).unwrap();
    assert_eq!(chol.lnz(), p.len() - 1);

    // load vector: scatter reduced forces back to the full vector
    let f_reduced = vec![1.0; p.len()];
    let mut f = vec![0.0; ndof];
    P.pta(&f_reduced, &mut f).unwrap();
    assert_eq!(f, vec![0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
}

#[test]
fn test_unconstrained_bar_is_structurally_nonsingular() {
    // the free-free stiffness is numerically singular, but its pattern
    // has full structural rank
    let K = bar_stiffness(5);
    let dm = DulmageMendelsohn::generate(&K.pattern(), 0);
    assert_eq!(dm.structural_rank(), 6);
    assert_eq!(dm.block_count(), 1);
}

#[test]
fn test_constraint_rows_detect_rank_deficiency() {
    // two multipoint constraints on the same pair of dofs, plus one on
    // a dof of its own
    //
    // G =
    //[ 1 -1  .  . ]
    //[ 2 -2  .  . ]
    //[ .  .  .  1 ]
    //[ 1 -1  .  . ]
    let G = CscMatrix::from_dense_rows(&[
        &[1., -1., 0., 0.],
        &[2., -2., 0., 0.],
        &[0., 0., 0., 1.],
        &[1., -1., 0., 0.],
    ]);
    let dm = DulmageMendelsohn::generate(&G.pattern(), 0);
    assert_eq!(dm.structural_rank(), 3);

    let [_, _, _, r0] = dm.coarse_row_sets();
    assert_eq!(r0.len(), 1);
    let [c0, _, _, _] = dm.coarse_col_sets();
    assert_eq!(&dm.q[c0], &[2]);

    let total_rows: usize = dm.blocks().map(|(r, _)| r.len()).sum();
    let total_cols: usize = dm.blocks().map(|(_, c)| c.len()).sum();
    assert_eq!((total_rows, total_cols), (4, 4));
}

#[test]
fn test_column_orderings_for_rectangular_systems() {
    let G = CscMatrix::from_dense_rows(&[
        &[1., 0., 2., 0., 0.],
        &[0., 3., 0., 0., 4.],
        &[5., 0., 0., 6., 0.],
    ]);
    for ordering in [ColumnOrdering::MinimumDegreeAtA, ColumnOrdering::MinimumDegreeStS] {
        let settings = OrderingSettingsBuilder::default()
            .ordering(ordering)
            .build()
            .unwrap();
        let q = amd::generate_with_settings(&G.pattern(), &settings)
            .unwrap()
            .unwrap();
        assert_eq!(q.len(), 5);
        assert!(is_valid(&q));

        // the ordering is usable as a column permutation
        let Q = HollowPermutation::from_full(&q);
        let Gq = Q.permute_columns(&G).unwrap();
        assert_eq!(Gq.nnz(), G.nnz());
    }
    assert_eq!(
        amd::generate(&G.pattern(), ColumnOrdering::MinimumDegreeAtPlusA),
        Err(OrderingError::NotSquare)
    );
}
