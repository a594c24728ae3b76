#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use rand::{Rng, SeedableRng};

fn random_csc(gen: &mut rand::rngs::StdRng, m: usize, n: usize) -> CscMatrix<f64> {
    let mut A = CooMatrix::new(m, n);
    for i in 0..m {
        for j in 0..n {
            if gen.gen_bool(0.4) {
                A.push(i, j, gen.gen_range(1.0..2.0));
            }
        }
    }
    A.to_csc()
}

#[test]
fn test_invperm() {
    let perm = vec![3, 0, 2, 1];
    assert_eq!(invperm(&perm).unwrap(), vec![1, 3, 2, 0]);
    assert!(is_valid(&perm));
}

#[test]
fn test_invperm_bad_perm() {
    // repeated index
    assert!(invperm(&[3, 0, 2, 0]).is_err());
    // index too big
    assert_eq!(invperm(&[4, 0, 2, 1]), Err(PermutationError::InvalidPermutation));
}

#[test]
fn test_permute() {
    let perm = vec![3, 0, 2, 1];
    let b = vec![1., 2., 3., 4.];
    let mut x = vec![0.; 4];
    let mut y = vec![0.; 4];

    permute(&mut x, &b, &perm);
    assert_eq!(x, vec![4., 1., 3., 2.]);

    ipermute(&mut y, &x, &perm);
    assert_eq!(y, b);
}

#[test]
fn test_create() {
    assert_eq!(create(4, 0), vec![0, 1, 2, 3]);
    assert_eq!(create(4, -1), vec![3, 2, 1, 0]);
    let p = create(50, 7);
    assert!(is_valid(&p));
    assert_eq!(p, create(50, 7));
    assert!(create(0, 3).is_empty());
}

#[test]
fn test_hollow_invert_involution() {
    let mut gen = rand::rngs::StdRng::seed_from_u64(1);
    for n in [0, 1, 5, 12] {
        let p = create(n, gen.gen_range(1..1000));
        let P = HollowPermutation::from_full(&p);
        assert!(P.is_full());
        assert_eq!(P.transpose().transpose(), P);
        assert_eq!(invert(&invert(P.as_slice(), n), n), P.as_slice());
    }
}

#[test]
#[should_panic]
fn test_hollow_invert_out_of_range() {
    invert(&[Some(0), Some(3)], 3);
}

#[test]
#[should_panic]
fn test_hollow_repeated_entry() {
    HollowPermutation::new(vec![Some(1), None, Some(1)], 2);
}

#[test]
fn test_vector_round_trip() {
    let p = vec![2, 0, 3, 1];
    let P = HollowPermutation::from_full(&p);
    let a = vec![1., 2., 3., 4.];

    let mut b = vec![0.; 4];
    P.pa(&a, &mut b).unwrap();
    assert_eq!(b, vec![3., 1., 4., 2.]);

    // P' undoes P
    let mut c = vec![0.; 4];
    P.pta(&b, &mut c).unwrap();
    assert_eq!(c, a);

    // so does P applied through the inverse permutation
    let mut d = vec![0.; 4];
    P.transpose().pa(&b, &mut d).unwrap();
    assert_eq!(d, a);
}

#[test]
fn test_vector_forms_accumulate() {
    let P = HollowPermutation::new(vec![Some(1), None, Some(0)], 2);
    let a = vec![10., 20.];

    let mut x = vec![1., 1., 1.];
    P.pa(&a, &mut x).unwrap();
    P.pa(&a, &mut x).unwrap();
    assert_eq!(x, vec![41., 1., 21.]);

    let mut y = vec![0., 0.];
    P.pta(&[1., 2., 3.], &mut y).unwrap();
    assert_eq!(y, vec![3., 1.]);

    assert!(P.pa(&x, &mut y).is_err());
    assert!(P.pta(&a, &mut y).is_err());
}

#[test]
fn test_matrix_products_agree_with_multiply() {
    let mut gen = rand::rngs::StdRng::seed_from_u64(2);
    for _ in 0..10 {
        let (m, n) = (gen.gen_range(1..7), gen.gen_range(1..7));
        let (pl, ql) = (gen.gen_range(1..7), gen.gen_range(1..7));
        let P = HollowPermutation::random(pl, m, &mut gen);
        let Q = HollowPermutation::random(ql, n, &mut gen);
        let Pm: CscMatrix<f64> = P.to_matrix();
        let Qm: CscMatrix<f64> = Q.to_matrix();
        let mul = |A: &CscMatrix<f64>, B: &CscMatrix<f64>| CscMatrix::multiply(A, B).unwrap();

        // A is m x n
        let A = random_csc(&mut gen, m, n);
        assert_eq!(P.permute_rows(&A).unwrap().to_dense(), mul(&Pm, &A).to_dense());
        assert_eq!(Q.permute_columns(&A).unwrap().to_dense(), mul(&A, &Qm.transpose()).to_dense());
        assert_eq!(
            HollowPermutation::paqt(&P, &Q, &A).unwrap().to_dense(),
            mul(&mul(&Pm, &A), &Qm.transpose()).to_dense()
        );

        // B is pl x ql
        let B = random_csc(&mut gen, pl, ql);
        assert_eq!(
            P.permute_rows_transposed(&B).unwrap().to_dense(),
            mul(&Pm.transpose(), &B).to_dense()
        );
        assert_eq!(Q.a_p(&B).unwrap().to_dense(), mul(&B, &Qm).to_dense());
        assert_eq!(
            HollowPermutation::ptaq(&P, &Q, &B).unwrap().to_dense(),
            mul(&mul(&Pm.transpose(), &B), &Qm).to_dense()
        );
    }
}

#[test]
fn test_drop_constrained_dofs() {
    // K =
    //[ 4.0  -1.0    ⋅ ]
    //[-1.0   4.0  -1.0]
    //[  ⋅   -1.0   4.0]
    let K = CscMatrix::new(
        3,
        3,
        vec![0, 2, 5, 7],
        vec![0, 1, 0, 1, 2, 1, 2],
        vec![4., -1., -1., 4., -1., -1., 4.],
    );
    // keep dofs 2 and 0, in that order, and drop dof 1
    let P = HollowPermutation::new(vec![Some(2), Some(0)], 3);
    let Kr = HollowPermutation::paqt(&P, &P, &K).unwrap();
    assert_eq!(Kr.to_dense(), vec![vec![4., 0.], vec![0., 4.]]);

    // scattering back leaves the dropped row and column empty
    let Kf = HollowPermutation::ptaq(&P, &P, &Kr).unwrap();
    assert_eq!(Kf.size(), (3, 3));
    assert_eq!(Kf.nnz(), 2);
    assert_eq!(Kf.get_entry((1, 1)), None);

    assert!(HollowPermutation::paqt(&P, &P, &Kr).is_err());
}

#[test]
fn test_matrix_form() {
    let P = HollowPermutation::new(vec![Some(2), None, Some(0)], 4);
    let Pm: CscMatrix<f64> = P.to_matrix();
    assert_eq!(Pm.size(), (3, 4));
    assert_eq!(Pm.get_entry((0, 2)), Some(1.));
    assert_eq!(Pm.get_entry((2, 0)), Some(1.));
    assert_eq!(Pm.nnz(), 2);
    assert_eq!(HollowPermutation::from_matrix(&Pm).unwrap(), P);

    let mut bad = Pm.clone();
    bad.nzval[0] = 2.;
    assert!(HollowPermutation::from_matrix(&bad).is_err());
}

#[test]
fn test_compose() {
    let P = HollowPermutation::new(vec![Some(1), None, Some(0)], 2);
    let Q = HollowPermutation::new(vec![None, Some(2)], 3);
    let PQ = P.compose(&Q).unwrap();
    assert_eq!(PQ.as_slice(), &[Some(2), None, None]);
    assert_eq!(PQ.target_len(), 3);
    assert!(Q.compose(&Q).is_err());

    let lhs: CscMatrix<f64> = PQ.to_matrix();
    let rhs = CscMatrix::multiply(&P.to_matrix(), &Q.to_matrix()).unwrap();
    assert_eq!(lhs.to_dense(), rhs.to_dense());
}
