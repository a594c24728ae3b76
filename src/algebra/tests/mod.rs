#![allow(non_snake_case)]
use crate::algebra::*;
use rand::{Rng, SeedableRng};

mod matrix;

// random m x n matrix with roughly density*m*n entries, some duplicated
pub(crate) fn random_coo(gen: &mut rand::rngs::StdRng, m: usize, n: usize, density: f64) -> CooMatrix<f64> {
    let mut A = CooMatrix::new(m, n);
    if m == 0 || n == 0 {
        return A;
    }
    let count = ((m * n) as f64 * density).ceil() as usize;
    for _ in 0..count {
        let i = gen.gen_range(0..m);
        let j = gen.gen_range(0..n);
        A.push(i, j, gen.gen_range(-1.0..1.0));
    }
    A
}

pub(crate) fn rng() -> rand::rngs::StdRng {
    rand::rngs::StdRng::seed_from_u64(0)
}

pub(crate) fn dense_matmul(A: &[Vec<f64>], B: &[Vec<f64>], m: usize, k: usize, n: usize) -> Vec<Vec<f64>> {
    let mut C = vec![vec![0.0; n]; m];
    for i in 0..m {
        for j in 0..n {
            for l in 0..k {
                C[i][j] += A[i][l] * B[l][j];
            }
        }
    }
    C
}

pub(crate) fn max_abs_diff(A: &[Vec<f64>], B: &[Vec<f64>]) -> f64 {
    assert_eq!(A.len(), B.len());
    A.iter()
        .zip(B)
        .map(|(a, b)| a.dist_inf(b))
        .fold(0.0, f64::max)
}
