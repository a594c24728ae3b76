//! Full and hollow permutation vectors.
//!
//! A full permutation `p` of length `n` is a bijection on `0..n`, applied
//! as `x[i] = b[p[i]]`.  A [`HollowPermutation`] may leave entries
//! unmapped, which is how constrained degrees of freedom are dropped
//! while the remaining ones are reordered.

use crate::algebra::PermutationError;
use rand::{Rng, SeedableRng};
use std::iter::zip;

mod hollow;
pub use hollow::*;

/// Inverse of a full permutation.
///
/// Returns an error if `p` is not a bijection on `0..p.len()`.
pub fn invperm(p: &[usize]) -> Result<Vec<usize>, PermutationError> {
    let mut b = vec![usize::MAX; p.len()];

    for (i, j) in p.iter().enumerate() {
        if *j < p.len() && b[*j] == usize::MAX {
            b[*j] = i;
        } else {
            return Err(PermutationError::InvalidPermutation);
        }
    }
    Ok(b)
}

/// True if `p` is a bijection on `0..p.len()`.
pub fn is_valid(p: &[usize]) -> bool {
    invperm(p).is_ok()
}

/// Gather `x[i] = b[p[i]]`
pub fn permute<T: Copy>(x: &mut [T], b: &[T], p: &[usize]) {
    zip(p, x).for_each(|(p, x)| *x = b[*p]);
}

/// Scatter `x[p[i]] = b[i]`, the inverse of [`permute`]
pub fn ipermute<T: Copy>(x: &mut [T], b: &[T], p: &[usize]) {
    zip(p, b).for_each(|(p, b)| x[*p] = *b);
}

/// A permutation of length `n` chosen by `seed`.
///
/// `seed == 0` gives the identity and `seed == -1` the reversal.  Any
/// other seed gives a random shuffle of the reversal, reproducible for
/// a given seed.
pub fn create(n: usize, seed: i64) -> Vec<usize> {
    if seed == 0 {
        return (0..n).collect();
    }
    let mut p: Vec<usize> = (0..n).rev().collect();
    if seed == -1 {
        return p;
    }
    let mut gen = rand::rngs::StdRng::seed_from_u64(seed as u64);
    for i in 0..n {
        let j = gen.gen_range(i..n);
        p.swap(i, j);
    }
    p
}

#[path = "test.rs"]
#[cfg(test)]
mod test;
