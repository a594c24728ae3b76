#![allow(non_snake_case)]

use crate::algebra::{
    gather_add, scatter_add, CscMatrix, FloatT, MatrixDimensionError, PermutationError,
    ShapedMatrix,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// A partial permutation matrix `P` of size `len x target_len`.
///
/// Row `i` of `P` holds a single one in column `perm[i]`, or no entry at
/// all when `perm[i]` is `None`.  Mapped entries are distinct, so `P` is
/// an injection from its mapped rows into `0..target_len`.
///
/// Every product skips unmapped rows and columns instead of failing,
/// and the vector forms accumulate into their output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HollowPermutation {
    perm: Vec<Option<usize>>,
    target_len: usize,
}

/// Inverse of a hollow permutation.
///
/// Returns `q` of length `n` with `q[p[i]] = Some(i)` for every mapped `i`,
/// and `None` elsewhere.
///
/// # Panics
/// Panics if a mapped value is `>= n`.
pub fn invert(p: &[Option<usize>], n: usize) -> Vec<Option<usize>> {
    let mut q = vec![None; n];
    for (i, pi) in p.iter().enumerate() {
        if let Some(j) = *pi {
            assert!(j < n, "permutation entry {j} out of range for length {n}");
            q[j] = Some(i);
        }
    }
    q
}

impl HollowPermutation {
    /// # Panics
    /// Panics if a mapped entry is `>= target_len` or appears twice.
    pub fn new(perm: Vec<Option<usize>>, target_len: usize) -> Self {
        let mut seen = vec![false; target_len];
        for j in perm.iter().flatten() {
            assert!(*j < target_len, "permutation entry {j} out of range for length {target_len}");
            assert!(!seen[*j], "permutation entry {j} is repeated");
            seen[*j] = true;
        }
        HollowPermutation { perm, target_len }
    }

    /// Hollow form of a full permutation
    pub fn from_full(p: &[usize]) -> Self {
        Self::new(p.iter().map(|&j| Some(j)).collect(), p.len())
    }

    /// The `n x n` identity
    pub fn identity(n: usize) -> Self {
        HollowPermutation {
            perm: (0..n).map(Some).collect(),
            target_len: n,
        }
    }

    /// A random partial permutation of size `len x target_len` with
    /// `min(len, target_len)` mapped entries.
    pub fn random<R: Rng + ?Sized>(len: usize, target_len: usize, gen: &mut R) -> Self {
        let mut targets: Vec<usize> = (0..target_len).collect();
        targets.shuffle(gen);
        let mut perm: Vec<Option<usize>> = targets.into_iter().take(len).map(Some).collect();
        perm.resize(len, None);
        perm.shuffle(gen);
        HollowPermutation { perm, target_len }
    }

    /// number of rows of `P`
    pub fn len(&self) -> usize {
        self.perm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }

    /// number of columns of `P`
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn get(&self, i: usize) -> Option<usize> {
        self.perm[i]
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.perm
    }

    /// true if every row is mapped and `P` is square
    pub fn is_full(&self) -> bool {
        self.len() == self.target_len && self.perm.iter().all(Option::is_some)
    }

    /// `P'`, which is also the inverse on the mapped entries
    pub fn transpose(&self) -> Self {
        HollowPermutation {
            perm: invert(&self.perm, self.target_len),
            target_len: self.len(),
        }
    }

    /// The product `P*Q` of two hollow permutations.
    pub fn compose(&self, Q: &Self) -> Result<Self, MatrixDimensionError> {
        if self.target_len != Q.len() {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        let perm = self.perm.iter().map(|pi| pi.and_then(|k| Q.perm[k])).collect();
        Ok(HollowPermutation {
            perm,
            target_len: Q.target_len,
        })
    }

    /// Sparse matrix form, with a unit entry at `(i, perm[i])`.
    pub fn to_matrix<T: FloatT>(&self) -> CscMatrix<T> {
        let Pt = self.transpose();
        let mut colptr = Vec::with_capacity(self.target_len + 1);
        let mut rowval = Vec::with_capacity(self.len());
        colptr.push(0);
        for i in Pt.perm.iter() {
            if let Some(i) = i {
                rowval.push(*i);
            }
            colptr.push(rowval.len());
        }
        let nzval = vec![T::one(); rowval.len()];
        CscMatrix::new(self.len(), self.target_len, colptr, rowval, nzval)
    }

    /// Recover a hollow permutation from its matrix form.
    ///
    /// Returns an error unless every entry equals one and no row or
    /// column holds more than one entry.
    pub fn from_matrix<T: FloatT>(A: &CscMatrix<T>) -> Result<Self, PermutationError> {
        let mut perm = vec![None; A.m];
        for j in 0..A.n {
            let rng = A.colptr[j]..A.colptr[j + 1];
            if rng.len() > 1 {
                return Err(PermutationError::InvalidPermutation);
            }
            for p in rng {
                let i = A.rowval[p];
                if A.nzval[p] != T::one() || perm[i].is_some() {
                    return Err(PermutationError::InvalidPermutation);
                }
                perm[i] = Some(j);
            }
        }
        Ok(HollowPermutation {
            perm,
            target_len: A.n,
        })
    }

    /// Accumulating `x += P*a`, i.e. `x[i] += a[perm[i]]`
    pub fn pa<T: FloatT>(&self, a: &[T], x: &mut [T]) -> Result<(), MatrixDimensionError> {
        if a.len() != self.target_len || x.len() != self.len() {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        gather_add(x, &self.perm, a);
        Ok(())
    }

    /// Accumulating `x += P'*a`, i.e. `x[perm[i]] += a[i]`
    pub fn pta<T: FloatT>(&self, a: &[T], x: &mut [T]) -> Result<(), MatrixDimensionError> {
        if a.len() != self.len() || x.len() != self.target_len {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        scatter_add(x, &self.perm, a);
        Ok(())
    }

    /// `P*A`: row `i` of the output is row `perm[i]` of `A`.
    pub fn permute_rows<T: FloatT>(&self, A: &CscMatrix<T>) -> Result<CscMatrix<T>, MatrixDimensionError> {
        if A.m != self.target_len {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        let rows = invert(&self.perm, self.target_len);
        let cols: Vec<Option<usize>> = (0..A.n).map(Some).collect();
        Ok(_remap(A, &rows, &cols, self.len()))
    }

    /// `P'*A`: row `i` of `A` becomes row `perm[i]` of the output.
    pub fn permute_rows_transposed<T: FloatT>(
        &self,
        A: &CscMatrix<T>,
    ) -> Result<CscMatrix<T>, MatrixDimensionError> {
        if A.m != self.len() {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        let cols: Vec<Option<usize>> = (0..A.n).map(Some).collect();
        Ok(_remap(A, &self.perm, &cols, self.target_len))
    }

    /// `A*P'`: column `i` of the output is column `perm[i]` of `A`.
    pub fn permute_columns<T: FloatT>(
        &self,
        A: &CscMatrix<T>,
    ) -> Result<CscMatrix<T>, MatrixDimensionError> {
        if A.n != self.target_len {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        let rows: Vec<Option<usize>> = (0..A.m).map(Some).collect();
        Ok(_remap(A, &rows, &self.perm, A.m))
    }

    /// `A*P`: column `i` of `A` becomes column `perm[i]` of the output.
    pub fn a_p<T: FloatT>(&self, A: &CscMatrix<T>) -> Result<CscMatrix<T>, MatrixDimensionError> {
        if A.n != self.len() {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        let rows: Vec<Option<usize>> = (0..A.m).map(Some).collect();
        let cols = invert(&self.perm, self.target_len);
        Ok(_remap(A, &rows, &cols, A.m))
    }

    /// `P*A*Q'`: the output is `C[i,j] = A[p[i], q[j]]`.
    pub fn paqt<T: FloatT>(
        P: &Self,
        Q: &Self,
        A: &CscMatrix<T>,
    ) -> Result<CscMatrix<T>, MatrixDimensionError> {
        if A.size() != (P.target_len, Q.target_len) {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        let rows = invert(&P.perm, P.target_len);
        Ok(_remap(A, &rows, &Q.perm, P.len()))
    }

    /// `P'*A*Q`: entry `A[i,j]` moves to `C[p[i], q[j]]`.
    pub fn ptaq<T: FloatT>(
        P: &Self,
        Q: &Self,
        A: &CscMatrix<T>,
    ) -> Result<CscMatrix<T>, MatrixDimensionError> {
        if A.size() != (P.len(), Q.len()) {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        let cols = invert(&Q.perm, Q.target_len);
        Ok(_remap(A, &P.perm, &cols, P.target_len))
    }
}

// Output column k is source column cols[k] (empty if None), with each
// source row r moved to rows[r] or dropped if None.
fn _remap<T: FloatT>(
    A: &CscMatrix<T>,
    rows: &[Option<usize>],
    cols: &[Option<usize>],
    m: usize,
) -> CscMatrix<T> {
    let mut colptr = Vec::with_capacity(cols.len() + 1);
    let mut rowval = Vec::with_capacity(A.nnz());
    let mut nzval = Vec::with_capacity(A.nnz());

    colptr.push(0);
    for col in cols {
        if let Some(j) = *col {
            for p in A.colptr[j]..A.colptr[j + 1] {
                if let Some(i) = rows[A.rowval[p]] {
                    rowval.push(i);
                    nzval.push(A.nzval[p]);
                }
            }
        }
        colptr.push(rowval.len());
    }
    let mut C = CscMatrix::new(m, cols.len(), colptr, rowval, nzval);
    C.sort_indices();
    C
}
