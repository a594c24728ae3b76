#![allow(non_snake_case)]

use super::csc::colcount_to_colptr;
use crate::algebra::{CscMatrix, FloatT};
use itertools::izip;

/// Sparse matrix in coordinate (triplet) format.
///
/// This is the assembly format: entries may be pushed in any order and
/// duplicates are allowed.  Duplicates are summed on conversion to
/// [`CscMatrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct CooMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// row index of each entry
    pub rowval: Vec<usize>,
    /// column index of each entry
    pub colval: Vec<usize>,
    /// value of each entry
    pub nzval: Vec<T>,
}

impl<T> CooMatrix<T>
where
    T: FloatT,
{
    /// An empty `m x n` triplet matrix
    pub fn new(m: usize, n: usize) -> Self {
        Self::with_capacity(m, n, 0)
    }

    /// An empty `m x n` triplet matrix with room for `nnz` entries
    pub fn with_capacity(m: usize, n: usize, nnz: usize) -> Self {
        CooMatrix {
            m,
            n,
            rowval: Vec::with_capacity(nnz),
            colval: Vec::with_capacity(nnz),
            nzval: Vec::with_capacity(nnz),
        }
    }

    /// Build from parallel row / column / value arrays, skipping zeros.
    ///
    /// # Panics
    /// Panics if the arrays differ in length or an index is out of bounds.
    pub fn from_triplets(m: usize, n: usize, I: &[usize], J: &[usize], V: &[T]) -> Self {
        assert!(I.len() == J.len() && J.len() == V.len());
        let mut A = Self::with_capacity(m, n, V.len());
        for (&i, &j, &v) in izip!(I, J, V) {
            A.push(i, j, v);
        }
        A
    }

    /// Add the entry `A[i,j] += v`.  Exact zeros are not stored.
    ///
    /// # Panics
    /// Panics if `(i,j)` is out of bounds.
    pub fn push(&mut self, i: usize, j: usize, v: T) {
        assert!(i < self.m && j < self.n, "entry ({i},{j}) out of bounds");
        if v == T::zero() {
            return;
        }
        self.rowval.push(i);
        self.colval.push(j);
        self.nzval.push(v);
    }

    /// number of stored entries, counting duplicates
    pub fn nnz(&self) -> usize {
        self.nzval.len()
    }

    /// Iterator over the stored `(row, col, value)` entries
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        izip!(&self.rowval, &self.colval, &self.nzval).map(|(&i, &j, &v)| (i, j, v))
    }

    /// Compressed column copy, with sorted row indices and
    /// duplicate entries summed.
    pub fn to_csc(&self) -> CscMatrix<T> {
        let nnz = self.nnz();

        //count the entries in each column
        let mut colptr = vec![0usize; self.n + 1];
        for &j in &self.colval {
            colptr[j] += 1;
        }
        colcount_to_colptr(&mut colptr);

        let mut w = colptr.clone();
        let mut rowval = vec![0; nnz];
        let mut nzval = vec![T::zero(); nnz];
        for (i, j, v) in self.triplets() {
            let p = w[j];
            rowval[p] = i;
            nzval[p] = v;
            w[j] += 1;
        }

        let mut A = CscMatrix::new(self.m, self.n, colptr, rowval, nzval);
        A.sort_indices();
        A.cleanup();
        A
    }
}

impl<T: FloatT> From<&CscMatrix<T>> for CooMatrix<T> {
    fn from(A: &CscMatrix<T>) -> Self {
        let mut B = CooMatrix::with_capacity(A.m, A.n, A.nnz());
        for j in 0..A.n {
            for p in A.colptr[j]..A.colptr[j + 1] {
                B.rowval.push(A.rowval[p]);
                B.colval.push(j);
                B.nzval.push(A.nzval[p]);
            }
        }
        B
    }
}
