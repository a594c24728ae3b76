#![allow(non_snake_case)]

use super::csc::{check_pattern_format, colcount_to_colptr};
use crate::algebra::{CscMatrix, FloatT, MatrixDimensionError, MatrixShape, ShapedMatrix, SparseFormatError};
use std::ops::Range;

/// Sparsity pattern of a compressed column matrix, without values.
///
/// This is the representation used by every ordering and decomposition
/// routine in the crate, since those depend on structure alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolicCscMatrix {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer, length `n+1`
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
}

impl SymbolicCscMatrix {
    /// `SymbolicCscMatrix` constructor.
    ///
    /// # Panics
    /// Panics if `colptr` does not have length `n+1` or its last
    /// entry disagrees with `rowval.len()`.
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>) -> Self {
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        SymbolicCscMatrix {
            m,
            n,
            colptr,
            rowval,
        }
    }

    /// Pattern of the `n x n` identity
    pub fn identity(n: usize) -> Self {
        SymbolicCscMatrix::new(n, n, (0..=n).collect(), (0..n).collect())
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// Check that the pattern is correctly formatted, with strictly
    /// increasing row indices within each column.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        check_pattern_format(self.m, self.n, &self.colptr, &self.rowval)
    }

    /// Row indices of column `j`
    pub fn column(&self, j: usize) -> &[usize] {
        &self.rowval[self.colptr[j]..self.colptr[j + 1]]
    }

    /// Pattern of the transpose.  Row indices come out sorted.
    pub fn transpose(&self) -> Self {
        let nnz = self.nnz();
        let mut w = vec![0usize; self.m + 1];
        for &row in &self.rowval[0..nnz] {
            w[row] += 1;
        }
        let mut colptr = w.clone();
        colcount_to_colptr(&mut colptr);
        w.copy_from_slice(&colptr);

        let mut rowval = vec![0; nnz];
        for col in 0..self.n {
            for &row in self.column(col) {
                rowval[w[row]] = col;
                w[row] += 1;
            }
        }
        SymbolicCscMatrix::new(self.n, self.m, colptr, rowval)
    }

    /// Pattern of `A + B`, with sorted row indices.
    pub fn add(A: &Self, B: &Self) -> Result<Self, MatrixDimensionError> {
        if A.size() != B.size() {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        let (m, n) = A.size();
        let mut w = vec![0usize; m];
        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::with_capacity(A.nnz() + B.nnz());

        for j in 0..n {
            let start = rowval.len();
            colptr.push(start);
            _scatter_pattern(A.column(j), &mut w, j + 1, &mut rowval);
            _scatter_pattern(B.column(j), &mut w, j + 1, &mut rowval);
            rowval[start..].sort_unstable();
        }
        colptr.push(rowval.len());
        Ok(SymbolicCscMatrix::new(m, n, colptr, rowval))
    }

    /// Pattern of `A * B`, with sorted row indices.
    pub fn multiply(A: &Self, B: &Self) -> Result<Self, MatrixDimensionError> {
        if A.n != B.m {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        let (m, n) = (A.m, B.n);
        let mut w = vec![0usize; m];
        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::with_capacity(A.nnz() + B.nnz());

        for j in 0..n {
            let start = rowval.len();
            colptr.push(start);
            for &k in B.column(j) {
                _scatter_pattern(A.column(k), &mut w, j + 1, &mut rowval);
            }
            rowval[start..].sort_unstable();
        }
        colptr.push(rowval.len());
        Ok(SymbolicCscMatrix::new(m, n, colptr, rowval))
    }

    /// Pattern of `C = A(p,q)`, where `pinv` is the inverse of the row
    /// permutation `p` and `q` the column permutation.  `None` stands
    /// for the identity.  Row indices are not sorted.
    ///
    /// # Panics
    /// Panics if a supplied permutation has the wrong length.
    pub fn permute(&self, pinv: Option<&[usize]>, q: Option<&[usize]>) -> Self {
        if let Some(pinv) = pinv {
            assert_eq!(pinv.len(), self.m);
        }
        if let Some(q) = q {
            assert_eq!(q.len(), self.n);
        }

        let mut colptr = Vec::with_capacity(self.n + 1);
        let mut rowval = Vec::with_capacity(self.nnz());
        for k in 0..self.n {
            colptr.push(rowval.len());
            let j = q.map_or(k, |q| q[k]);
            rowval.extend(
                self.column(j)
                    .iter()
                    .map(|&i| pinv.map_or(i, |pinv| pinv[i])),
            );
        }
        colptr.push(rowval.len());
        SymbolicCscMatrix::new(self.m, self.n, colptr, rowval)
    }

    /// Keep only the entries for which `f(row, col)` is true, compacting
    /// the storage in place.  Returns the new number of nonzeros.
    pub fn keep<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut nz = 0;
        for j in 0..self.n {
            let p = self.colptr[j];
            self.colptr[j] = nz;
            for p in p..self.colptr[j + 1] {
                if f(self.rowval[p], j) {
                    self.rowval[nz] = self.rowval[p];
                    nz += 1;
                }
            }
        }
        self.colptr[self.n] = nz;
        self.rowval.truncate(nz);
        nz
    }

    /// Remove all diagonal entries.  Returns the new number of nonzeros.
    pub fn drop_diagonal(&mut self) -> usize {
        self.keep(|i, j| i != j)
    }

    /// The submatrix `A(rows, cols)` with row indices shifted so that
    /// `rows.start` maps to zero.  Row order within columns is kept.
    ///
    /// # Panics
    /// Panics if either range is out of bounds.
    pub fn submatrix(&self, rows: Range<usize>, cols: Range<usize>) -> Self {
        assert!(rows.end <= self.m && cols.end <= self.n);
        assert!(rows.start <= rows.end && cols.start <= cols.end);

        let mut colptr = Vec::with_capacity(cols.len() + 1);
        let mut rowval = Vec::new();
        for j in cols.clone() {
            colptr.push(rowval.len());
            rowval.extend(
                self.column(j)
                    .iter()
                    .filter(|&&i| rows.contains(&i))
                    .map(|&i| i - rows.start),
            );
        }
        colptr.push(rowval.len());
        SymbolicCscMatrix::new(rows.len(), cols.len(), colptr, rowval)
    }

    /// Change the declared dimensions.  Shrinking drops the trailing
    /// columns and any entry in a dropped row.  Growing adds empty
    /// rows and columns.
    pub fn reshape(&mut self, m: usize, n: usize) {
        if m < self.m {
            self.keep(|i, _| i < m);
        }
        if n < self.n {
            let nz = self.colptr[n];
            self.colptr.truncate(n + 1);
            self.rowval.truncate(nz);
        } else {
            let nz = self.nnz();
            self.colptr.resize(n + 1, nz);
        }
        self.m = m;
        self.n = n;
    }

    /// Sort row indices within each column.
    pub fn sort_indices(&mut self) {
        for j in 0..self.n {
            self.rowval[self.colptr[j]..self.colptr[j + 1]].sort_unstable();
        }
    }

    /// True if the pattern equals its transpose.  Requires sorted
    /// row indices.
    pub fn is_structurally_symmetric(&self) -> bool {
        self.is_square() && *self == self.transpose()
    }
}

impl<T: FloatT> From<&CscMatrix<T>> for SymbolicCscMatrix {
    fn from(A: &CscMatrix<T>) -> Self {
        A.pattern()
    }
}

impl ShapedMatrix for SymbolicCscMatrix {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

// push each row of `rows` not already stamped with `mark`
fn _scatter_pattern(rows: &[usize], w: &mut [usize], mark: usize, Ci: &mut Vec<usize>) {
    for &i in rows {
        if w[i] < mark {
            w[i] = mark;
            Ci.push(i);
        }
    }
}
