#![allow(non_snake_case)]
// structural operations on numeric CSC matrices, following
// Davis - Direct Methods for Sparse Linear Systems

use super::colcount_to_colptr;
use crate::algebra::*;
use std::iter::zip;

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Sparse transpose via a counting sort on row indices.  The
    /// output always has sorted row indices within each column.
    pub fn transpose(&self) -> Self {
        let (m, n) = (self.m, self.n);
        let nnz = self.nnz();

        //count the entries in each row of self
        let mut w = vec![0usize; m + 1];
        for &row in &self.rowval[0..nnz] {
            w[row] += 1;
        }
        let mut colptr = w.clone();
        colcount_to_colptr(&mut colptr);
        w.copy_from_slice(&colptr);

        let mut rowval = vec![0; nnz];
        let mut nzval = vec![T::zero(); nnz];
        for col in 0..n {
            for p in self.colptr[col]..self.colptr[col + 1] {
                let q = &mut w[self.rowval[p]];
                rowval[*q] = col;
                nzval[*q] = self.nzval[p];
                *q += 1;
            }
        }
        CscMatrix::new(n, m, colptr, rowval, nzval)
    }

    /// Computes `C = alpha*A + beta*B`.  The pattern of `C` is the
    /// union of the patterns of `A` and `B`, with sorted row indices.
    pub fn add(alpha: T, A: &Self, beta: T, B: &Self) -> Result<Self, MatrixDimensionError> {
        if A.size() != B.size() {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        let (m, n) = A.size();

        let mut w = vec![0usize; m];
        let mut x = vec![T::zero(); m];
        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::with_capacity(A.nnz() + B.nnz());
        let mut nzval = Vec::with_capacity(A.nnz() + B.nnz());

        for j in 0..n {
            let start = rowval.len();
            colptr.push(start);
            _scatter(A, j, alpha, &mut w, &mut x, j + 1, &mut rowval);
            _scatter(B, j, beta, &mut w, &mut x, j + 1, &mut rowval);
            nzval.extend(rowval[start..].iter().map(|&i| x[i]));
        }
        colptr.push(rowval.len());

        let mut C = CscMatrix::new(m, n, colptr, rowval, nzval);
        C.sort_indices();
        Ok(C)
    }

    /// Sparse matrix product `C = A*B`, formed one output column at a time.
    pub fn multiply(A: &Self, B: &Self) -> Result<Self, MatrixDimensionError> {
        if A.n != B.m {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        let (m, n) = (A.m, B.n);

        let mut w = vec![0usize; m];
        let mut x = vec![T::zero(); m];
        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::with_capacity(A.nnz() + B.nnz());
        let mut nzval = Vec::with_capacity(A.nnz() + B.nnz());

        for j in 0..n {
            let start = rowval.len();
            colptr.push(start);
            for p in B.colptr[j]..B.colptr[j + 1] {
                _scatter(A, B.rowval[p], B.nzval[p], &mut w, &mut x, j + 1, &mut rowval);
            }
            nzval.extend(rowval[start..].iter().map(|&i| x[i]));
        }
        colptr.push(rowval.len());

        let mut C = CscMatrix::new(m, n, colptr, rowval, nzval);
        C.sort_indices();
        Ok(C)
    }

    /// Keep only the entries for which `f(row, col, value)` is true,
    /// compacting the storage in place.  Returns the new number
    /// of nonzeros.
    pub fn keep<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(usize, usize, T) -> bool,
    {
        let mut nz = 0;
        for j in 0..self.n {
            let p = self.colptr[j];
            self.colptr[j] = nz;
            for p in p..self.colptr[j + 1] {
                if f(self.rowval[p], j, self.nzval[p]) {
                    self.nzval[nz] = self.nzval[p];
                    self.rowval[nz] = self.rowval[p];
                    nz += 1;
                }
            }
        }
        self.colptr[self.n] = nz;
        self.rowval.truncate(nz);
        self.nzval.truncate(nz);
        nz
    }

    /// Remove entries with `|value| <= tol`.  For `tol == 0` exactly
    /// the entries equal to zero are removed.
    pub fn dropzeros(&mut self, tol: T) -> usize {
        if tol == T::zero() {
            self.keep(|_, _, v| v != T::zero())
        } else {
            self.keep(|_, _, v| T::abs(v) > tol)
        }
    }

    /// Sum duplicate entries within each column, compacting in place.
    /// Returns the new number of nonzeros.  The relative order of
    /// the first occurrence of each row index is preserved.
    pub fn cleanup(&mut self) -> usize {
        // position of the first occurrence of each row
        let mut w: Vec<Option<usize>> = vec![None; self.m];
        let mut nz = 0;

        for j in 0..self.n {
            let q = nz;
            let start = self.colptr[j];
            let stop = self.colptr[j + 1];
            for p in start..stop {
                let i = self.rowval[p];
                match w[i] {
                    // row i already seen in column j
                    Some(pos) if pos >= q => {
                        let v = self.nzval[p];
                        self.nzval[pos] += v;
                    }
                    _ => {
                        w[i] = Some(nz);
                        self.rowval[nz] = i;
                        self.nzval[nz] = self.nzval[p];
                        nz += 1;
                    }
                }
            }
            self.colptr[j] = q;
        }
        self.colptr[self.n] = nz;
        self.rowval.truncate(nz);
        self.nzval.truncate(nz);
        nz
    }

    /// Sort row indices within each column, permuting values alongside.
    pub fn sort_indices(&mut self) {
        let mut work: Vec<(usize, T)> = Vec::new();
        for j in 0..self.n {
            let rng = self.colptr[j]..self.colptr[j + 1];
            let rows = &mut self.rowval[rng.clone()];
            if rows.windows(2).all(|c| c[0] <= c[1]) {
                continue;
            }
            let vals = &mut self.nzval[rng];
            work.clear();
            work.extend(zip(rows.iter().copied(), vals.iter().copied()));
            work.sort_by_key(|&(r, _)| r);
            for ((r, v), &(rs, vs)) in zip(zip(rows.iter_mut(), vals.iter_mut()), &work) {
                *r = rs;
                *v = vs;
            }
        }
    }

    /// Matrix norm of the requested type.
    pub fn norm(&self, which: MatrixNorm) -> T {
        let nnz = self.nnz();
        match which {
            MatrixNorm::One => (0..self.n)
                .map(|j| self.nzval[self.colptr[j]..self.colptr[j + 1]].norm_one())
                .fold(T::zero(), T::max),
            MatrixNorm::Infinity => {
                let mut rowsums = vec![T::zero(); self.m];
                for (&row, &v) in zip(&self.rowval[0..nnz], &self.nzval[0..nnz]) {
                    rowsums[row] += T::abs(v);
                }
                rowsums.iter().fold(T::zero(), |acc, &s| T::max(acc, s))
            }
            MatrixNorm::Frobenius => self.nzval[0..nnz].norm(),
            MatrixNorm::MaxAbs => self.nzval[0..nnz].norm_inf(),
        }
    }

    /// True if `self` and `other` have identical dimensions and sparsity
    /// pattern, and every pair of values differs by at most `tol`.
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        if self.size() != other.size() || self.colptr != other.colptr {
            return false;
        }
        let nnz = self.nnz();
        self.rowval[0..nnz] == other.rowval[0..nnz]
            && self.nzval[0..nnz].dist_inf(&other.nzval[0..nnz]) <= tol
    }
}

// x(Ci) += beta*A(:,j), stamping w so that each row is pushed to
// the output pattern once per value of mark.  Rows already carrying
// the current mark accumulate instead.
#[allow(clippy::too_many_arguments)]
fn _scatter<T: FloatT>(
    A: &CscMatrix<T>,
    j: usize,
    beta: T,
    w: &mut [usize],
    x: &mut [T],
    mark: usize,
    Ci: &mut Vec<usize>,
) {
    for p in A.colptr[j]..A.colptr[j + 1] {
        let i = A.rowval[p];
        if w[i] < mark {
            w[i] = mark;
            Ci.push(i);
            x[i] = beta * A.nzval[p];
        } else {
            x[i] += beta * A.nzval[p];
        }
    }
}
