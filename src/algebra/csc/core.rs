#![allow(non_snake_case)]

use crate::algebra::{
    Adjoint, FloatT, MatrixShape, ShapedMatrix, SparseFormatError, SymbolicCscMatrix,
};
use std::iter::zip;

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```no_run
/// use sparse_ordering::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
///
/// ```
///
/// Row indices within a column need not be sorted, and a column may hold
/// duplicate row indices, until [`sort_indices`](CscMatrix::sort_indices)
/// or [`cleanup`](CscMatrix::cleanup) is called.

#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// This field should have length `n+1`. The last entry corresponds
    /// to the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__
    /// ensure that rows indices are all in bounds or that data is arranged
    /// such that entries within each column appear in order of increasing
    /// row index.   Responsibility for ensuring these conditions hold
    /// is left to the caller.
    ///

    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// allocate space for a sparse matrix with `nnz` elements
    ///
    /// To make an m x n matrix of zeros, use
    /// ```no_run
    /// use sparse_ordering::algebra::CscMatrix;
    /// let m = 3;
    /// let n = 4;
    /// let A : CscMatrix<f64> = CscMatrix::spalloc(m,n,0);
    /// ```

    pub fn spalloc(m: usize, n: usize, nnz: usize) -> Self {
        let mut colptr = vec![0; n + 1];
        let rowval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        colptr[n] = nnz;

        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        let nzval = vec![T::one(); n];

        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// Build a matrix from a dense row-major array of rows.  Exact zeros
    /// are not stored.
    ///
    /// # Panics
    /// Panics if the rows are not all of the same length.
    pub fn from_dense_rows(rows: &[&[T]]) -> Self {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.len());
        assert!(rows.iter().all(|r| r.len() == n));

        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();

        colptr.push(0);
        for col in 0..n {
            for (row, r) in rows.iter().enumerate() {
                if r[col] != T::zero() {
                    rowval.push(row);
                    nzval.push(r[col]);
                }
            }
            colptr.push(rowval.len());
        }
        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// Build a matrix from a dense column-major array.  Exact zeros are not stored.
    ///
    /// # Panics
    /// Panics if `data.len() != m * n`.
    pub fn from_column_major(m: usize, n: usize, data: &[T]) -> Self {
        assert_eq!(data.len(), m * n);

        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();

        colptr.push(0);
        for column in data.chunks(m.max(1)).take(n) {
            for (row, &v) in column.iter().enumerate() {
                if v != T::zero() {
                    rowval.push(row);
                    nzval.push(v);
                }
            }
            colptr.push(rowval.len());
        }
        // m == 0 yields no chunks at all
        colptr.resize(n + 1, rowval.len());
        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// Dense row-major copy.  Duplicate entries are summed.
    pub fn to_dense(&self) -> Vec<Vec<T>> {
        let mut out = vec![vec![T::zero(); self.n]; self.m];
        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            for (&row, &v) in zip(&self.rowval[rng.clone()], &self.nzval[rng]) {
                out[row][col] += v;
            }
        }
        out
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// transpose
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// Pattern-only copy of this matrix
    pub fn pattern(&self) -> SymbolicCscMatrix {
        SymbolicCscMatrix::new(self.m, self.n, self.colptr.clone(), self.rowval.clone())
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }
        super::check_pattern_format(self.m, self.n, &self.colptr, &self.rowval)
    }

    /// Returns the value at the given (row,col) index as an Option.
    /// Returns None if the given index is not a structural nonzero.
    /// Requires row indices to be sorted within each column.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.nrows() && col < self.ncols());

        let first = self.colptr[col];
        let last = self.colptr[col + 1];
        let rows_in_this_column = &self.rowval[first..last];
        match rows_in_this_column.binary_search(&row) {
            Ok(idx) => Some(self.nzval[first + idx]),
            Err(_) => None,
        }
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
    fn is_square(&self) -> bool {
        self.m == self.n
    }
}

#[test]
fn test_csc_get_entry() {
    // A =
    //[ ⋅   4.0    ⋅    ⋅   12.0]
    //[1.0  5.0    ⋅    ⋅     ⋅ ]
    //[ ⋅   6.0    ⋅    ⋅   13.0]
    //[2.0  7.0  10.0   ⋅     ⋅ ]
    //[ ⋅   8.0  11.0   ⋅   14.0]
    //[3.0  9.0    ⋅    ⋅     ⋅ ]

    let A = CscMatrix::new(
        6,                                                                 // m
        5,                                                                 // n
        vec![0, 3, 9, 11, 11, 14],                                         // colptr
        vec![1, 3, 5, 0, 1, 2, 3, 4, 5, 3, 4, 0, 2, 4],                    // rowval
        vec![1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14.], // nzval
    );

    assert_eq!(A.get_entry((1, 0)).unwrap(), 1.);
    assert_eq!(A.get_entry((5, 1)).unwrap(), 9.);
    assert_eq!(A.get_entry((4, 2)).unwrap(), 11.);
    assert_eq!(A.get_entry((2, 4)).unwrap(), 13.);

    assert!(A.get_entry((0, 0)).is_none());
    assert!(A.get_entry((2, 2)).is_none());
    assert!(A.get_entry((1, 3)).is_none());
    assert!(A.get_entry((3, 4)).is_none());
}

#[test]
fn test_csc_dense_conversions() {
    // A =
    //[1.0   ⋅   3.0]
    //[ ⋅   2.0   ⋅ ]
    let rows: [&[f64]; 2] = [&[1., 0., 3.], &[0., 2., 0.]];
    let A = CscMatrix::from_dense_rows(&rows);
    assert_eq!(A.colptr, vec![0, 1, 2, 3]);
    assert_eq!(A.rowval, vec![0, 1, 0]);

    let B = CscMatrix::from_column_major(2, 3, &[1., 0., 0., 2., 3., 0.]);
    assert_eq!(A, B);
    assert_eq!(B.to_dense(), vec![vec![1., 0., 3.], vec![0., 2., 0.]]);

    let E = CscMatrix::<f64>::from_column_major(0, 3, &[]);
    assert_eq!(E.colptr, vec![0, 0, 0, 0]);
}
