// Every matrix in this crate is stored in compressed sparse
// column format.  Numeric and pattern-only variants share
// the same colptr / rowval layout.

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Adjoint of a matrix
#[derive(Debug, Clone, Copy)]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}

/// Matrix norm selector for [`CscMatrix::norm`](crate::algebra::CscMatrix::norm)
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixNorm {
    /// maximum absolute column sum
    One,
    /// maximum absolute row sum
    Infinity,
    /// square root of the sum of squares
    Frobenius,
    /// largest absolute entry
    MaxAbs,
}
