use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by sparse matrix format checks.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Data is not sorted by row index within each column
    #[error("Data is not sorted by row index within each column")]
    BadRowOrdering,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
}

/// Error type returned by matrix algebra operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatrixDimensionError {
    #[error("Incompatible dimensions")]
    /// Operands have incompatible dimensions
    IncompatibleDimension,
    #[error("Matrix must be square")]
    /// A square matrix was required
    NotSquare,
}

/// Error type returned when constructing or inverting a full permutation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PermutationError {
    #[error("Invalid permutation vector")]
    InvalidPermutation,
}
