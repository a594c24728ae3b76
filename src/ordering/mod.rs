//! Fill-reducing orderings and block triangular decompositions.
//!
//! The routines here depend on the sparsity pattern of a matrix alone
//! and take a [`SymbolicCscMatrix`](crate::algebra::SymbolicCscMatrix).
//! Numeric matrices can be passed through
//! [`CscMatrix::pattern`](crate::algebra::CscMatrix::pattern).

use crate::algebra::{MatrixDimensionError, PermutationError};
use thiserror::Error;

pub mod amd;
mod analysis;
mod dmperm;
mod matching;
mod scc;
mod settings;

pub use analysis::*;
pub use dmperm::*;
pub use matching::*;
pub use scc::*;
pub use settings::*;

/// Messages from this module are logged under this target.
pub(crate) const LOG_TARGET: &str = "sparse_ordering";

/// Error codes returnable from ordering and decomposition routines
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderingError {
    #[error("Matrix must be square for the requested ordering")]
    NotSquare,
    #[error(transparent)]
    Dimension(#[from] MatrixDimensionError),
    #[error(transparent)]
    Permutation(#[from] PermutationError),
}
