//! Sparse matrix storage and supporting numeric traits.
//!
//! Numeric matrices are stored as [`CscMatrix`], patterns as
//! [`SymbolicCscMatrix`], and assembly happens in [`CooMatrix`].

mod adjoint;
mod coo;
mod csc;
mod error_types;
mod floats;
mod matrix_traits;
mod matrix_types;
mod symbolic;
mod traits;
mod vecmath;

pub use coo::*;
pub use csc::*;
pub use error_types::*;
pub use floats::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub use symbolic::*;
pub use traits::*;
pub(crate) use vecmath::{gather_add, scatter_add};

#[cfg(test)]
mod tests;
