//! __sparse_ordering__ prepares sparse matrices for direct factorization.
//! It reorders a matrix to reduce fill and decomposes it into block
//! triangular form.  It does not compute numeric factors.
//!
//! The crate provides:
//!
//! * __Storage__: compressed sparse column matrices, numeric ([`CscMatrix`](algebra::CscMatrix))
//!   and pattern only ([`SymbolicCscMatrix`](algebra::SymbolicCscMatrix)), assembled from
//!   triplets ([`CooMatrix`](algebra::CooMatrix)).
//!
//! * __Fill-reducing orderings__: approximate minimum degree on `A+A'`, `A'A` or
//!   `S'S`, see [`ordering::amd`].  [`SymbolicCholesky`](ordering::SymbolicCholesky)
//!   counts the resulting fill.
//!
//! * __Block triangular form__: the Dulmage-Mendelsohn decomposition
//!   ([`DulmageMendelsohn`](ordering::DulmageMendelsohn)) built on a maximum matching
//!   and strongly connected components.  Its structural rank identifies
//!   singular constraint systems before any numeric work is done.
//!
//! * __Permutations__: full permutation vectors and hollow permutations that
//!   drop rows or columns while reordering the rest, see [`permutation`].
//!
//! The graph routines in [`graph`] are iterative and never recurse, so deep
//! elimination trees and long paths are safe.
//!
//! ```
//! use sparse_ordering::algebra::*;
//! use sparse_ordering::ordering::*;
//!
//! let mut A = CooMatrix::new(3, 3);
//! A.push(0, 0, 4.0);
//! A.push(1, 1, 4.0);
//! A.push(2, 2, 4.0);
//! A.push(0, 2, -1.0);
//! A.push(2, 0, -1.0);
//! let A = A.to_csc();
//!
//! let p = amd::generate(&A.pattern(), ColumnOrdering::MinimumDegreeAtPlusA).unwrap();
//! assert_eq!(p.map(|p| p.len()), Some(3));
//!
//! let dm = DulmageMendelsohn::generate(&A.pattern(), 0);
//! assert_eq!(dm.structural_rank(), 3);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod graph;
pub mod ordering;
pub mod permutation;
