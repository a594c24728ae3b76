#![allow(non_snake_case)]

use super::{amd, ColumnOrdering, OrderingError, OrderingSettings, LOG_TARGET};
use crate::algebra::{colcount_to_colptr, PermutationError, ShapedMatrix, SymbolicCscMatrix};
use crate::graph::{etree_with_counts, postorder};
use crate::permutation::invperm;
use core::cmp::{max, min};

/// Symbolic analysis of a Cholesky factorization `L*L' = A(p,p)` of a
/// structurally symmetric matrix.
///
/// Only the pattern of `A+A'` is used, so an unsymmetric `A` is analyzed
/// as if it were symmetrized.  The counts give the exact fill of the
/// factor, which is how orderings are compared.
#[derive(Debug, Clone)]
pub struct SymbolicCholesky {
    // fill-reducing permutation and its inverse
    pub perm: Vec<usize>,
    pub iperm: Vec<usize>,
    // elimination tree of the permuted matrix
    pub parent: Vec<Option<usize>>,
    pub post: Vec<usize>,
    // strictly subdiagonal nonzeros in each column of L
    pub colcounts: Vec<usize>,
}

impl SymbolicCholesky {
    /// Analyze `A` under the ordering chosen by `settings`.  The natural
    /// ordering is used for [`ColumnOrdering::Natural`].
    pub fn analyze(A: &SymbolicCscMatrix, settings: &OrderingSettings) -> Result<Self, OrderingError> {
        if !A.is_square() {
            return Err(OrderingError::NotSquare);
        }
        let perm = match settings.ordering {
            ColumnOrdering::Natural => None,
            _ => amd::generate_with_settings(A, settings)?,
        };
        let perm = perm.unwrap_or_else(|| (0..A.n).collect());
        Self::with_permutation(A, perm)
    }

    /// Analyze `A` under a user supplied ordering `perm`.
    pub fn with_permutation(A: &SymbolicCscMatrix, perm: Vec<usize>) -> Result<Self, OrderingError> {
        if !A.is_square() {
            return Err(OrderingError::NotSquare);
        }
        if perm.len() != A.n {
            return Err(PermutationError::InvalidPermutation.into());
        }
        let iperm = invperm(&perm)?;

        let S = SymbolicCscMatrix::add(A, &A.transpose())?;
        let U = _permute_symmetric_upper(&S, &iperm);
        let (parent, colcounts) = etree_with_counts(&U)?;
        let post = postorder(&parent);

        let out = SymbolicCholesky {
            perm,
            iperm,
            parent,
            post,
            colcounts,
        };
        log::debug!(
            target: LOG_TARGET,
            "symbolic cholesky: n = {}, nnz(L) = {}",
            A.n,
            out.nnz_l()
        );
        Ok(out)
    }

    /// Strictly subdiagonal nonzeros of `L`
    pub fn lnz(&self) -> usize {
        self.colcounts.iter().sum()
    }

    /// Nonzeros of `L` including its diagonal
    pub fn nnz_l(&self) -> usize {
        self.lnz() + self.colcounts.len()
    }
}

// Upper triangle of the symmetric pattern S(p,p), given the inverse
// permutation.  Row indices are left unsorted.
fn _permute_symmetric_upper(S: &SymbolicCscMatrix, iperm: &[usize]) -> SymbolicCscMatrix {
    let n = S.n;

    // count the upper-triangle entries in columns of P
    let mut colptr = vec![0; n + 1];
    for colS in 0..n {
        let colP = iperm[colS];
        for &rowS in S.column(colS).iter().filter(|&&r| r <= colS) {
            colptr[max(iperm[rowS], colP)] += 1;
        }
    }
    let nnz = colcount_to_colptr(&mut colptr);

    // place each entry at the next free slot of its column
    let mut row_starts = colptr[0..n].to_vec();
    let mut rowval = vec![0; nnz];
    for colS in 0..n {
        let colP = iperm[colS];
        for &rowS in S.column(colS).iter().filter(|&&r| r <= colS) {
            let rowP = iperm[rowS];
            let col_idx = max(colP, rowP);
            rowval[row_starts[col_idx]] = min(colP, rowP);
            row_starts[col_idx] += 1;
        }
    }
    SymbolicCscMatrix::new(n, n, colptr, rowval)
}
