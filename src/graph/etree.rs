#![allow(non_snake_case)]

use crate::algebra::{MatrixDimensionError, ShapedMatrix, SymbolicCscMatrix};

/// Elimination tree of `A` (when `ata` is false) or of `A'A` (when `ata`
/// is true) without forming `A'A`.
///
/// For the symmetric case only the strict upper triangle of `A` is
/// consulted, so either a full symmetric pattern or its upper half
/// may be supplied.  `parent[j] == None` marks a root.
pub fn etree(A: &SymbolicCscMatrix, ata: bool) -> Vec<Option<usize>> {
    let (m, n) = A.size();
    let mut parent = vec![None; n];
    let mut ancestor: Vec<Option<usize>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = if ata { vec![None; m] } else { Vec::new() };

    for k in 0..n {
        for &row in A.column(k) {
            let mut i = if ata { prev[row] } else { Some(row) };

            // traverse from i to the root, with path compression
            while let Some(node) = i.filter(|&node| node < k) {
                let inext = ancestor[node];
                ancestor[node] = Some(k);
                if inext.is_none() {
                    parent[node] = Some(k);
                }
                i = inext;
            }
            if ata {
                prev[row] = Some(k);
            }
        }
    }
    parent
}

/// Elimination tree and the number of strictly subdiagonal nonzeros in
/// each column of the Cholesky factor `L` of a symmetric matrix.
///
/// Only the strict upper triangle of `A` is read.  Each column's row
/// subtree is walked once, so the cost is proportional to `nnz(L)`.
pub fn etree_with_counts(
    A: &SymbolicCscMatrix,
) -> Result<(Vec<Option<usize>>, Vec<usize>), MatrixDimensionError> {
    if !A.is_square() {
        return Err(MatrixDimensionError::NotSquare);
    }
    let n = A.n;
    let mut work = vec![0usize; n];
    let mut Lnz = vec![0usize; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];

    for j in 0..n {
        work[j] = j;
        for &istart in A.column(j).iter().filter(|&&i| i < j) {
            let mut i = istart;
            while work[i] != j {
                let p = *parent[i].get_or_insert(j);
                Lnz[i] += 1; // nonzeros in this column
                work[i] = j;
                i = p;
            }
        }
    }
    Ok((parent, Lnz))
}
