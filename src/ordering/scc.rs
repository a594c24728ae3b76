#![allow(non_snake_case)]

use super::OrderingError;
use crate::algebra::{ShapedMatrix, SymbolicCscMatrix};
use crate::graph::{depth_first_search, DfsWorkspace};
use std::ops::Range;

/// Strongly connected components of the directed graph of a square
/// pattern, where entry `A[i,j]` is an edge `j -> i`.
///
/// `A(p,p)` is block triangular with the components as its irreducible
/// diagonal blocks.  Block `b` holds nodes `p[r[b]..r[b+1]]`, listed in
/// increasing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StronglyConnectedComponents {
    /// symmetric permutation gathering each component
    pub p: Vec<usize>,
    /// block boundaries, length `nb+1`
    pub r: Vec<usize>,
    /// number of components
    pub nb: usize,
}

impl StronglyConnectedComponents {
    /// Components of the square pattern `A`.
    pub fn generate(A: &SymbolicCscMatrix) -> Result<Self, OrderingError> {
        if !A.is_square() {
            return Err(OrderingError::NotSquare);
        }
        let mut ws = DfsWorkspace::new(A.n);
        Ok(Self::find(A, &mut ws))
    }

    // Kosaraju: finish order on A, then trees of A' in reverse finish order.
    pub(crate) fn find(A: &SymbolicCscMatrix, ws: &mut DfsWorkspace) -> Self {
        let n = A.n;
        let AT = A.transpose();
        ws.resize(n);

        let mut xi = vec![0; n];
        let mut top = n;
        for i in 0..n {
            if !ws.is_marked(i) {
                top = depth_first_search(i, A, None, top, &mut xi, ws);
            }
        }
        ws.clear();

        let mut p = vec![0; n];
        let mut r = vec![0; n + 1];
        let mut top = n;
        let mut nb = n;
        for &i in xi.iter() {
            if ws.is_marked(i) {
                continue;
            }
            r[nb] = top;
            nb -= 1;
            top = depth_first_search(i, &AT, None, top, &mut p, ws);
        }
        r[nb] = 0;
        r.copy_within(nb..=n, 0);
        let nb = n - nb;
        r.truncate(nb + 1);

        // sort each block in natural order
        let mut block = vec![0; n];
        for b in 0..nb {
            for &i in &p[r[b]..r[b + 1]] {
                block[i] = b;
            }
        }
        let mut next = r.clone();
        for i in 0..n {
            p[next[block[i]]] = i;
            next[block[i]] += 1;
        }

        StronglyConnectedComponents { p, r, nb }
    }

    /// Number of components
    pub fn block_count(&self) -> usize {
        self.nb
    }

    /// Positions in `p` of each component
    pub fn blocks(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.r.windows(2).map(|w| w[0]..w[1])
    }

    /// Nodes of component `b`
    pub fn block(&self, b: usize) -> &[usize] {
        &self.p[self.r[b]..self.r[b + 1]]
    }
}
