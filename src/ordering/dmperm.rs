#![allow(non_snake_case)]

use super::{Matching, OrderingSettings, StronglyConnectedComponents, LOG_TARGET};
use crate::algebra::SymbolicCscMatrix;
use crate::graph::DfsWorkspace;
use std::collections::VecDeque;
use std::ops::Range;

/// Dulmage-Mendelsohn decomposition of a rectangular pattern.
///
/// `A(p,q)` is in block upper triangular form.  Block `b` spans rows
/// `r[b]..r[b+1]` and columns `s[b]..s[b+1]` of the permuted matrix.
///
/// The coarse decomposition splits the permuted rows at `rr` and
/// columns at `cc`:
///
/// ```text
///          C0    C1    C2    C3
///   R1  [  *     *     .     . ]
///   R2  [              *     . ]
///   R3  [                    * ]
///   R0  [                    * ]
/// ```
///
/// `C0` holds the unmatched columns and `R0` the unmatched rows.
/// `A(R1, C0 C1)` is underdetermined, `A(R2,C2)` square with a
/// zero-free diagonal and `A(R3 R0, C3)` overdetermined.  The fine
/// decomposition splits `A(R2,C2)` into its strongly connected
/// components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DulmageMendelsohn {
    /// row permutation, length `m`
    pub p: Vec<usize>,
    /// column permutation, length `n`
    pub q: Vec<usize>,
    /// row block boundaries, length `nb+1`
    pub r: Vec<usize>,
    /// column block boundaries, length `nb+1`
    pub s: Vec<usize>,
    /// coarse row boundaries: R1 is `rr[0]..rr[1]`, R2 `rr[1]..rr[2]`,
    /// R3 `rr[2]..rr[3]` and R0 `rr[3]..rr[4]`
    pub rr: [usize; 5],
    /// coarse column boundaries: C0 is `cc[0]..cc[1]`, C1 `cc[1]..cc[2]`,
    /// C2 `cc[2]..cc[3]` and C3 `cc[3]..cc[4]`
    pub cc: [usize; 5],
    /// number of blocks in the fine decomposition
    pub nb: usize,
}

// BFS marks for the coarse sets
const UNVISITED: i8 = -1;
const UNMATCHED: i8 = 0;
const SET1: i8 = 1;
const SET3: i8 = 3;

impl DulmageMendelsohn {
    /// Coarse and fine decomposition of `A`.  `seed` sets the column
    /// order of the maximum matching, see [`Matching::generate`].
    pub fn generate(A: &SymbolicCscMatrix, seed: i64) -> Self {
        let (m, n) = (A.m, A.n);
        let matching = Matching::generate(A, seed);

        // coarse decomposition
        let mut row_set = vec![UNVISITED; m];
        let mut col_set = vec![UNVISITED; n];
        _bfs(
            A,
            &matching.col_to_row,
            &matching.row_to_col,
            &mut row_set,
            &mut col_set,
            SET1,
        );
        let AT = A.transpose();
        _bfs(
            &AT,
            &matching.row_to_col,
            &matching.col_to_row,
            &mut col_set,
            &mut row_set,
            SET3,
        );

        let mut p = Vec::with_capacity(m);
        let mut q = Vec::with_capacity(n);
        let mut rr = [0; 5];
        let mut cc = [0; 5];

        // C0
        q.extend((0..n).filter(|&j| col_set[j] == UNMATCHED));
        cc[1] = q.len();
        // R1 C1, R2 C2 and R3 C3
        for (set, mark) in [(1, SET1), (2, UNVISITED), (3, SET3)] {
            for j in (0..n).filter(|&j| col_set[j] == mark) {
                if let Some(i) = matching.col_to_row[j] {
                    p.push(i);
                    q.push(j);
                }
            }
            cc[set + 1] = q.len();
            rr[set] = p.len();
        }
        // R0
        p.extend((0..m).filter(|&i| row_set[i] == UNMATCHED));
        rr[4] = p.len();
        debug_assert_eq!((p.len(), q.len()), (m, n));

        log::debug!(
            target: LOG_TARGET,
            "dmperm: coarse rows {:?}, coarse columns {:?}",
            rr,
            cc
        );

        // fine decomposition of C = A(R2, C2)
        let mut pinv = vec![0; m];
        for (k, &i) in p.iter().enumerate() {
            pinv[i] = k;
        }
        let C = A
            .permute(Some(&pinv), Some(&q))
            .submatrix(rr[1]..rr[2], cc[2]..cc[3]);
        let mut ws = DfsWorkspace::new(C.n);
        let scc = StronglyConnectedComponents::find(&C, &mut ws);

        // apply the component order within R2 and C2
        let nc = cc[3] - cc[2];
        let q2: Vec<usize> = scc.p.iter().map(|&k| q[k + cc[2]]).collect();
        q[cc[2]..cc[3]].copy_from_slice(&q2);
        let p2: Vec<usize> = scc.p.iter().map(|&k| p[k + rr[1]]).collect();
        p[rr[1]..rr[1] + nc].copy_from_slice(&p2);

        // merge the coarse blocks with the components
        let mut r = Vec::with_capacity(scc.nb + 3);
        let mut s = Vec::with_capacity(scc.nb + 3);
        if cc[2] > 0 {
            r.push(0);
            s.push(0);
        }
        for &rs in &scc.r[..scc.nb] {
            r.push(rs + rr[1]);
            s.push(rs + cc[2]);
        }
        if rr[2] < m {
            r.push(rr[2]);
            s.push(cc[3]);
        }
        let nb = r.len();
        if let (Some(r0), Some(s0)) = (r.first_mut(), s.first_mut()) {
            *r0 = 0;
            *s0 = 0;
        }
        r.push(m);
        s.push(n);

        log::debug!(
            target: LOG_TARGET,
            "dmperm: {} blocks, structural rank {}",
            nb,
            rr[3]
        );

        DulmageMendelsohn {
            p,
            q,
            r,
            s,
            rr,
            cc,
            nb,
        }
    }

    /// As [`generate`](Self::generate), with the matching column order
    /// taken from `settings.matching_seed`.
    pub fn generate_with_settings(A: &SymbolicCscMatrix, settings: &OrderingSettings) -> Self {
        Self::generate(A, settings.matching_seed)
    }

    /// Number of blocks in the fine decomposition
    pub fn block_count(&self) -> usize {
        self.nb
    }

    /// Size of a maximum matching, an upper bound on the numeric rank
    pub fn structural_rank(&self) -> usize {
        self.rr[3]
    }

    /// Number of `1 x 1` blocks
    pub fn singletons(&self) -> usize {
        self.blocks()
            .filter(|(rows, cols)| rows.len() == 1 && cols.len() == 1)
            .count()
    }

    /// Row and column ranges of each block of `A(p,q)`
    pub fn blocks(&self) -> impl Iterator<Item = (Range<usize>, Range<usize>)> + '_ {
        self.r
            .windows(2)
            .zip(self.s.windows(2))
            .map(|(r, s)| (r[0]..r[1], s[0]..s[1]))
    }

    /// The coarse row sets `[R1, R2, R3, R0]` as ranges of `p`
    pub fn coarse_row_sets(&self) -> [Range<usize>; 4] {
        let rr = &self.rr;
        [rr[0]..rr[1], rr[1]..rr[2], rr[2]..rr[3], rr[3]..rr[4]]
    }

    /// The coarse column sets `[C0, C1, C2, C3]` as ranges of `q`
    pub fn coarse_col_sets(&self) -> [Range<usize>; 4] {
        let cc = &self.cc;
        [cc[0]..cc[1], cc[1]..cc[2], cc[2]..cc[3], cc[3]..cc[4]]
    }
}

// Breadth-first search along alternating paths from the unmatched
// columns of A.  Reached rows and their matched columns get `mark`.
fn _bfs(
    A: &SymbolicCscMatrix,
    col_match: &[Option<usize>],
    row_match: &[Option<usize>],
    row_set: &mut [i8],
    col_set: &mut [i8],
    mark: i8,
) {
    let mut queue = VecDeque::new();
    for (j, matched) in col_match.iter().enumerate() {
        if matched.is_none() {
            col_set[j] = UNMATCHED;
            queue.push_back(j);
        }
    }
    while let Some(j) = queue.pop_front() {
        for &i in A.column(j) {
            if row_set[i] >= 0 {
                continue;
            }
            row_set[i] = mark;
            let Some(j2) = row_match[i] else {
                continue;
            };
            if col_set[j2] >= 0 {
                continue;
            }
            col_set[j2] = mark;
            queue.push_back(j2);
        }
    }
}
