#![allow(non_snake_case)]

use crate::algebra::SymbolicCscMatrix;
use crate::graph::EMPTY;
use crate::permutation;
use std::iter::zip;

/// A maximum matching of the rows and columns of a sparse pattern,
/// i.e. a largest set of entries with no two in the same row or column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    /// `row_to_col[i]` is the column matched to row `i`
    pub row_to_col: Vec<Option<usize>>,
    /// `col_to_row[j]` is the row matched to column `j`
    pub col_to_row: Vec<Option<usize>>,
}

impl Matching {
    /// Maximum transversal of `A` by depth-first augmenting paths with a
    /// cheap assignment pass.
    ///
    /// Columns are processed in the order given by
    /// [`permutation::create`]`(n, seed)`: natural for `seed == 0`,
    /// reversed for `seed == -1` and a seeded shuffle otherwise.  The
    /// matching size does not depend on the seed.
    pub fn generate(A: &SymbolicCscMatrix, seed: i64) -> Self {
        let (m, n) = (A.m, A.n);

        // count nonempty rows and columns and the zero-free diagonal
        let mut row_used = vec![false; m];
        let mut n2 = 0;
        let mut k = 0;
        for j in 0..n {
            let col = A.column(j);
            n2 += !col.is_empty() as usize;
            col.iter().for_each(|&i| row_used[i] = true);
            k += col.contains(&j) as usize;
        }
        let m2 = row_used.iter().filter(|&&x| x).count();

        if k == m.min(n) {
            let row_to_col = (0..m).map(|i| (i < k).then_some(i)).collect();
            let col_to_row = (0..n).map(|j| (j < k).then_some(j)).collect();
            return Matching {
                row_to_col,
                col_to_row,
            };
        }

        // match the shorter side of the bipartite graph
        let transposed = m2 < n2;
        let matched = if transposed {
            _maxtrans(&A.transpose(), seed)
        } else {
            _maxtrans(A, seed)
        };
        let (other_len, own) = if transposed { (n, m) } else { (m, n) };
        debug_assert_eq!(matched.len(), other_len);

        let mut inverse = vec![None; own];
        for (i, j) in matched.iter().enumerate() {
            if let Some(j) = j {
                inverse[*j] = Some(i);
            }
        }
        if transposed {
            Matching {
                row_to_col: inverse,
                col_to_row: matched,
            }
        } else {
            Matching {
                row_to_col: matched,
                col_to_row: inverse,
            }
        }
    }

    /// Number of matched pairs, the structural rank of the pattern
    pub fn size(&self) -> usize {
        self.col_to_row.iter().flatten().count()
    }

    /// True if every matched pair is an entry of `A` and the two
    /// directions agree
    pub fn is_consistent_with(&self, A: &SymbolicCscMatrix) -> bool {
        if self.row_to_col.len() != A.m || self.col_to_row.len() != A.n {
            return false;
        }
        zip(0..A.n, &self.col_to_row).all(|(j, i)| match i {
            None => true,
            Some(i) => self.row_to_col[*i] == Some(j) && A.column(j).contains(i),
        })
    }
}

// Returns the column matched to each row of C.
fn _maxtrans(C: &SymbolicCscMatrix, seed: i64) -> Vec<Option<usize>> {
    let (m, n) = (C.m, C.n);
    let mut jmatch = vec![None; m];
    let mut cheap = C.colptr[0..n].to_vec();
    let mut visited = vec![EMPTY; n];
    let mut stack = AugmentStack::new(n);

    for k in permutation::create(n, seed) {
        _augment(k, C, &mut jmatch, &mut cheap, &mut visited, &mut stack);
    }
    jmatch
}

// Frames of the alternating path search: a column, the row it would
// take over, and the resume point in its adjacency list.
struct AugmentStack {
    js: Vec<usize>,
    is: Vec<usize>,
    ps: Vec<usize>,
}

impl AugmentStack {
    fn new(n: usize) -> Self {
        AugmentStack {
            js: Vec::with_capacity(n),
            is: Vec::with_capacity(n),
            ps: Vec::with_capacity(n),
        }
    }

    fn clear(&mut self) {
        self.js.clear();
        self.is.clear();
        self.ps.clear();
    }

    fn push(&mut self, j: usize) {
        self.js.push(j);
        self.is.push(EMPTY);
        self.ps.push(0);
    }

    fn pop(&mut self) {
        self.js.pop();
        self.is.pop();
        self.ps.pop();
    }
}

// Search for an augmenting path from column k and flip it if found.
fn _augment(
    k: usize,
    C: &SymbolicCscMatrix,
    jmatch: &mut [Option<usize>],
    cheap: &mut [usize],
    visited: &mut [usize],
    stack: &mut AugmentStack,
) {
    let mut found = false;
    stack.clear();
    stack.push(k);

    while let Some(&j) = stack.js.last() {
        let head = stack.js.len() - 1;
        let end = C.colptr[j + 1];

        if visited[j] != k {
            visited[j] = k;
            // try a cheap assignment to an unmatched row
            let mut p = cheap[j];
            while p < end && !found {
                let i = C.rowval[p];
                p += 1;
                if jmatch[i].is_none() {
                    found = true;
                    stack.is[head] = i;
                }
            }
            cheap[j] = p;
            if found {
                break;
            }
            stack.ps[head] = C.colptr[j];
        }

        // depth-first search of the columns matched to rows of j
        let mut next = None;
        for p in stack.ps[head]..end {
            let i = C.rowval[p];
            match jmatch[i] {
                Some(j2) if visited[j2] != k => {
                    next = Some((p, i, j2));
                    break;
                }
                _ => {}
            }
        }
        match next {
            Some((p, i, j2)) => {
                stack.ps[head] = p + 1;
                stack.is[head] = i;
                stack.push(j2);
            }
            None => stack.pop(),
        }
    }

    if found {
        for (&i, &j) in zip(&stack.is, &stack.js) {
            jmatch[i] = Some(j);
        }
    }
}
