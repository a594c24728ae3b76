#![allow(non_snake_case)]

use crate::algebra::SymbolicCscMatrix;

/// Caller-owned scratch space for [`depth_first_search`] and [`reach`].
///
/// Holds the explicit `(node, cursor)` frame stack and the visited flags.
/// The flags persist between calls until [`clear`](DfsWorkspace::clear) or
/// [`unmark`](DfsWorkspace::unmark), which is what lets several searches
/// share one visited set.
#[derive(Debug, Clone, Default)]
pub struct DfsWorkspace {
    // node and the position in its adjacency list to resume from
    frames: Vec<(usize, usize)>,
    marked: Vec<bool>,
}

impl DfsWorkspace {
    /// Workspace for graphs with up to `n` nodes
    pub fn new(n: usize) -> Self {
        DfsWorkspace {
            frames: Vec::with_capacity(n),
            marked: vec![false; n],
        }
    }

    /// Grow to hold `n` nodes and clear all flags
    pub fn resize(&mut self, n: usize) {
        self.marked.clear();
        self.marked.resize(n, false);
        self.frames.clear();
    }

    /// Clear all visited flags
    pub fn clear(&mut self) {
        self.marked.fill(false);
    }

    pub fn is_marked(&self, j: usize) -> bool {
        self.marked[j]
    }

    pub fn mark(&mut self, j: usize) {
        self.marked[j] = true;
    }

    pub fn unmark(&mut self, j: usize) {
        self.marked[j] = false;
    }
}

/// Depth-first search of `G` from node `j`.
///
/// Nodes are pushed onto `xi` in reverse finish order, growing downward
/// from `top`: on return `xi[newtop..top]` holds the nodes newly reached
/// from `j`, each before all of its descendants.  Returns `newtop`.
///
/// When `pinv` is supplied, node `j` is expanded through column `pinv[j]`
/// of `G`, and a node with `pinv[j] == None` has no outgoing edges.
/// Visited flags in `ws` are set and left set.
///
/// # Panics
/// Panics if `xi` runs out of room below `top`.
pub fn depth_first_search(
    j: usize,
    G: &SymbolicCscMatrix,
    pinv: Option<&[Option<usize>]>,
    mut top: usize,
    xi: &mut [usize],
    ws: &mut DfsWorkspace,
) -> usize {
    ws.frames.clear();
    ws.frames.push((j, 0));

    while let Some(&(j, cursor)) = ws.frames.last() {
        let jnew = match pinv {
            Some(pinv) => pinv[j],
            None => Some(j),
        };
        let (start, end) = match jnew {
            Some(c) => (G.colptr[c], G.colptr[c + 1]),
            None => (0, 0),
        };

        // first visit starts at the head of the adjacency list
        let mut p = if ws.marked[j] {
            cursor
        } else {
            ws.marked[j] = true;
            start
        };

        let mut child = None;
        while p < end {
            let i = G.rowval[p];
            p += 1;
            if !ws.marked[i] {
                child = Some(i);
                break;
            }
        }

        match child {
            Some(i) => {
                let last = ws.frames.len() - 1;
                ws.frames[last].1 = p;
                ws.frames.push((i, 0));
            }
            None => {
                ws.frames.pop();
                top -= 1;
                xi[top] = j;
            }
        }
    }
    top
}

/// Nonzero pattern of the solution `x` of `Gx = B[:,k]`, for triangular `G`.
///
/// On return `xi[top..n]` holds the reachable set in topological order,
/// where `n = G.ncols()` and `top` is the return value.  `xi` must have
/// length at least `n`.  Visited flags in `ws` are restored to false
/// for the reached nodes.
pub fn reach(
    G: &SymbolicCscMatrix,
    B: &SymbolicCscMatrix,
    k: usize,
    pinv: Option<&[Option<usize>]>,
    xi: &mut [usize],
    ws: &mut DfsWorkspace,
) -> usize {
    let n = G.n;
    let mut top = n;
    for &i in B.column(k) {
        if !ws.is_marked(i) {
            top = depth_first_search(i, G, pinv, top, xi, ws);
        }
    }
    for &i in &xi[top..n] {
        ws.unmark(i);
    }
    top
}
