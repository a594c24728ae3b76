#![allow(non_snake_case)]
//! Approximate minimum degree ordering.
//!
//! The ordering is computed on a quotient graph held in a single index
//! array.  Each live node or element owns a contiguous run of that array,
//! listing first the elements it is adjacent to and then its neighbouring
//! nodes.  Eliminating a pivot turns it into a new element in place or at
//! the free end of the array, and the array is compacted when it runs out
//! of room.  The final order is a postorder of the assembly tree.
//!
//! Reference: Amestoy, Davis and Duff, "An approximate minimum degree
//! ordering algorithm", SIAM J. Matrix Anal. Appl. 17(4), 1996.

use super::{ColumnOrdering, OrderingError, OrderingSettings, LOG_TARGET};
use crate::algebra::{ShapedMatrix, SymbolicCscMatrix};
use crate::graph::{tree_depth_first_search, EMPTY};
use core::cmp::{max, min};

/// Position of a node or element in the quotient graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    /// live, with its list starting at this offset of the pattern array
    Live(usize),
    /// a root of the assembly tree
    Root,
    /// absorbed into the given element or supernode
    Absorbed(usize),
}

/// Scratch space for [`approximate_minimum_degree`].
///
/// Every array is sized for `n+1` nodes, the extra one being a
/// placeholder element that collects dense rows.  A workspace can be
/// reused for any number of orderings.
#[derive(Debug, Clone, Default)]
pub struct AmdWorkspace {
    // length of each node or element list in iw
    len: Vec<usize>,
    // supernode sizes, negated while a node is in the current element
    nv: Vec<isize>,
    next: Vec<usize>,
    last: Vec<usize>,
    head: Vec<usize>,
    // element counts: >= 0 for nodes, -1 dead node, -2 element
    elen: Vec<isize>,
    degree: Vec<usize>,
    // set-difference marks, 0 flags a dead element
    w: Vec<isize>,
    hhead: Vec<usize>,
    // quotient graph storage and its links
    iw: Vec<usize>,
    pe: Vec<Link>,
    // compaction: object starts and their displaced first entries
    start: Vec<bool>,
    first: Vec<usize>,
    // postorder output and its stack
    post: Vec<usize>,
    stack: Vec<usize>,
}

impl AmdWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    fn _prepare(&mut self, n: usize, nzmax: usize) {
        fn reset<V: Clone>(v: &mut Vec<V>, len: usize, val: V) {
            v.clear();
            v.resize(len, val);
        }
        reset(&mut self.len, n + 1, 0);
        reset(&mut self.nv, n + 1, 1);
        reset(&mut self.next, n + 1, EMPTY);
        reset(&mut self.last, n + 1, EMPTY);
        reset(&mut self.head, n + 1, EMPTY);
        reset(&mut self.elen, n + 1, 0);
        reset(&mut self.degree, n + 1, 0);
        reset(&mut self.w, n + 1, 1);
        reset(&mut self.hhead, n + 1, EMPTY);
        reset(&mut self.iw, nzmax, 0);
        reset(&mut self.pe, n + 1, Link::Root);
        reset(&mut self.start, nzmax, false);
        reset(&mut self.first, n + 1, 0);
        reset(&mut self.post, n + 1, 0);
        self.stack.clear();
    }
}

/// Fill-reducing ordering of `A` with default settings apart from the
/// chosen pattern.
///
/// Returns `Ok(None)` when the natural ordering is requested, and an error
/// for [`ColumnOrdering::MinimumDegreeAtPlusA`] on a non-square matrix.
/// Otherwise the result `p` is a permutation of `0..n` such that
/// `A(p,p)` (or `A(:,p)` for the `A'A` variants) factors with little fill.
pub fn generate(
    A: &SymbolicCscMatrix,
    ordering: ColumnOrdering,
) -> Result<Option<Vec<usize>>, OrderingError> {
    let settings = OrderingSettings {
        ordering,
        ..OrderingSettings::default()
    };
    generate_with_settings(A, &settings)
}

/// As [`generate`], using the pattern and dense threshold scaling in
/// `settings`.
pub fn generate_with_settings(
    A: &SymbolicCscMatrix,
    settings: &OrderingSettings,
) -> Result<Option<Vec<usize>>, OrderingError> {
    let Some(C) = construct_matrix(A, settings.ordering, settings.dense_scale)? else {
        return Ok(None);
    };
    let mut ws = AmdWorkspace::new();
    Ok(Some(approximate_minimum_degree(C, settings.dense_scale, &mut ws)))
}

/// Rows with more than this many entries are treated as dense in an
/// `n`-column problem.
pub fn dense_threshold(n: usize, dense_scale: f64) -> usize {
    let d = (dense_scale * 10.0 * (n as f64).sqrt()) as isize;
    let d = min(n as isize - 2, max(16, d));
    max(d, 0) as usize
}

/// The symmetric pattern ordered for a given [`ColumnOrdering`], with its
/// diagonal removed.  `None` for the natural ordering.
pub fn construct_matrix(
    A: &SymbolicCscMatrix,
    ordering: ColumnOrdering,
    dense_scale: f64,
) -> Result<Option<SymbolicCscMatrix>, OrderingError> {
    let AT = A.transpose();

    let mut C = match ordering {
        ColumnOrdering::Natural => return Ok(None),
        ColumnOrdering::MinimumDegreeAtPlusA => {
            if !A.is_square() {
                return Err(OrderingError::NotSquare);
            }
            SymbolicCscMatrix::add(A, &AT)?
        }
        ColumnOrdering::MinimumDegreeStS => {
            // drop dense columns of A', i.e. dense rows of A
            let dense = dense_threshold(A.n, dense_scale);
            let mut colptr = Vec::with_capacity(AT.n + 1);
            let mut rowval = Vec::with_capacity(AT.nnz());
            let mut dropped = 0;
            for j in 0..AT.n {
                colptr.push(rowval.len());
                let col = AT.column(j);
                if col.len() > dense {
                    dropped += 1;
                    continue;
                }
                rowval.extend_from_slice(col);
            }
            colptr.push(rowval.len());
            if dropped > 0 {
                log::debug!(target: LOG_TARGET, "amd: ignoring {} dense rows", dropped);
            }
            let S_T = SymbolicCscMatrix::new(AT.m, AT.n, colptr, rowval);
            SymbolicCscMatrix::multiply(&S_T, &S_T.transpose())?
        }
        ColumnOrdering::MinimumDegreeAtA => {
            SymbolicCscMatrix::multiply(&AT, A)?
        }
    };
    C.drop_diagonal();
    Ok(Some(C))
}

fn _clear_marks(mark: isize, lemax: isize, w: &mut [isize], n: usize) -> isize {
    if mark < 2 || mark.checked_add(lemax).is_none() {
        for wk in w.iter_mut().take(n) {
            if *wk != 0 {
                *wk = 1;
            }
        }
        return 2;
    }
    mark
}

fn _live(pe: &[Link], j: usize) -> usize {
    match pe[j] {
        Link::Live(p) => p,
        _ => unreachable!("node {} has no adjacency list", j),
    }
}

/// Minimum degree ordering of the square, diagonal-free symmetric
/// pattern `C`, consumed to become the initial quotient graph.
///
/// Nodes with more than [`dense_threshold`] neighbours are ordered last.
pub fn approximate_minimum_degree(
    C: SymbolicCscMatrix,
    dense_scale: f64,
    ws: &mut AmdWorkspace,
) -> Vec<usize> {
    let n = C.n;
    if n == 0 {
        return Vec::new();
    }
    let dense = dense_threshold(n, dense_scale);
    let mut cnz = C.nnz();
    let nzmax = cnz + cnz / 5 + 2 * n;
    ws._prepare(n, nzmax);

    let AmdWorkspace {
        len,
        nv,
        next,
        last,
        head,
        elen,
        degree,
        w,
        hhead,
        iw,
        pe,
        start,
        first,
        post,
        stack,
    } = ws;

    iw[..cnz].copy_from_slice(&C.rowval);
    for k in 0..n {
        len[k] = C.colptr[k + 1] - C.colptr[k];
        degree[k] = len[k];
        pe[k] = Link::Live(C.colptr[k]);
    }
    let mut mark = _clear_marks(0, 0, w, n);
    elen[n] = -2;
    pe[n] = Link::Root;
    w[n] = 0;

    // initialize degree lists and fold dense rows into element n
    let mut nel = 0;
    let mut ndense = 0;
    for i in 0..n {
        let d = degree[i];
        if d == 0 {
            elen[i] = -2;
            nel += 1;
            pe[i] = Link::Root;
            w[i] = 0;
        } else if d > dense {
            ndense += 1;
            nv[i] = 0;
            elen[i] = -1;
            nel += 1;
            pe[i] = Link::Absorbed(n);
            nv[n] += 1;
        } else {
            if head[d] != EMPTY {
                last[head[d]] = i;
            }
            next[i] = head[d];
            head[d] = i;
        }
    }
    if ndense > 0 {
        log::debug!(target: LOG_TARGET, "amd: {} dense rows above threshold {}", ndense, dense);
    }

    let mut mindeg = 0;
    let mut lemax: isize = 0;

    while nel < n {
        // select a node of minimum approximate degree
        let mut k = EMPTY;
        while mindeg < n {
            k = head[mindeg];
            if k != EMPTY {
                break;
            }
            mindeg += 1;
        }
        if next[k] != EMPTY {
            last[next[k]] = EMPTY;
        }
        head[mindeg] = next[k];
        let elenk = elen[k] as usize;
        let mut nvk = nv[k];
        nel += nvk as usize;
        log::trace!(target: LOG_TARGET, "amd: pivot {} of degree {} absorbing {} nodes", k, mindeg, nvk);

        // compact the pattern array if the new element may not fit
        if elenk > 0 && cnz + mindeg >= nzmax {
            for j in 0..n {
                if let Link::Live(p) = pe[j] {
                    first[j] = iw[p];
                    iw[p] = j;
                    start[p] = true;
                }
            }
            let (mut q, mut p) = (0, 0);
            while p < cnz {
                if start[p] {
                    start[p] = false;
                    let j = iw[p];
                    p += 1;
                    iw[q] = first[j];
                    pe[j] = Link::Live(q);
                    q += 1;
                    for _ in 1..len[j] {
                        iw[q] = iw[p];
                        q += 1;
                        p += 1;
                    }
                } else {
                    p += 1;
                }
            }
            log::debug!(target: LOG_TARGET, "amd: compacted pattern from {} to {} entries", cnz, q);
            cnz = q;
        }

        // construct the new element Lk
        let mut dk: isize = 0;
        nv[k] = -nvk;
        let mut p = _live(pe, k);
        let pk1 = if elenk == 0 { p } else { cnz };
        let mut pk2 = pk1;
        for k1 in 1..=elenk + 1 {
            let (e, mut pj, ln) = if k1 > elenk {
                (k, p, len[k] - elenk)
            } else {
                let e = iw[p];
                p += 1;
                (e, _live(pe, e), len[e])
            };
            for _ in 0..ln {
                let i = iw[pj];
                pj += 1;
                let nvi = nv[i];
                if nvi <= 0 {
                    continue;
                }
                dk += nvi;
                nv[i] = -nvi;
                iw[pk2] = i;
                pk2 += 1;
                // remove i from its degree list
                if next[i] != EMPTY {
                    last[next[i]] = last[i];
                }
                if last[i] != EMPTY {
                    next[last[i]] = next[i];
                } else {
                    head[degree[i]] = next[i];
                }
            }
            if e != k {
                pe[e] = Link::Absorbed(k);
                w[e] = 0;
            }
        }
        if elenk != 0 {
            cnz = pk2;
        }
        degree[k] = dk as usize;
        pe[k] = Link::Live(pk1);
        len[k] = pk2 - pk1;
        elen[k] = -2;

        // scan 1: w[e] - mark becomes |Le \ Lk| for every element e
        mark = _clear_marks(mark, lemax, w, n);
        for pk in pk1..pk2 {
            let i = iw[pk];
            let eln = elen[i];
            if eln <= 0 {
                continue;
            }
            let nvi = -nv[i];
            let wnvi = mark - nvi;
            let pi = _live(pe, i);
            for &e in &iw[pi..pi + eln as usize] {
                if w[e] >= mark {
                    w[e] -= nvi;
                } else if w[e] != 0 {
                    w[e] = degree[e] as isize + wnvi;
                }
            }
        }

        // scan 2: degree update, element absorption and hashing
        for pk in pk1..pk2 {
            let i = iw[pk];
            let p1 = _live(pe, i);
            let p2 = p1 + elen[i] as usize;
            let mut pn = p1;
            let mut h: usize = 0;
            let mut d: isize = 0;
            for p in p1..p2 {
                let e = iw[p];
                if w[e] != 0 {
                    let dext = w[e] - mark;
                    if dext > 0 {
                        d += dext;
                        iw[pn] = e;
                        pn += 1;
                        h = h.wrapping_add(e);
                    } else {
                        // aggressive absorption
                        pe[e] = Link::Absorbed(k);
                        w[e] = 0;
                    }
                }
            }
            elen[i] = (pn - p1 + 1) as isize;
            let p3 = pn;
            let p4 = p1 + len[i];
            for p in p2..p4 {
                let j = iw[p];
                let nvj = nv[j];
                if nvj <= 0 {
                    continue;
                }
                d += nvj;
                iw[pn] = j;
                pn += 1;
                h = h.wrapping_add(j);
            }
            if d == 0 {
                // mass elimination
                pe[i] = Link::Absorbed(k);
                let nvi = -nv[i];
                dk -= nvi;
                nvk += nvi;
                nel += nvi as usize;
                nv[i] = 0;
                elen[i] = -1;
            } else {
                degree[i] = min(degree[i], d as usize);
                // move k to the front of Ei
                iw[pn] = iw[p3];
                iw[p3] = iw[p1];
                iw[p1] = k;
                len[i] = pn - p1 + 1;
                let h = h % n;
                next[i] = hhead[h];
                hhead[h] = i;
                last[i] = h;
            }
        }
        degree[k] = dk as usize;
        lemax = max(lemax, dk);
        mark = _clear_marks(mark.saturating_add(lemax), lemax, w, n);

        // supernode detection
        for pk in pk1..pk2 {
            let i = iw[pk];
            if nv[i] >= 0 {
                continue;
            }
            let h = last[i];
            let mut i = hhead[h];
            hhead[h] = EMPTY;
            while i != EMPTY && next[i] != EMPTY {
                let ln = len[i];
                let eln = elen[i];
                let pi = _live(pe, i);
                for p in pi + 1..pi + ln {
                    w[iw[p]] = mark;
                }
                let mut jlast = i;
                let mut j = next[i];
                while j != EMPTY {
                    let mut ok = len[j] == ln && elen[j] == eln;
                    if ok {
                        let pj = _live(pe, j);
                        ok = iw[pj + 1..pj + ln].iter().all(|&x| w[x] == mark);
                    }
                    if ok {
                        // absorb j into i
                        pe[j] = Link::Absorbed(i);
                        nv[i] += nv[j];
                        nv[j] = 0;
                        elen[j] = -1;
                        j = next[j];
                        next[jlast] = j;
                    } else {
                        jlast = j;
                        j = next[j];
                    }
                }
                i = next[i];
                mark += 1;
            }
        }

        // finalize Lk and return its nodes to the degree lists
        let mut p = pk1;
        for pk in pk1..pk2 {
            let i = iw[pk];
            let nvi = -nv[i];
            if nvi <= 0 {
                continue;
            }
            nv[i] = nvi;
            let d = degree[i] as isize + dk - nvi;
            let d = min(d, n as isize - nel as isize - nvi) as usize;
            if head[d] != EMPTY {
                last[head[d]] = i;
            }
            next[i] = head[d];
            last[i] = EMPTY;
            head[d] = i;
            mindeg = min(mindeg, d);
            degree[i] = d;
            iw[p] = i;
            p += 1;
        }
        nv[k] = nvk;
        len[k] = p - pk1;
        if len[k] == 0 {
            pe[k] = Link::Root;
            w[k] = 0;
        }
        if elenk != 0 {
            cnz = p;
        }
    }

    // postorder the assembly tree
    let parent = |j: usize| match pe[j] {
        Link::Absorbed(e) => Some(e),
        _ => None,
    };
    head.fill(EMPTY);
    // nodes first, then elements, each list ends up in increasing order
    for j in (0..=n).rev() {
        if nv[j] > 0 {
            continue;
        }
        if let Some(e) = parent(j) {
            next[j] = head[e];
            head[e] = j;
        }
    }
    for e in (0..=n).rev() {
        if nv[e] <= 0 {
            continue;
        }
        if let Some(p) = parent(e) {
            next[e] = head[p];
            head[p] = e;
        }
    }
    let mut k = 0;
    for i in 0..=n {
        if parent(i).is_none() {
            k = tree_depth_first_search(i, k, head, next, post, stack);
        }
    }
    debug_assert_eq!(k, n + 1);
    post[..n].to_vec()
}
