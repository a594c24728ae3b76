//! Graph primitives over compressed column adjacency structures.
//!
//! A square pattern `G` is read as a directed graph with an edge
//! `j -> i` for every entry `G[i,j]`.  Every traversal here is iterative
//! with an explicit stack, so deep graphs cannot overflow the call stack.

mod dfs;
mod etree;
mod postorder;

pub use dfs::*;
pub use etree::*;
pub use postorder::*;

/// Sentinel for absent entries in linked lists stored as index arrays.
pub(crate) const EMPTY: usize = usize::MAX;
