use super::EMPTY;

/// Depth-first search of the tree rooted at `j`, writing nodes to
/// `post[k..]` in postorder.  The children of node `p` are the linked
/// list `head[p], next[head[p]], ...`, terminated by `EMPTY`.  `head` is
/// consumed during the traversal.  Returns `k` advanced by the number of
/// nodes in the tree.
pub fn tree_depth_first_search(
    j: usize,
    mut k: usize,
    head: &mut [usize],
    next: &[usize],
    post: &mut [usize],
    stack: &mut Vec<usize>,
) -> usize {
    stack.clear();
    stack.push(j);
    while let Some(&p) = stack.last() {
        let i = head[p];
        if i == EMPTY {
            stack.pop();
            post[k] = p;
            k += 1;
        } else {
            head[p] = next[i];
            stack.push(i);
        }
    }
    k
}

/// Postorder of a forest given by parent pointers.  Children are
/// visited in increasing index order and every subtree occupies a
/// contiguous range of the output.
pub fn postorder(parent: &[Option<usize>]) -> Vec<usize> {
    let n = parent.len();
    let mut head = vec![EMPTY; n];
    let mut next = vec![EMPTY; n];
    let mut post = vec![0; n];
    let mut stack = Vec::with_capacity(n);

    // build child lists in reverse so they come out in order
    for j in (0..n).rev() {
        if let Some(p) = parent[j] {
            next[j] = head[p];
            head[p] = j;
        }
    }
    let mut k = 0;
    for j in 0..n {
        if parent[j].is_none() {
            k = tree_depth_first_search(j, k, &mut head, &next, &mut post, &mut stack);
        }
    }
    post
}
