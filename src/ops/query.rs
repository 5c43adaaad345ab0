//! Range aggregate and order-statistic queries.
//!
//! Read-only: none of these allocate.

use safe_bump::Idx;

use crate::arena::NodeArena;
use crate::node::Node;
use crate::ops::aggregate;

/// Sum of element weights over keys in `[l, r]` within the subtree
/// covering `[lo, hi]`.
///
/// Standard range decomposition: a node fully inside `[l, r]` answers
/// from its aggregate in O(1); absent children contribute zero.
pub fn sum_in_range(
    store: &NodeArena,
    node: Option<Idx<Node>>,
    lo: u32,
    hi: u32,
    l: u32,
    r: u32,
) -> i64 {
    let Some(idx) = node else { return 0 };
    if r < lo || hi < l {
        return 0;
    }
    let n = *store.get(idx);
    if l <= lo && hi <= r {
        return n.sum;
    }
    let mid = Node::midpoint(lo, hi);
    sum_in_range(store, n.left, lo, mid, l, r) + sum_in_range(store, n.right, mid + 1, hi, l, r)
}

/// Number of elements recorded at keys in `[l, r]` within the subtree
/// covering `[lo, hi]`.
pub fn count_in_range(
    store: &NodeArena,
    node: Option<Idx<Node>>,
    lo: u32,
    hi: u32,
    l: u32,
    r: u32,
) -> u64 {
    let Some(idx) = node else { return 0 };
    if r < lo || hi < l {
        return 0;
    }
    let n = *store.get(idx);
    if l <= lo && hi <= r {
        return n.count;
    }
    let mid = Node::midpoint(lo, hi);
    count_in_range(store, n.left, lo, mid, l, r) + count_in_range(store, n.right, mid + 1, hi, l, r)
}

/// Key of the `k`-th smallest element (1-based, counting multiplicity)
/// in the subtree covering `[lo, hi]`.
///
/// The caller guarantees `1 <= k <= count` of the subtree; under that
/// precondition the descent always finds a present child.
pub fn kth_smallest(store: &NodeArena, node: Idx<Node>, lo: u32, hi: u32, k: u64) -> u32 {
    if lo == hi {
        return lo;
    }
    let n = *store.get(node);
    let mid = Node::midpoint(lo, hi);
    let (left_count, _) = aggregate(store, n.left);

    if k <= left_count {
        // left_count >= k >= 1 implies the left child is present.
        n.left
            .map_or(lo, |left| kth_smallest(store, left, lo, mid, k))
    } else {
        // k <= node.count implies the remainder falls in the right child.
        n.right
            .map_or(hi, |right| kth_smallest(store, right, mid + 1, hi, k - left_count))
    }
}
