//! Merge engine — pointwise union of two trees over the same domain.

use safe_bump::Idx;

use crate::arena::NodeArena;
use crate::error::Error;
use crate::node::Node;
use crate::ops::alloc_internal;

/// Merges two subtrees covering the same range `[lo, hi]` into one whose
/// aggregates are the pointwise sum of the inputs.
///
/// When either side is absent the other side is returned unchanged — no
/// allocation, no recursion. That reuse is what bounds a sequence of `q`
/// splits and merges to O(q log N) total work: only ranges where both
/// trees actually hold elements are visited, and each visited pair costs
/// one fresh node (copy-on-write, so both input roots — and any older
/// roots sharing their nodes — keep answering queries unchanged).
///
/// Both inputs must cover the identical key domain; the forest facade
/// guarantees this by construction.
pub fn merge_recursive(
    store: &mut NodeArena,
    lhs: Option<Idx<Node>>,
    rhs: Option<Idx<Node>>,
    lo: u32,
    hi: u32,
) -> Result<Option<Idx<Node>>, Error> {
    let (lhs, rhs) = match (lhs, rhs) {
        (None, other) | (other, None) => return Ok(other),
        (Some(a), Some(b)) => (a, b),
    };

    let left_node = *store.get(lhs);
    let right_node = *store.get(rhs);

    if lo == hi {
        let fused = Node::leaf(
            left_node.count + right_node.count,
            left_node.sum + right_node.sum,
        );
        return store.alloc(fused).map(Some);
    }

    let mid = Node::midpoint(lo, hi);
    let left = merge_recursive(store, left_node.left, right_node.left, lo, mid)?;
    let right = merge_recursive(store, left_node.right, right_node.right, mid + 1, hi)?;
    alloc_internal(store, left, right).map(Some)
}
