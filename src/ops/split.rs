//! Split engine — detaches a key sub-range into an independent tree.

use safe_bump::Idx;

use crate::arena::NodeArena;
use crate::error::Error;
use crate::node::Node;
use crate::ops::alloc_if_occupied;

/// The two disjoint trees produced by a split.
pub struct SplitOutcome {
    /// Root over the original domain minus `[l, r]`.
    pub remaining: Option<Idx<Node>>,
    /// Root holding exactly the `[l, r]` slice.
    pub extracted: Option<Idx<Node>>,
}

/// Partitions the subtree covering `[lo, hi]` into the contribution of
/// keys in `[l, r]` (extracted) and everything else (remaining).
///
/// A node fully inside `[l, r]` transfers to the extracted side
/// wholesale — by index, in O(1), with no deeper recursion. A node fully
/// outside transfers to the remaining side the same way. Only nodes
/// partially overlapping `[l, r]` are freshly allocated, on each side
/// that ends up non-empty, with aggregates recomputed from their
/// children. The source tree is never touched: its root keeps answering
/// queries exactly as before.
///
/// Conservation: `remaining` and `extracted` aggregates sum to the
/// source's, over the whole domain and over every sub-range.
pub fn split_recursive(
    store: &mut NodeArena,
    node: Option<Idx<Node>>,
    lo: u32,
    hi: u32,
    l: u32,
    r: u32,
) -> Result<SplitOutcome, Error> {
    let Some(idx) = node else {
        return Ok(SplitOutcome {
            remaining: None,
            extracted: None,
        });
    };
    if r < lo || hi < l {
        return Ok(SplitOutcome {
            remaining: node,
            extracted: None,
        });
    }
    if l <= lo && hi <= r {
        return Ok(SplitOutcome {
            remaining: None,
            extracted: node,
        });
    }

    let n = *store.get(idx);
    let mid = Node::midpoint(lo, hi);
    let left = split_recursive(store, n.left, lo, mid, l, r)?;
    let right = split_recursive(store, n.right, mid + 1, hi, l, r)?;

    Ok(SplitOutcome {
        remaining: alloc_if_occupied(store, left.remaining, right.remaining)?,
        extracted: alloc_if_occupied(store, left.extracted, right.extracted)?,
    })
}
