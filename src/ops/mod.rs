//! Recursive tree operations.
//!
//! Every function here works on raw roots (`Option<Idx<Node>>`) plus the
//! `[lo, hi]` range the root covers; the [`SegForest`](crate::SegForest)
//! facade supplies `[1, N]` and maps roots to versions. All mutating
//! operations are copy-on-write: they allocate fresh nodes for whatever
//! changes and share everything else by index, so input roots stay valid.

pub mod merge;
pub mod query;
pub mod split;
pub mod update;

use safe_bump::Idx;

use crate::arena::NodeArena;
use crate::error::Error;
use crate::node::Node;

/// Returns `(count, sum)` of an optional subtree.
///
/// An absent subtree aggregates to zero.
pub fn aggregate(store: &NodeArena, node: Option<Idx<Node>>) -> (u64, i64) {
    node.map_or((0, 0), |idx| {
        let n = store.get(idx);
        (n.count, n.sum)
    })
}

/// Allocates an internal node over two children, recomputing its
/// aggregates from theirs.
pub fn alloc_internal(
    store: &mut NodeArena,
    left: Option<Idx<Node>>,
    right: Option<Idx<Node>>,
) -> Result<Idx<Node>, Error> {
    let (left_count, left_sum) = aggregate(store, left);
    let (right_count, right_sum) = aggregate(store, right);
    store.alloc(Node {
        left,
        right,
        count: left_count + right_count,
        sum: left_sum + right_sum,
    })
}

/// Like [`alloc_internal`], but yields `None` instead of materializing a
/// node when both children are absent.
pub fn alloc_if_occupied(
    store: &mut NodeArena,
    left: Option<Idx<Node>>,
    right: Option<Idx<Node>>,
) -> Result<Option<Idx<Node>>, Error> {
    if left.is_none() && right.is_none() {
        return Ok(None);
    }
    alloc_internal(store, left, right).map(Some)
}
