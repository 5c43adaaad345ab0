//! Point update and initial build — COW path-copy insertion.

use safe_bump::Idx;

use crate::arena::NodeArena;
use crate::error::Error;
use crate::node::Node;
use crate::ops::alloc_internal;

/// Records one element of weight `weight` at key `pos`, returning the
/// root of a new tree.
///
/// Descends toward the leaf for `pos`, allocating a fresh node at every
/// level; the branch not taken is carried over by index, unchanged. The
/// input root and all of its nodes remain valid — callers wanting
/// mutate-in-place semantics discard the old root themselves.
///
/// `pos` must lie in `[lo, hi]` (validated by the caller).
pub fn update_recursive(
    store: &mut NodeArena,
    node: Option<Idx<Node>>,
    lo: u32,
    hi: u32,
    pos: u32,
    weight: i64,
) -> Result<Idx<Node>, Error> {
    if lo == hi {
        let (count, sum) = node.map_or((0, 0), |idx| {
            let n = store.get(idx);
            (n.count, n.sum)
        });
        return store.alloc(Node::leaf(count + 1, sum + weight));
    }

    let mid = Node::midpoint(lo, hi);
    let (left, right) = node.map_or((None, None), |idx| {
        let n = store.get(idx);
        (n.left, n.right)
    });

    let (left, right) = if pos <= mid {
        let new_left = update_recursive(store, left, lo, mid, pos, weight)?;
        (Some(new_left), right)
    } else {
        let new_right = update_recursive(store, right, mid + 1, hi, pos, weight)?;
        (left, Some(new_right))
    };
    alloc_internal(store, left, right)
}

/// Builds a tree over `[lo, hi]` from an initial weight sequence.
///
/// `values` is the slice of weights for the leading keys of `[lo, hi]`,
/// one element of multiplicity 1 per key; keys past `values.len()` stay
/// absent, so only occupied leaves are materialized. The caller
/// guarantees `values.len() <= hi - lo + 1`.
pub fn build_recursive(
    store: &mut NodeArena,
    lo: u32,
    hi: u32,
    values: &[i64],
) -> Result<Option<Idx<Node>>, Error> {
    if values.is_empty() {
        return Ok(None);
    }
    if lo == hi {
        return store.alloc(Node::leaf(1, values[0])).map(Some);
    }

    let mid = Node::midpoint(lo, hi);
    let left_len = (mid - lo + 1) as usize;
    let (left_values, right_values) = if values.len() <= left_len {
        (values, &[][..])
    } else {
        values.split_at(left_len)
    };

    let left = build_recursive(store, lo, mid, left_values)?;
    let right = build_recursive(store, mid + 1, hi, right_values)?;
    alloc_internal(store, left, right).map(Some)
}
