//! Segment-tree node model.
//!
//! A node covers one sub-range `[lo, hi]` of the key domain. The range
//! itself is not stored: it is reconstructed from the recursion path,
//! halving at [`midpoint`](Node::midpoint) on every descent, so a node
//! is just two child indices and two aggregates.

use std::fmt;

use safe_bump::Idx;

/// One segment-tree node.
///
/// Children are arena indices; `None` means the corresponding half-range
/// holds no elements (an absent subtree aggregates to zero). Within a
/// single tree a node owns its children exclusively, but the same
/// physical node may be shared as a child across *different* roots —
/// that sharing is what makes the forest persistent.
///
/// Invariant: for an internal node, `count` and `sum` equal the sums of
/// the corresponding fields over its present children; for a leaf, they
/// describe the elements recorded at its single key.
#[derive(Clone, Copy)]
pub struct Node {
    /// Left child, covering `[lo, mid]`.
    pub left: Option<Idx<Node>>,
    /// Right child, covering `[mid + 1, hi]`.
    pub right: Option<Idx<Node>>,
    /// Number of elements recorded under this node's range.
    pub count: u64,
    /// Sum of element weights recorded under this node's range.
    pub sum: i64,
}

impl Node {
    /// Creates a leaf holding `count` elements of total weight `sum`.
    #[inline]
    #[must_use]
    pub const fn leaf(count: u64, sum: i64) -> Self {
        Self {
            left: None,
            right: None,
            count,
            sum,
        }
    }

    /// Splitting point of `[lo, hi]`: the left child covers
    /// `[lo, mid]`, the right child `[mid + 1, hi]`.
    #[inline]
    #[must_use]
    pub const fn midpoint(lo: u32, hi: u32) -> u32 {
        lo + (hi - lo) / 2
    }

    /// Returns `true` if this node has no children.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("count", &self.count)
            .field("sum", &self.sum)
            .field("left", &self.left.is_some())
            .field("right", &self.right.is_some())
            .finish()
    }
}
