//! Iterator over the occupied keys of one tree version.

use safe_bump::Idx;

use crate::arena::NodeArena;
use crate::node::Node;

/// One occupied key of a tree version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    /// The key, in `[1, N]`.
    pub pos: u32,
    /// Number of elements recorded at this key.
    pub count: u64,
    /// Sum of element weights recorded at this key.
    pub sum: i64,
}

/// Iterator over [`Element`]s of one version, in ascending key order.
///
/// Created by [`SegForest::iter`](crate::SegForest::iter).
pub struct Iter {
    elements: Vec<Element>,
    pos: usize,
}

impl Iter {
    /// Collects all occupied leaves of the subtree via DFS.
    pub(crate) fn new(store: &NodeArena, root: Option<Idx<Node>>, lo: u32, hi: u32) -> Self {
        let mut elements = Vec::new();
        if let Some(idx) = root {
            collect(store, idx, lo, hi, &mut elements);
        }
        Self { elements, pos: 0 }
    }
}

impl Iterator for Iter {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        if self.pos < self.elements.len() {
            let item = self.elements[self.pos];
            self.pos += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter {}

/// In-order DFS over materialized leaves of `[lo, hi]`.
fn collect(store: &NodeArena, idx: Idx<Node>, lo: u32, hi: u32, out: &mut Vec<Element>) {
    let n = *store.get(idx);
    if lo == hi {
        if n.count > 0 {
            out.push(Element {
                pos: lo,
                count: n.count,
                sum: n.sum,
            });
        }
        return;
    }
    let mid = Node::midpoint(lo, hi);
    if let Some(left) = n.left {
        collect(store, left, lo, mid, out);
    }
    if let Some(right) = n.right {
        collect(store, right, mid + 1, hi, out);
    }
}
