//! Capacity-limited node arena.
//!
//! All trees in a forest allocate from one append-only
//! [`Arena`](safe_bump::Arena). Nodes are handed out by index and never
//! freed individually; reclamation is a whole-forest [`reset`](NodeArena::reset)
//! back to the empty arena, between independent problem instances.

use safe_bump::{Arena, Checkpoint, Idx};

use crate::error::Error;
use crate::node::Node;

/// Append-only node pool with a configured capacity ceiling.
///
/// The ceiling exists to turn runaway allocation (an undersized
/// configuration) into [`Error::ArenaExhausted`] instead of unbounded
/// memory growth. Size it to `O((n + q) log n)` for `n` elements and
/// `q` structural operations.
pub struct NodeArena {
    arena: Arena<Node>,
    base: Checkpoint<Node>,
    capacity: usize,
}

impl NodeArena {
    /// Creates an empty arena that will refuse to grow past `capacity`
    /// nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let arena = Arena::new();
        let base = arena.checkpoint();
        Self {
            arena,
            base,
            capacity,
        }
    }

    /// Allocates a node, returning its index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArenaExhausted`] once the capacity ceiling is
    /// reached.
    pub fn alloc(&mut self, node: Node) -> Result<Idx<Node>, Error> {
        if self.arena.len() >= self.capacity {
            return Err(Error::ArenaExhausted {
                capacity: self.capacity,
            });
        }
        Ok(self.arena.alloc(node))
    }

    /// Returns the node at `idx`.
    #[must_use]
    pub fn get(&self, idx: Idx<Node>) -> &Node {
        self.arena.get(idx)
    }

    /// Total number of nodes ever allocated, including ones no longer
    /// reachable from any live root — reflects true memory footprint.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if no nodes have been allocated.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Discards every node, rolling the arena back to its empty state.
    ///
    /// All outstanding indices become invalid; callers must drop their
    /// roots alongside.
    pub fn reset(&mut self) {
        self.arena.rollback(self.base);
    }
}
