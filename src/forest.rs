//! The segment-tree forest facade.

use std::fmt;

#[cfg(test)]
use safe_bump::Idx;

use crate::arena::NodeArena;
use crate::error::Error;
use crate::iter::Iter;
#[cfg(test)]
use crate::node::Node;
use crate::ops::aggregate;
use crate::ops::merge::merge_recursive;
use crate::ops::query::{count_in_range, kth_smallest, sum_in_range};
use crate::ops::split::split_recursive;
use crate::ops::update::{build_recursive, update_recursive};
use crate::roots::{RootTable, VersionId};

/// A forest of splittable, mergeable segment trees over one bounded
/// integer key domain `[1, N]`.
///
/// All versions share one append-only node arena; every mutating
/// operation is copy-on-write, allocating fresh nodes along the touched
/// path and sharing every untouched subtree with the version it started
/// from. Versions are addressed by [`VersionId`]s minted by
/// [`build`](Self::build) and [`split`](Self::split).
///
/// Single-threaded by design: operations run to completion, and the
/// arena is the only mutable state.
pub struct SegForest {
    store: NodeArena,
    roots: RootTable,
    domain: u32,
}

impl SegForest {
    /// Creates an empty forest over the key domain `[1, domain]`, with
    /// room for at most `capacity` nodes.
    ///
    /// Size `capacity` to `O((n + q) log n)` for `n` initial elements
    /// and `q` structural operations; an undersized arena makes later
    /// operations fail with [`Error::ArenaExhausted`].
    #[must_use]
    pub fn new(domain: u32, capacity: usize) -> Self {
        Self {
            store: NodeArena::with_capacity(capacity),
            roots: RootTable::new(),
            domain,
        }
    }

    /// Key domain size `N`.
    #[must_use]
    pub const fn domain(&self) -> u32 {
        self.domain
    }

    /// Number of versions ever minted, retired ones included.
    #[must_use]
    pub const fn versions(&self) -> usize {
        self.roots.minted()
    }

    /// Total number of nodes allocated so far, unreachable ones
    /// included — reflects true memory footprint.
    #[must_use]
    pub fn arena_len(&self) -> usize {
        self.store.len()
    }

    /// Builds the first tree of a sequence: key `i + 1` receives one
    /// element of weight `values[i]`. Returns the minted version.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfDomain`] if `values` is longer than the domain.
    /// - [`Error::ArenaExhausted`] if the arena ceiling is reached.
    pub fn build(&mut self, values: &[i64]) -> Result<VersionId, Error> {
        if values.len() > self.domain as usize {
            return Err(Error::OutOfDomain {
                pos: u32::try_from(values.len()).unwrap_or(u32::MAX),
                domain: self.domain,
            });
        }
        let root = if values.is_empty() {
            None
        } else {
            build_recursive(&mut self.store, 1, self.domain, values)?
        };
        Ok(self.roots.mint(root))
    }

    /// Records one element of weight `delta` at key `pos` in `version`,
    /// reassigning the version's slot to the new root. `delta == 0` is
    /// a no-op. Returns the (unchanged) version id.
    ///
    /// The previous root's nodes stay valid inside the arena: trees
    /// that share them — including extracted splits — are unaffected.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownVersion`] for never-minted or retired versions.
    /// - [`Error::OutOfDomain`] if `pos` is outside `[1, N]`.
    /// - [`Error::ArenaExhausted`] if the arena ceiling is reached; the
    ///   version is left untouched.
    pub fn update(&mut self, version: VersionId, pos: u32, delta: i64) -> Result<VersionId, Error> {
        let root = self.roots.get(version)?;
        self.check_pos(pos)?;
        if delta == 0 {
            return Ok(version);
        }
        let new_root = update_recursive(&mut self.store, root, 1, self.domain, pos, delta)?;
        self.roots.set(version, Some(new_root))?;
        Ok(version)
    }

    /// Sum of element weights over keys in `[l, r]` of `version`.
    ///
    /// Read-only; never allocates.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownVersion`] for never-minted or retired versions.
    /// - [`Error::InvalidRange`] if `l > r`.
    /// - [`Error::OutOfDomain`] if an endpoint is outside `[1, N]`.
    pub fn query_sum(&self, version: VersionId, l: u32, r: u32) -> Result<i64, Error> {
        let root = self.roots.get(version)?;
        self.check_range(l, r)?;
        Ok(sum_in_range(&self.store, root, 1, self.domain, l, r))
    }

    /// Number of elements recorded at keys in `[l, r]` of `version`.
    ///
    /// Read-only; never allocates.
    ///
    /// # Errors
    ///
    /// Same as [`query_sum`](Self::query_sum).
    pub fn query_count(&self, version: VersionId, l: u32, r: u32) -> Result<u64, Error> {
        let root = self.roots.get(version)?;
        self.check_range(l, r)?;
        Ok(count_in_range(&self.store, root, 1, self.domain, l, r))
    }

    /// Key of the `k`-th smallest element of `version` (1-based,
    /// counting multiplicity).
    ///
    /// Read-only; never allocates.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownVersion`] for never-minted or retired versions.
    /// - [`Error::KOutOfRange`] if `k == 0` or `k` exceeds the
    ///   version's total element count.
    pub fn query_kth(&self, version: VersionId, k: u64) -> Result<u32, Error> {
        let root = self.roots.get(version)?;
        let (total, _) = aggregate(&self.store, root);
        if k == 0 || k > total {
            return Err(Error::KOutOfRange { k, total });
        }
        // total >= k >= 1 implies the root is present.
        root.map_or(Err(Error::KOutOfRange { k, total }), |idx| {
            Ok(kth_smallest(&self.store, idx, 1, self.domain, k))
        })
    }

    /// Total element count of `version`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVersion`] for never-minted or retired
    /// versions.
    pub fn total_count(&self, version: VersionId) -> Result<u64, Error> {
        let root = self.roots.get(version)?;
        Ok(aggregate(&self.store, root).0)
    }

    /// Total weight sum of `version`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVersion`] for never-minted or retired
    /// versions.
    pub fn total_sum(&self, version: VersionId) -> Result<i64, Error> {
        let root = self.roots.get(version)?;
        Ok(aggregate(&self.store, root).1)
    }

    /// Removes every element with key in `[l, r]` from `version` into a
    /// brand-new version, leaving `version` covering the complement.
    /// Returns `(remaining, extracted)`: `remaining` is the input id
    /// with its slot reassigned, `extracted` is freshly minted.
    ///
    /// Subtrees fully inside `[l, r]` move to the extracted tree by
    /// index — shared, not copied — so split runs in amortized
    /// O(log N). Aggregates are conserved: the two outputs sum to the
    /// input over every sub-range.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownVersion`] for never-minted or retired versions.
    /// - [`Error::InvalidRange`] if `l > r`.
    /// - [`Error::OutOfDomain`] if an endpoint is outside `[1, N]`.
    /// - [`Error::ArenaExhausted`] if the arena ceiling is reached; no
    ///   version slot is changed.
    pub fn split(
        &mut self,
        version: VersionId,
        l: u32,
        r: u32,
    ) -> Result<(VersionId, VersionId), Error> {
        let root = self.roots.get(version)?;
        self.check_range(l, r)?;
        let outcome = split_recursive(&mut self.store, root, 1, self.domain, l, r)?;
        self.roots.set(version, outcome.remaining)?;
        let extracted = self.roots.mint(outcome.extracted);
        Ok((version, extracted))
    }

    /// Combines versions `a` and `b` into one tree whose aggregates are
    /// the pointwise sum of the inputs. The result lands in `a`'s slot;
    /// `b` is retired. Returns `a`.
    ///
    /// Ranges where only one input holds elements are fused by reusing
    /// that input's nodes with no allocation, which bounds a sequence of
    /// `q` splits and merges to O(q log N) total work.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownVersion`] for never-minted or retired versions,
    ///   and for `a == b` — the right-hand version is retired by the
    ///   merge and cannot also serve as a source.
    /// - [`Error::ArenaExhausted`] if the arena ceiling is reached; both
    ///   versions are left untouched.
    pub fn merge(&mut self, a: VersionId, b: VersionId) -> Result<VersionId, Error> {
        if a == b {
            return Err(Error::UnknownVersion(b));
        }
        let root_a = self.roots.get(a)?;
        let root_b = self.roots.get(b)?;
        let merged = merge_recursive(&mut self.store, root_a, root_b, 1, self.domain)?;
        self.roots.set(a, merged)?;
        self.roots.retire(b)?;
        Ok(a)
    }

    /// Iterates the occupied keys of `version` in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVersion`] for never-minted or retired
    /// versions.
    pub fn iter(&self, version: VersionId) -> Result<Iter, Error> {
        let root = self.roots.get(version)?;
        Ok(Iter::new(&self.store, root, 1, self.domain))
    }

    /// Discards every version and every node, returning the forest to
    /// its freshly-constructed state. Reclamation between independent
    /// problem instances; there is no per-node free.
    pub fn reset(&mut self) {
        self.roots.clear();
        self.store.reset();
    }

    const fn check_pos(&self, pos: u32) -> Result<(), Error> {
        if pos == 0 || pos > self.domain {
            return Err(Error::OutOfDomain {
                pos,
                domain: self.domain,
            });
        }
        Ok(())
    }

    fn check_range(&self, l: u32, r: u32) -> Result<(), Error> {
        if l > r {
            return Err(Error::InvalidRange { l, r });
        }
        self.check_pos(l)?;
        self.check_pos(r)
    }

    /// Raw root of `version`, for structural assertions in tests.
    #[cfg(test)]
    pub(crate) fn root_of(&self, version: VersionId) -> Result<Option<Idx<Node>>, Error> {
        self.roots.get(version)
    }
}

impl fmt::Debug for SegForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegForest")
            .field("domain", &self.domain)
            .field("versions", &self.roots.minted())
            .field("arena_len", &self.store.len())
            .finish()
    }
}
