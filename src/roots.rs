//! Version/root table.
//!
//! Pure bookkeeping: a mapping from logical version ids to root node
//! indices. Versions are minted by `build` and by `split` (for the
//! extracted slice); `merge` reassigns one version's root and retires
//! the other. Nothing else creates or destroys versions.

use std::fmt;

use safe_bump::Idx;

use crate::error::Error;
use crate::node::Node;

/// Opaque, 1-based identifier of one tree version in a forest.
///
/// Minted by [`SegForest::build`](crate::SegForest::build) and
/// [`SegForest::split`](crate::SegForest::split); only meaningful for
/// the forest that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionId(u32);

impl VersionId {
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the numeric id (1-based).
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// One root slot: live, or retired by a merge.
#[derive(Clone, Copy)]
enum Slot {
    /// A usable root; `None` is the empty tree.
    Active(Option<Idx<Node>>),
    /// Retired by `merge`; no longer addressable, though its physical
    /// nodes may still be referenced from other roots.
    Retired,
}

/// Table of all versions ever minted by a forest.
pub struct RootTable {
    slots: Vec<Slot>,
}

impl Default for RootTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RootTable {
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of versions ever minted, retired ones included.
    pub const fn minted(&self) -> usize {
        self.slots.len()
    }

    /// Mints a fresh version id for `root`.
    pub fn mint(&mut self, root: Option<Idx<Node>>) -> VersionId {
        self.slots.push(Slot::Active(root));
        // Version counts are bounded by builds + splits, far below u32.
        VersionId::from_raw(u32::try_from(self.slots.len()).unwrap_or(u32::MAX))
    }

    /// Looks up the root of an active version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVersion`] for never-minted or retired ids.
    pub fn get(&self, version: VersionId) -> Result<Option<Idx<Node>>, Error> {
        match self.slot(version) {
            Some(Slot::Active(root)) => Ok(*root),
            _ => Err(Error::UnknownVersion(version)),
        }
    }

    /// Reassigns the root of an active version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVersion`] for never-minted or retired ids.
    pub fn set(&mut self, version: VersionId, root: Option<Idx<Node>>) -> Result<(), Error> {
        match self.slot_mut(version) {
            Some(slot @ Slot::Active(_)) => {
                *slot = Slot::Active(root);
                Ok(())
            }
            _ => Err(Error::UnknownVersion(version)),
        }
    }

    /// Retires an active version, returning its final root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVersion`] for never-minted or already
    /// retired ids.
    pub fn retire(&mut self, version: VersionId) -> Result<Option<Idx<Node>>, Error> {
        match self.slot_mut(version) {
            Some(slot) => match *slot {
                Slot::Active(root) => {
                    *slot = Slot::Retired;
                    Ok(root)
                }
                Slot::Retired => Err(Error::UnknownVersion(version)),
            },
            None => Err(Error::UnknownVersion(version)),
        }
    }

    /// Drops every version. Used by forest reset alongside the arena
    /// rollback.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn slot(&self, version: VersionId) -> Option<&Slot> {
        let raw = version.get();
        if raw == 0 {
            return None;
        }
        self.slots.get(raw as usize - 1)
    }

    fn slot_mut(&mut self, version: VersionId) -> Option<&mut Slot> {
        let raw = version.get();
        if raw == 0 {
            return None;
        }
        self.slots.get_mut(raw as usize - 1)
    }
}
