//! Splittable, mergeable persistent segment trees over a bounded
//! integer key domain.
//!
//! A [`SegForest`] holds many tree versions in one append-only node
//! arena. Point updates, range aggregate queries (sum, count, k-th
//! order statistic), splitting a key sub-range into a brand-new
//! independent tree, and merging two trees of the same domain are all
//! supported; mutation is copy-on-write, so older roots keep answering
//! queries unchanged.
//!
//! # Key properties
//!
//! - **Persistence**: prior versions stay queryable after updates and splits
//! - **Amortized O(log N) split**: contained subtrees transfer by index, not by copy
//! - **No-copy merge**: one-sided subtrees fuse by reuse, never cloned
//! - **Conservation**: a split's two outputs sum to its input over every sub-range
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # References
//!
//! - Driscoll, Sarnak, Sleator & Tarjan, 1986 — "Making Data Structures
//!   Persistent", STOC 1986
//! - Segment-tree merging with the small-to-large bound, a classic
//!   competitive-programming technique

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod iter;
pub mod node;

mod arena;
mod forest;
mod ops;
mod roots;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use forest::SegForest;
pub use roots::VersionId;
