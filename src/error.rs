//! Error types for forest operations.
//!
//! Every failure is detected before any version slot is touched: a
//! returned error guarantees that all existing versions still answer
//! exactly as they did before the call.

use thiserror::Error;

use crate::roots::VersionId;

/// Errors returned by [`SegForest`](crate::SegForest) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A key or range endpoint lies outside the key domain `[1, N]`.
    #[error("position {pos} outside key domain [1, {domain}]")]
    OutOfDomain {
        /// The offending position.
        pos: u32,
        /// The forest's key domain size `N`.
        domain: u32,
    },

    /// A query or split range has `l > r`.
    #[error("invalid range: l={l} > r={r}")]
    InvalidRange {
        /// Left endpoint.
        l: u32,
        /// Right endpoint.
        r: u32,
    },

    /// An order-statistic rank exceeds the version's total element count.
    #[error("rank k={k} out of range for total count {total}")]
    KOutOfRange {
        /// The requested rank (1-based).
        k: u64,
        /// The version's total element count.
        total: u64,
    },

    /// The node arena reached its configured capacity ceiling.
    ///
    /// The ceiling must be sized to `O((n + q) log n)` for `n` elements
    /// and `q` structural operations; hitting it is a caller
    /// configuration error, not a recoverable runtime condition.
    #[error("node arena exhausted at capacity {capacity}")]
    ArenaExhausted {
        /// The configured capacity ceiling.
        capacity: usize,
    },

    /// A version id that was never minted, or that has been retired by a
    /// merge, was passed to an operation.
    #[error("unknown or retired version {0}")]
    UnknownVersion(VersionId),
}
