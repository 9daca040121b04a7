//! Error types for the strict variants of the sequence helpers.
//!
//! The lenient helpers never fail: lookups report absence with `None` and
//! [`initial`](crate::array::initial) clamps out-of-range counts. The strict
//! helpers (currently [`try_initial`](crate::array::try_initial)) report
//! those conditions through [`ArrayError`] instead.

use thiserror::Error;

/// Errors returned by the strict sequence helpers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// More trailing elements were requested to be dropped than the
    /// sequence holds.
    #[error("cannot drop {count} trailing element(s) from a sequence of length {len}")]
    CountExceedsLength { count: usize, len: usize },
}
