#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Functional helpers over ordered sequences.
//!
//! Every helper is a pure function over `&[T]`: the input is never mutated
//! and results are freshly allocated (or borrowed from the input, for the
//! `find` family). The same operations are available two ways:
//!
//! - as free functions in [`array`], and
//! - as methods of the [`ArrayExt`] extension trait, implemented for `[T]`
//!   and therefore reachable from `Vec<T>` and `[T; N]`.

// This works on std and no_std and is harmless.
extern crate alloc;

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{vec, vec::Vec};

pub mod error;
pub mod ext;
pub mod frequencies;
pub mod predicate;
pub mod set;
pub mod shape;

pub use error::ArrayError;
pub use ext::ArrayExt;
pub use hashbrown::HashMap;
pub use shape::{DEFAULT_INITIAL_COUNT, Nested, Splice};

/// Every operation as a free function taking the sequence first.
pub mod array {
    pub use crate::frequencies::{frequencies, frequencies_with_hasher};
    pub use crate::predicate::{every, find, find_index, find_last, find_last_index};
    pub use crate::set::{contains, difference, intersection};
    pub use crate::shape::{flatten, initial, initial_one, try_initial};
}
