//! arrayext - functional helpers for ordered sequences
//!
//! # Overview
//!
//! `arrayext` adds a handful of pure convenience operations to slices,
//! vectors and arrays:
//!
//! - Predicate tests: `every`, `find`, `find_index`, `find_last_index`
//! - Set-like operations: `contains`, `difference`, `intersection`
//! - Structural transforms: `flatten`, `initial`
//! - Aggregation: `frequencies`
//!
//! None of them mutate their input. Lookups report absence with `None`, and
//! capability requirements (equality, hashing) are ordinary trait bounds.
//!
//! # Quick Start
//!
//! ```
//! use arrayext::prelude::*;
//!
//! let a = vec![1, 2, 3];
//! assert_eq!(a.intersection(&[5, 2, 1, 4]), vec![1, 2]);
//! assert_eq!([1, 2, 3, 4].difference(&[2, 4]), vec![1, 3]);
//! assert_eq!([1, 3, 5, 2, 4].find_last_index(|x| x % 2 == 0), Some(4));
//! assert_eq!([3, 4, 5].initial(2), vec![3]);
//!
//! let counts = ["a", "a", "b", "c", "a", "b"].frequencies();
//! assert_eq!(counts[&"a"], 3);
//! ```
//!
//! # Free Functions
//!
//! Every method also exists as a free function taking the sequence first:
//!
//! ```
//! use arrayext::array;
//!
//! assert!(array::every(&[2, 4, 6], |x| x % 2 == 0));
//! assert_eq!(array::find(&["ant", "bee"], |s| s.starts_with('b')), Some(&"bee"));
//! ```
//!
//! # Flattening
//!
//! `flatten` opens exactly one level of nesting. Mixed "element or
//! sequence" inputs are modelled with [`Nested`]:
//!
//! ```
//! use arrayext::prelude::*;
//!
//! let seq = [Nested::seq([1, 2]), Nested::seq([3]), Nested::leaf(4)];
//! let flat: Vec<i32> = seq.flatten();
//! assert_eq!(flat, vec![1, 2, 3, 4]);
//! ```
//!
//! # Trimming
//!
//! `initial` clamps an oversized count to an empty result; `try_initial`
//! reports it instead:
//!
//! ```
//! use arrayext::{ArrayError, prelude::*};
//!
//! assert_eq!([1, 2].initial(5), Vec::<i32>::new());
//! assert_eq!(
//!     [1, 2].try_initial(5),
//!     Err(ArrayError::CountExceedsLength { count: 5, len: 2 })
//! );
//! ```

pub use arrayext_core::{
    ArrayError, ArrayExt, DEFAULT_INITIAL_COUNT, HashMap, Nested, Splice, array,
};

/// Glob-import this to bring the extension trait and its companion types
/// into scope.
pub mod prelude {
    pub use arrayext_core::{ArrayExt, Nested, Splice};
}
