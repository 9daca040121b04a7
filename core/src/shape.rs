//! Structural transforms: shallow flattening and trailing trims.

use crate::{ArrayError, Vec};

// ============================================================================
// Flatten
// ============================================================================

/// An element that contributes zero or more `T`s to a flattened sequence.
///
/// Nested sequences (`Vec<T>`, `[T; N]`, `&[T]`) splice their elements in;
/// [`Nested`] covers sequences that mix plain elements with nested ones.
/// Only one level is ever opened: a `Vec<Vec<T>>` element contributes its
/// inner `Vec<T>`s unchanged.
pub trait Splice<T> {
    /// Append this element's contribution to `out`.
    fn splice_into(&self, out: &mut Vec<T>);
}

impl<T: Clone> Splice<T> for Vec<T> {
    fn splice_into(&self, out: &mut Vec<T>) {
        out.extend_from_slice(self);
    }
}

impl<T: Clone, const N: usize> Splice<T> for [T; N] {
    fn splice_into(&self, out: &mut Vec<T>) {
        out.extend_from_slice(self);
    }
}

impl<T: Clone> Splice<T> for &[T] {
    fn splice_into(&self, out: &mut Vec<T>) {
        out.extend_from_slice(self);
    }
}

/// Either a plain element or a nested sequence of elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    Seq(Vec<T>),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    pub fn seq(values: impl IntoIterator<Item = T>) -> Self {
        Nested::Seq(values.into_iter().collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Number of elements this entry contributes when flattened.
    pub fn len(&self) -> usize {
        match self {
            Nested::Leaf(_) => 1,
            Nested::Seq(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Splice<T> for Nested<T> {
    fn splice_into(&self, out: &mut Vec<T>) {
        match self {
            Nested::Leaf(value) => out.push(value.clone()),
            Nested::Seq(values) => out.extend_from_slice(values),
        }
    }
}

/// Flatten `seq` by exactly one level.
///
/// Each element splices its contents into the result, in order.
///
/// # Edge Cases
///
/// - Empty nested sequences contribute nothing
/// - Deeper nesting survives: `[[[1, 2]], [[3]]]` → `[[1, 2], [3]]`
///
/// # Examples
/// - `flatten([Seq([1, 2]), Seq([3]), Leaf(4)])` → `[1, 2, 3, 4]`
/// - `flatten([[1, 2], [], [3]])` → `[1, 2, 3]`
pub fn flatten<S: Splice<T>, T>(seq: &[S]) -> Vec<T> {
    let mut result = Vec::with_capacity(seq.len());
    for item in seq {
        item.splice_into(&mut result);
    }
    result
}

// ============================================================================
// Initial
// ============================================================================

/// Number of trailing elements [`initial_one`] drops.
pub const DEFAULT_INITIAL_COUNT: usize = 1;

/// All but the last `count` elements of `seq`.
///
/// # Edge Cases
///
/// - `count == 0`: returns a full copy
/// - `count >= seq.len()`: returns an empty vector (see [`try_initial`] for
///   a variant that rejects `count > seq.len()`)
///
/// # Examples
/// - `initial([3, 4, 5], 2)` → `[3]`
/// - `initial([3, 4, 5], 7)` → `[]`
pub fn initial<T: Clone>(seq: &[T], count: usize) -> Vec<T> {
    match seq.len().checked_sub(count) {
        Some(keep) => seq[..keep].to_vec(),
        None => {
            tracing::debug!(
                count,
                len = seq.len(),
                "initial: count exceeds sequence length, returning empty"
            );
            Vec::new()
        }
    }
}

/// All but the last element of `seq`.
///
/// # Examples
/// - `initial_one([3, 4, 5])` → `[3, 4]`
/// - `initial_one([])` → `[]`
pub fn initial_one<T: Clone>(seq: &[T]) -> Vec<T> {
    initial(seq, DEFAULT_INITIAL_COUNT)
}

/// Strict [`initial`]: fails when `count` exceeds the sequence length.
///
/// Dropping exactly `seq.len()` elements is allowed and yields an empty
/// vector.
pub fn try_initial<T: Clone>(seq: &[T], count: usize) -> Result<Vec<T>, ArrayError> {
    let len = seq.len();
    let Some(keep) = len.checked_sub(count) else {
        tracing::trace!(count, len, "try_initial: rejecting out-of-range count");
        return Err(ArrayError::CountExceedsLength { count, len });
    };
    Ok(seq[..keep].to_vec())
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;
