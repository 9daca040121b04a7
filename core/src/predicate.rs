//! Predicate tests over a sequence.
//!
//! Functions:
//! - `every(seq, pred)`: does `pred` hold for all elements
//! - `find(seq, pred)`: first element satisfying `pred`
//! - `find_index(seq, pred)`: index of the first element satisfying `pred`
//! - `find_last_index(seq, pred)`: index of the last element satisfying `pred`
//! - `find_last(seq, pred)`: last element satisfying `pred`
//!
//! Absence is reported with `None`, never with an error.

// ============================================================================
// Universal Test
// ============================================================================

/// Check whether `pred` holds for every element of `seq`.
///
/// Stops at the first element for which `pred` returns `false`.
///
/// # Edge Cases
///
/// - Empty sequence: vacuously `true`
///
/// # Examples
/// - `every([2, 4, 6], even)` → `true`
/// - `every([2, 3, 6], even)` → `false`
/// - `every([], even)` → `true`
pub fn every<T>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> bool {
    for item in seq {
        if !pred(item) {
            return false;
        }
    }
    true
}

// ============================================================================
// Forward Search
// ============================================================================

/// Return the first element (in index order) for which `pred` holds.
///
/// # Examples
/// - `find([1, 4, 6], even)` → `Some(&4)`
/// - `find([1, 3], even)` → `None`
/// - `find([], even)` → `None`
pub fn find<T>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
    seq.iter().find(|&item| pred(item))
}

/// Return the index of the first element for which `pred` holds.
///
/// # Examples
/// - `find_index([1, 4, 6], even)` → `Some(1)`
/// - `find_index([], even)` → `None`
pub fn find_index<T>(seq: &[T], pred: impl FnMut(&T) -> bool) -> Option<usize> {
    seq.iter().position(pred)
}

// ============================================================================
// Last-Match Search
// ============================================================================

/// Return the index of the last element for which `pred` holds.
///
/// The whole sequence is scanned front to back and the most recent match is
/// kept, so `pred` is invoked exactly once per element, in index order. This
/// matters only for predicates with side effects; the result is the same as
/// searching from the right.
///
/// # Examples
/// - `find_last_index([1, 3, 5, 2, 4], even)` → `Some(4)`
/// - `find_last_index([1, 3], even)` → `None`
pub fn find_last_index<T>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
    let mut last = None;
    for (index, item) in seq.iter().enumerate() {
        if pred(item) {
            last = Some(index);
        }
    }
    last
}

/// Return the last element for which `pred` holds.
///
/// Same scanning behavior as [`find_last_index`].
pub fn find_last<T>(seq: &[T], pred: impl FnMut(&T) -> bool) -> Option<&T> {
    find_last_index(seq, pred).map(|index| &seq[index])
}

#[cfg(test)]
#[path = "predicate_test.rs"]
mod predicate_test;
