//! Set-like operations over sequences.
//!
//! These treat sequences as multisets compared by `PartialEq`: nothing is
//! deduplicated, and results keep the order of the receiver. Membership in
//! `other` is a linear scan, so `difference` and `intersection` are
//! `O(n * m)`; they need no `Hash` or `Ord` bound on the element type.

use crate::Vec;

/// Check whether `value` equals some element of `seq`.
///
/// # Examples
/// - `contains([1, 2, 3], 2)` → `true`
/// - `contains([], 2)` → `false`
pub fn contains<T: PartialEq>(seq: &[T], value: &T) -> bool {
    seq.iter().any(|item| item == value)
}

/// Elements of `seq` that do not appear in `other`.
///
/// Keeps `seq`'s order and multiplicity.
///
/// # Edge Cases
///
/// - Empty `other`: returns a copy of `seq`
/// - Every element of `seq` in `other`: returns an empty vector
///
/// # Examples
/// - `difference([1, 2, 3, 4], [2, 4])` → `[1, 3]`
/// - `difference([1, 1, 2], [2])` → `[1, 1]`
pub fn difference<T: PartialEq + Clone>(seq: &[T], other: &[T]) -> Vec<T> {
    seq.iter()
        .filter(|&item| !contains(other, item))
        .cloned()
        .collect()
}

/// Elements of `seq` that also appear in `other`.
///
/// Keeps `seq`'s order and multiplicity: each occurrence in `seq` is kept
/// if it matches anything in `other`, regardless of how often it occurs
/// there.
///
/// # Examples
/// - `intersection([1, 2, 3], [5, 2, 1, 4])` → `[1, 2]`
/// - `intersection([1, 1, 2], [1])` → `[1, 1]`
pub fn intersection<T: PartialEq + Clone>(seq: &[T], other: &[T]) -> Vec<T> {
    seq.iter()
        .filter(|&item| contains(other, item))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "set_test.rs"]
mod set_test;
