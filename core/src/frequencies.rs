//! Occurrence counting.

use core::hash::{BuildHasher, Hash};
use hashbrown::HashMap;

/// Map each distinct element of `seq` to the number of times it occurs.
///
/// The first sighting of a value inserts it with a count of 1; every repeat
/// increments it. Keys are clones of the first occurrence. The map has no
/// ordering guarantee.
///
/// # Examples
/// - `frequencies(["a", "a", "b", "c", "a", "b"])` → `{"a": 3, "b": 2, "c": 1}`
/// - `frequencies([])` → `{}`
pub fn frequencies<T: Hash + Eq + Clone>(seq: &[T]) -> HashMap<T, usize> {
    frequencies_with_hasher(seq)
}

/// Like [`frequencies`], building the map with a caller-chosen hasher.
pub fn frequencies_with_hasher<T, S>(seq: &[T]) -> HashMap<T, usize, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    let mut counts = HashMap::with_hasher(S::default());
    for item in seq {
        match counts.get_mut(item) {
            Some(count) => *count += 1,
            None => {
                counts.insert(item.clone(), 1);
            }
        }
    }
    counts
}

#[cfg(test)]
#[path = "frequencies_test.rs"]
mod frequencies_test;
