//! Method-call form of the sequence helpers.
//!
//! `ArrayExt` is implemented for `[T]`, so its methods are reachable from
//! `Vec<T>`, `[T; N]` and slices alike:
//!
//! ```
//! use arrayext_core::ArrayExt;
//!
//! let scores = vec![1, 3, 5, 2, 4];
//! assert_eq!(scores.find_last_index(|x| x % 2 == 0), Some(4));
//! assert_eq!(scores.initial(2), vec![1, 3, 5]);
//! ```
//!
//! Slices have an inherent `contains` with the same meaning, which method
//! resolution prefers; call `ArrayExt::contains` to name this one.

use core::hash::{BuildHasher, Hash};

use crate::{
    ArrayError, HashMap, Splice, Vec,
    frequencies::{frequencies, frequencies_with_hasher},
    predicate::{every, find, find_index, find_last, find_last_index},
    set::{contains, difference, intersection},
    shape::{flatten, initial, initial_one, try_initial},
};

pub trait ArrayExt {
    type Item;

    fn every(&self, pred: impl FnMut(&Self::Item) -> bool) -> bool;
    fn find(&self, pred: impl FnMut(&Self::Item) -> bool) -> Option<&Self::Item>;
    fn find_index(&self, pred: impl FnMut(&Self::Item) -> bool) -> Option<usize>;
    fn find_last_index(&self, pred: impl FnMut(&Self::Item) -> bool) -> Option<usize>;
    fn find_last(&self, pred: impl FnMut(&Self::Item) -> bool) -> Option<&Self::Item>;

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq;
    fn difference(&self, other: &[Self::Item]) -> Vec<Self::Item>
    where
        Self::Item: PartialEq + Clone;
    fn intersection(&self, other: &[Self::Item]) -> Vec<Self::Item>
    where
        Self::Item: PartialEq + Clone;

    fn flatten<U>(&self) -> Vec<U>
    where
        Self::Item: Splice<U>;
    fn initial(&self, count: usize) -> Vec<Self::Item>
    where
        Self::Item: Clone;
    fn initial_one(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone;
    fn try_initial(&self, count: usize) -> Result<Vec<Self::Item>, ArrayError>
    where
        Self::Item: Clone;

    fn frequencies(&self) -> HashMap<Self::Item, usize>
    where
        Self::Item: Hash + Eq + Clone;
    fn frequencies_with_hasher<S>(&self) -> HashMap<Self::Item, usize, S>
    where
        Self::Item: Hash + Eq + Clone,
        S: BuildHasher + Default;
}

impl<T> ArrayExt for [T] {
    type Item = T;

    #[inline]
    fn every(&self, pred: impl FnMut(&T) -> bool) -> bool {
        every(self, pred)
    }

    #[inline]
    fn find(&self, pred: impl FnMut(&T) -> bool) -> Option<&T> {
        find(self, pred)
    }

    #[inline]
    fn find_index(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        find_index(self, pred)
    }

    #[inline]
    fn find_last_index(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        find_last_index(self, pred)
    }

    #[inline]
    fn find_last(&self, pred: impl FnMut(&T) -> bool) -> Option<&T> {
        find_last(self, pred)
    }

    #[inline]
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        contains(self, value)
    }

    #[inline]
    fn difference(&self, other: &[T]) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        difference(self, other)
    }

    #[inline]
    fn intersection(&self, other: &[T]) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        intersection(self, other)
    }

    #[inline]
    fn flatten<U>(&self) -> Vec<U>
    where
        T: Splice<U>,
    {
        flatten(self)
    }

    #[inline]
    fn initial(&self, count: usize) -> Vec<T>
    where
        T: Clone,
    {
        initial(self, count)
    }

    #[inline]
    fn initial_one(&self) -> Vec<T>
    where
        T: Clone,
    {
        initial_one(self)
    }

    #[inline]
    fn try_initial(&self, count: usize) -> Result<Vec<T>, ArrayError>
    where
        T: Clone,
    {
        try_initial(self, count)
    }

    #[inline]
    fn frequencies(&self) -> HashMap<T, usize>
    where
        T: Hash + Eq + Clone,
    {
        frequencies(self)
    }

    #[inline]
    fn frequencies_with_hasher<S>(&self) -> HashMap<T, usize, S>
    where
        T: Hash + Eq + Clone,
        S: BuildHasher + Default,
    {
        frequencies_with_hasher(self)
    }
}

#[cfg(test)]
#[path = "ext_test.rs"]
mod ext_test;
