//! An ordered container with constant-time access at both ends.
//!
//! [`SequentialList`] is the ordered storage used throughout the crate: the
//! graph keeps its vertices and edges in one, and breadth-first search uses
//! one as its frontier queue.  It is also usable on its own wherever a simple
//! double-ended list is wanted.
//!
//! Appending, prepending, removing from either end and index lookup are all
//! O(1).  [`SequentialList::contains`] and [`SequentialList::reduce`] walk the
//! whole list and are O(n).

use std::collections::VecDeque;
use std::fmt::Debug;
use std::ops::Index;

use crate::error::{Error, Result};

/// An ordered list of values with O(1) operations at both ends.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SequentialList<T> {
    items: VecDeque<T>,
}

impl<T> SequentialList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty list with room for at least `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Adds a value to the end of the list.
    pub fn append(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Adds a value to the front of the list.
    pub fn prepend(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Removes and returns the first value, or `None` if the list is empty.
    pub fn remove_first(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Removes and returns the last value, or `None` if the list is empty.
    pub fn remove_last(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Gets the value at `index`, failing with [`Error::OutOfBounds`] when
    /// `index` is not less than [`Self::len`].
    pub fn at(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::OutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// Gets the value at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Returns the number of values in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every value from the list.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns true if any value in the list equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.iter().any(|item| item == value)
    }

    /// Folds every value into an accumulator, front to back.
    pub fn reduce<A>(&self, initial: A, combine: impl FnMut(A, &T) -> A) -> A {
        self.items.iter().fold(initial, combine)
    }

    /// Gets an iterator over the values in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter()
    }
}

impl<T> Default for SequentialList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for SequentialList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> Index<usize> for SequentialList<T> {
    type Output = T;

    /// Panics if `index` is out of bounds; use [`SequentialList::at`] for a
    /// fallible lookup.
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> FromIterator<T> for SequentialList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for SequentialList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for SequentialList<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SequentialList<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
