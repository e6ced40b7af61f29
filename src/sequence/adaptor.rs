//! The sorted sequence container adaptor.
//!
//! This module provides [`SortedSequence`], a `Vec` that is kept sorted under
//! a pluggable [`Compare`] relation at all times.
//!
//! # Overview
//!
//! - Positional queries use binary search over the sorted storage
//! - Insertion can be placed before or after all equivalent elements
//!   ([`InsertMode`]), with an optional position hint that skips most of the
//!   search when the caller already knows roughly where the value goes
//! - Changing a value moves only the sub-range between its old and new place
//! - Changing the comparator resorts in place and can report where every
//!   tracked index went
//!
//! # Time Complexity
//!
//! | Operation                          | Complexity              |
//! |------------------------------------|-------------------------|
//! | `insert_position`                  | O(log n), O(1) with a good hint |
//! | `insert` / `remove_at`             | O(n)                    |
//! | `change`                           | O(log n + d), d = moved distance |
//! | `contains` / `count` / `index_of`  | O(log n + k), k = equal-range size |
//! | `remove_all`                       | O(log n + n)            |
//! | `append_sequence` (same comparator)| O(n + m)                |
//! | `extend_from_slice`                | O(m log m + n + m)      |
//! | `set_compare`                      | O(n log n)              |
//! | `set_compare_with_position_map`    | O(n log n + t), t = tracked keys |
//!
//! # Examples
//!
//! ```rust
//! use sorted_sequence::sequence::{InsertMode, SortedSequence};
//!
//! let mut sequence = SortedSequence::from_vec(vec![5, 3, 1, 4, 1]);
//! assert_eq!(sequence.as_slice(), &[1, 1, 3, 4, 5]);
//!
//! assert_eq!(sequence.insert(2, InsertMode::Last, None), 2);
//! assert_eq!(sequence.as_slice(), &[1, 1, 2, 3, 4, 5]);
//!
//! assert_eq!(sequence.remove_all(&1), 2);
//! assert_eq!(sequence.as_slice(), &[2, 3, 4, 5]);
//! assert_eq!(sequence.index_of(&4), Some(2));
//! ```

use super::compare::{Compare, DefaultCompare};
use super::error::CompareMismatchError;
use super::position::{PositionMap, apply_permutation, invert_permutation};
use super::sort::{SortAlgorithm, StableSort};
use std::fmt;
use std::iter::Peekable;
use std::marker::PhantomData;
use std::ops::{Index, Range, RangeBounds};

/// Where to place a value among elements that compare equivalent to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InsertMode {
    /// Before all equivalent elements (lower bound).
    First,
    /// After all equivalent elements (upper bound).
    #[default]
    Last,
}

/// A `Vec` kept sorted under a comparator.
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `C` - The ordering relation, [`DefaultCompare`] (natural `Ord`) by default
/// * `S` - The bulk sort strategy, [`StableSort`] by default
///
/// # Invariant
///
/// For every adjacent pair `(a, b)` in the storage, `compare.less(b, a)` is
/// `false`. Equivalent elements keep the order in which they were inserted or
/// merged. Contents are only exposed read-only, so the invariant cannot be
/// broken from outside.
///
/// # Panics
///
/// Index-based operations panic on out-of-range indices, like `Vec`. A
/// comparator that panics leaves insertion, removal and [`change`](Self::change)
/// without effect because they search before mutating. Full resorts and the
/// in-place permutation are best-effort: the storage still holds every element
/// but may be left partially reordered.
///
/// # Examples
///
/// ```rust
/// use sorted_sequence::sequence::{LambdaCompare, SortedSequence};
///
/// let by_length = LambdaCompare::new(|left: &&str, right: &&str| left.len() < right.len());
/// let mut words = SortedSequence::from_vec_with_compare(vec!["ccc", "a", "bb"], by_length);
///
/// words.push("dd");
/// assert_eq!(words.as_slice(), &["a", "bb", "dd", "ccc"]);
/// ```
pub struct SortedSequence<T, C = DefaultCompare<T>, S = StableSort> {
    elements: Vec<T>,
    compare: C,
    strategy: PhantomData<fn() -> S>,
}

// =============================================================================
// Construction with natural ordering
// =============================================================================

impl<T: Ord> SortedSequence<T> {
    /// Creates an empty sequence ordered by `Ord`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_sequence::sequence::SortedSequence;
    ///
    /// let sequence: SortedSequence<i32> = SortedSequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::from_sorted_parts(Vec::new(), DefaultCompare::new())
    }

    /// Creates an empty sequence with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_sorted_parts(Vec::with_capacity(capacity), DefaultCompare::new())
    }

    /// Takes ownership of `elements` and sorts them stably.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_with_compare(elements, DefaultCompare::new())
    }
}

// =============================================================================
// Construction with a custom comparator
// =============================================================================

impl<T, C: Compare<T>> SortedSequence<T, C> {
    /// Creates an empty sequence ordered by `compare`.
    #[inline]
    #[must_use]
    pub const fn with_compare(compare: C) -> Self {
        Self::from_sorted_parts(Vec::new(), compare)
    }

    /// Takes ownership of `elements` and sorts them stably under `compare`.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    #[must_use]
    pub fn from_vec_with_compare(elements: Vec<T>, compare: C) -> Self {
        Self::from_vec_with_strategy(elements, compare)
    }
}

impl<T, C, S> SortedSequence<T, C, S> {
    #[inline]
    const fn from_sorted_parts(elements: Vec<T>, compare: C) -> Self {
        Self {
            elements,
            compare,
            strategy: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the allocated capacity of the underlying storage.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the current comparator.
    #[inline]
    #[must_use]
    pub const fn compare(&self) -> &C {
        &self.compare
    }

    /// Returns the sorted elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in sorted order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the smallest element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Reserves room for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    /// Removes every element, keeping the comparator.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Keeps the first `len` elements and drops the rest.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.elements.truncate(len);
    }

    /// Removes the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn remove_at(&mut self, index: usize) {
        self.elements.remove(index);
    }

    /// Removes the smallest element, if any.
    #[inline]
    pub fn remove_first(&mut self) {
        if !self.elements.is_empty() {
            self.elements.remove(0);
        }
    }

    /// Removes the largest element, if any.
    #[inline]
    pub fn remove_last(&mut self) {
        self.elements.pop();
    }

    /// Removes the elements in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or decreasing.
    #[inline]
    pub fn remove_range<R: RangeBounds<usize>>(&mut self, range: R) {
        self.elements.drain(range);
    }

    /// Removes the elements in `range` and returns them in sorted order.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or decreasing.
    #[inline]
    pub fn drain<R: RangeBounds<usize>>(&mut self, range: R) -> std::vec::Drain<'_, T> {
        self.elements.drain(range)
    }

    /// Removes and returns the largest element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn take_at(&mut self, index: usize) -> T {
        self.elements.remove(index)
    }

    /// Removes and returns the smallest element.
    #[inline]
    pub fn take_first(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.elements.remove(0))
        }
    }

    /// Removes and returns the largest element.
    #[inline]
    pub fn take_last(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// Removing elements never breaks the sort order.
    #[inline]
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(predicate);
    }

    /// Moves the storage out, leaving this sequence empty with the same
    /// comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_sequence::sequence::SortedSequence;
    ///
    /// let mut sequence = SortedSequence::from_vec(vec![2, 1]);
    /// assert_eq!(sequence.take_container(), vec![1, 2]);
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    pub fn take_container(&mut self) -> Vec<T> {
        std::mem::take(&mut self.elements)
    }

    /// Consumes the sequence and returns the sorted storage.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Switches the sort strategy used for future resorts.
    ///
    /// The storage is already sorted, so nothing is reordered.
    #[inline]
    #[must_use]
    pub fn into_strategy<S2>(self) -> SortedSequence<T, C, S2> {
        SortedSequence::from_sorted_parts(self.elements, self.compare)
    }
}

// =============================================================================
// Core operations
// =============================================================================

impl<T, C: Compare<T>, S: SortAlgorithm> SortedSequence<T, C, S> {
    /// Creates an empty sequence with an explicit sort strategy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_sequence::sequence::{DefaultCompare, SortedSequence, UnstableSort};
    ///
    /// let sequence =
    ///     SortedSequence::<i32, _, UnstableSort>::with_strategy(DefaultCompare::new());
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_strategy(compare: C) -> Self {
        Self::from_sorted_parts(Vec::new(), compare)
    }

    /// Takes ownership of `elements` and sorts them with the strategy `S`.
    #[must_use]
    pub fn from_vec_with_strategy(elements: Vec<T>, compare: C) -> Self {
        let mut sequence = Self::from_sorted_parts(elements, compare);
        sequence.sort_range(0);
        sequence
    }

    /// Returns `true` if no element is `less` than its predecessor.
    ///
    /// Always `true` unless the comparator is not a strict weak ordering.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.elements
            .is_sorted_by(|previous, next| !self.compare.less(next, previous))
    }

    /// Replaces the comparator and resorts.
    ///
    /// Does nothing when `compare` equals the current comparator.
    ///
    /// # Complexity
    ///
    /// O(n log n), or O(1) for an equal comparator.
    pub fn set_compare(&mut self, compare: C) {
        if self.compare == compare {
            log::trace!("comparator unchanged, keeping {} elements in place", self.len());
            return;
        }

        self.compare = compare;
        log::debug!("comparator changed, resorting {} elements", self.len());
        self.sort_range(0);
    }

    /// Replaces the comparator, resorts, and reports where tracked elements
    /// moved.
    ///
    /// Every key present in `positions` is treated as an old index. After the
    /// call its value is the index at which that element now lives. Keys that
    /// are not valid indices keep their value. No entries are added.
    ///
    /// If `compare` equals the current comparator the storage is untouched and
    /// every key maps to itself.
    ///
    /// # Complexity
    ///
    /// O(n log n) for the index sort, O(n) for applying the permutation in
    /// place, O(t) for the t tracked keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_sequence::sequence::{LambdaCompare, SortedSequence};
    /// use std::collections::HashMap;
    ///
    /// let ascending = LambdaCompare::new(|left: &char, right: &char| left < right);
    /// let mut sequence =
    ///     SortedSequence::from_vec_with_compare(vec!['a', 'b', 'c', 'd'], ascending.clone());
    ///
    /// let mut selection = HashMap::from([(1, 1), (3, 3)]);
    /// sequence.set_compare_with_position_map(ascending.reversed(), &mut selection);
    ///
    /// assert_eq!(sequence.as_slice(), &['d', 'c', 'b', 'a']);
    /// assert_eq!(sequence[selection[&1]], 'b');
    /// assert_eq!(sequence[selection[&3]], 'd');
    /// ```
    pub fn set_compare_with_position_map<M>(&mut self, compare: C, positions: &mut M)
    where
        M: PositionMap,
    {
        if self.compare == compare {
            log::trace!("comparator unchanged, mapping tracked positions to themselves");
            positions.remap(Some);
            return;
        }

        self.compare = compare;
        log::debug!(
            "comparator changed, resorting {} elements with position tracking",
            self.len()
        );

        let mut order = self.sorted_order();
        let new_positions = invert_permutation(&order);
        positions.remap(|old_position| new_positions.get(old_position).copied());
        apply_permutation(&mut self.elements, &mut order);
    }

    /// Replaces the comparator, resorts, and returns the new index of every
    /// old index.
    ///
    /// `result[old] == new`. For an equal comparator this is the identity.
    #[must_use = "use set_compare if the permutation is not needed"]
    pub fn set_compare_with_permutation(&mut self, compare: C) -> Vec<usize> {
        if self.compare == compare {
            return (0..self.len()).collect();
        }

        self.compare = compare;
        log::debug!(
            "comparator changed, resorting {} elements with full permutation",
            self.len()
        );

        let mut order = self.sorted_order();
        let new_positions = invert_permutation(&order);
        apply_permutation(&mut self.elements, &mut order);
        new_positions
    }

    /// Returns the index at which `value` would be inserted.
    ///
    /// With [`InsertMode::First`] this is the lower bound (before every
    /// equivalent element), with [`InsertMode::Last`] the upper bound.
    ///
    /// `hint` is a guess of the answer. A hint within `0..=len` is checked
    /// against its neighbours first and narrows the binary search to one side
    /// of it; a correct hint costs O(1). Out-of-range hints are ignored. The
    /// result never depends on the hint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_sequence::sequence::{InsertMode, SortedSequence};
    ///
    /// let sequence = SortedSequence::from_vec(vec![1, 2, 2, 3]);
    /// assert_eq!(sequence.insert_position(&2, InsertMode::First, None), 1);
    /// assert_eq!(sequence.insert_position(&2, InsertMode::Last, None), 3);
    /// assert_eq!(sequence.insert_position(&2, InsertMode::Last, Some(0)), 3);
    /// assert_eq!(sequence.insert_position(&2, InsertMode::Last, Some(99)), 3);
    /// ```
    #[must_use]
    pub fn insert_position(&self, value: &T, mode: InsertMode, hint: Option<usize>) -> usize {
        let len = self.len();
        let window = match hint {
            Some(hint) if hint <= len => self.hinted_window(value, mode, hint),
            _ => 0..len,
        };

        match mode {
            InsertMode::First => self.lower_bound_in(value, window),
            InsertMode::Last => self.upper_bound_in(value, window),
        }
    }

    /// Inserts `value` keeping the order and returns its index.
    ///
    /// See [`insert_position`](Self::insert_position) for `mode` and `hint`.
    ///
    /// # Complexity
    ///
    /// O(n) for shifting the tail.
    pub fn insert(&mut self, value: T, mode: InsertMode, hint: Option<usize>) -> usize {
        let position = self.insert_position(&value, mode, hint);
        self.elements.insert(position, value);
        position
    }

    /// Inserts `value` after all equivalent elements and returns its index.
    #[inline]
    pub fn push(&mut self, value: T) -> usize {
        self.insert(value, InsertMode::Last, None)
    }

    /// Replaces the element at `index` with `value` and moves it to its
    /// sorted place. Returns the new index.
    ///
    /// The result is the same as removing the element at `index` and then
    /// inserting `value`, but only the elements between the old and the new
    /// position are shifted.
    ///
    /// `hint` refers to the insert position of `value` computed *before* the
    /// old element is removed, i.e. `insert_position(&value, mode, None)`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_sequence::sequence::{InsertMode, SortedSequence};
    ///
    /// let mut sequence = SortedSequence::from_vec(vec![10, 20, 30, 40]);
    /// assert_eq!(sequence.change(0, 35, InsertMode::Last, None), 2);
    /// assert_eq!(sequence.as_slice(), &[20, 30, 35, 40]);
    /// ```
    pub fn change(&mut self, index: usize, value: T, mode: InsertMode, hint: Option<usize>) -> usize {
        assert!(
            index < self.len(),
            "change index {index} out of range for length {}",
            self.len()
        );

        let position = self.insert_position(&value, mode, hint);

        if position == index || position == index + 1 {
            self.elements[index] = value;
            index
        } else if position < index {
            self.elements[position..=index].rotate_right(1);
            self.elements[position] = value;
            position
        } else {
            self.elements[index..position].rotate_left(1);
            self.elements[position - 1] = value;
            position - 1
        }
    }

    /// Returns the range of elements equivalent to `value` under the
    /// comparator, regardless of `==`.
    #[must_use]
    pub fn equal_range(&self, value: &T) -> Range<usize> {
        self.equal_range_from(value, 0)
    }

    /// Merges `other` into this sequence.
    ///
    /// When both use equal comparators the two sorted runs are merged in
    /// O(n + m). Otherwise `other` is treated as unsorted input, as in
    /// [`extend_from_slice`](Self::extend_from_slice). On ties, elements
    /// already present come first.
    pub fn append_sequence<S2>(&mut self, other: &SortedSequence<T, C, S2>)
    where
        T: Clone,
    {
        if other.is_empty() {
            return;
        }

        if self.compare == other.compare {
            let middle = self.len();
            self.elements.extend_from_slice(&other.elements);
            merge_runs(&mut self.elements, middle, &self.compare);
        } else {
            self.extend_from_slice(&other.elements);
        }
    }

    /// Adds unsorted `values`.
    ///
    /// The new values are sorted with the strategy `S` and then merged with
    /// the existing run.
    ///
    /// # Complexity
    ///
    /// O(m log m + n + m)
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        let middle = self.len();
        self.elements.extend_from_slice(values);
        self.sort_range(middle);
    }

    /// Merges two sequences into a new one.
    ///
    /// If the comparators differ the result is an empty sequence that carries
    /// `left`'s comparator. Use [`try_merge`](Self::try_merge) to tell a
    /// rejected merge apart from two empty inputs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_sequence::sequence::SortedSequence;
    ///
    /// let left = SortedSequence::from_vec(vec![1, 4, 6]);
    /// let right = SortedSequence::from_vec(vec![2, 4, 5]);
    ///
    /// let merged: SortedSequence<i32> = SortedSequence::merge(&left, &right);
    /// assert_eq!(merged.as_slice(), &[1, 2, 4, 4, 5, 6]);
    /// ```
    #[must_use]
    pub fn merge<S1, S2>(left: &SortedSequence<T, C, S1>, right: &SortedSequence<T, C, S2>) -> Self
    where
        T: Clone,
    {
        Self::try_merge(left, right).unwrap_or_else(|error| {
            log::debug!("{error}, returning an empty sequence");
            Self::from_sorted_parts(Vec::new(), left.compare.clone())
        })
    }

    /// Merges two sequences into a new one, failing if their comparators
    /// differ.
    ///
    /// # Errors
    ///
    /// Returns [`CompareMismatchError`] if `left` and `right` are ordered by
    /// comparators that are not equal.
    pub fn try_merge<S1, S2>(
        left: &SortedSequence<T, C, S1>,
        right: &SortedSequence<T, C, S2>,
    ) -> Result<Self, CompareMismatchError>
    where
        T: Clone,
    {
        if left.compare != right.compare {
            return Err(CompareMismatchError {
                left_len: left.len(),
                right_len: right.len(),
            });
        }

        let mut elements = Vec::with_capacity(left.len() + right.len());
        elements.extend_from_slice(&left.elements);
        elements.extend_from_slice(&right.elements);
        merge_runs(&mut elements, left.len(), &left.compare);
        Ok(Self::from_sorted_parts(elements, left.compare.clone()))
    }

    /// Sorts `elements[start..]` with the strategy and merges it into the
    /// sorted prefix.
    fn sort_range(&mut self, start: usize) {
        let compare = &self.compare;
        S::sort_by(&mut self.elements[start..], |left, right| {
            compare.less(left, right)
        });
        merge_runs(&mut self.elements, start, &self.compare);
    }

    /// `order[i]` is the old index of the element that belongs at `i` under
    /// the current comparator.
    fn sorted_order(&self) -> Vec<usize> {
        let elements = &self.elements;
        let compare = &self.compare;
        let mut order: Vec<usize> = (0..elements.len()).collect();
        S::sort_by(&mut order, |&left, &right| {
            compare.less(&elements[left], &elements[right])
        });
        order
    }

    /// Narrows the bound search using the neighbours of `hint`.
    ///
    /// An empty window means the hint itself is the answer.
    fn hinted_window(&self, value: &T, mode: InsertMode, hint: usize) -> Range<usize> {
        let elements = &self.elements;
        let len = elements.len();
        let less = |left: &T, right: &T| self.compare.less(left, right);

        if len == 0 {
            return 0..0;
        }

        match mode {
            InsertMode::First => {
                if hint == 0 {
                    if less(&elements[0], value) { 1..len } else { 0..0 }
                } else if hint == len {
                    if less(&elements[len - 1], value) { len..len } else { 0..len - 1 }
                } else if less(&elements[hint - 1], value) {
                    if less(&elements[hint], value) { hint + 1..len } else { hint..hint }
                } else {
                    0..hint - 1
                }
            }
            InsertMode::Last => {
                if hint == 0 {
                    if less(value, &elements[0]) { 0..0 } else { 1..len }
                } else if hint == len {
                    if less(value, &elements[len - 1]) { 0..len - 1 } else { len..len }
                } else if less(value, &elements[hint]) {
                    if less(value, &elements[hint - 1]) { 0..hint - 1 } else { hint..hint }
                } else {
                    hint + 1..len
                }
            }
        }
    }

    fn lower_bound_in(&self, value: &T, window: Range<usize>) -> usize {
        let start = window.start;
        start
            + self.elements[window].partition_point(|element| self.compare.less(element, value))
    }

    fn upper_bound_in(&self, value: &T, window: Range<usize>) -> usize {
        let start = window.start;
        start
            + self.elements[window].partition_point(|element| !self.compare.less(value, element))
    }

    fn equal_range_from(&self, value: &T, from: usize) -> Range<usize> {
        let len = self.len();
        let lower = self.lower_bound_in(value, from.min(len)..len);
        let upper = self.upper_bound_in(value, lower..len);
        lower..upper
    }
}

// =============================================================================
// Equality-aware lookup
// =============================================================================

impl<T: PartialEq, C: Compare<T>, S: SortAlgorithm> SortedSequence<T, C, S> {
    /// Returns `true` if an element `== value` is present.
    ///
    /// Only the comparator equal-range of `value` is scanned, since several
    /// elements may be equivalent under the comparator without being `==`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.elements[self.equal_range(value)]
            .iter()
            .any(|element| element == value)
    }

    /// Returns the number of elements `== value`.
    #[must_use]
    pub fn count(&self, value: &T) -> usize {
        self.elements[self.equal_range(value)]
            .iter()
            .filter(|element| *element == value)
            .count()
    }

    /// Returns the first index of an element `== value`.
    #[inline]
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.index_of_from(value, 0)
    }

    /// Returns the first index `>= from` of an element `== value`.
    ///
    /// `from` past the end yields `None`.
    #[must_use]
    pub fn index_of_from(&self, value: &T, from: usize) -> Option<usize> {
        let range = self.equal_range_from(value, from);
        self.elements[range.clone()]
            .iter()
            .position(|element| element == value)
            .map(|offset| range.start + offset)
    }

    /// Returns the last index of an element `== value`.
    #[inline]
    #[must_use]
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.last_index_of_from(value, 0)
    }

    /// Returns the last index `>= from` of an element `== value`.
    #[must_use]
    pub fn last_index_of_from(&self, value: &T, from: usize) -> Option<usize> {
        let range = self.equal_range_from(value, from);
        self.elements[range.clone()]
            .iter()
            .rposition(|element| element == value)
            .map(|offset| range.start + offset)
    }

    /// Alias of [`index_of`](Self::index_of).
    #[inline]
    #[must_use]
    pub fn find_first(&self, value: &T) -> Option<usize> {
        self.index_of(value)
    }

    /// Alias of [`last_index_of`](Self::last_index_of).
    #[inline]
    #[must_use]
    pub fn find_last(&self, value: &T) -> Option<usize> {
        self.last_index_of(value)
    }

    /// Removes one element `== value` and returns whether one was found.
    ///
    /// When several match, the one with the highest index is removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_sequence::sequence::{LambdaCompare, SortedSequence};
    ///
    /// let by_key = LambdaCompare::new(|left: &(i32, char), right: &(i32, char)| left.0 < right.0);
    /// let mut sequence =
    ///     SortedSequence::from_vec_with_compare(vec![(1, 'a'), (1, 'b'), (1, 'a')], by_key);
    ///
    /// assert!(sequence.remove_one(&(1, 'a')));
    /// assert_eq!(sequence.as_slice(), &[(1, 'a'), (1, 'b')]);
    /// ```
    pub fn remove_one(&mut self, value: &T) -> bool {
        match self.last_index_of(value) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every element `== value` and returns how many were removed.
    ///
    /// Equivalent elements that are not `==` keep their relative order.
    pub fn remove_all(&mut self, value: &T) -> usize {
        let range = self.equal_range(value);
        let mut kept = range.start;
        for current in range.clone() {
            if self.elements[current] != *value {
                self.elements.swap(kept, current);
                kept += 1;
            }
        }

        let removed = range.end - kept;
        if removed > 0 {
            self.elements.drain(kept..range.end);
        }
        removed
    }
}

// =============================================================================
// Merging
// =============================================================================

/// Restores sortedness of `elements` when `elements[..middle]` and
/// `elements[middle..]` are each sorted. Stable: ties keep the left run first.
fn merge_runs<T, C: Compare<T>>(elements: &mut Vec<T>, middle: usize, compare: &C) {
    let len = elements.len();
    if middle == 0
        || middle >= len
        || !compare.less(&elements[middle], &elements[middle - 1])
    {
        return;
    }

    log::trace!("merging runs of {} and {} elements", middle, len - middle);

    let right = elements.split_off(middle);
    let left = std::mem::replace(elements, Vec::with_capacity(len));
    let mut merge = MergeGuard {
        output: elements,
        left: left.into_iter().peekable(),
        right: right.into_iter().peekable(),
    };

    while let (Some(left), Some(right)) = (merge.left.peek(), merge.right.peek()) {
        let take_right = compare.less(right, left);
        let next = if take_right {
            merge.right.next()
        } else {
            merge.left.next()
        };
        merge.output.extend(next);
    }
}

/// Drains whatever is left of both runs into the output when dropped, so a
/// panicking comparator loses no elements.
struct MergeGuard<'a, T> {
    output: &'a mut Vec<T>,
    left: Peekable<std::vec::IntoIter<T>>,
    right: Peekable<std::vec::IntoIter<T>>,
}

impl<T> Drop for MergeGuard<'_, T> {
    fn drop(&mut self) {
        self.output.extend(self.left.by_ref());
        self.output.extend(self.right.by_ref());
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<T, C: Default, S> Default for SortedSequence<T, C, S> {
    fn default() -> Self {
        Self::from_sorted_parts(Vec::new(), C::default())
    }
}

impl<T: Clone, C: Clone, S> Clone for SortedSequence<T, C, S> {
    fn clone(&self) -> Self {
        Self::from_sorted_parts(self.elements.clone(), self.compare.clone())
    }
}

impl<T: PartialEq, C: PartialEq, S> PartialEq for SortedSequence<T, C, S> {
    fn eq(&self, other: &Self) -> bool {
        self.compare == other.compare && self.elements == other.elements
    }
}

impl<T: Eq, C: Eq, S> Eq for SortedSequence<T, C, S> {}

impl<T, C, S> Index<usize> for SortedSequence<T, C, S> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T, C, S> AsRef<[T]> for SortedSequence<T, C, S> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T, C, S> From<SortedSequence<T, C, S>> for Vec<T> {
    #[inline]
    fn from(sequence: SortedSequence<T, C, S>) -> Self {
        sequence.elements
    }
}

impl<T, C: Compare<T> + Default, S: SortAlgorithm> FromIterator<T> for SortedSequence<T, C, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with_strategy(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>, S: SortAlgorithm> Extend<T> for SortedSequence<T, C, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let middle = self.len();
        self.elements.extend(iter);
        self.sort_range(middle);
    }
}

impl<'a, T: Copy + 'a, C: Compare<T>, S: SortAlgorithm> Extend<&'a T> for SortedSequence<T, C, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C, S> IntoIterator for SortedSequence<T, C, S> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T, C, S> IntoIterator for &'a SortedSequence<T, C, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug, C, S> fmt::Debug for SortedSequence<T, C, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display, C, S> fmt::Display for SortedSequence<T, C, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C, S> serde::Serialize for SortedSequence<T, C, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedSequenceVisitor<T, C, S> {
    marker: PhantomData<fn() -> SortedSequence<T, C, S>>,
}

#[cfg(feature = "serde")]
impl<T, C, S> SortedSequenceVisitor<T, C, S> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C, S> serde::de::Visitor<'de> for SortedSequenceVisitor<T, C, S>
where
    T: serde::Deserialize<'de>,
    C: Compare<T> + Default,
    S: SortAlgorithm,
{
    type Value = SortedSequence<T, C, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(SortedSequence::from_vec_with_strategy(elements, C::default()))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C, S> serde::Deserialize<'de> for SortedSequence<T, C, S>
where
    T: serde::Deserialize<'de>,
    C: Compare<T> + Default,
    S: SortAlgorithm,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSequenceVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_as_plain_sequence() {
        let sequence = SortedSequence::from_vec(vec![3, 1, 2]);
        let json = serde_json::to_string(&sequence).unwrap();
        assert_eq!(json, "[1,2,3]");
    }

    #[rstest]
    fn test_deserialize_sorts_input() {
        let sequence: SortedSequence<i32> = serde_json::from_str("[5,3,1,4,1]").unwrap();
        assert_eq!(sequence.as_slice(), &[1, 1, 3, 4, 5]);
    }
}
