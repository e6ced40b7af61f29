#![cfg(feature = "sequence")]
//! Property-based tests for SortedSequence.
//!
//! These tests verify that SortedSequence keeps its ordering invariant and
//! that every shortcut (hints, in-place change, run merges, reorder tracking)
//! agrees with the straightforward reference behaviour.

use proptest::prelude::*;
use sorted_sequence::sequence::{InsertMode, LambdaCompare, SortedSequence};
use std::collections::HashMap;

type Keyed = (u8, u16);

fn by_key() -> LambdaCompare<Keyed> {
    LambdaCompare::new(|left: &Keyed, right: &Keyed| left.0 < right.0)
}

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Keys are drawn from a small range so equivalent runs are common.
fn arbitrary_keyed(max_size: usize) -> impl Strategy<Value = Vec<Keyed>> {
    prop::collection::vec((0u8..8, any::<u16>()), 0..max_size)
}

fn arbitrary_mode() -> impl Strategy<Value = InsertMode> {
    prop_oneof![Just(InsertMode::First), Just(InsertMode::Last)]
}

#[derive(Debug, Clone)]
enum Operation {
    Insert(Keyed, InsertMode, Option<usize>),
    Change(usize, Keyed, InsertMode),
    RemoveAt(usize),
    RemoveAll(Keyed),
    RemoveOne(Keyed),
    Extend(Vec<Keyed>),
    Reverse,
}

fn arbitrary_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        ((0u8..8, any::<u16>()), arbitrary_mode(), any::<Option<usize>>())
            .prop_map(|(value, mode, hint)| Operation::Insert(value, mode, hint.map(|hint| hint % 16))),
        (any::<usize>(), (0u8..8, any::<u16>()), arbitrary_mode())
            .prop_map(|(index, value, mode)| Operation::Change(index, value, mode)),
        any::<usize>().prop_map(Operation::RemoveAt),
        (0u8..8, 0u16..4).prop_map(Operation::RemoveAll),
        (0u8..8, 0u16..4).prop_map(Operation::RemoveOne),
        arbitrary_keyed(6).prop_map(Operation::Extend),
        Just(Operation::Reverse),
    ]
}

fn is_sorted_by_key(elements: &[Keyed], ascending: bool) -> bool {
    elements.windows(2).all(|pair| {
        if ascending {
            pair[0].0 <= pair[1].0
        } else {
            pair[0].0 >= pair[1].0
        }
    })
}

// =============================================================================
// Ordering Invariant
// =============================================================================

proptest! {
    /// Law: every mutation leaves the sequence sorted under its comparator.
    #[test]
    fn prop_sorted_after_every_operation(
        initial in arbitrary_keyed(20),
        operations in prop::collection::vec(arbitrary_operation(), 0..30)
    ) {
        let ascending = by_key();
        let descending = ascending.reversed();
        let mut sequence = SortedSequence::from_vec_with_compare(initial, ascending.clone());
        let mut is_ascending = true;

        for operation in operations {
            match operation {
                Operation::Insert(value, mode, hint) => {
                    sequence.insert(value, mode, hint);
                }
                Operation::Change(index, value, mode) => {
                    if !sequence.is_empty() {
                        let index = index % sequence.len();
                        sequence.change(index, value, mode, None);
                    }
                }
                Operation::RemoveAt(index) => {
                    if !sequence.is_empty() {
                        let index = index % sequence.len();
                        sequence.remove_at(index);
                    }
                }
                Operation::RemoveAll(value) => {
                    sequence.remove_all(&value);
                }
                Operation::RemoveOne(value) => {
                    sequence.remove_one(&value);
                }
                Operation::Extend(values) => sequence.extend_from_slice(&values),
                Operation::Reverse => {
                    is_ascending = !is_ascending;
                    let next = if is_ascending { ascending.clone() } else { descending.clone() };
                    sequence.set_compare(next);
                }
            }
            prop_assert!(is_sorted_by_key(sequence.as_slice(), is_ascending));
        }
    }

    /// Law: construction is a stable sort.
    #[test]
    fn prop_from_vec_is_stable_sort(elements in arbitrary_keyed(40)) {
        let mut expected = elements.clone();
        expected.sort_by_key(|element| element.0);
        let sequence = SortedSequence::from_vec_with_compare(elements, by_key());
        prop_assert_eq!(sequence.as_slice(), expected.as_slice());
    }
}

// =============================================================================
// Insert Position Laws
// =============================================================================

proptest! {
    /// Law: the hint never changes the insert position.
    /// insert_position(v, mode, Some(h)) == insert_position(v, mode, None)
    #[test]
    fn prop_hint_is_transparent(
        elements in prop::collection::vec(0i32..20, 0..30),
        value in 0i32..20,
        hint in 0usize..40,
        mode in arbitrary_mode()
    ) {
        let sequence = SortedSequence::from_vec(elements);
        prop_assert_eq!(
            sequence.insert_position(&value, mode, Some(hint)),
            sequence.insert_position(&value, mode, None)
        );
    }

    /// Law: insert positions are the lower and upper bounds.
    #[test]
    fn prop_insert_position_is_bound(
        elements in prop::collection::vec(0i32..20, 0..30),
        value in 0i32..20
    ) {
        let sequence = SortedSequence::from_vec(elements);
        let slice = sequence.as_slice();
        prop_assert_eq!(
            sequence.insert_position(&value, InsertMode::First, None),
            slice.partition_point(|element| *element < value)
        );
        prop_assert_eq!(
            sequence.insert_position(&value, InsertMode::Last, None),
            slice.partition_point(|element| *element <= value)
        );
    }
}

// =============================================================================
// Change Laws
// =============================================================================

proptest! {
    /// Law: change is remove followed by insert.
    /// seq.change(i, v) == { seq.remove_at(i); seq.insert(v) }
    #[test]
    fn prop_change_is_remove_then_insert(
        elements in arbitrary_keyed(25),
        index: usize,
        value in (0u8..8, any::<u16>()),
        mode in arbitrary_mode()
    ) {
        prop_assume!(!elements.is_empty());
        let mut changed = SortedSequence::from_vec_with_compare(elements, by_key());
        let index = index % changed.len();
        let mut reference = changed.clone();

        let hint = changed.insert_position(&value, mode, None);
        let position = changed.change(index, value, mode, Some(hint));
        reference.remove_at(index);
        let reference_position = reference.insert(value, mode, None);

        prop_assert_eq!(position, reference_position);
        prop_assert_eq!(changed.as_slice(), reference.as_slice());
    }
}

// =============================================================================
// Removal Laws
// =============================================================================

proptest! {
    /// Law: remove_all removes exactly count(v) elements and nothing else.
    #[test]
    fn prop_remove_all_removes_count(
        elements in prop::collection::vec((0u8..4, 0u16..3), 0..30),
        value in (0u8..4, 0u16..3)
    ) {
        let mut sequence = SortedSequence::from_vec_with_compare(elements, by_key());
        let before: Vec<Keyed> = sequence.as_slice().to_vec();
        let expected_count = sequence.count(&value);

        prop_assert_eq!(sequence.remove_all(&value), expected_count);
        prop_assert!(!sequence.contains(&value));

        let expected: Vec<Keyed> = before.into_iter().filter(|element| *element != value).collect();
        prop_assert_eq!(sequence.as_slice(), expected.as_slice());
    }
}

// =============================================================================
// Merge Laws
// =============================================================================

proptest! {
    /// Law: merging with equal comparators is a stable sort of the concatenation.
    #[test]
    fn prop_merge_is_sorted_union(
        left in arbitrary_keyed(20),
        right in arbitrary_keyed(20)
    ) {
        let compare = by_key();
        let left = SortedSequence::from_vec_with_compare(left, compare.clone());
        let right = SortedSequence::from_vec_with_compare(right, compare);

        let merged: SortedSequence<Keyed, LambdaCompare<Keyed>> = SortedSequence::merge(&left, &right);

        let mut expected: Vec<Keyed> = left.iter().chain(right.iter()).copied().collect();
        expected.sort_by_key(|element| element.0);
        prop_assert_eq!(merged.as_slice(), expected.as_slice());
    }

    /// Law: merging with different comparators yields an empty sequence.
    #[test]
    fn prop_merge_mismatch_is_empty(
        left in arbitrary_keyed(10),
        right in arbitrary_keyed(10)
    ) {
        let left = SortedSequence::from_vec_with_compare(left, by_key());
        let right = SortedSequence::from_vec_with_compare(right, by_key());
        let merged: SortedSequence<Keyed, LambdaCompare<Keyed>> = SortedSequence::merge(&left, &right);
        prop_assert!(merged.is_empty());
    }

    /// Law: appending a same-comparator sequence equals merge.
    #[test]
    fn prop_append_sequence_matches_merge(
        left in arbitrary_keyed(20),
        right in arbitrary_keyed(20)
    ) {
        let compare = by_key();
        let mut appended = SortedSequence::from_vec_with_compare(left, compare.clone());
        let right = SortedSequence::from_vec_with_compare(right, compare);
        let merged: SortedSequence<Keyed, LambdaCompare<Keyed>> = SortedSequence::merge(&appended, &right);

        appended.append_sequence(&right);
        prop_assert_eq!(appended, merged);
    }
}

// =============================================================================
// Comparator Change Laws
// =============================================================================

proptest! {
    /// Law: a tracked element can be found at its reported new index, and the
    /// resorted contents equal a plain set_compare.
    #[test]
    fn prop_position_map_tracks_elements(
        elements in prop::collection::hash_set(any::<i32>(), 0..30),
        tracked in prop::collection::vec(any::<usize>(), 0..10)
    ) {
        let ascending = LambdaCompare::new(|left: &i32, right: &i32| left < right);
        let descending = ascending.reversed();
        let mut sequence =
            SortedSequence::from_vec_with_compare(elements.into_iter().collect(), ascending);
        let before: Vec<i32> = sequence.as_slice().to_vec();
        let mut reference = sequence.clone();

        let mut positions: HashMap<usize, usize> = tracked
            .into_iter()
            .filter(|_| !before.is_empty())
            .map(|index| (index % before.len(), usize::MAX))
            .collect();
        sequence.set_compare_with_position_map(descending.clone(), &mut positions);
        reference.set_compare(descending);

        prop_assert_eq!(sequence.as_slice(), reference.as_slice());
        for (old, new) in &positions {
            prop_assert_eq!(sequence[*new], before[*old]);
        }
    }

    /// Law: the returned permutation maps every old index to the element's
    /// new index.
    #[test]
    fn prop_permutation_is_consistent(elements in arbitrary_keyed(30)) {
        let ascending = by_key();
        let mut sequence = SortedSequence::from_vec_with_compare(elements, ascending.clone());
        let before: Vec<Keyed> = sequence.as_slice().to_vec();

        let permutation = sequence.set_compare_with_permutation(ascending.reversed());

        prop_assert_eq!(permutation.len(), before.len());
        for (old, new) in permutation.into_iter().enumerate() {
            prop_assert_eq!(sequence[new], before[old]);
        }
    }

    /// Law: setting an equal comparator changes nothing and maps keys to
    /// themselves.
    #[test]
    fn prop_equal_compare_is_noop(
        elements in arbitrary_keyed(30),
        keys in prop::collection::vec(0usize..64, 0..10)
    ) {
        let compare = by_key();
        let mut sequence = SortedSequence::from_vec_with_compare(elements, compare.clone());
        let before: Vec<Keyed> = sequence.as_slice().to_vec();

        let mut positions: HashMap<usize, usize> = keys.iter().map(|&key| (key, 0)).collect();
        sequence.set_compare_with_position_map(compare.clone(), &mut positions);
        sequence.set_compare(compare);

        prop_assert_eq!(sequence.as_slice(), before.as_slice());
        for (key, value) in positions {
            prop_assert_eq!(key, value);
        }
    }
}
