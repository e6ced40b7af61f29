//! Sorted sequence container adaptor.
//!
//! This module provides a container adaptor that keeps an underlying `Vec`
//! sorted under a pluggable comparator:
//!
//! - [`SortedSequence`]: The adaptor itself
//! - [`Compare`]: The ordering relation, with [`DefaultCompare`] and [`LambdaCompare`]
//! - [`SortAlgorithm`]: The bulk sort strategy, with [`StableSort`] and [`UnstableSort`]
//! - [`PositionMap`]: Caller-owned old-index to new-index maps filled in by
//!   [`SortedSequence::set_compare_with_position_map`]
//!
//! # Comparator Identity
//!
//! Changing the comparator is a no-op when the new comparator is equal to the
//! current one. [`DefaultCompare`] instances are always equal; [`LambdaCompare`]
//! instances are equal only when they share the same closure handle.
//!
//! # Examples
//!
//! ## Natural ordering
//!
//! ```rust
//! use sorted_sequence::sequence::{InsertMode, SortedSequence};
//!
//! let mut sequence = SortedSequence::from_vec(vec![5, 3, 1, 4, 1]);
//! assert_eq!(sequence.as_slice(), &[1, 1, 3, 4, 5]);
//!
//! let position = sequence.insert(2, InsertMode::Last, None);
//! assert_eq!(position, 2);
//! assert_eq!(sequence.equal_range(&1), 0..2);
//! ```
//!
//! ## Re-sorting with tracked positions
//!
//! ```rust
//! use sorted_sequence::sequence::{LambdaCompare, SortedSequence};
//! use std::collections::HashMap;
//!
//! let ascending = LambdaCompare::new(|left: &i32, right: &i32| left < right);
//! let mut sequence = SortedSequence::from_vec_with_compare(vec![10, 20, 30], ascending.clone());
//!
//! // Track the element currently at index 0
//! let mut selection = HashMap::from([(0, 0)]);
//! sequence.set_compare_with_position_map(ascending.reversed(), &mut selection);
//!
//! assert_eq!(sequence.as_slice(), &[30, 20, 10]);
//! assert_eq!(selection[&0], 2);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod adaptor;
mod compare;
mod error;
mod position;
mod sort;

pub use adaptor::InsertMode;
pub use adaptor::SortedSequence;
pub use compare::Compare;
pub use compare::DefaultCompare;
pub use compare::LambdaCompare;
pub use error::CompareMismatchError;
pub use position::PositionMap;
pub use position::apply_permutation;
pub use sort::SortAlgorithm;
pub use sort::StableSort;
pub use sort::UnstableSort;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_ptr_eq_follows_clones() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        let reference_counter_clone = reference_counter.clone();
        assert!(ReferenceCounter::ptr_eq(
            &reference_counter,
            &reference_counter_clone
        ));
    }

    #[rstest]
    fn test_reference_counter_ptr_eq_ignores_equal_contents() {
        let first: ReferenceCounter<i32> = ReferenceCounter::new(42);
        let second: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(*first, *second);
        assert!(!ReferenceCounter::ptr_eq(&first, &second));
    }
}
