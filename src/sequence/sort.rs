//! Bulk sort strategies.
//!
//! [`SortedSequence`](super::SortedSequence) runs a full sort on construction,
//! on comparator changes and on the unsorted tail of bulk appends. The
//! strategy is a type parameter so callers can trade tie determinism for
//! speed.

/// A sort algorithm driven by a strict weak ordering `less`.
///
/// Implementors only need to produce a permutation of `elements` that is
/// sorted under `less`. Whether equivalent elements keep their relative order
/// is up to the strategy.
pub trait SortAlgorithm {
    /// Sorts `elements` so that no element is `less` than its predecessor.
    fn sort_by<X, F>(elements: &mut [X], less: F)
    where
        F: FnMut(&X, &X) -> bool;
}

/// Stable merge sort. The default strategy.
///
/// Equivalent elements keep their relative order, so resorting under a new
/// comparator is deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StableSort;

impl SortAlgorithm for StableSort {
    #[inline]
    fn sort_by<X, F>(elements: &mut [X], mut less: F)
    where
        F: FnMut(&X, &X) -> bool,
    {
        elements.sort_by(|left, right| ordering_from_less(&mut less, left, right));
    }
}

/// Unstable pattern-defeating quicksort.
///
/// Faster and allocation-free, but equivalent elements end up in an
/// unspecified order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnstableSort;

impl SortAlgorithm for UnstableSort {
    #[inline]
    fn sort_by<X, F>(elements: &mut [X], mut less: F)
    where
        F: FnMut(&X, &X) -> bool,
    {
        elements.sort_unstable_by(|left, right| ordering_from_less(&mut less, left, right));
    }
}

#[inline]
fn ordering_from_less<X, F>(less: &mut F, left: &X, right: &X) -> std::cmp::Ordering
where
    F: FnMut(&X, &X) -> bool,
{
    if less(left, right) {
        std::cmp::Ordering::Less
    } else if less(right, left) {
        std::cmp::Ordering::Greater
    } else {
        std::cmp::Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_stable_sort_keeps_tie_order() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        StableSort::sort_by(&mut pairs, |left, right| left.0 < right.0);
        assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[rstest]
    fn test_unstable_sort_orders_keys() {
        let mut pairs = vec![(3, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        UnstableSort::sort_by(&mut pairs, |left, right| left.0 < right.0);
        let keys: Vec<i32> = pairs.iter().map(|pair| pair.0).collect();
        assert_eq!(keys, vec![1, 1, 2, 3]);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![1])]
    #[case(vec![3, 2, 1])]
    fn test_stable_sort_handles_small_inputs(#[case] mut elements: Vec<i32>) {
        let mut expected = elements.clone();
        expected.sort_unstable();
        StableSort::sort_by(&mut elements, |left, right| left < right);
        assert_eq!(elements, expected);
    }
}
