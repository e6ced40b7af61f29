//! Position tracking across a resort.
//!
//! Callers that hold external references into a sorted sequence (selection
//! state, persistent indices) keep them in a [`PositionMap`] keyed by the old
//! index. After a comparator change the sequence writes the new index of each
//! tracked key into the map's value slot.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

const PROCESSED: usize = usize::MAX;

/// A caller-owned map from old index to new index.
///
/// Only keys present before the call are ever written, and no entries are
/// inserted or removed.
///
/// # Examples
///
/// ```rust
/// use sorted_sequence::sequence::PositionMap;
/// use std::collections::BTreeMap;
///
/// let mut positions = BTreeMap::from([(0, 0), (5, 5)]);
/// positions.remap(|old| (old < 3).then_some(old + 1));
///
/// assert_eq!(positions[&0], 1);
/// assert_eq!(positions[&5], 5); // untouched
/// ```
pub trait PositionMap {
    /// Calls `new_position` with every key and stores `Some` results as the
    /// key's value. Keys yielding `None` keep their value.
    fn remap<F>(&mut self, new_position: F)
    where
        F: FnMut(usize) -> Option<usize>;
}

impl<S: BuildHasher> PositionMap for HashMap<usize, usize, S> {
    fn remap<F>(&mut self, mut new_position: F)
    where
        F: FnMut(usize) -> Option<usize>,
    {
        for (key, value) in self.iter_mut() {
            if let Some(position) = new_position(*key) {
                *value = position;
            }
        }
    }
}

impl PositionMap for BTreeMap<usize, usize> {
    fn remap<F>(&mut self, mut new_position: F)
    where
        F: FnMut(usize) -> Option<usize>,
    {
        for (key, value) in self.iter_mut() {
            if let Some(position) = new_position(*key) {
                *value = position;
            }
        }
    }
}

/// Reorders `elements` in place so that `elements[i]` becomes the element
/// previously at `order[i]`.
///
/// Each permutation cycle is rotated with swaps exactly once, so the total
/// work is O(n) moves with no second buffer. `order` is consumed as the
/// visited marker and holds no meaningful data afterwards.
///
/// # Panics
///
/// Panics if the slices differ in length or if `order` contains an index
/// out of range. If `order` is not a permutation the resulting arrangement is
/// unspecified, but no element is lost or duplicated.
///
/// # Examples
///
/// ```rust
/// use sorted_sequence::sequence::apply_permutation;
///
/// let mut elements = vec!['a', 'b', 'c', 'd'];
/// let mut order = vec![2, 0, 3, 1];
/// apply_permutation(&mut elements, &mut order);
/// assert_eq!(elements, vec!['c', 'a', 'd', 'b']);
/// ```
pub fn apply_permutation<X>(elements: &mut [X], order: &mut [usize]) {
    assert_eq!(
        elements.len(),
        order.len(),
        "permutation length must match the element count"
    );

    for start in 0..order.len() {
        let next = order[start];
        if next == start || next == PROCESSED {
            order[start] = PROCESSED;
            continue;
        }

        // elements[current] receives elements[order[current]] until the
        // cycle closes back on `start`, whose value has travelled along.
        let mut current = start;
        loop {
            let source = order[current];
            order[current] = PROCESSED;
            if source == start || source == PROCESSED {
                break;
            }
            elements.swap(current, source);
            current = source;
        }
    }
}

/// Inverts `order` into an old-index to new-index table.
pub(crate) fn invert_permutation(order: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; order.len()];
    for (new_position, &old_position) in order.iter().enumerate() {
        inverse[old_position] = new_position;
    }
    inverse
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![0, 1, 2, 3])]
    #[case(vec![1, 0, 3, 2])]
    #[case(vec![3, 0, 1, 2])]
    #[case(vec![2, 3, 0, 1])]
    #[case(vec![4, 2, 0, 1, 3])]
    fn test_apply_permutation_matches_gather(#[case] order: Vec<usize>) {
        let original: Vec<char> = ('a'..).take(order.len()).collect();
        let expected: Vec<char> = order.iter().map(|&index| original[index]).collect();

        let mut elements = original;
        let mut scratch = order;
        apply_permutation(&mut elements, &mut scratch);

        assert_eq!(elements, expected);
        assert!(scratch.iter().all(|&slot| slot == PROCESSED));
    }

    #[rstest]
    fn test_apply_permutation_empty() {
        let mut elements: Vec<i32> = Vec::new();
        apply_permutation(&mut elements, &mut []);
        assert!(elements.is_empty());
    }

    #[rstest]
    #[should_panic(expected = "permutation length must match the element count")]
    fn test_apply_permutation_length_mismatch_panics() {
        let mut elements = vec![1, 2];
        apply_permutation(&mut elements, &mut [0]);
    }

    #[rstest]
    fn test_invert_permutation() {
        assert_eq!(invert_permutation(&[2, 0, 3, 1]), vec![1, 3, 0, 2]);
    }

    #[rstest]
    fn test_hash_map_remap_skips_none() {
        let mut positions: HashMap<usize, usize> = HashMap::from([(0, 0), (1, 1), (9, 9)]);
        positions.remap(|key| (key < 2).then_some(10 + key));
        assert_eq!(positions[&0], 10);
        assert_eq!(positions[&1], 11);
        assert_eq!(positions[&9], 9);
        assert_eq!(positions.len(), 3);
    }

    #[rstest]
    fn test_btree_map_remap_never_inserts() {
        let mut positions = BTreeMap::from([(3, 0)]);
        positions.remap(Some);
        assert_eq!(positions.into_iter().collect::<Vec<_>>(), vec![(3, 3)]);
    }
}
