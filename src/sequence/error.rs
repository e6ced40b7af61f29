//! Error types for the sorted sequence.

/// Returned by [`SortedSequence::try_merge`](super::SortedSequence::try_merge)
/// when the two operands are ordered by different comparators.
///
/// # Examples
///
/// ```rust
/// use sorted_sequence::sequence::CompareMismatchError;
///
/// let error = CompareMismatchError {
///     left_len: 3,
///     right_len: 2,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "cannot merge sequences of 3 and 2 elements: comparators differ"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompareMismatchError {
    /// Length of the left operand.
    pub left_len: usize,
    /// Length of the right operand.
    pub right_len: usize,
}

impl std::fmt::Display for CompareMismatchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "cannot merge sequences of {} and {} elements: comparators differ",
            self.left_len, self.right_len
        )
    }
}

impl std::error::Error for CompareMismatchError {}
