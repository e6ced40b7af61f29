//! 64-bit integers of either signedness.
//!
//! Text input may hold any value from `i64::MIN` to `u64::MAX`. [`Integer`]
//! keeps whichever representation fits and compares across the two exactly.

use super::ConversionError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An integer held as `i64` when it fits, otherwise as `u64`.
///
/// Equality, ordering and hashing follow the numeric value, so
/// `Signed(5) == Unsigned(5)`.
///
/// # Examples
///
/// ```rust
/// use sorted_sequence::numeric::Integer;
///
/// assert_eq!(Integer::Signed(7), Integer::Unsigned(7));
/// assert!(Integer::Signed(-1) < Integer::Unsigned(u64::MAX));
/// assert_eq!("18446744073709551615".parse(), Ok(Integer::Unsigned(u64::MAX)));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Integer {
    /// A value that fits in `i64`.
    Signed(i64),
    /// A value above `i64::MAX`, or any value the caller chose to store
    /// unsigned.
    Unsigned(u64),
}

impl Integer {
    /// Returns `true` if the value is below zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Signed(value) if value < 0)
    }

    #[inline]
    const fn widen(self) -> i128 {
        match self {
            Self::Signed(value) => value as i128,
            Self::Unsigned(value) => value as i128,
        }
    }
}

impl From<i64> for Integer {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Signed(value)
    }
}

impl From<u64> for Integer {
    #[inline]
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.widen() == other.widen()
    }
}

impl Eq for Integer {}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.widen().cmp(&other.widen())
    }
}

impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.widen().hash(state);
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(value) => write!(formatter, "{value}"),
            Self::Unsigned(value) => write!(formatter, "{value}"),
        }
    }
}

impl FromStr for Integer {
    type Err = ConversionError;

    /// Tries `i64` first, then `u64`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.parse::<i64>()
            .map(Self::Signed)
            .or_else(|_| text.parse::<u64>().map(Self::Unsigned))
            .map_err(|_| ConversionError::Format)
    }
}

/// Parses a decimal integer, preferring the signed representation.
///
/// Returns `None` if `text` is not an integer in `i64::MIN..=u64::MAX`.
#[inline]
#[must_use]
pub fn parse_integer(text: &str) -> Option<Integer> {
    text.parse().ok()
}

/// Returns `true` if `min <= value <= max`.
///
/// A missing `min` means `i64::MIN` and a missing `max` means `u64::MAX`, so
/// `is_in_range(None, value, None)` holds for every value.
///
/// # Examples
///
/// ```rust
/// use sorted_sequence::numeric::{Integer, is_in_range};
///
/// let value = Integer::Unsigned(10);
/// assert!(is_in_range(Some(Integer::Signed(-5)), value, None));
/// assert!(!is_in_range(None, value, Some(Integer::Signed(9))));
/// ```
#[must_use]
pub fn is_in_range(min: Option<Integer>, value: Integer, max: Option<Integer>) -> bool {
    let min = min.unwrap_or(Integer::Signed(i64::MIN));
    let max = max.unwrap_or(Integer::Unsigned(u64::MAX));
    min <= value && value <= max
}
