//! Ordering relations for [`SortedSequence`](super::SortedSequence).
//!
//! A comparator is a strict weak ordering `less(left, right)` together with an
//! equality capability. Equality answers "would switching to this comparator
//! change anything?", which lets the sequence skip redundant resorts.
//!
//! - [`DefaultCompare`]: natural `Ord` ordering; all instances are equal
//! - [`LambdaCompare`]: arbitrary closure behind a shared handle; instances are
//!   equal only when they share the handle
//!
//! # Examples
//!
//! ```rust
//! use sorted_sequence::sequence::{Compare, LambdaCompare};
//!
//! let by_length = LambdaCompare::new(|left: &String, right: &String| left.len() < right.len());
//! let copy = by_length.clone();
//! let lookalike = LambdaCompare::new(|left: &String, right: &String| left.len() < right.len());
//!
//! assert!(by_length.less(&"ab".to_string(), &"abc".to_string()));
//! assert_eq!(by_length, copy);
//! assert_ne!(by_length, lookalike);
//! ```

use super::ReferenceCounter;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A strict weak ordering over `T` with an equality capability.
///
/// `less(left, right)` returns `true` when `left` must sort strictly before
/// `right`. It must be irreflexive, asymmetric and transitive, and
/// incomparability must be transitive. Violating this is a logic error: the
/// sequence stays memory safe but its order is unspecified.
///
/// `PartialEq` must return `true` only when both comparators order every pair
/// identically.
pub trait Compare<T: ?Sized>: Clone + PartialEq {
    /// Returns `true` if `left` sorts strictly before `right`.
    fn less(&self, left: &T, right: &T) -> bool;

    /// Derives a total [`Ordering`] from two calls to [`less`](Self::less).
    ///
    /// Equivalent elements compare as [`Ordering::Equal`].
    #[inline]
    fn ordering(&self, left: &T, right: &T) -> Ordering {
        if self.less(left, right) {
            Ordering::Less
        } else if self.less(right, left) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

// =============================================================================
// DefaultCompare
// =============================================================================

/// Natural ascending ordering via [`Ord`].
///
/// Every `DefaultCompare<T>` is equal to every other, so switching between
/// them never triggers a resort.
pub struct DefaultCompare<T: ?Sized> {
    marker: PhantomData<fn(&T, &T) -> bool>,
}

impl<T: ?Sized> DefaultCompare<T> {
    /// Creates the natural ordering comparator.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: Ord + ?Sized> Compare<T> for DefaultCompare<T> {
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        left < right
    }

    #[inline]
    fn ordering(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T: ?Sized> Clone for DefaultCompare<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for DefaultCompare<T> {}

impl<T: ?Sized> Default for DefaultCompare<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> PartialEq for DefaultCompare<T> {
    #[inline]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for DefaultCompare<T> {}

impl<T: ?Sized> Hash for DefaultCompare<T> {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<T: ?Sized> fmt::Debug for DefaultCompare<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("DefaultCompare")
    }
}

// =============================================================================
// LambdaCompare
// =============================================================================

#[cfg(not(feature = "arc"))]
type CompareFunction<T> = dyn Fn(&T, &T) -> bool;

#[cfg(feature = "arc")]
type CompareFunction<T> = dyn Fn(&T, &T) -> bool + Send + Sync;

/// A closure comparator with value semantics and identity equality.
///
/// The closure lives behind a shared handle (`Rc`, or `Arc` with the `arc`
/// feature). Clones share the handle and compare equal; two comparators
/// built from separate closures never compare equal, even if the closures
/// are textually identical or capture equal state.
///
/// # Examples
///
/// ```rust
/// use sorted_sequence::sequence::{LambdaCompare, SortedSequence};
///
/// let descending = LambdaCompare::new(|left: &i32, right: &i32| left > right);
/// let mut sequence = SortedSequence::from_vec_with_compare(vec![1, 3, 2], descending.clone());
/// assert_eq!(sequence.as_slice(), &[3, 2, 1]);
///
/// // Same handle: nothing to do
/// sequence.set_compare(descending);
/// assert_eq!(sequence.as_slice(), &[3, 2, 1]);
/// ```
pub struct LambdaCompare<T> {
    function: ReferenceCounter<CompareFunction<T>>,
}

impl<T> LambdaCompare<T> {
    /// Wraps `function` in a new comparator identity.
    #[cfg(not(feature = "arc"))]
    #[must_use]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        Self {
            function: ReferenceCounter::new(function),
        }
    }

    /// Wraps `function` in a new comparator identity.
    #[cfg(feature = "arc")]
    #[must_use]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            function: ReferenceCounter::new(function),
        }
    }

    /// Returns a comparator for the opposite order.
    ///
    /// The result is a new identity: it is not equal to `self`, nor to any
    /// other reversed copy.
    #[must_use]
    pub fn reversed(&self) -> Self
    where
        T: 'static,
    {
        let inner = ReferenceCounter::clone(&self.function);
        Self::new(move |left: &T, right: &T| inner(right, left))
    }
}

impl<T> Compare<T> for LambdaCompare<T> {
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        (self.function)(left, right)
    }
}

impl<T> Clone for LambdaCompare<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
        }
    }
}

impl<T> PartialEq for LambdaCompare<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.function, &other.function)
    }
}

impl<T> Eq for LambdaCompare<T> {}

impl<T> fmt::Debug for LambdaCompare<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LambdaCompare")
            .field("handles", &ReferenceCounter::strong_count(&self.function))
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(DefaultCompare<std::rc::Rc<i32>>: Send, Sync, Copy);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(LambdaCompare<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(LambdaCompare<i32>: Send, Sync);
