//! # sorted-sequence
//!
//! A container adaptor that keeps a `Vec<T>` sorted under a pluggable
//! ordering relation, plus a small set of numeric conversion utilities.
//!
//! ## Overview
//!
//! - **Sorted sequence**: [`SortedSequence`](sequence::SortedSequence) keeps its
//!   elements sorted at all times, answers positional queries with binary
//!   search, and can swap its comparator in place while reporting where every
//!   tracked element moved.
//! - **Comparators**: natural ordering ([`DefaultCompare`](sequence::DefaultCompare))
//!   or arbitrary closures with identity equality
//!   ([`LambdaCompare`](sequence::LambdaCompare)).
//! - **Numeric utilities**: decimal parsing with explicit rounding direction,
//!   round-trip float formatting and integer range checks.
//!
//! ## Feature Flags
//!
//! - `sequence`: The sorted sequence adaptor (default)
//! - `numeric`: Numeric conversion utilities (default)
//! - `arc`: Use `Arc` instead of `Rc` for comparator handles (thread-safe)
//! - `serde`: Serialization support for `SortedSequence`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sorted_sequence::prelude::*;
//!
//! let mut sequence = SortedSequence::from_vec(vec![5, 3, 1, 4, 1]);
//! assert_eq!(sequence.as_slice(), &[1, 1, 3, 4, 5]);
//!
//! assert_eq!(sequence.insert(2, InsertMode::Last, None), 2);
//! assert_eq!(sequence.remove_all(&1), 2);
//! assert_eq!(sequence.index_of(&4), Some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sorted_sequence::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "numeric")]
    pub use crate::numeric::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "numeric")]
pub mod numeric;
