//! Numeric conversion utilities.
//!
//! Helpers for editing numbers as text without losing precision:
//!
//! - [`decimal_to_f64`] / [`decimal_to_f32`]: parse a strict decimal literal,
//!   rounding in an explicit [`RoundingMode`]
//! - [`f64_to_f32`]: narrow a double with directed rounding
//! - [`f64_to_round_trip_string`] / [`f32_to_round_trip_string`]: the shortest
//!   text that parses back to the identical bits
//! - [`Integer`], [`parse_integer`] and [`is_in_range`]: 64-bit integers of
//!   either signedness compared exactly
//!
//! # Examples
//!
//! ```rust
//! use sorted_sequence::numeric::{
//!     NotationFormat, RoundingMode, decimal_to_f32, f32_to_round_trip_string,
//! };
//!
//! let lower = decimal_to_f32("0.1", RoundingMode::TowardNegative).unwrap();
//! let upper = decimal_to_f32("0.1", RoundingMode::TowardPositive).unwrap();
//! assert!(lower < upper);
//! assert_eq!(upper.next_down(), lower);
//!
//! let text = f32_to_round_trip_string(upper, NotationFormat::Auto);
//! assert_eq!(text.parse::<f32>().unwrap().to_bits(), upper.to_bits());
//! ```

mod decimal;
mod error;
mod format;
mod integer;

pub use decimal::decimal_to_f32;
pub use decimal::decimal_to_f64;
pub use decimal::f64_to_f32;
pub use error::ConversionError;
pub use format::f32_to_round_trip_string;
pub use format::f64_to_round_trip_string;
pub use integer::Integer;
pub use integer::is_in_range;
pub use integer::parse_integer;

/// Direction in which an inexact conversion is rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// To the nearest representable value, ties to even.
    #[default]
    NearestEven,
    /// To the smallest representable value not below the exact one.
    TowardPositive,
    /// To the largest representable value not above the exact one.
    TowardNegative,
}

/// Layout of a formatted floating point number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotationFormat {
    /// Positional digits, no exponent (`0.00001`, `123456789`).
    Simple,
    /// One leading digit and an exponent (`1e-5`, `1.23456789e8`).
    Scientific,
    /// Scientific for very small or very large magnitudes, simple otherwise.
    #[default]
    Auto,
}
