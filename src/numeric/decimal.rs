//! Decimal literal parsing with directed rounding.
//!
//! The standard library parses to the nearest float. For the directed modes
//! the nearest result is compared against the exact value of the literal and
//! moved one step outward when it landed on the wrong side. The exact value of
//! a float is obtained from its full-precision scientific expansion, which the
//! standard formatter produces without rounding when enough digits are asked
//! for.

use super::{ConversionError, RoundingMode};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Enough fractional digits to expand any `f64` exactly (at most 767
/// significant digits).
const EXACT_PRECISION: usize = 800;

/// A decimal number normalized to `0.d1 d2 d3 ... * 10^exponent` with no
/// leading or trailing zero digits. Zero has no digits.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Decimal {
    negative: bool,
    digits: SmallVec<[u8; 32]>,
    exponent: i64,
}

impl Decimal {
    /// Parses `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
    fn parse(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        let mut cursor = 0;

        let negative = bytes.first() == Some(&b'-');
        if negative {
            cursor += 1;
        }

        let integer = take_digits(bytes, &mut cursor);
        if integer.is_empty() || (integer.len() > 1 && integer[0] == b'0') {
            return None;
        }

        let mut fraction: &[u8] = &[];
        if bytes.get(cursor) == Some(&b'.') {
            cursor += 1;
            fraction = take_digits(bytes, &mut cursor);
            if fraction.is_empty() {
                return None;
            }
        }

        let mut exponent: i64 = 0;
        if matches!(bytes.get(cursor), Some(b'e' | b'E')) {
            cursor += 1;
            let exponent_negative = match bytes.get(cursor) {
                Some(b'-') => {
                    cursor += 1;
                    true
                }
                Some(b'+') => {
                    cursor += 1;
                    false
                }
                _ => false,
            };
            let exponent_digits = take_digits(bytes, &mut cursor);
            if exponent_digits.is_empty() {
                return None;
            }
            exponent = exponent_digits.iter().fold(0_i64, |accumulator, digit| {
                accumulator
                    .saturating_mul(10)
                    .saturating_add(i64::from(digit - b'0'))
            });
            if exponent_negative {
                exponent = -exponent;
            }
        }

        if cursor != bytes.len() {
            return None;
        }

        let mut digits: SmallVec<[u8; 32]> = integer
            .iter()
            .chain(fraction)
            .map(|digit| digit - b'0')
            .collect();

        let leading_zeros = digits.iter().take_while(|&&digit| digit == 0).count();
        let trailing_zeros = digits.iter().rev().take_while(|&&digit| digit == 0).count();
        if leading_zeros == digits.len() {
            return Some(Self {
                negative,
                digits: SmallVec::new(),
                exponent: 0,
            });
        }
        digits.truncate(digits.len() - trailing_zeros);
        digits.drain(..leading_zeros);

        let point = i64::try_from(integer.len()).unwrap_or(i64::MAX)
            - i64::try_from(leading_zeros).unwrap_or(i64::MAX);

        Some(Self {
            negative,
            digits,
            exponent: exponent.saturating_add(point),
        })
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Compares absolute values.
    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self
                .exponent
                .cmp(&other.exponent)
                .then_with(|| self.digits.as_slice().cmp(other.digits.as_slice())),
        }
    }
}

fn take_digits<'a>(bytes: &'a [u8], cursor: &mut usize) -> &'a [u8] {
    let start = *cursor;
    while bytes.get(*cursor).is_some_and(u8::is_ascii_digit) {
        *cursor += 1;
    }
    &bytes[start..*cursor]
}

/// The operations directed rounding needs from a binary float type.
trait BinaryFloat: Copy + FromStr + fmt::LowerExp {
    fn is_infinite(self) -> bool;
    fn is_zero(self) -> bool;
    fn next_up(self) -> Self;
    fn next_down(self) -> Self;
}

macro_rules! impl_binary_float {
    ($($float:ty),*) => {
        $(
            impl BinaryFloat for $float {
                #[inline]
                fn is_infinite(self) -> bool {
                    <$float>::is_infinite(self)
                }

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0.0
                }

                #[inline]
                fn next_up(self) -> Self {
                    <$float>::next_up(self)
                }

                #[inline]
                fn next_down(self) -> Self {
                    <$float>::next_down(self)
                }
            }
        )*
    };
}

impl_binary_float!(f32, f64);

/// The exact decimal value of a finite float.
fn exact_value<F: BinaryFloat>(value: F) -> Option<Decimal> {
    Decimal::parse(&format!("{:.*e}", EXACT_PRECISION, value))
}

fn decimal_to_float<F: BinaryFloat>(text: &str, mode: RoundingMode) -> Result<F, ConversionError> {
    let literal = Decimal::parse(text).ok_or(ConversionError::Format)?;
    let nearest: F = text.parse().map_err(|_| ConversionError::Format)?;
    if nearest.is_infinite() {
        return Err(ConversionError::Range);
    }

    let rounded = match mode {
        RoundingMode::NearestEven => nearest,
        RoundingMode::TowardPositive | RoundingMode::TowardNegative => {
            let approximation = exact_value(nearest).ok_or(ConversionError::Format)?;
            let mut ordering = literal.cmp_magnitude(&approximation);
            if literal.negative {
                ordering = ordering.reverse();
            }
            match (mode, ordering) {
                (RoundingMode::TowardPositive, Ordering::Greater) => nearest.next_up(),
                (RoundingMode::TowardNegative, Ordering::Less) => nearest.next_down(),
                _ => nearest,
            }
        }
    };

    if rounded.is_infinite() || (rounded.is_zero() && !literal.is_zero()) {
        return Err(ConversionError::Range);
    }
    Ok(rounded)
}

macro_rules! decimal_to_float_functions {
    ($($float:ident),*) => {
        paste::paste! {
            $(
                #[doc = concat!("Parses a decimal literal into an `", stringify!($float), "`, rounding in the direction of `mode`.")]
                ///
                /// Only `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?` is
                /// accepted: no surrounding whitespace, no leading `+`, no
                /// `inf` or `nan`.
                ///
                /// # Errors
                ///
                /// - [`ConversionError::Format`] if `text` does not match the
                ///   literal grammar
                /// - [`ConversionError::Range`] if the value overflows, or if a
                ///   non-zero literal rounds to zero
                ///
                /// # Examples
                ///
                /// ```rust
                #[doc = concat!("use sorted_sequence::numeric::{RoundingMode, decimal_to_", stringify!($float), "};")]
                ///
                #[doc = concat!("let down = decimal_to_", stringify!($float), "(\"-2.5e-1\", RoundingMode::TowardNegative).unwrap();")]
                #[doc = concat!("let up = decimal_to_", stringify!($float), "(\"-2.5e-1\", RoundingMode::TowardPositive).unwrap();")]
                /// assert_eq!(down, -0.25);
                /// assert_eq!(up, -0.25);
                /// ```
                pub fn [<decimal_to_ $float>](text: &str, mode: RoundingMode) -> Result<$float, ConversionError> {
                    decimal_to_float(text, mode)
                }
            )*
        }
    };
}

decimal_to_float_functions!(f32, f64);

/// Narrows `value` to `f32`, rounding in the direction of `mode`.
///
/// NaN stays NaN and zeros keep their sign. Tiny values may round to zero or
/// to the smallest subnormal depending on `mode`.
///
/// # Errors
///
/// Returns [`ConversionError::Range`] if the magnitude of `value` exceeds
/// `(1 - 2^-24) * 2^128`, the largest finite `f32`. Infinite inputs are out
/// of range as well.
///
/// # Examples
///
/// ```rust
/// use sorted_sequence::numeric::{ConversionError, RoundingMode, f64_to_f32};
///
/// let down = f64_to_f32(0.1, RoundingMode::TowardNegative).unwrap();
/// let up = f64_to_f32(0.1, RoundingMode::TowardPositive).unwrap();
/// assert!(f64::from(down) < 0.1 && 0.1 < f64::from(up));
///
/// assert_eq!(f64_to_f32(1e39, RoundingMode::NearestEven), Err(ConversionError::Range));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_f32(value: f64, mode: RoundingMode) -> Result<f32, ConversionError> {
    let limit = f64::from(f32::MAX);
    if value > limit || value < -limit {
        return Err(ConversionError::Range);
    }

    let nearest = value as f32;
    let rounded = match mode {
        RoundingMode::NearestEven => nearest,
        RoundingMode::TowardPositive if f64::from(nearest) < value => nearest.next_up(),
        RoundingMode::TowardNegative if f64::from(nearest) > value => nearest.next_down(),
        RoundingMode::TowardPositive | RoundingMode::TowardNegative => nearest,
    };

    if rounded.is_infinite() {
        return Err(ConversionError::Range);
    }
    Ok(rounded)
}
