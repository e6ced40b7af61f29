#![cfg(feature = "numeric")]
//! Property-based tests for the numeric utilities.
//!
//! Round-trip formatting must recover the exact bit pattern, and directed
//! rounding must bracket the round-to-nearest result.

use proptest::prelude::*;
use sorted_sequence::numeric::{
    Integer, NotationFormat, RoundingMode, decimal_to_f32, decimal_to_f64, f32_to_round_trip_string,
    f64_to_f32, f64_to_round_trip_string, is_in_range, parse_integer,
};

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<u64>()
        .prop_map(f64::from_bits)
        .prop_filter("finite", |value| value.is_finite())
}

fn finite_f32() -> impl Strategy<Value = f32> {
    any::<u32>()
        .prop_map(f32::from_bits)
        .prop_filter("finite", |value| value.is_finite())
}

fn arbitrary_format() -> impl Strategy<Value = NotationFormat> {
    prop_oneof![
        Just(NotationFormat::Simple),
        Just(NotationFormat::Scientific),
        Just(NotationFormat::Auto),
    ]
}

/// Decimal literals in the accepted grammar with an exponent from `exponents`.
fn decimal_literal(exponents: std::ops::Range<i32>) -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        1u64..1_000_000_000,
        prop::option::of(1u32..100_000),
        exponents,
    )
        .prop_map(|(negative, integer, fraction, exponent)| {
            let sign = if negative { "-" } else { "" };
            let fraction = fraction.map_or_else(String::new, |fraction| format!(".{fraction}"));
            format!("{sign}{integer}{fraction}e{exponent}")
        })
}

// =============================================================================
// Round-Trip Formatting Laws
// =============================================================================

proptest! {
    /// Law: formatting then parsing an f64 recovers the same bits.
    #[test]
    fn prop_f64_round_trip_bits(value in finite_f64(), format in arbitrary_format()) {
        let text = f64_to_round_trip_string(value, format);
        let parsed: f64 = text.parse().unwrap();
        prop_assert_eq!(parsed.to_bits(), value.to_bits(), "{}", text);
    }

    /// Law: formatting then parsing an f32 recovers the same bits.
    #[test]
    fn prop_f32_round_trip_bits(value in finite_f32(), format in arbitrary_format()) {
        let text = f32_to_round_trip_string(value, format);
        let parsed: f32 = text.parse().unwrap();
        prop_assert_eq!(parsed.to_bits(), value.to_bits(), "{}", text);
    }

    /// Law: scientific output never exceeds the round-trip digit count.
    #[test]
    fn prop_f32_scientific_digits_bounded(value in finite_f32()) {
        let text = f32_to_round_trip_string(value, NotationFormat::Scientific);
        let mantissa = text.split('e').next().unwrap_or_default();
        prop_assert!(mantissa.chars().filter(char::is_ascii_digit).count() <= 9);
    }
}

// =============================================================================
// Directed Rounding Laws
// =============================================================================

proptest! {
    /// Law: toward-negative <= nearest <= toward-positive, at most one ulp apart.
    #[test]
    fn prop_decimal_to_f64_brackets_nearest(text in decimal_literal(-300..290)) {
        let nearest = decimal_to_f64(&text, RoundingMode::NearestEven).unwrap();
        let down = decimal_to_f64(&text, RoundingMode::TowardNegative).unwrap();
        let up = decimal_to_f64(&text, RoundingMode::TowardPositive).unwrap();

        prop_assert!(down <= nearest && nearest <= up);
        prop_assert!(down == up || down.next_up() == up);
        prop_assert_eq!(nearest, text.parse::<f64>().unwrap());
    }

    /// Law: the f32 parse brackets the nearest result the same way.
    #[test]
    fn prop_decimal_to_f32_brackets_nearest(text in decimal_literal(-30..25)) {
        let nearest = decimal_to_f32(&text, RoundingMode::NearestEven).unwrap();
        let down = decimal_to_f32(&text, RoundingMode::TowardNegative).unwrap();
        let up = decimal_to_f32(&text, RoundingMode::TowardPositive).unwrap();

        prop_assert!(down <= nearest && nearest <= up);
        prop_assert!(down == up || down.next_up() == up);
    }

    /// Law: exactly representable literals are unaffected by the mode.
    #[test]
    fn prop_exact_literal_ignores_mode(value in any::<i32>()) {
        let text = value.to_string();
        let expected = f64::from(value);
        for mode in [RoundingMode::NearestEven, RoundingMode::TowardPositive, RoundingMode::TowardNegative] {
            prop_assert_eq!(decimal_to_f64(&text, mode).unwrap(), expected);
        }
    }

    /// Law: narrowing brackets the exact double.
    #[test]
    fn prop_f64_to_f32_brackets_value(value in -1e30f64..1e30) {
        let down = f64_to_f32(value, RoundingMode::TowardNegative).unwrap();
        let up = f64_to_f32(value, RoundingMode::TowardPositive).unwrap();
        let nearest = f64_to_f32(value, RoundingMode::NearestEven).unwrap();

        prop_assert!(f64::from(down) <= value && value <= f64::from(up));
        prop_assert!(nearest == down || nearest == up);
    }
}

// =============================================================================
// Integer Laws
// =============================================================================

proptest! {
    /// Law: every i64 parses as Signed and compares equal to itself as i128.
    #[test]
    fn prop_parse_signed(value: i64) {
        prop_assert_eq!(parse_integer(&value.to_string()), Some(Integer::Signed(value)));
    }

    /// Law: every u64 parses and equals its unsigned form.
    #[test]
    fn prop_parse_unsigned(value: u64) {
        prop_assert_eq!(parse_integer(&value.to_string()), Some(Integer::Unsigned(value)));
    }

    /// Law: range checks agree with i128 arithmetic.
    #[test]
    fn prop_is_in_range_matches_i128(min: i64, value: u64, max: u64) {
        let expected = i128::from(min) <= i128::from(value) && i128::from(value) <= i128::from(max);
        prop_assert_eq!(
            is_in_range(Some(Integer::Signed(min)), Integer::Unsigned(value), Some(Integer::Unsigned(max))),
            expected
        );
    }

    /// Law: no bounds accepts everything.
    #[test]
    fn prop_unbounded_range_accepts_all(value: i64) {
        prop_assert!(is_in_range(None, Integer::Signed(value), None));
    }
}
