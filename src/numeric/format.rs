//! Round-trip float formatting.

use super::NotationFormat;
use std::fmt;

/// Formats a finite float with the shortest digits that parse back to the same
/// bits. `max_digits` is the round-trip digit count of the type and sets the
/// exponent at which [`NotationFormat::Auto`] switches to scientific notation.
fn format_finite<F>(value: F, format: NotationFormat, max_digits: i32) -> String
where
    F: fmt::Display + fmt::LowerExp,
{
    match format {
        NotationFormat::Simple => value.to_string(),
        NotationFormat::Scientific => format!("{value:e}"),
        NotationFormat::Auto => {
            let scientific = format!("{value:e}");
            let exponent = scientific
                .rsplit_once('e')
                .and_then(|(_, exponent)| exponent.parse::<i32>().ok())
                .unwrap_or(0);
            if exponent < -4 || exponent >= max_digits {
                scientific
            } else {
                value.to_string()
            }
        }
    }
}

macro_rules! round_trip_string_functions {
    ($($float:ident => $max_digits:literal),*) => {
        paste::paste! {
            $(
                #[doc = concat!("Formats an `", stringify!($float), "` so that parsing the text yields the identical bit pattern.")]
                ///
                /// The shortest such digit string is used, which never exceeds
                #[doc = concat!(stringify!($max_digits), " significant digits. NaN is `NaN` and infinities are")]
                /// `Inf` and `-Inf`. Negative zero keeps its sign.
                ///
                /// # Examples
                ///
                /// ```rust
                #[doc = concat!("use sorted_sequence::numeric::{NotationFormat, ", stringify!($float), "_to_round_trip_string};")]
                ///
                #[doc = concat!("assert_eq!(", stringify!($float), "_to_round_trip_string(0.1, NotationFormat::Simple), \"0.1\");")]
                #[doc = concat!("assert_eq!(", stringify!($float), "_to_round_trip_string(0.1, NotationFormat::Scientific), \"1e-1\");")]
                #[doc = concat!("assert_eq!(", stringify!($float), "_to_round_trip_string(2.5e-7, NotationFormat::Auto), \"2.5e-7\");")]
                #[doc = concat!("assert_eq!(", stringify!($float), "_to_round_trip_string(", stringify!($float), "::NEG_INFINITY, NotationFormat::Auto), \"-Inf\");")]
                /// ```
                #[must_use]
                pub fn [<$float _to_round_trip_string>](value: $float, format: NotationFormat) -> String {
                    if value.is_nan() {
                        return "NaN".to_owned();
                    }
                    if value.is_infinite() {
                        let text = if value.is_sign_negative() { "-Inf" } else { "Inf" };
                        return text.to_owned();
                    }
                    format_finite(value, format, $max_digits)
                }
            )*
        }
    };
}

round_trip_string_functions!(f32 => 9, f64 => 17);
