//! Error type for numeric conversions.

/// Why a numeric conversion failed.
///
/// # Examples
///
/// ```rust
/// use sorted_sequence::numeric::{ConversionError, RoundingMode, decimal_to_f64};
///
/// assert_eq!(decimal_to_f64("1e999", RoundingMode::NearestEven), Err(ConversionError::Range));
/// assert_eq!(decimal_to_f64("+1", RoundingMode::NearestEven), Err(ConversionError::Format));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// The value is not representable in the target type: it overflows, or a
    /// non-zero literal underflows to zero.
    Range,
    /// The input is not a well-formed literal.
    Format,
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range => write!(formatter, "value is out of range for the target type"),
            Self::Format => write!(formatter, "input is not a well-formed numeric literal"),
        }
    }
}

impl std::error::Error for ConversionError {}
