// ============================================================================
// Numeric Errors
// Error types for radix parsing and digit conversion
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why an operand string was rejected as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatIssue {
    /// The operand string was empty
    Empty,
    /// More than one radix point
    MultiplePoints,
    /// Only a radix point, no digits around it
    NoDigits,
}

/// Which digit failed to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DigitIssue {
    /// Character outside the alphabet or not legal in `base`
    Char { found: char, base: u32 },
    /// Digit value outside [0, 35]
    Value(u32),
}

/// Errors that can occur while turning strings into digit sequences and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Operand is not a well-formed number
    InvalidNumberFormat(FormatIssue),
    /// Character or digit value not legal for the declared base
    InvalidDigit(DigitIssue),
    /// Base outside [2, 36]
    InvalidBase(u32),
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatIssue::Empty => write!(f, "empty operand"),
            FormatIssue::MultiplePoints => write!(f, "more than one radix point"),
            FormatIssue::NoDigits => write!(f, "radix point without digits"),
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidNumberFormat(issue) => {
                write!(f, "invalid number format: {}", issue)
            },
            NumericError::InvalidDigit(DigitIssue::Char { found, base }) => {
                write!(f, "invalid digit: '{}' is not a base-{} digit", found, base)
            },
            NumericError::InvalidDigit(DigitIssue::Value(value)) => {
                write!(f, "invalid digit: value {} has no digit character", value)
            },
            NumericError::InvalidBase(base) => {
                write!(f, "invalid base: {} is outside 2..=36", base)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidNumberFormat(FormatIssue::MultiplePoints).to_string(),
            "invalid number format: more than one radix point"
        );
        assert_eq!(
            NumericError::InvalidDigit(DigitIssue::Char { found: '7', base: 6 }).to_string(),
            "invalid digit: '7' is not a base-6 digit"
        );
        assert_eq!(
            NumericError::InvalidDigit(DigitIssue::Value(36)).to_string(),
            "invalid digit: value 36 has no digit character"
        );
        assert_eq!(
            NumericError::InvalidBase(37).to_string(),
            "invalid base: 37 is outside 2..=36"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::InvalidBase(1), NumericError::InvalidBase(1));
        assert_ne!(
            NumericError::InvalidNumberFormat(FormatIssue::Empty),
            NumericError::InvalidNumberFormat(FormatIssue::NoDigits)
        );
    }
}
