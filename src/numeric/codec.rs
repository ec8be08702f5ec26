// ============================================================================
// Digit Codec
// Character <-> digit value mapping for bases 2 through 36
// ============================================================================

use super::errors::{DigitIssue, NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest digit value that has a character ('Z').
pub const MAX_DIGIT_VALUE: u32 = 35;

/// A validated radix base in [2, 36].
///
/// Both operands of one multiplication share the same `Radix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Radix(u8);

impl Radix {
    /// Smallest supported base
    pub const MIN: u32 = 2;

    /// Largest supported base (digits 0-9 then A-Z)
    pub const MAX: u32 = MAX_DIGIT_VALUE + 1;

    pub const BINARY: Self = Self(2);
    pub const DECIMAL: Self = Self(10);
    pub const HEXADECIMAL: Self = Self(16);

    /// Validate a base.
    ///
    /// # Errors
    /// Returns `InvalidBase` if `base` is outside [2, 36].
    #[inline]
    pub fn new(base: u32) -> NumericResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&base) {
            Ok(Self(base as u8))
        } else {
            Err(NumericError::InvalidBase(base))
        }
    }

    /// The base as a plain integer.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// Whether `digit` is a legal digit value in this base.
    #[inline]
    pub const fn admits(self, digit: u8) -> bool {
        digit < self.0
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Map a character to its digit value in `radix`.
///
/// '0'-'9' map to 0-9 and 'A'-'Z' map to 10-35. Lowercase letters are not
/// part of the alphabet.
///
/// # Errors
/// Returns `InvalidDigit` if the character has no value or the value is not
/// below the base.
#[inline]
pub fn digit_value(c: char, radix: Radix) -> NumericResult<u8> {
    let value = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => c as u32 - 'A' as u32 + 10,
        _ => u32::MAX,
    };

    if value < radix.get() {
        Ok(value as u8)
    } else {
        Err(NumericError::InvalidDigit(DigitIssue::Char {
            found: c,
            base: radix.get(),
        }))
    }
}

/// Map a digit value back to its character.
///
/// # Errors
/// Returns `InvalidDigit` if `value` is above 35.
#[inline]
pub fn digit_char(value: u32) -> NumericResult<char> {
    match value {
        0..=9 => Ok((b'0' + value as u8) as char),
        10..=MAX_DIGIT_VALUE => Ok((b'A' + (value - 10) as u8) as char),
        _ => Err(NumericError::InvalidDigit(DigitIssue::Value(value))),
    }
}
