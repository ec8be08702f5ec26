// ============================================================================
// Operand
// A parsed fixed-point number: digit sequence plus radix point offset
// ============================================================================

use crate::numeric::{
    digit_value, format, DigitBuf, Digits, FormatIssue, NumericError, NumericResult, Radix,
};

/// One multiplication operand.
///
/// The value is `digits / B^point_offset`, where `point_offset` counts the
/// digits written after the radix point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    digits: Digits,
    point_offset: usize,
}

impl Operand {
    /// Build an operand from parts.
    pub fn new(digits: Digits, point_offset: usize) -> Self {
        Self {
            digits,
            point_offset,
        }
    }

    /// Parse a base-`radix` number such as `"1A.F"`.
    ///
    /// Leading integer zeros are dropped from the digit sequence. Trailing
    /// fractional zeros are kept; they only move the point.
    ///
    /// # Errors
    /// - `InvalidNumberFormat` for an empty string, more than one point, or a
    ///   lone point
    /// - `InvalidDigit` for any character that is not a digit of `radix`
    ///
    /// # Example
    /// ```
    /// use radix_karatsuba::domain::Operand;
    /// use radix_karatsuba::numeric::Radix;
    ///
    /// let x = Operand::parse("12.34", Radix::DECIMAL).unwrap();
    /// assert_eq!(x.digits().as_slice(), &[4, 3, 2, 1]);
    /// assert_eq!(x.point_offset(), 2);
    /// ```
    pub fn parse(s: &str, radix: Radix) -> NumericResult<Self> {
        if s.is_empty() {
            return Err(NumericError::InvalidNumberFormat(FormatIssue::Empty));
        }

        let mut buf = DigitBuf::with_capacity(s.len());
        let mut digits_before_point = None;
        for c in s.chars() {
            if c == '.' {
                if digits_before_point.is_some() {
                    return Err(NumericError::InvalidNumberFormat(
                        FormatIssue::MultiplePoints,
                    ));
                }
                digits_before_point = Some(buf.len());
                continue;
            }
            buf.push(digit_value(c, radix)?);
        }

        if buf.is_empty() {
            return Err(NumericError::InvalidNumberFormat(FormatIssue::NoDigits));
        }

        let point_offset = digits_before_point.map_or(0, |before| buf.len() - before);
        buf.reverse();

        Ok(Self {
            digits: Digits::from_buf(buf),
            point_offset,
        })
    }

    #[inline]
    pub fn digits(&self) -> &Digits {
        &self.digits
    }

    /// Digits after the radix point in the written form.
    #[inline]
    pub fn point_offset(&self) -> usize {
        self.point_offset
    }

    /// Numerically zero, whatever the point offset.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// Exactly the single digit 1 with no point.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.digits.is_one() && self.point_offset == 0
    }

    /// Normalized text of this operand.
    pub fn to_canonical_string(&self) -> NumericResult<String> {
        format(&self.digits, self.point_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::DigitIssue;

    #[test]
    fn test_parse_integer() {
        let x = Operand::parse("5678", Radix::DECIMAL).unwrap();
        assert_eq!(x.digits().as_slice(), &[8, 7, 6, 5]);
        assert_eq!(x.point_offset(), 0);
    }

    #[test]
    fn test_parse_fraction() {
        let x = Operand::parse("1.5", Radix::DECIMAL).unwrap();
        assert_eq!(x.digits().as_slice(), &[5, 1]);
        assert_eq!(x.point_offset(), 1);
    }

    #[test]
    fn test_parse_offset_counts_fraction_digits_only() {
        // Integer part length must not leak into the offset
        let x = Operand::parse("12345.6", Radix::DECIMAL).unwrap();
        assert_eq!(x.point_offset(), 1);
        let y = Operand::parse("1.23456", Radix::DECIMAL).unwrap();
        assert_eq!(y.point_offset(), 5);
    }

    #[test]
    fn test_parse_pure_fraction() {
        let x = Operand::parse("0.05", Radix::DECIMAL).unwrap();
        assert_eq!(x.digits().as_slice(), &[5]);
        assert_eq!(x.point_offset(), 2);
        assert_eq!(x.to_canonical_string().unwrap(), "0.05");

        let bare = Operand::parse(".5", Radix::DECIMAL).unwrap();
        assert_eq!(bare.digits().as_slice(), &[5]);
        assert_eq!(bare.point_offset(), 1);
    }

    #[test]
    fn test_parse_trailing_point() {
        let x = Operand::parse("7.", Radix::DECIMAL).unwrap();
        assert_eq!(x.digits().as_slice(), &[7]);
        assert_eq!(x.point_offset(), 0);
    }

    #[test]
    fn test_parse_base_36() {
        let x = Operand::parse("Z.Y", Radix::new(36).unwrap()).unwrap();
        assert_eq!(x.digits().as_slice(), &[34, 35]);
        assert_eq!(x.point_offset(), 1);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            Operand::parse("", Radix::DECIMAL),
            Err(NumericError::InvalidNumberFormat(FormatIssue::Empty))
        );
    }

    #[test]
    fn test_parse_multiple_points() {
        assert_eq!(
            Operand::parse("1.2.3", Radix::DECIMAL),
            Err(NumericError::InvalidNumberFormat(FormatIssue::MultiplePoints))
        );
    }

    #[test]
    fn test_parse_lone_point() {
        assert_eq!(
            Operand::parse(".", Radix::DECIMAL),
            Err(NumericError::InvalidNumberFormat(FormatIssue::NoDigits))
        );
    }

    #[test]
    fn test_parse_invalid_digit() {
        assert_eq!(
            Operand::parse("102", Radix::BINARY),
            Err(NumericError::InvalidDigit(DigitIssue::Char {
                found: '2',
                base: 2
            }))
        );
        assert!(Operand::parse("ff", Radix::HEXADECIMAL).is_err());
        assert!(Operand::parse("-1", Radix::DECIMAL).is_err());
        assert!(Operand::parse(" 1", Radix::DECIMAL).is_err());
    }

    #[test]
    fn test_identity_and_zero() {
        assert!(Operand::parse("1", Radix::DECIMAL).unwrap().is_one());
        assert!(!Operand::parse("0.1", Radix::DECIMAL).unwrap().is_one());
        assert!(!Operand::parse("1.0", Radix::DECIMAL).unwrap().is_one());
        assert!(Operand::parse("0", Radix::DECIMAL).unwrap().is_zero());
        assert!(Operand::parse("0.00", Radix::DECIMAL).unwrap().is_zero());
    }

    #[test]
    fn test_new_matches_parse() {
        let built = Operand::new(Digits::from_slice(&[5, 2, 1]), 2);
        assert_eq!(built, Operand::parse("1.25", Radix::DECIMAL).unwrap());
        assert_eq!(built.to_canonical_string().unwrap(), "1.25");
    }

    #[test]
    fn test_canonical_string_strips_redundant_zeros() {
        let x = Operand::parse("007.500", Radix::DECIMAL).unwrap();
        assert_eq!(x.to_canonical_string().unwrap(), "7.5");
    }
}
