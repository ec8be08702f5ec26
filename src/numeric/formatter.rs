// ============================================================================
// Formatter
// Renders a digit sequence with a radix point back to normalized text
// ============================================================================

use super::codec::digit_char;
use super::digits::Digits;
use super::errors::NumericResult;

/// Render `digits` with `point_offset` digits after the radix point.
///
/// The output is normalized:
/// - trailing fractional zeros are dropped, and the point with them when the
///   fraction becomes empty;
/// - leading integer zeros are dropped, keeping a single `0` before the point;
/// - zero is exactly `"0"`.
///
/// A point offset larger than the digit count pads with zeros after the point.
///
/// # Errors
/// Returns `InvalidDigit` if a digit value has no character (> 35).
///
/// # Example
/// ```
/// use radix_karatsuba::numeric::{format, Digits};
///
/// // 3 0 0 with two fractional digits is 3.00 -> "3"
/// assert_eq!(format(&Digits::from_slice(&[0, 0, 3]), 2).unwrap(), "3");
/// // 5 with three fractional digits is 0.005
/// assert_eq!(format(&Digits::from_slice(&[5]), 3).unwrap(), "0.005");
/// ```
pub fn format(digits: &Digits, point_offset: usize) -> NumericResult<String> {
    let slice = digits.as_slice();

    // First significant fractional position from the low end; positions below
    // it are trailing zeros of the fraction.
    let fraction_start = slice
        .iter()
        .take(point_offset)
        .position(|&d| d != 0)
        .unwrap_or(point_offset);

    // One past the highest non-zero integer digit.
    let integer_end = slice
        .iter()
        .rposition(|&d| d != 0)
        .map_or(point_offset, |top| (top + 1).max(point_offset));

    let mut out = String::with_capacity(slice.len() + 2);
    if integer_end == point_offset {
        out.push('0');
    } else {
        for position in (point_offset..integer_end).rev() {
            out.push(digit_char(digits.get(position) as u32)?);
        }
    }

    if fraction_start < point_offset {
        out.push('.');
        for position in (fraction_start..point_offset).rev() {
            out.push(digit_char(digits.get(position) as u32)?);
        }
    }

    Ok(out)
}
