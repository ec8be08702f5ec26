// ============================================================================
// Test Utilities
// Shared helpers and proptest strategies for unit tests
// ============================================================================

use crate::numeric::{digit_char, Digits, Radix};
use proptest::prelude::*;

/// Digits of `value` in `radix`.
pub fn digits_of(mut value: u128, radix: Radix) -> Digits {
    let base = radix.get() as u128;
    let mut digits = Vec::new();
    loop {
        digits.push((value % base) as u8);
        value /= base;
        if value == 0 {
            break;
        }
    }
    Digits::from_slice(&digits)
}

/// Numeric value of `digits` in `radix`. Only for sequences that fit a u128.
pub fn value_of(digits: &Digits, radix: Radix) -> u128 {
    digits
        .iter_most_significant_first()
        .fold(0u128, |acc, d| acc * radix.get() as u128 + d as u128)
}

/// Any supported radix.
pub fn any_radix() -> impl Strategy<Value = Radix> {
    (Radix::MIN..=Radix::MAX).prop_map(|base| Radix::new(base).unwrap())
}

/// Normalized digit sequences of 1..=max_len digits in `radix`.
pub fn any_digits(radix: Radix, max_len: usize) -> impl Strategy<Value = Digits> {
    prop::collection::vec(0..radix.get() as u8, 1..=max_len).prop_map(|v| Digits::from_slice(&v))
}

/// Well-formed operand text in `radix`: no redundant leading integer zeros,
/// no redundant trailing fractional zeros, at most one point.
pub fn any_operand_text(radix: Radix, max_len: usize) -> impl Strategy<Value = String> {
    let base = radix.get() as u8;
    (
        prop::collection::vec(0..base, 1..=max_len),
        prop::option::of(prop::collection::vec(0..base, 1..=max_len)),
    )
        .prop_map(move |(mut integer, fraction)| {
            while integer.len() > 1 && integer[0] == 0 {
                integer.remove(0);
            }
            let mut text: String = integer
                .iter()
                .map(|&d| digit_char(d as u32).unwrap())
                .collect();
            if let Some(mut fraction) = fraction {
                while fraction.last() == Some(&0) {
                    fraction.pop();
                }
                if !fraction.is_empty() {
                    text.push('.');
                    text.extend(fraction.iter().map(|&d| digit_char(d as u32).unwrap()));
                }
            }
            text
        })
}

/// A radix with two digit sequences of up to `max_len` digits in it.
pub fn any_digit_pair(max_len: usize) -> impl Strategy<Value = (Radix, Digits, Digits)> {
    any_radix().prop_flat_map(move |r| (Just(r), any_digits(r, max_len), any_digits(r, max_len)))
}

/// A radix with two operand strings of up to `max_len` digits per part.
pub fn any_operand_pair(max_len: usize) -> impl Strategy<Value = (Radix, String, String)> {
    any_radix().prop_flat_map(move |r| {
        (
            Just(r),
            any_operand_text(r, max_len),
            any_operand_text(r, max_len),
        )
    })
}
