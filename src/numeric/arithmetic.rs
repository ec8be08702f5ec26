// ============================================================================
// Digit Arithmetic
// Base-B long addition, subtraction and digit shifting
// ============================================================================
//
// All routines take digit sequences least-significant first and return a
// freshly owned sequence. Operands are never modified.

use super::codec::Radix;
use super::digits::{DigitBuf, Digits};
use smallvec::smallvec;

/// Long addition in base `radix`.
///
/// The result buffer has `max(len(a), len(b)) + 1` positions; its logical
/// length ends at the last non-zero digit or carry.
pub fn add(a: &Digits, b: &Digits, radix: Radix) -> Digits {
    let base = radix.get();
    let (long, short) = if a.len() >= b.len() {
        (a.as_slice(), b.as_slice())
    } else {
        (b.as_slice(), a.as_slice())
    };

    let mut buf: DigitBuf = smallvec![0; long.len() + 1];
    let mut carry = 0u32;
    for (i, &digit) in long.iter().enumerate() {
        let sum = digit as u32 + short.get(i).copied().unwrap_or(0) as u32 + carry;
        buf[i] = (sum % base) as u8;
        carry = sum / base;
    }
    buf[long.len()] = carry as u8;

    Digits::from_buf(buf)
}

/// Long subtraction `a - b` in base `radix`.
///
/// Most-significant zeros are trimmed from the result.
///
/// # Panics
/// Panics if `b > a`. Callers only subtract quantities that are
/// non-negative by construction, so a final borrow means the caller is broken.
pub fn sub(a: &Digits, b: &Digits, radix: Radix) -> Digits {
    let base = radix.get() as i32;
    let minuend = a.as_slice();
    let subtrahend = b.as_slice();

    let mut buf: DigitBuf = smallvec![0; minuend.len()];
    let mut borrow = 0i32;
    for (i, &digit) in minuend.iter().enumerate() {
        let mut difference =
            digit as i32 - subtrahend.get(i).copied().unwrap_or(0) as i32 - borrow;
        if difference < 0 {
            difference += base;
            borrow = 1;
        } else {
            borrow = 0;
        }
        buf[i] = difference as u8;
    }

    let excess = subtrahend.len() > minuend.len();
    assert!(
        borrow == 0 && !excess,
        "digit subtraction underflow: subtrahend {:?} exceeds minuend {:?}",
        b,
        a
    );

    Digits::from_buf(buf)
}

/// Multiply by `B^places`: prepend `places` zeros at the low end.
pub fn shift(a: &Digits, places: usize) -> Digits {
    if places == 0 || a.is_zero() {
        return a.clone();
    }

    let mut buf: DigitBuf = smallvec![0; places];
    buf.extend_from_slice(a.as_slice());
    Digits::from_buf(buf)
}
