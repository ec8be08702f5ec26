// ============================================================================
// Schoolbook Multiplication
// Quadratic long multiplication, the Karatsuba base case and test oracle
// ============================================================================

use crate::interfaces::{assert_digits_in_radix, MultiplicationAlgorithm};
use crate::numeric::{DigitBuf, Digits, Radix};
use smallvec::smallvec;

/// Long multiplication by hand, in base B
///
/// Every digit of `lhs` is multiplied against every digit of `rhs` and
/// accumulated into `result[i + j]`, carrying as it goes.
///
/// # Example
/// ```text
///        5 6 7 8
///      x 1 2 3 4
///      ---------
///      2 2 7 1 2      (5678 * 4)
///    1 7 0 3 4        (5678 * 3)
///  ...
///  = 7 0 0 6 6 5 2
/// ```
pub struct Schoolbook;

impl Schoolbook {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Schoolbook {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplicationAlgorithm for Schoolbook {
    fn multiply(&self, lhs: &Digits, rhs: &Digits, radix: Radix) -> Digits {
        assert_digits_in_radix(lhs, rhs, radix);
        schoolbook_mul(lhs, rhs, radix)
    }

    fn name(&self) -> &str {
        "Schoolbook"
    }
}

/// O(n·m) product of two digit sequences.
///
/// The product of an `n`-digit and an `m`-digit number has at most `n + m`
/// digits, and so does every partial sum on the way there, so the carry
/// never runs past the buffer.
pub(crate) fn schoolbook_mul(lhs: &Digits, rhs: &Digits, radix: Radix) -> Digits {
    if lhs.is_zero() || rhs.is_zero() {
        return Digits::zero();
    }

    let base = radix.get();
    let a = lhs.as_slice();
    let b = rhs.as_slice();
    let mut acc: DigitBuf = smallvec![0; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }

        let mut carry = 0u32;
        for (j, &y) in b.iter().enumerate() {
            let cell = acc[i + j] as u32 + x as u32 * y as u32 + carry;
            acc[i + j] = (cell % base) as u8;
            carry = cell / base;
        }

        let mut k = i + b.len();
        while carry > 0 {
            let cell = acc[k] as u32 + carry;
            acc[k] = (cell % base) as u8;
            carry = cell / base;
            k += 1;
        }
    }

    Digits::from_buf(acc)
}
