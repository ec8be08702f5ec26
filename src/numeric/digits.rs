// ============================================================================
// Digit Sequence
// Owned little-endian digit buffer with an explicit logical length
// ============================================================================

use super::codec::Radix;
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Digits kept inline before the buffer spills to the heap.
///
/// Most sub-products near the bottom of the Karatsuba recursion fit here.
pub const INLINE_DIGITS: usize = 32;

/// Backing storage for a digit sequence, least-significant digit first.
pub type DigitBuf = SmallVec<[u8; INLINE_DIGITS]>;

/// A base-agnostic digit sequence, least-significant digit first.
///
/// The buffer may be longer than the logical length (arithmetic allocates
/// room for a final carry up front); positions at or beyond `len` are never
/// observed. The logical length is always at least 1 and zero is `[0]`.
///
/// # Example
/// ```
/// use radix_karatsuba::numeric::Digits;
///
/// let d = Digits::from_slice(&[3, 2, 1, 0, 0]); // 00123, trimmed
/// assert_eq!(d.as_slice(), &[3, 2, 1]);
/// assert_eq!(d.len(), 3);
/// ```
#[derive(Clone)]
pub struct Digits {
    buf: DigitBuf,
    len: usize,
}

impl Digits {
    /// The sequence `[0]`.
    #[inline]
    pub fn zero() -> Self {
        Self {
            buf: smallvec![0],
            len: 1,
        }
    }

    /// The sequence `[1]`.
    #[inline]
    pub fn one() -> Self {
        Self {
            buf: smallvec![1],
            len: 1,
        }
    }

    /// Take ownership of a buffer, trimming most-significant zeros.
    ///
    /// An empty buffer becomes zero.
    pub fn from_buf(mut buf: DigitBuf) -> Self {
        if buf.is_empty() {
            buf.push(0);
        }
        let len = significant_len(&buf);
        Self { buf, len }
    }

    /// Copy a little-endian digit slice, trimming most-significant zeros.
    pub fn from_slice(digits: &[u8]) -> Self {
        Self::from_buf(DigitBuf::from_slice(digits))
    }

    /// Number of significant digits (at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The significant digits, least-significant first.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Digit at `position`, or 0 past the logical end.
    #[inline]
    pub fn get(&self, position: usize) -> u8 {
        self.as_slice().get(position).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.len == 1 && self.buf[0] == 0
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.len == 1 && self.buf[0] == 1
    }

    /// Whether every digit is legal in `radix`.
    pub fn is_valid_for(&self, radix: Radix) -> bool {
        self.as_slice().iter().all(|&d| radix.admits(d))
    }

    /// Split into `(low, high)` so that `self = low + high * B^at`.
    ///
    /// `low` holds the `at` least-significant digits, re-trimmed. A sequence
    /// no longer than `at` splits as `(self, [0])`.
    pub fn split_at(&self, at: usize) -> (Self, Self) {
        if self.len <= at {
            return (self.clone(), Self::zero());
        }
        let (low, high) = self.as_slice().split_at(at);
        (Self::from_slice(low), Self::from_slice(high))
    }

    /// Digits most-significant first, the reading order.
    pub fn iter_most_significant_first(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_slice().iter().rev().copied()
    }
}

fn significant_len(buf: &[u8]) -> usize {
    buf.iter().rposition(|&d| d != 0).map_or(1, |top| top + 1)
}

impl Default for Digits {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Digits {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Digits {}

impl fmt::Debug for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digits(")?;
        for (i, d) in self.iter_most_significant_first().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_one() {
        assert!(Digits::zero().is_zero());
        assert_eq!(Digits::zero().len(), 1);
        assert!(Digits::one().is_one());
        assert!(!Digits::one().is_zero());
    }

    #[test]
    fn test_from_buf_trims_high_zeros() {
        let d = Digits::from_buf(smallvec![4, 0, 7, 0, 0]);
        assert_eq!(d.as_slice(), &[4, 0, 7]);
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn test_from_buf_all_zero() {
        let d = Digits::from_buf(smallvec![0, 0, 0]);
        assert!(d.is_zero());
        assert_eq!(d.len(), 1);

        let empty = Digits::from_buf(DigitBuf::new());
        assert!(empty.is_zero());
    }

    #[test]
    fn test_slack_does_not_affect_equality() {
        let with_slack = Digits::from_buf(smallvec![5, 1, 0, 0, 0, 0]);
        let tight = Digits::from_slice(&[5, 1]);
        assert_eq!(with_slack, tight);
        assert_eq!(format!("{:?}", with_slack), "Digits(1 5)");
    }

    #[test]
    fn test_get_past_end() {
        let d = Digits::from_slice(&[8, 7, 6, 5]);
        assert_eq!(d.get(0), 8);
        assert_eq!(d.get(3), 5);
        assert_eq!(d.get(6), 0);
    }

    #[test]
    fn test_split_at() {
        // 5678 -> low 78, high 56
        let d = Digits::from_slice(&[8, 7, 6, 5]);
        let (low, high) = d.split_at(2);
        assert_eq!(low.as_slice(), &[8, 7]);
        assert_eq!(high.as_slice(), &[6, 5]);
    }

    #[test]
    fn test_split_at_retrims_low_half() {
        // 1005 -> low 05 = 5, high 10
        let d = Digits::from_slice(&[5, 0, 0, 1]);
        let (low, high) = d.split_at(2);
        assert_eq!(low.as_slice(), &[5]);
        assert_eq!(high.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_split_at_short_operand() {
        let d = Digits::from_slice(&[3, 2]);
        let (low, high) = d.split_at(2);
        assert_eq!(low, d);
        assert!(high.is_zero());
    }

    #[test]
    fn test_is_valid_for() {
        let d = Digits::from_slice(&[1, 0, 1]);
        assert!(d.is_valid_for(Radix::BINARY));
        let hex = Digits::from_slice(&[15, 10]);
        assert!(!hex.is_valid_for(Radix::DECIMAL));
        assert!(hex.is_valid_for(Radix::HEXADECIMAL));
    }
}
