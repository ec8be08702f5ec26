// ============================================================================
// Product
// Result of multiplying two operands
// ============================================================================

use super::operand::Operand;
use crate::numeric::{format, Digits, NumericResult};

/// Raw product digits and the point offset they carry.
///
/// The offset is the sum of both operands' offsets: scaling each operand up to
/// an integer, multiplying, then scaling back down by `B^(a + b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    digits: Digits,
    point_offset: usize,
}

impl Product {
    pub fn new(digits: Digits, point_offset: usize) -> Self {
        Self {
            digits,
            point_offset,
        }
    }

    /// Combined point offset of `lhs * rhs`.
    #[inline]
    pub fn point_offset_of(lhs: &Operand, rhs: &Operand) -> usize {
        lhs.point_offset() + rhs.point_offset()
    }

    #[inline]
    pub fn digits(&self) -> &Digits {
        &self.digits
    }

    /// Offset before trailing-zero trimming.
    #[inline]
    pub fn point_offset(&self) -> usize {
        self.point_offset
    }

    /// Normalized text, see [`crate::numeric::format`].
    pub fn render(&self) -> NumericResult<String> {
        format(&self.digits, self.point_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Radix;

    #[test]
    fn test_point_offset_is_sum() {
        let a = Operand::parse("12.345", Radix::DECIMAL).unwrap();
        let b = Operand::parse("6.7", Radix::DECIMAL).unwrap();
        assert_eq!(Product::point_offset_of(&a, &b), 4);
    }

    #[test]
    fn test_render() {
        // 1.5 * 2 = 30 with offset 1
        let product = Product::new(Digits::from_slice(&[0, 3]), 1);
        assert_eq!(product.render().unwrap(), "3");
    }
}
