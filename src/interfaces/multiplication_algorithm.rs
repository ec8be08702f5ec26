// ============================================================================
// Multiplication Algorithm Interface
// Defines the contract for pluggable digit-sequence multipliers
// ============================================================================

use crate::numeric::{Digits, Radix};

/// Strategy pattern interface for multiplication algorithms
/// Implementations: Schoolbook, Karatsuba
pub trait MultiplicationAlgorithm: Send + Sync {
    /// Multiply two digit sequences in base `radix`
    ///
    /// # Arguments
    /// * `lhs`, `rhs` - Integer digit sequences, radix point already stripped
    /// * `radix` - Base shared by both operands
    ///
    /// # Returns
    /// Product digits trimmed to minimal length (at least 1)
    ///
    /// # Panics
    /// Implementations panic if a digit is not legal in `radix`. Parsing
    /// guarantees legal digits, so this only fires on a caller bug.
    fn multiply(&self, lhs: &Digits, rhs: &Digits, radix: Radix) -> Digits;

    /// Get the algorithm name for logging
    fn name(&self) -> &str;
}

/// Abort on digits that the algorithm cannot have received from a parser.
#[inline]
pub(crate) fn assert_digits_in_radix(lhs: &Digits, rhs: &Digits, radix: Radix) {
    assert!(
        lhs.is_valid_for(radix) && rhs.is_valid_for(radix),
        "digit sequence contains a value outside base {}",
        radix
    );
}
