// ============================================================================
// Numeric Module
// Digit-level building blocks for radix-B multiplication
// ============================================================================
//
// This module provides:
// - Radix + digit codec: character <-> digit value for bases 2..=36
// - Digits: little-endian digit sequence with an explicit logical length
// - add / sub / shift: base-B long arithmetic on digit sequences
// - format: radix point reinsertion and normalization
// - NumericError: error types for parsing and conversion
//
// Design principles:
// - Digit values are u8, intermediate sums widen to u32
// - Every routine returns a fresh sequence; nothing is mutated in place
// - Recoverable failures return Result; broken internal invariants panic

mod arithmetic;
mod codec;
mod digits;
mod errors;
mod formatter;

pub use arithmetic::{add, shift, sub};
pub use codec::{digit_char, digit_value, Radix, MAX_DIGIT_VALUE};
pub use digits::{DigitBuf, Digits, INLINE_DIGITS};
pub use errors::{DigitIssue, FormatIssue, NumericError, NumericResult};
pub use formatter::format;
