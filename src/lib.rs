// ============================================================================
// Radix Karatsuba Library
// Exact multiplication of base-B digit strings with pluggable algorithms
// ============================================================================

//! # Radix Karatsuba
//!
//! Exact products of non-negative numbers written in any base from 2 to 36,
//! digits `0-9` then `A-Z`, each operand with at most one radix point.
//!
//! ## Features
//!
//! - **Karatsuba multiplication** with a schoolbook cutoff (default 3 digits)
//! - **Pluggable algorithms** behind the `MultiplicationAlgorithm` trait
//! - **Optional fork-join** of large sub-products on scoped threads
//! - **Event hooks** for logging or auditing every multiplication
//! - **Batch layer** for the multi-case text format used by `radix-mul`
//!
//! ## Example
//!
//! ```rust
//! use radix_karatsuba::prelude::*;
//! use std::sync::Arc;
//!
//! let multiplier = RadixMultiplierBuilder::new()
//!     .karatsuba(3)
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! assert_eq!(multiplier.multiply(16, "FF", "FF").unwrap(), "FE01");
//! assert_eq!(multiplier.multiply(10, "123.4", "5.67").unwrap(), "699.678");
//!
//! // Or with the default configuration
//! assert_eq!(radix_karatsuba::multiply(36, "Z", "Z").unwrap(), "Y1");
//! ```

pub mod batch;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

#[cfg(test)]
pub(crate) mod test_utils;

use engine::{Karatsuba, RadixMultiplier};
use interfaces::NoOpEventHandler;
use numeric::NumericResult;
use std::sync::Arc;

/// Multiply `lhs` by `rhs`, both written in `base`, with default settings
pub fn multiply(base: u32, lhs: &str, rhs: &str) -> NumericResult<String> {
    RadixMultiplier::new(Box::new(Karatsuba::default()), Arc::new(NoOpEventHandler))
        .multiply(base, lhs, rhs)
}

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{AlgorithmType, MultiplierConfig, Operand, Product, DEFAULT_CUTOFF};
    pub use crate::engine::{
        create_from_config, Karatsuba, RadixMultiplier, RadixMultiplierBuilder, Schoolbook,
    };
    pub use crate::interfaces::{
        EventHandler, FastPath, LoggingEventHandler, MultiplicationAlgorithm,
        MultiplicationEvent, NoOpEventHandler,
    };
    pub use crate::numeric::{Digits, NumericError, NumericResult, Radix};
}
