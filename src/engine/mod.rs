// ============================================================================
// Engine Module
// Multiplication algorithms and the radix multiplier built on them
// ============================================================================

mod karatsuba;
mod radix_multiplier;
mod schoolbook;

pub mod factory;

pub use factory::{create_from_config, RadixMultiplierBuilder};
pub use karatsuba::Karatsuba;
pub use radix_multiplier::RadixMultiplier;
pub use schoolbook::Schoolbook;
