// ============================================================================
// Domain Models Module
// Operands, products and multiplier configuration
// ============================================================================

pub mod config;
pub mod operand;
pub mod product;

pub use config::{AlgorithmType, MultiplierConfig, DEFAULT_CUTOFF, MIN_CUTOFF};
pub use operand::Operand;
pub use product::Product;
