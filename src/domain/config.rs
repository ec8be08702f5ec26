// ============================================================================
// Multiplier Configuration
// Algorithm selection and tuning for the radix multiplier
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default schoolbook cutoff for Karatsuba.
///
/// Operands shorter than this are multiplied digit by digit.
pub const DEFAULT_CUTOFF: usize = 3;

/// Smallest usable cutoff. With 1, two single-digit operands would split at
/// zero digits and never reach the base case.
pub const MIN_CUTOFF: usize = 2;

// ============================================================================
// Algorithm Type
// ============================================================================

/// Defines the multiplication algorithm to run on the digit sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlgorithmType {
    /// Quadratic long multiplication
    /// Use case: reference results, very short operands
    Schoolbook,

    /// Karatsuba divide-and-conquer with a schoolbook base case
    Karatsuba {
        /// Operands shorter than this go to schoolbook
        cutoff: usize,
        /// Fork the high-half product onto a worker thread when both
        /// operands have at least this many digits. None disables forking.
        parallel_threshold: Option<usize>,
    },
}

impl Default for AlgorithmType {
    fn default() -> Self {
        AlgorithmType::Karatsuba {
            cutoff: DEFAULT_CUTOFF,
            parallel_threshold: None,
        }
    }
}

// ============================================================================
// Complete Multiplier Configuration
// ============================================================================

/// Configuration for creating a radix multiplier
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiplierConfig {
    /// Multiplication algorithm configuration
    pub algorithm: AlgorithmType,

    /// Short-circuit when either operand is exactly 0 or 1
    pub fast_paths: bool,
}

impl Default for MultiplierConfig {
    fn default() -> Self {
        Self::new(AlgorithmType::default())
    }
}

impl MultiplierConfig {
    /// Create a new configuration; fast paths are on
    pub fn new(algorithm: AlgorithmType) -> Self {
        Self {
            algorithm,
            fast_paths: true,
        }
    }

    /// Builder method: enable or disable the 0/1 fast paths
    pub fn with_fast_paths(mut self, enabled: bool) -> Self {
        self.fast_paths = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let AlgorithmType::Karatsuba {
            cutoff,
            parallel_threshold,
        } = self.algorithm
        {
            if cutoff < MIN_CUTOFF {
                return Err(format!("Karatsuba cutoff must be at least {}", MIN_CUTOFF));
            }
            if let Some(threshold) = parallel_threshold {
                if threshold < cutoff {
                    return Err("Parallel threshold cannot be below the cutoff".to_string());
                }
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MultiplierConfig {
    /// Reference configuration
    /// - Schoolbook only
    /// - No fast paths, every product goes through the full pipeline
    pub fn reference() -> Self {
        Self::new(AlgorithmType::Schoolbook).with_fast_paths(false)
    }

    /// Karatsuba with a custom cutoff, sequential
    pub fn karatsuba(cutoff: usize) -> Self {
        Self::new(AlgorithmType::Karatsuba {
            cutoff,
            parallel_threshold: None,
        })
    }

    /// Karatsuba with the default cutoff, forking above `threshold` digits
    pub fn parallel(threshold: usize) -> Self {
        Self::new(AlgorithmType::Karatsuba {
            cutoff: DEFAULT_CUTOFF,
            parallel_threshold: Some(threshold),
        })
    }
}
