// ============================================================================
// Multiplier Factory
// Creates radix multipliers with proper configuration
// ============================================================================

use crate::domain::config::{AlgorithmType, MultiplierConfig};
use crate::engine::{Karatsuba, RadixMultiplier, Schoolbook};
use crate::interfaces::{EventHandler, MultiplicationAlgorithm};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a radix multiplier from configuration
///
/// # Arguments
/// * `config` - Multiplier configuration
/// * `event_handler` - Event handler for multiplication events
///
/// # Returns
/// * `Result<RadixMultiplier, String>` - Configured multiplier or error
///
/// # Example
/// ```
/// use radix_karatsuba::prelude::*;
/// use std::sync::Arc;
///
/// let config = MultiplierConfig::karatsuba(8);
/// let multiplier = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(multiplier.multiply(2, "101", "110").unwrap(), "11110");
/// ```
pub fn create_from_config(
    config: MultiplierConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<RadixMultiplier, String> {
    // Validate configuration first
    config.validate()?;

    let algorithm = create_algorithm(&config.algorithm);

    Ok(RadixMultiplier::new(algorithm, event_handler).with_fast_paths(config.fast_paths))
}

/// Creates the multiplication algorithm from configuration
fn create_algorithm(algo_type: &AlgorithmType) -> Box<dyn MultiplicationAlgorithm> {
    match *algo_type {
        AlgorithmType::Schoolbook => Box::new(Schoolbook),

        AlgorithmType::Karatsuba {
            cutoff,
            parallel_threshold: None,
        } => Box::new(Karatsuba::new(cutoff)),

        AlgorithmType::Karatsuba {
            cutoff,
            parallel_threshold: Some(threshold),
        } => Box::new(Karatsuba::new(cutoff).with_parallel_threshold(threshold)),
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating radix multipliers with fluent API
///
/// # Example
/// ```
/// use radix_karatsuba::prelude::*;
/// use std::sync::Arc;
///
/// let multiplier = RadixMultiplierBuilder::new()
///     .karatsuba(4)
///     .parallel_threshold(1024)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(multiplier.multiply(36, "Z", "Z").unwrap(), "Y1");
/// ```
pub struct RadixMultiplierBuilder {
    config: MultiplierConfig,
}

impl RadixMultiplierBuilder {
    /// Start from the default configuration (sequential Karatsuba)
    pub fn new() -> Self {
        Self {
            config: MultiplierConfig::default(),
        }
    }

    // ========================================================================
    // Algorithm Configuration
    // ========================================================================

    /// Use schoolbook multiplication only
    pub fn schoolbook(mut self) -> Self {
        self.config.algorithm = AlgorithmType::Schoolbook;
        self
    }

    /// Use Karatsuba with the given cutoff, keeping any parallel threshold
    pub fn karatsuba(mut self, cutoff: usize) -> Self {
        let parallel_threshold = match self.config.algorithm {
            AlgorithmType::Karatsuba {
                parallel_threshold, ..
            } => parallel_threshold,
            AlgorithmType::Schoolbook => None,
        };
        self.config.algorithm = AlgorithmType::Karatsuba {
            cutoff,
            parallel_threshold,
        };
        self
    }

    /// Fork Karatsuba sub-products above `threshold` digits.
    /// Switches to Karatsuba with the default cutoff if schoolbook was set.
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        let cutoff = match self.config.algorithm {
            AlgorithmType::Karatsuba { cutoff, .. } => cutoff,
            AlgorithmType::Schoolbook => crate::domain::DEFAULT_CUTOFF,
        };
        self.config.algorithm = AlgorithmType::Karatsuba {
            cutoff,
            parallel_threshold: Some(threshold),
        };
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Enable or disable the 0/1 fast paths
    pub fn fast_paths(mut self, enabled: bool) -> Self {
        self.config.fast_paths = enabled;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply the reference (schoolbook, no fast paths) configuration
    pub fn reference_preset() -> Self {
        Self {
            config: MultiplierConfig::reference(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: MultiplierConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the radix multiplier
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<RadixMultiplier, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &MultiplierConfig {
        &self.config
    }
}

impl Default for RadixMultiplierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_CUTOFF;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_default_multiplier() {
        let multiplier =
            create_from_config(MultiplierConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(multiplier.algorithm_name(), "Karatsuba");
        assert!(multiplier.fast_paths_enabled());
    }

    #[test]
    fn test_create_reference_multiplier() {
        let multiplier =
            create_from_config(MultiplierConfig::reference(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(multiplier.algorithm_name(), "Schoolbook");
        assert!(!multiplier.fast_paths_enabled());
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let result = create_from_config(MultiplierConfig::karatsuba(1), Arc::new(NoOpEventHandler));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let builder = RadixMultiplierBuilder::new()
            .karatsuba(5)
            .parallel_threshold(100)
            .fast_paths(false);

        assert_eq!(
            builder.get_config().algorithm,
            AlgorithmType::Karatsuba {
                cutoff: 5,
                parallel_threshold: Some(100)
            }
        );

        let multiplier = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(multiplier.algorithm_name(), "Karatsuba (fork-join)");
        assert_eq!(multiplier.multiply(10, "12", "12").unwrap(), "144");
    }

    #[test]
    fn test_builder_parallel_from_schoolbook() {
        let builder = RadixMultiplierBuilder::new().schoolbook().parallel_threshold(64);
        assert_eq!(
            builder.get_config().algorithm,
            AlgorithmType::Karatsuba {
                cutoff: DEFAULT_CUTOFF,
                parallel_threshold: Some(64)
            }
        );
    }

    #[test]
    fn test_builder_rejects_threshold_below_cutoff() {
        let result = RadixMultiplierBuilder::new()
            .karatsuba(32)
            .parallel_threshold(8)
            .build(Arc::new(NoOpEventHandler));
        assert!(result.is_err());
    }

    #[test]
    fn test_preset_builders() {
        let reference = RadixMultiplierBuilder::reference_preset()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert_eq!(reference.multiply(16, "FF", "FF").unwrap(), "FE01");

        let from_config = RadixMultiplierBuilder::from_config(MultiplierConfig::parallel(512))
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert_eq!(from_config.multiply(36, "Z", "Z").unwrap(), "Y1");
    }
}
