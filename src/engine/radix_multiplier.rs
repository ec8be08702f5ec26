// ============================================================================
// Radix Multiplier
// Parses operands, runs the configured algorithm, renders the product
// ============================================================================

use crate::domain::{Operand, Product};
use crate::interfaces::{EventHandler, FastPath, MultiplicationAlgorithm, MultiplicationEvent};
use crate::numeric::{NumericResult, Radix};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

/// Multiplies base-B number strings with a pluggable algorithm
///
/// Holds no per-call state, so one instance can be shared across threads.
pub struct RadixMultiplier {
    /// Pluggable multiplication algorithm
    algorithm: Box<dyn MultiplicationAlgorithm>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    /// Answer `x * 0` and `x * 1` without running the algorithm
    fast_paths: bool,
}

impl RadixMultiplier {
    /// Create a new multiplier with fast paths enabled
    pub fn new(
        algorithm: Box<dyn MultiplicationAlgorithm>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            algorithm,
            event_handler,
            fast_paths: true,
        }
    }

    /// Enable or disable the 0/1 short-circuits
    pub fn with_fast_paths(mut self, enabled: bool) -> Self {
        self.fast_paths = enabled;
        self
    }

    /// Multiply two numbers written in `base`
    ///
    /// # Errors
    /// - `InvalidBase` if `base` is outside [2, 36]
    /// - `InvalidNumberFormat` / `InvalidDigit` if an operand does not parse
    ///
    /// # Example
    /// ```
    /// use radix_karatsuba::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let multiplier = RadixMultiplier::new(
    ///     Box::new(Karatsuba::default()),
    ///     Arc::new(NoOpEventHandler),
    /// );
    /// assert_eq!(multiplier.multiply(16, "FF", "FF").unwrap(), "FE01");
    /// assert_eq!(multiplier.multiply(10, "1.5", "2").unwrap(), "3");
    /// ```
    pub fn multiply(&self, base: u32, lhs: &str, rhs: &str) -> NumericResult<String> {
        let mut events = Vec::new();
        let result = self.evaluate(base, lhs, rhs, &mut events);

        if let Err(reason) = &result {
            events.push(MultiplicationEvent::Rejected {
                reason: *reason,
                timestamp: Utc::now(),
            });
        }

        self.event_handler.on_events(events);
        result
    }

    /// Multiply parsed operands; the point offset is the sum of both offsets
    pub fn multiply_operands(&self, lhs: &Operand, rhs: &Operand, radix: Radix) -> Product {
        let digits = self.algorithm.multiply(lhs.digits(), rhs.digits(), radix);
        Product::new(digits, Product::point_offset_of(lhs, rhs))
    }

    /// Get the algorithm name
    pub fn algorithm_name(&self) -> &str {
        self.algorithm.name()
    }

    pub fn fast_paths_enabled(&self) -> bool {
        self.fast_paths
    }

    // ========================================================================
    // Private Helper Methods
    // ========================================================================

    fn evaluate(
        &self,
        base: u32,
        lhs: &str,
        rhs: &str,
        events: &mut Vec<MultiplicationEvent>,
    ) -> NumericResult<String> {
        let radix = Radix::new(base)?;
        let lhs = Operand::parse(lhs, radix)?;
        let rhs = Operand::parse(rhs, radix)?;

        events.push(MultiplicationEvent::OperandsParsed {
            base,
            lhs_digits: lhs.digits().len(),
            rhs_digits: rhs.digits().len(),
            timestamp: Utc::now(),
        });

        if self.fast_paths {
            if let Some((path, text)) = Self::short_circuit(&lhs, &rhs)? {
                events.push(MultiplicationEvent::ShortCircuited {
                    path,
                    timestamp: Utc::now(),
                });
                return Ok(text);
            }
        }

        let started = Instant::now();
        let product = self.multiply_operands(&lhs, &rhs, radix);
        let elapsed = started.elapsed();

        tracing::debug!(
            algorithm = self.algorithm.name(),
            product_digits = product.digits().len(),
            elapsed_us = elapsed.as_micros() as u64,
            "product computed"
        );

        events.push(MultiplicationEvent::ProductComputed {
            algorithm: self.algorithm.name().to_string(),
            product_digits: product.digits().len(),
            point_offset: product.point_offset(),
            elapsed,
            timestamp: Utc::now(),
        });

        product.render()
    }

    fn short_circuit(lhs: &Operand, rhs: &Operand) -> NumericResult<Option<(FastPath, String)>> {
        if lhs.is_zero() || rhs.is_zero() {
            return Ok(Some((FastPath::Absorbing, "0".to_string())));
        }

        let other = if lhs.is_one() {
            rhs
        } else if rhs.is_one() {
            lhs
        } else {
            return Ok(None);
        };

        other
            .to_canonical_string()
            .map(|text| Some((FastPath::Identity, text)))
    }
}
