// ============================================================================
// Event Handler Interface
// Defines the contract for observing multiplications
// ============================================================================

use crate::numeric::NumericError;
use chrono::{DateTime, Utc};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which short-circuit answered a multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FastPath {
    /// One operand was 1; the answer is the other operand
    Identity,
    /// One operand was 0; the answer is 0
    Absorbing,
}

/// Events emitted by the radix multiplier
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MultiplicationEvent {
    /// Both operands parsed
    OperandsParsed {
        base: u32,
        lhs_digits: usize,
        rhs_digits: usize,
        timestamp: DateTime<Utc>,
    },

    /// Answered without running the algorithm
    ShortCircuited {
        path: FastPath,
        timestamp: DateTime<Utc>,
    },

    /// Algorithm finished
    ProductComputed {
        algorithm: String,
        product_digits: usize,
        point_offset: usize,
        elapsed: Duration,
        timestamp: DateTime<Utc>,
    },

    /// Multiplication rejected with reason
    Rejected {
        reason: NumericError,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing multiplier events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a multiplication event
    fn on_event(&self, event: MultiplicationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<MultiplicationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: MultiplicationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: MultiplicationEvent) {
        match &event {
            MultiplicationEvent::Rejected { reason, .. } => {
                tracing::warn!(%reason, "multiplication rejected");
            }
            _ => tracing::debug!("Radix multiplier event: {:?}", event),
        }
    }
}
