// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod multiplication_algorithm;

pub use event_handler::{
    EventHandler, FastPath, LoggingEventHandler, MultiplicationEvent, NoOpEventHandler,
};
pub use multiplication_algorithm::MultiplicationAlgorithm;

pub(crate) use multiplication_algorithm::assert_digits_in_radix;
