//! Errors raised while announcing phases.

use thiserror::Error;

/// Errors that can occur while running controller effects.
///
/// The phase table itself cannot fail; only the observer side can.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("Display sink failed: {0}")]
    Display(#[from] std::io::Error),
}
