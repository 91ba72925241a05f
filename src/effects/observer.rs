//! Observer capability required by the effect environment.

use crate::intersection::{LightChange, PhaseEvent};
use std::io;

/// Receives signal changes as the controller announces them.
///
/// Implementations own all presentation. Hooks return `io::Result` so a
/// broken output sink stops the run instead of being silently dropped.
pub trait PhaseObserver {
    /// A phase is being entered. Called before its light changes.
    fn phase_starting(&self, _event: &PhaseEvent) -> io::Result<()> {
        Ok(())
    }

    /// One light was set. Called for both lights on every phase, in the
    /// order they were set, before `phase_entered`.
    fn light_changed(&self, _change: &LightChange) -> io::Result<()> {
        Ok(())
    }

    /// A phase was entered; both lights already hold their new states.
    fn phase_entered(&self, event: &PhaseEvent) -> io::Result<()>;

    /// A cycle is about to start.
    fn cycle_started(&self, _cycle: u64) -> io::Result<()> {
        Ok(())
    }

    /// All four phases of a cycle were held to completion.
    fn cycle_finished(&self, _cycle: u64) -> io::Result<()> {
        Ok(())
    }
}

/// Environment bound for running controller effects.
pub trait SignalEnv: PhaseObserver + Clone + Send + Sync + 'static {}

impl<T> SignalEnv for T where T: PhaseObserver + Clone + Send + Sync + 'static {}
