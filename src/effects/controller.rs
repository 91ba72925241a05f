//! Controller that announces phase changes through effects.

use crate::core::{StateHistory, StateTransition};
use crate::effects::error::SignalError;
use crate::effects::observer::SignalEnv;
use crate::intersection::{Intersection, Phase, PhaseEvent};
use chrono::Utc;
use stillwater::effect::Effect;
use stillwater::prelude::*;

/// Transitions kept by default; a little over a hundred cycles.
pub const DEFAULT_HISTORY_WINDOW: usize = 512;

/// Drives an [`Intersection`] and records where it has been.
///
/// Advancing is split in two: the intersection changes state immediately
/// (pure), and the returned effect reports that change to the environment.
pub struct SignalController {
    intersection: Intersection,
    history: StateHistory<Phase>,
}

impl SignalController {
    /// Create a controller with the default history window.
    pub fn new(intersection: Intersection) -> Self {
        Self::with_history_window(intersection, DEFAULT_HISTORY_WINDOW)
    }

    /// Create a controller keeping at most `window` phase transitions.
    pub fn with_history_window(intersection: Intersection, window: usize) -> Self {
        Self {
            intersection,
            history: StateHistory::with_window(window),
        }
    }

    /// Get the intersection (pure)
    pub fn intersection(&self) -> &Intersection {
        &self.intersection
    }

    /// Get phase history (pure)
    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    /// Enter the next phase and return an effect announcing it.
    ///
    /// The lights are already set when this returns, whether or not the
    /// effect is ever run.
    pub fn advance<Env: SignalEnv>(
        &mut self,
    ) -> impl Effect<Output = PhaseEvent, Error = SignalError, Env = Env> {
        let from = self.intersection.phase();
        let event = self.intersection.advance();
        self.record(from, event)
    }

    /// Enter `phase` directly and return an effect announcing it.
    ///
    /// Entering [`Phase::first`] starts a fresh cycle wherever the
    /// intersection was left.
    pub fn enter<Env: SignalEnv>(
        &mut self,
        phase: Phase,
    ) -> impl Effect<Output = PhaseEvent, Error = SignalError, Env = Env> {
        let from = self.intersection.phase();
        let event = self.intersection.enter(phase);
        self.record(from, event)
    }

    fn record<Env: SignalEnv>(
        &mut self,
        from: Option<Phase>,
        event: PhaseEvent,
    ) -> impl Effect<Output = PhaseEvent, Error = SignalError, Env = Env> {
        if let Some(from) = from {
            self.history = self.history.record(StateTransition {
                from,
                to: event.phase,
                timestamp: Utc::now(),
                cycle: event.cycle,
            });
        }

        tracing::debug!(
            cycle = event.cycle,
            phase = event.index(),
            axis_a = %event.axis_a.to,
            axis_b = %event.axis_b.to,
            hold_ms = event.hold.as_millis() as u64,
            "phase entered"
        );

        announce(event)
    }
}

/// Report a phase to the environment: the phase starting, each light
/// change in the order it was applied, then the settled phase.
pub fn announce<Env: SignalEnv>(
    event: PhaseEvent,
) -> impl Effect<Output = PhaseEvent, Error = SignalError, Env = Env> {
    from_fn(move |env: &Env| -> Result<PhaseEvent, SignalError> {
        env.phase_starting(&event)?;
        for change in event.lights() {
            env.light_changed(change)?;
        }
        env.phase_entered(&event)?;
        Ok(event.clone())
    })
}
