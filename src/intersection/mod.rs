//! The intersection phase state machine.
//!
//! An [`Intersection`] owns two [`Light`]s and walks them through the fixed
//! four-phase table in [`Phase`]. Entering a phase is a pure state change
//! that returns a [`PhaseEvent`]; waiting out the hold is left to the
//! caller, so the whole cycle can be exercised without real time.

mod builder;
mod error;
mod phase;
mod timing;

pub use builder::{
    IntersectionBuilder, DEFAULT_AXIS_A, DEFAULT_AXIS_B, DEFAULT_GREEN_SECS, DEFAULT_YELLOW_SECS,
};
pub use error::{ConfigError, ConfigViolation};
pub use phase::{Axis, LightChange, Phase, PhaseEvent, Status};
pub use timing::Timing;

use crate::core::{Light, LightState};
use chrono::TimeDelta;
use std::fmt;

/// Two crossing axes under one controller.
///
/// The lights always start with axis A green and axis B red.
///
/// # Example
///
/// ```rust
/// use stoplight::core::LightState;
/// use stoplight::intersection::Intersection;
/// use chrono::TimeDelta;
///
/// let mut intersection = Intersection::new(
///     "North-South",
///     "East-West",
///     TimeDelta::seconds(10),
///     TimeDelta::seconds(3),
/// )
/// .unwrap();
///
/// let phases: Vec<_> = intersection
///     .run_cycle()
///     .iter()
///     .map(|e| (e.status().as_pair(), e.hold.as_secs()))
///     .collect();
///
/// assert_eq!(
///     phases,
///     vec![
///         ((LightState::Green, LightState::Red), 10),
///         ((LightState::Yellow, LightState::Red), 3),
///         ((LightState::Red, LightState::Green), 10),
///         ((LightState::Red, LightState::Yellow), 3),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Intersection {
    axis_a: Light,
    axis_b: Light,
    timing: Timing,
    position: Option<Phase>,
    cycle: u64,
}

impl Intersection {
    /// Create an intersection, rejecting non-positive durations.
    pub fn new(
        axis_a: impl Into<String>,
        axis_b: impl Into<String>,
        green: TimeDelta,
        yellow: TimeDelta,
    ) -> Result<Self, ConfigError> {
        let timing = Timing::new(green, yellow)?;
        Ok(Self::with_timing(axis_a, axis_b, timing))
    }

    /// Create an intersection from already validated timing.
    pub fn with_timing(axis_a: impl Into<String>, axis_b: impl Into<String>, timing: Timing) -> Self {
        Self {
            axis_a: Light::new(axis_a, LightState::Green),
            axis_b: Light::new(axis_b, LightState::Red),
            timing,
            position: None,
            cycle: 0,
        }
    }

    /// Enter the next phase.
    ///
    /// Both lights are set before this returns. After phase 4 the next call
    /// enters phase 1 of a new cycle.
    pub fn advance(&mut self) -> PhaseEvent {
        let phase = self.position.map_or_else(Phase::first, |p| p.next());
        self.enter(phase)
    }

    /// Run one full cycle, phases 1 through 4.
    ///
    /// A cycle always starts at phase 1; any partially stepped cycle is
    /// abandoned.
    pub fn run_cycle(&mut self) -> Vec<PhaseEvent> {
        let mut events = Vec::with_capacity(Phase::ALL.len());
        for phase in Phase::ALL {
            events.push(self.enter(phase));
        }
        events
    }

    /// Enter `phase` directly, regardless of the current position.
    ///
    /// Entering phase 1 starts a new cycle.
    pub fn enter(&mut self, phase: Phase) -> PhaseEvent {
        if phase == Phase::first() {
            self.cycle += 1;
        }

        // The axis losing right-of-way goes red before the other is released
        let signals = phase.signals();
        let (axis_a, axis_b) = match phase.right_of_way() {
            Axis::A => {
                let b = set(&mut self.axis_b, signals.axis_b);
                debug_assert!(self.status().is_safe());
                (set(&mut self.axis_a, signals.axis_a), b)
            }
            Axis::B => {
                let a = set(&mut self.axis_a, signals.axis_a);
                debug_assert!(self.status().is_safe());
                (a, set(&mut self.axis_b, signals.axis_b))
            }
        };
        self.position = Some(phase);

        debug_assert!(self.status().is_exclusive());

        PhaseEvent {
            cycle: self.cycle,
            phase,
            axis_a,
            axis_b,
            hold: phase.hold(&self.timing),
        }
    }

    /// Snapshot of both lights (pure).
    pub fn status(&self) -> Status {
        Status {
            axis_a: self.axis_a.current_state(),
            axis_b: self.axis_b.current_state(),
        }
    }

    /// The phase most recently entered, if any.
    pub fn phase(&self) -> Option<Phase> {
        self.position
    }

    /// The cycle the current phase belongs to; zero before the first phase.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn axis_a(&self) -> &Light {
        &self.axis_a
    }

    pub fn axis_b(&self) -> &Light {
        &self.axis_b
    }

    /// Human-readable status block.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

fn set(light: &mut Light, to: LightState) -> LightChange {
    let from = light.current_state();
    light.set_state(to);
    LightChange {
        light: light.name().to_string(),
        from,
        to,
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.axis_a)?;
        write!(f, "{}", self.axis_b)
    }
}
