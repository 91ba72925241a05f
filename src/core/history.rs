//! State transition history tracking.
//!
//! Provides immutable tracking of transitions over time. An optional
//! rolling window bounds memory for controllers that run indefinitely.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use stoplight::core::{LightState, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: LightState::Green,
///     to: LightState::Yellow,
///     timestamp: Utc::now(),
///     cycle: 1,
/// };
/// assert_eq!(transition.cycle, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// The 1-based cycle the target state belongs to
    pub cycle: u64,
}

/// Ordered history of state transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added. When a window is set, only the most recent
/// `window` transitions are retained.
///
/// # Example
///
/// ```rust
/// use stoplight::core::{LightState, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: LightState::Green,
///         to: LightState::Yellow,
///         timestamp: Utc::now(),
///         cycle: 1,
///     })
///     .record(StateTransition {
///         from: LightState::Yellow,
///         to: LightState::Red,
///         timestamp: Utc::now(),
///         cycle: 1,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&LightState::Green, &LightState::Yellow, &LightState::Red]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    window: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            window: None,
        }
    }

    /// Create an empty history that keeps at most `window` transitions.
    ///
    /// A window of zero keeps nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stoplight::core::{LightState, StateHistory, StateTransition};
    /// use chrono::Utc;
    ///
    /// let mut history = StateHistory::with_window(2);
    /// for cycle in 1..=5 {
    ///     history = history.record(StateTransition {
    ///         from: LightState::Red,
    ///         to: LightState::Green,
    ///         timestamp: Utc::now(),
    ///         cycle,
    ///     });
    /// }
    ///
    /// assert_eq!(history.transitions().len(), 2);
    /// assert_eq!(history.transitions()[0].cycle, 4);
    /// ```
    pub fn with_window(window: usize) -> Self {
        Self {
            transitions: Vec::new(),
            window: Some(window),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        if let Some(window) = self.window {
            let excess = transitions.len().saturating_sub(window);
            transitions.drain(..excess);
        }
        Self {
            transitions,
            window: self.window,
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// oldest retained transition, then the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last retained transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all retained transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn window(&self) -> Option<usize> {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LightState;

    fn transition(from: LightState, to: LightState, cycle: u64) -> StateTransition<LightState> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            cycle,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<LightState> = StateHistory::new();
        assert_eq!(history.transitions().len(), 0);
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.window().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();

        let new_history = history.record(transition(LightState::Green, LightState::Yellow, 1));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(LightState::Green, LightState::Yellow, 1))
            .record(transition(LightState::Yellow, LightState::Red, 1));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &LightState::Green);
        assert_eq!(path[1], &LightState::Yellow);
        assert_eq!(path[2], &LightState::Red);
    }

    #[test]
    fn window_drops_oldest_transitions() {
        let mut history = StateHistory::with_window(3);
        let sequence = [
            LightState::Green,
            LightState::Yellow,
            LightState::Red,
            LightState::Green,
            LightState::Yellow,
        ];

        for (cycle, pair) in sequence.windows(2).enumerate() {
            history = history.record(transition(pair[0], pair[1], cycle as u64 + 1));
        }

        assert_eq!(history.transitions().len(), 3);
        let path = history.get_path();
        assert_eq!(
            path,
            vec![
                &LightState::Yellow,
                &LightState::Red,
                &LightState::Green,
                &LightState::Yellow
            ]
        );
    }

    #[test]
    fn zero_window_keeps_nothing() {
        let history =
            StateHistory::with_window(0).record(transition(LightState::Red, LightState::Green, 1));
        assert!(history.transitions().is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: LightState::Green,
                to: LightState::Yellow,
                timestamp: start,
                cycle: 1,
            })
            .record(StateTransition {
                from: LightState::Yellow,
                to: LightState::Red,
                timestamp: start + chrono::Duration::seconds(3),
                cycle: 1,
            });

        assert_eq!(history.duration(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::with_window(8)
            .record(transition(LightState::Green, LightState::Yellow, 2));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<LightState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.transitions()[0].cycle, 2);
        assert_eq!(deserialized.window(), Some(8));
    }
}
