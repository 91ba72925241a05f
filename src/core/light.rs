//! A single named signal head.

use super::state::{LightState, State};
use std::fmt;

/// A named signal holding one [`LightState`].
///
/// A light performs no transition validation of its own: any state may
/// follow any other. Sequencing is the intersection's job.
///
/// # Example
///
/// ```rust
/// use stoplight::core::{Light, LightState};
///
/// let mut light = Light::named("North-South");
/// assert_eq!(light.current_state(), LightState::Red);
///
/// light.set_state(LightState::Green);
/// assert_eq!(light.describe(), "Light(North-South, State: GREEN)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Light {
    name: String,
    state: LightState,
}

impl Light {
    /// Create a light in the given initial state.
    pub fn new(name: impl Into<String>, initial: LightState) -> Self {
        Self {
            name: name.into(),
            state: initial,
        }
    }

    /// Create a light that starts red.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, LightState::default())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overwrite the current state.
    pub fn set_state(&mut self, state: LightState) {
        self.state = state;
        tracing::trace!(light = %self.name, state = state.name(), "{} Light is now: {}", self.name, state);
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> LightState {
        self.state
    }

    /// Human-readable snapshot of this light.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Light({}, State: {})", self.name, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_light_starts_red() {
        let light = Light::named("East-West");
        assert_eq!(light.name(), "East-West");
        assert_eq!(light.current_state(), LightState::Red);
    }

    #[test]
    fn new_light_uses_initial_state() {
        let light = Light::new("North-South", LightState::Green);
        assert_eq!(light.current_state(), LightState::Green);
    }

    #[test]
    fn set_state_accepts_any_successor() {
        let mut light = Light::named("A");

        // Red -> Yellow is not a real signal sequence, but Light does not care
        light.set_state(LightState::Yellow);
        assert_eq!(light.current_state(), LightState::Yellow);

        light.set_state(LightState::Green);
        light.set_state(LightState::Green);
        assert_eq!(light.current_state(), LightState::Green);
    }

    #[test]
    fn describe_is_pure() {
        let light = Light::new("North-South", LightState::Yellow);

        assert_eq!(light.describe(), "Light(North-South, State: YELLOW)");
        assert_eq!(light.describe(), light.describe());
        assert_eq!(light.current_state(), LightState::Yellow);
    }

    #[test]
    fn empty_name_is_allowed() {
        let light = Light::named("");
        assert_eq!(light.describe(), "Light(, State: RED)");
    }
}
