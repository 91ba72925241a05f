//! Signal state types.
//!
//! Every state the controller tracks implements [`State`], which provides
//! pure methods for inspecting a state without side effects. [`LightState`]
//! is the state of a single signal head.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for states tracked by the controller.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for phase logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for event output
///
/// # Example
///
/// ```rust
/// use stoplight::core::{LightState, State};
///
/// assert_eq!(LightState::Yellow.name(), "YELLOW");
/// assert!(!LightState::Green.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Signal states cycle forever, so the default is `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// State of a single signal head.
///
/// Carries no presentation; decorated labels belong to the display layer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LightState {
    #[default]
    Red,
    Yellow,
    Green,
}

impl LightState {
    /// All states in display order.
    pub const ALL: [LightState; 3] = [LightState::Red, LightState::Yellow, LightState::Green];

    /// Whether traffic on this axis may enter the intersection.
    ///
    /// Yellow still permits traffic: a vehicle already committed may clear.
    pub fn permits_traffic(&self) -> bool {
        matches!(self, Self::Green | Self::Yellow)
    }
}

impl State for LightState {
    fn name(&self) -> &str {
        match self {
            Self::Red => "RED",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
        }
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
