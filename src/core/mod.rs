//! Core signal types.
//!
//! This module contains the leaf building blocks of the controller:
//! - State definitions via the `State` trait and `LightState`
//! - The `Light` signal head
//! - Immutable history tracking
//!
//! Nothing in this module waits on real time.

mod history;
mod light;
mod state;

pub use history::{StateHistory, StateTransition};
pub use light::Light;
pub use state::{LightState, State};
