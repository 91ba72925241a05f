//! Effectful phase announcement using Stillwater 0.11.0.
//!
//! This module provides the shell around the pure intersection: each phase
//! change is applied immediately and then reported to an observer
//! environment through an effect.
//!
//! # Key Concepts
//!
//! - **Observer**: The environment capability that receives light and phase changes
//! - **Controller**: Advances the intersection and tracks phase history
//! - **Effects**: Announcements are `impl Effect`, run against any `SignalEnv`

mod controller;
mod error;
mod observer;

pub use controller::{announce, SignalController, DEFAULT_HISTORY_WINDOW};
pub use error::SignalError;
pub use observer::{PhaseObserver, SignalEnv};
