//! Stoplight: a two-axis intersection signal controller
//!
//! Stoplight follows the "pure core, imperative shell" philosophy. The
//! intersection's phase table is a pure state machine that never waits;
//! announcing phases is an effect run against an observer environment, and
//! only the driver deals with real time.
//!
//! # Core Concepts
//!
//! - **Light**: A named signal head holding a `LightState`
//! - **Intersection**: Two lights walked through a fixed four-phase cycle
//! - **Controller**: Announces each phase through a Stillwater effect
//! - **Driver**: Holds each phase on a `Clock`, with cooperative shutdown
//!
//! # Example
//!
//! ```rust
//! use stoplight::core::LightState;
//! use stoplight::intersection::Intersection;
//! use chrono::TimeDelta;
//!
//! let mut intersection = Intersection::new(
//!     "North-South",
//!     "East-West",
//!     TimeDelta::seconds(10),
//!     TimeDelta::seconds(3),
//! )
//! .unwrap();
//!
//! for _ in 0..3 {
//!     let cycle = intersection.run_cycle();
//!     assert_eq!(cycle[0].status().as_pair(), (LightState::Green, LightState::Red));
//!     assert!(cycle.iter().all(|event| event.status().is_exclusive()));
//! }
//! ```

pub mod config;
pub mod core;
pub mod display;
pub mod driver;
pub mod effects;
pub mod intersection;

// Re-export commonly used types
pub use self::core::{Light, LightState, State};
pub use driver::{CycleLimit, Runner, Shutdown, ShutdownSignal};
pub use effects::{PhaseObserver, SignalController};
pub use intersection::{ConfigError, Intersection, IntersectionBuilder, Phase, PhaseEvent, Timing};
