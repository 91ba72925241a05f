//! The imperative shell: real time, cancellation and cycle counting.
//!
//! The driver is the only part of the crate that waits. It asks the
//! controller for each phase, lets the environment display it, and then
//! holds through a [`Clock`] while watching for shutdown.

mod clock;
mod runner;
mod shutdown;

pub use clock::{Clock, InstantClock, TokioClock};
pub use runner::{CycleLimit, RunReport, Runner};
pub use shutdown::{Shutdown, ShutdownSignal};
