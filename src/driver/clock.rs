//! Time sources for holding phases.

use std::future::{self, Future};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Something that can wait out a phase hold.
pub trait Clock: Send + Sync {
    fn hold(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Waits for real using the tokio timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn hold(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Returns immediately, remembering every hold it was asked for.
///
/// Used for dry runs and tests.
#[derive(Clone, Debug, Default)]
pub struct InstantClock {
    held: Arc<Mutex<Vec<Duration>>>,
}

impl InstantClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every hold requested so far, in order.
    pub fn held(&self) -> Vec<Duration> {
        self.held
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Sum of all requested holds.
    pub fn elapsed(&self) -> Duration {
        self.held().iter().sum()
    }
}

impl Clock for InstantClock {
    fn hold(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.held
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(duration);
        future::ready(())
    }
}
