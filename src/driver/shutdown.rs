//! Cooperative cancellation for a running driver.

use tokio::sync::watch;

/// Trigger side. Dropping it without triggering never cancels.
#[derive(Debug)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

/// Listener side, checked between phases and raced against every hold.
#[derive(Clone, Debug)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> (Shutdown, ShutdownSignal) {
        let (tx, rx) = watch::channel(false);
        (Shutdown { tx }, ShutdownSignal { rx })
    }

    /// Request that the driver stop. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl ShutdownSignal {
    /// A signal that can never fire.
    pub fn never() -> Self {
        let (_, signal) = Shutdown::new();
        signal
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once shutdown is triggered; pend forever if it never can be.
    pub async fn cancelled(&mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn trigger_wakes_listener() {
        let (shutdown, mut signal) = Shutdown::new();
        assert!(!signal.is_cancelled());

        shutdown.trigger();

        signal.cancelled().await;
        assert!(signal.is_cancelled());
    }

    #[tokio::test]
    async fn dropped_trigger_never_cancels() {
        let mut signal = ShutdownSignal::never();

        let waited = tokio::time::timeout(Duration::from_millis(20), signal.cancelled()).await;

        assert!(waited.is_err());
        assert!(!signal.is_cancelled());
    }
}
