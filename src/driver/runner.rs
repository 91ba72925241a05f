//! Runs an intersection for a number of cycles in real (or virtual) time.

use super::clock::Clock;
use super::shutdown::ShutdownSignal;
use crate::core::StateHistory;
use crate::effects::{SignalController, SignalEnv, SignalError};
use crate::intersection::{Intersection, Phase};
use stillwater::effect::Effect;

/// How many cycles to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleLimit {
    Bounded(u64),
    /// Until shutdown is triggered.
    Unbounded,
}

impl CycleLimit {
    fn allows(&self, cycle: u64) -> bool {
        match self {
            Self::Bounded(limit) => cycle <= *limit,
            Self::Unbounded => true,
        }
    }
}

/// Outcome of a run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Cycles whose four phases were all held to completion.
    pub cycles_completed: u64,
    /// Phases entered, including one abandoned by shutdown.
    pub phases_entered: u64,
    pub cancelled: bool,
    pub history: StateHistory<Phase>,
}

/// Owns the controller, the clock and the output environment.
pub struct Runner<C: Clock, Env: SignalEnv> {
    controller: SignalController,
    clock: C,
    env: Env,
}

impl<C: Clock, Env: SignalEnv> Runner<C, Env> {
    pub fn new(intersection: Intersection, clock: C, env: Env) -> Self {
        Self::with_controller(SignalController::new(intersection), clock, env)
    }

    pub fn with_controller(controller: SignalController, clock: C, env: Env) -> Self {
        Self {
            controller,
            clock,
            env,
        }
    }

    pub fn controller(&self) -> &SignalController {
        &self.controller
    }

    /// Run cycles until `limit` is reached or `shutdown` fires.
    ///
    /// Every cycle starts at phase 1, including the first cycle of a run
    /// that follows a cancelled one. Shutdown is checked before every phase
    /// and raced against every hold; a hold in progress is abandoned, not
    /// finished.
    pub async fn run(
        &mut self,
        limit: CycleLimit,
        mut shutdown: ShutdownSignal,
    ) -> Result<RunReport, SignalError> {
        let mut cycles_completed = 0;
        let mut phases_entered = 0;
        let mut cancelled = false;
        let mut cycle = 1;

        'cycles: while limit.allows(cycle) {
            if shutdown.is_cancelled() {
                cancelled = true;
                break;
            }

            self.env.cycle_started(cycle)?;
            tracing::info!(cycle, "cycle started");

            for phase in Phase::ALL {
                if shutdown.is_cancelled() {
                    cancelled = true;
                    break 'cycles;
                }

                let event = self.controller.enter::<Env>(phase).run(&self.env).await?;
                phases_entered += 1;

                tokio::select! {
                    biased;
                    _ = shutdown.cancelled() => {
                        tracing::info!(cycle, phase = event.index(), "hold abandoned");
                        cancelled = true;
                        break 'cycles;
                    }
                    _ = self.clock.hold(event.hold) => {}
                }
            }

            self.env.cycle_finished(cycle)?;
            cycles_completed += 1;
            cycle += 1;
        }

        tracing::info!(cycles_completed, phases_entered, cancelled, "run finished");

        Ok(RunReport {
            cycles_completed,
            phases_entered,
            cancelled,
            history: self.controller.history().clone(),
        })
    }
}
