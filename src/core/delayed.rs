use crate::core::outcome::{Outcome, OutcomeCell};
use crate::domain::ports::Computation;
use crate::utils::error::{ComputeError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Squares its input after a fixed delay. Negative inputs fail after
/// the same delay; nothing is ever delivered synchronously.
#[derive(Debug, Clone)]
pub struct DelayedComputation {
    delay: Duration,
}

impl DelayedComputation {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Baseline contract: the delay always elapses, then exactly one
    /// outcome is delivered. Not cancellable.
    pub async fn run(&self, input: f64) -> Result<f64> {
        tokio::time::sleep(self.delay).await;
        square(input)
    }

    /// Runs the computation on a background task and returns a handle to
    /// it. Unlike [`run`](Self::run), the handle can cancel the
    /// computation while its timer is still pending.
    pub fn spawn(&self, input: f64) -> ComputationHandle {
        let cell = Arc::new(OutcomeCell::new());
        let (done_tx, done_rx) = oneshot::channel();
        let worker_cell = Arc::clone(&cell);
        let delay = self.delay;

        let worker = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // A concurrent cancel may have settled the cell first; the
            // cell arbitrates and the first settle stands.
            let _ = worker_cell.settle(Outcome::from(square(input)));
            let _ = done_tx.send(());
        });

        ComputationHandle {
            cell,
            done: done_rx,
            worker,
        }
    }
}

impl Default for DelayedComputation {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait::async_trait]
impl Computation for DelayedComputation {
    async fn compute(&self, input: f64) -> Result<f64> {
        self.run(input).await
    }
}

fn square(input: f64) -> Result<f64> {
    if input < 0.0 {
        return Err(ComputeError::NegativeInput { value: input });
    }
    Ok(input * input)
}

/// Handle to a spawned computation. Awaiting [`outcome`] consumes the
/// handle and yields the single terminal result.
pub struct ComputationHandle {
    cell: Arc<OutcomeCell>,
    done: oneshot::Receiver<()>,
    worker: JoinHandle<()>,
}

impl ComputationHandle {
    pub async fn outcome(self) -> Result<f64> {
        let ComputationHandle { cell, done, worker } = self;
        // A canceled worker drops its sender without signalling; the
        // cell still holds the terminal outcome in that case.
        let _ = done.await;
        let _ = worker.await;
        match cell.take() {
            Some(outcome) => outcome.into_result(),
            None => Err(ComputeError::Canceled),
        }
    }

    /// Attempts to cancel the computation. If the timer already settled
    /// the outcome, this is a no-op and the original outcome stands.
    pub fn cancel(&self) {
        if self
            .cell
            .settle(Outcome::Failure(ComputeError::Canceled))
            .is_ok()
        {
            self.worker.abort();
        }
    }

    pub fn is_settled(&self) -> bool {
        self.cell.is_settled()
    }
}
