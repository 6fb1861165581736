use crate::core::outcome::Outcome;
use crate::domain::ports::Computation;
use crate::utils::error::Result;
use crate::utils::monitor::ResourceMonitor;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;

/// One batch entry: the input it was computed from, its terminal
/// outcome, and how long that invocation took to settle.
#[derive(Debug)]
pub struct BatchOutcome {
    pub input: f64,
    pub outcome: Outcome,
    pub duration: Duration,
}

pub struct ComputeEngine<C: Computation + Clone + 'static> {
    computation: C,
    monitor: ResourceMonitor,
}

impl<C: Computation + Clone + 'static> ComputeEngine<C> {
    pub fn new(computation: C) -> Self {
        Self {
            computation,
            monitor: ResourceMonitor::default(),
        }
    }

    pub fn new_with_monitoring(computation: C, monitor_enabled: bool) -> Self {
        Self {
            computation,
            monitor: ResourceMonitor::new(monitor_enabled),
        }
    }

    /// Runs every input as its own task. Entries come back in input
    /// order; a failed input produces a failure entry instead of
    /// aborting the batch.
    pub async fn run(&self, inputs: &[f64]) -> Result<Vec<BatchOutcome>> {
        tracing::info!(count = inputs.len(), "starting compute batch");
        self.monitor.log_sample("batch start");

        let mut tasks = JoinSet::new();
        for (index, &input) in inputs.iter().enumerate() {
            let computation = self.computation.clone();
            tasks.spawn(async move {
                let started = Instant::now();
                let result = computation.compute(input).await;
                (index, input, result, started.elapsed())
            });
        }

        let mut entries: Vec<Option<BatchOutcome>> = Vec::new();
        entries.resize_with(inputs.len(), || None);

        while let Some(joined) = tasks.join_next().await {
            let (index, input, result, duration) = joined?;
            match &result {
                Ok(value) => tracing::debug!(input, value = *value, "input settled"),
                Err(err) => tracing::debug!(input, error = %err, "input settled"),
            }
            entries[index] = Some(BatchOutcome {
                input,
                outcome: Outcome::from(result),
                duration,
            });
        }

        self.monitor.log_sample("batch done");
        self.monitor.log_final();

        Ok(entries.into_iter().flatten().collect())
    }
}

/// Aggregate view of a finished batch for operator-facing output.
pub fn execution_summary(entries: &[BatchOutcome]) -> HashMap<String, serde_json::Value> {
    let succeeded = entries.iter().filter(|e| e.outcome.is_success()).count();
    let total_duration_ms: u64 = entries
        .iter()
        .map(|e| e.duration.as_millis() as u64)
        .sum();

    let mut summary = HashMap::new();
    summary.insert(
        "total_inputs".to_string(),
        serde_json::Value::Number((entries.len() as u64).into()),
    );
    summary.insert(
        "succeeded".to_string(),
        serde_json::Value::Number((succeeded as u64).into()),
    );
    summary.insert(
        "failed".to_string(),
        serde_json::Value::Number(((entries.len() - succeeded) as u64).into()),
    );
    summary.insert(
        "total_duration_ms".to_string(),
        serde_json::Value::Number(total_duration_ms.into()),
    );
    summary
}
