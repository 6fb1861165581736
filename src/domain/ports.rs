use crate::utils::error::Result;
use async_trait::async_trait;

/// An asynchronous computation over one numeric input. Each invocation
/// is independent; no state is shared between calls.
#[async_trait]
pub trait Computation: Send + Sync {
    async fn compute(&self, input: f64) -> Result<f64>;
}

pub trait ConfigProvider: Send + Sync {
    fn delay_ms(&self) -> u64;
    fn inputs(&self) -> &[f64];
    fn monitor_enabled(&self) -> bool;
}
