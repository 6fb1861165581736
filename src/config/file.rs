use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub computation: ComputationConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationConfig {
    pub delay_ms: u64,
    pub inputs: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl FileConfig {
    /// Reads, parses, and validates a TOML config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for FileConfig {
    fn delay_ms(&self) -> u64 {
        self.computation.delay_ms
    }

    fn inputs(&self) -> &[f64] {
        &self.computation.inputs
    }

    fn monitor_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("computation.delay_ms", self.computation.delay_ms, 1, 600_000)?;
        validation::validate_non_empty_list("computation.inputs", &self.computation.inputs)?;
        for &input in &self.computation.inputs {
            validation::validate_finite_number("computation.inputs", input)?;
        }
        Ok(())
    }
}
