pub mod file;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "delayed-compute")]
#[command(about = "Runs delayed square computations over a batch of inputs")]
pub struct CliConfig {
    #[arg(long, default_value = "1000")]
    pub delay_ms: u64,

    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "4,-3"
    )]
    pub inputs: Vec<f64>,

    #[arg(long, help = "TOML config file; replaces the flag values above")]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process resource usage around the batch")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    fn monitor_enabled(&self) -> bool {
        self.monitor
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("delay_ms", self.delay_ms, 1, 600_000)?;
        validation::validate_non_empty_list("inputs", &self.inputs)?;
        for &input in &self.inputs {
            validation::validate_finite_number("inputs", input)?;
        }
        Ok(())
    }
}
