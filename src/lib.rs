pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::file::FileConfig;

pub use crate::core::delayed::{ComputationHandle, DelayedComputation, DEFAULT_DELAY};
pub use crate::core::engine::{BatchOutcome, ComputeEngine};
pub use crate::core::outcome::{Outcome, OutcomeCell};
pub use crate::utils::error::{ComputeError, Result};
