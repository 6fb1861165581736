use clap::Parser;
use delayed_compute::core::engine;
use delayed_compute::domain::ports::ConfigProvider;
use delayed_compute::utils::error::ErrorSeverity;
use delayed_compute::utils::{logger, validation::Validate};
use delayed_compute::{BatchOutcome, CliConfig, ComputeEngine, DelayedComputation, FileConfig, Outcome};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting delayed-compute CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let entries = match run(&cli).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("❌ Batch failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e);

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            return Ok(());
        }
    };

    for entry in &entries {
        match &entry.outcome {
            Outcome::Success(value) => println!("{} -> {}", entry.input, value),
            Outcome::Failure(err) => println!("{} -> error: {}", entry.input, err),
        }
    }

    let summary = engine::execution_summary(&entries);
    tracing::info!("✅ Batch completed");
    println!("✅ Summary: {}", serde_json::to_string(&summary)?);

    Ok(())
}

async fn run(cli: &CliConfig) -> delayed_compute::Result<Vec<BatchOutcome>> {
    // A config file, when given, replaces the flag values wholesale.
    let (delay_ms, inputs, monitor) = match &cli.config {
        Some(path) => {
            let file = FileConfig::from_path(path)?;
            tracing::info!("Loaded config from {}", path.display());
            (file.delay_ms(), file.inputs().to_vec(), file.monitor_enabled())
        }
        None => {
            cli.validate()?;
            (cli.delay_ms, cli.inputs.clone(), cli.monitor)
        }
    };

    if monitor {
        tracing::info!("🔍 Resource monitoring enabled");
    }

    let computation = DelayedComputation::new(Duration::from_millis(delay_ms));
    let engine = ComputeEngine::new_with_monitoring(computation, monitor);

    engine.run(&inputs).await
}
