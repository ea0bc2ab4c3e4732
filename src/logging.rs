use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::scenarios::ScenarioReport;
use crate::core::validation::ValidationResult;

/// Initialize structured logging based on verbosity level
///
/// Logs go to stderr so that reports on stdout stay machine-readable.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("battery_guard=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(ansi_enabled(
            std::io::stderr().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        ))
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Color only an interactive stderr, and never when `NO_COLOR` is set
fn ansi_enabled(is_terminal: bool, no_color: bool) -> bool {
    is_terminal && !no_color
}

/// Log the outcome of one evaluation
///
/// Breaches are reported data, not faults, so they log at `info`.
pub fn log_evaluation(
    temperature: f64,
    state_of_charge: f64,
    charge_rate: f64,
    result: &ValidationResult,
) {
    if result.is_ok() {
        tracing::debug!(
            temperature = temperature,
            state_of_charge = state_of_charge,
            charge_rate = charge_rate,
            "Battery parameters within range"
        );
    } else {
        tracing::info!(
            temperature = temperature,
            state_of_charge = state_of_charge,
            charge_rate = charge_rate,
            breached = ?result.breached_names(),
            "Battery parameters out of range"
        );
    }
}

/// Log a completed self-test run
pub fn log_self_test(report: &ScenarioReport) {
    if report.all_passed() {
        tracing::info!(total = report.total(), "Self-test passed");
    } else {
        tracing::error!(
            total = report.total(),
            failed = report.failed(),
            "Self-test failed"
        );
    }
}

/// Log system information for debugging
pub fn log_system_info() {
    tracing::debug!(
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        version = env!("CARGO_PKG_VERSION"),
        "System information"
    );
}
