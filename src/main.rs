use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::process::ExitCode;

use battery_guard::core::scenarios::{run_scenarios, run_self_test, DEMO_SCENARIOS};
use battery_guard::core::threshold::ThresholdSet;
use battery_guard::core::validation::{ParameterValidator, ValidationResult};
use battery_guard::logging;

#[derive(Parser)]
#[command(name = "battery-guard")]
#[command(author = "Battery Guard Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Battery Guard - check battery parameters against safe limits", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Evaluate the built-in demonstration scenarios")]
    Demo,

    #[command(
        about = "Check one set of battery measurements",
        after_help = "Negative numbers such as -5 are accepted directly. Put `--` before values like -inf: battery-guard check -- -inf 70 0.7"
    )]
    Check {
        #[arg(allow_negative_numbers = true, help = "Temperature in degrees Celsius")]
        temperature: f64,

        #[arg(allow_negative_numbers = true, help = "State of charge in percent")]
        state_of_charge: f64,

        #[arg(allow_negative_numbers = true, help = "Charge rate relative to rated maximum")]
        charge_rate: f64,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    #[command(about = "Show the safe operating thresholds")]
    Thresholds {
        #[arg(long, help = "Print the thresholds as JSON")]
        json: bool,
    },

    #[command(about = "Run the reference scenarios against the validator")]
    SelfTest,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }
    logging::init_logging(cli.verbose)?;
    logging::log_system_info();

    let validator = ParameterValidator::default();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(&validator),
        Commands::Check {
            temperature,
            state_of_charge,
            charge_rate,
            json,
        } => run_check(&validator, temperature, state_of_charge, charge_rate, json),
        Commands::Thresholds { json } => show_thresholds(validator.thresholds(), json),
        Commands::SelfTest => run_reference_self_test(&validator),
    }
}

fn run_demo(validator: &ParameterValidator) -> Result<ExitCode> {
    let report = run_scenarios(validator, DEMO_SCENARIOS);
    for outcome in &report.outcomes {
        let scenario = &outcome.scenario;
        logging::log_evaluation(
            scenario.temperature,
            scenario.state_of_charge,
            scenario.charge_rate,
            &outcome.result,
        );
        print_verdict(&outcome.result);
    }

    Ok(ExitCode::SUCCESS)
}

fn run_check(
    validator: &ParameterValidator,
    temperature: f64,
    state_of_charge: f64,
    charge_rate: f64,
    json: bool,
) -> Result<ExitCode> {
    let result = validator.evaluate(temperature, state_of_charge, charge_rate);
    logging::log_evaluation(temperature, state_of_charge, charge_rate, &result);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_verdict(&result);
    }

    if result.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn show_thresholds(thresholds: &ThresholdSet, json: bool) -> Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string_pretty(thresholds)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Safe operating thresholds:".blue().bold());
    for (parameter, threshold) in thresholds.iter() {
        println!(
            "  {} {:<16} min {:>5}  max {:>5}",
            "•".blue(),
            parameter.display_name(),
            threshold.min(),
            threshold.max()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn run_reference_self_test(validator: &ParameterValidator) -> Result<ExitCode> {
    println!("{}", "Running reference scenarios...".blue().bold());

    let report = run_self_test(validator);
    for outcome in &report.outcomes {
        let marker = if outcome.passed() {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "  {} {}: {}",
            marker,
            outcome.scenario.name,
            outcome.result.message().trim_end()
        );
    }
    logging::log_self_test(&report);

    let report = report.into_result()?;
    println!(
        "{} {} scenarios passed",
        "✓".green().bold(),
        report.total()
    );

    Ok(ExitCode::SUCCESS)
}

/// Print `<verdict>: <message>` with the verdict as `1`/`0`; the message
/// carries its own newline
fn print_verdict(result: &ValidationResult) {
    print!("{}", verdict_line(result));
}

fn verdict_line(result: &ValidationResult) -> String {
    format!("{}: {}", u8::from(result.is_ok()), result)
}
