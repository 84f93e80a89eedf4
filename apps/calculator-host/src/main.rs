//! Calculator host harness.
//!
//! Stands in for a hooking host: loads configuration, sets up logging, then
//! invokes the fixture's `Load` entry point or one of its exported functions
//! by name.
//!
//! # Usage
//!
//! ```bash
//! calculator-host load 0x1A2B
//! calculator-host load --address 140695285818324
//! calculator-host call Subtract 2 3
//! calculator-host -vv --config host.yaml call Divide -- -7 2
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![forbid(unsafe_code)]

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use calculator::{CalculatorApi, EntryParam, Operation, Service};
use calculator_sdk::{ASSEMBLY_NAME, LOAD_ENTRY_POINT, TYPE_NAME};

use crate::config::HostConfig;

/// Calculator host - loads the calculator fixture and calls into it
#[derive(Parser)]
#[command(name = "calculator-host")]
#[command(version, about = "Calculator host - loads the calculator fixture and calls into it")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Invoke the Load entry point
    Load {
        /// Parameter string handed to Load (defaults to `entry.default_param`)
        param: Option<String>,

        /// Format an entry-info address the way a host does
        #[arg(long, conflicts_with = "param")]
        address: Option<u64>,
    },
    /// Invoke an exported function (Add, Subtract, Multiply, Divide) and print the result
    Call {
        /// Exported function name
        function: String,

        #[arg(allow_negative_numbers = true)]
        a: i32,

        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Validate configuration and exit
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (CALC_HOST__*) -> 4) CLI overrides
    let mut config = HostConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.verbose);

    logging::init_logging(&config.logging)?;

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    let service = Service::new();

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Load { param, address } => {
            let param = resolve_load_param(param, address, &config);
            run_load(&service, &param);
            Ok(())
        }
        Commands::Call { function, a, b } => {
            let result = run_call(&service, &function, a, b)?;
            println!("{result}");
            Ok(())
        }
        Commands::Check => check_config(&config),
    }
}

fn resolve_load_param(param: Option<String>, address: Option<u64>, config: &HostConfig) -> String {
    match (param, address) {
        (_, Some(address)) => EntryParam::new(address).to_param_string(),
        (Some(param), None) => param,
        (None, None) => config.entry.default_param.clone(),
    }
}

fn run_load(api: &dyn CalculatorApi, param: &str) {
    tracing::info!(
        assembly = ASSEMBLY_NAME,
        type_name = TYPE_NAME,
        entry_point = LOAD_ENTRY_POINT,
        "invoking entry point"
    );
    api.load(param);
    tracing::info!("entry point returned");
}

fn run_call(api: &dyn CalculatorApi, function: &str, a: i32, b: i32) -> Result<i32> {
    let op: Operation = function.parse()?;
    tracing::debug!(function = %op, a, b, "invoking exported function");
    api.call(op, a, b)
        .with_context(|| format!("{op}({a}, {b}) failed"))
}

fn check_config(config: &HostConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}
