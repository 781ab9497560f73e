//! # Storefront
//!
//! Command-line shell around ebook-core.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Parse the command line
//! 3. Load configuration (defaults → file → environment)
//! 4. Run the subcommand
//! 5. Print its output to stdout, or log the error and exit non-zero

pub mod basket;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::OutputFormat;
use crate::config::StoreConfig;
use crate::error::AppResult;

/// Entry point used by `main`.
pub fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match execute(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "storefront command failed");
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Loads configuration and runs one parsed command.
pub fn execute(cli: Cli) -> AppResult<String> {
    let config = StoreConfig::load(cli.config)?;

    match cli.command {
        Command::Demo => commands::demo(&config),
        Command::Checkout { basket, json } => {
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Invoice
            };
            commands::checkout(&config, &basket, format)
        }
        Command::Config => commands::show_config(&config),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=ebook_core=trace` - Trace the core crate only
/// - Default: INFO, DEBUG for ebook_core
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ebook_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .with_writer(std::io::stderr)
        .init();
}
