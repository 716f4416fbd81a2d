//! Kurs command-line converter
//!
//! Main entry point: converts IDR amounts into foreign currencies.

mod cli;
mod commands;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};
use kurs_shared::AppConfig;

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Interactive { to: None });
    debug!(?command, "Starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match commands::run(command, &config, stdin.lock(), &mut stdout.lock()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            debug!(code = err.error_code(), "Command failed");
            eprintln!("{err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
