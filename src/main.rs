use anyhow::Context;
use clap::Parser;
use colored::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod contacts;
mod driver;
mod error;
mod executor;
mod message;
mod ui;

use cli::Cli;
use config::Config;
use error::SenderError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if matches!(e.downcast_ref::<SenderError>(), Some(SenderError::UserCancelled)) {
                eprintln!("{}", "[X] User cancelled.".yellow());
            } else {
                eprintln!("{} {:#}", "[X] Error:".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.init_config {
        let path = Config::init().context("failed to write default config")?;
        eprintln!("{} Wrote default config to {}", "[OK]".green(), path.display());
        return Ok(());
    }

    let config = Config::load()
        .with_context(|| format!("failed to load {}", Config::config_path().display()))?;

    tracing::debug!(?cli, ?config, "starting");

    commands::execute_send(cli, &config).await?;
    Ok(())
}
