//! Twigs & Stones - terminal tic-tac-toe.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use twigstones::{AppConfig, Cli, Command, render_json, render_report, replay, run_tui};
use twigstones_core::GameMode;

const DEFAULT_FILTER: &str = "info,twigstones=debug,twigstones_core=debug";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command() {
        Command::Play {
            mode,
            seed,
            ai_delay_ms,
        } => {
            let config = AppConfig::load_or_default(&cli.config)?
                .with_overrides(mode, seed, ai_delay_ms);
            initialize_file_tracing(config.log_file())?;
            run_tui(&config)
        }
        Command::Replay { moves, mode, json } => {
            initialize_stderr_tracing();
            run_replay(&moves, mode, json)
        }
    }
}

/// Plays a move list and prints the final state.
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_replay(moves: &[String], mode: GameMode, json: bool) -> Result<()> {
    let engine = replay(moves, mode)?;
    if json {
        println!("{}", render_json(&engine).context("Failed to serialize snapshot")?);
    } else {
        print!("{}", render_report(&engine));
    }
    Ok(())
}

/// Logs to a file so output does not tear the terminal UI.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    info!(log_file = %path.display(), "Tracing initialized");
    Ok(())
}

/// Logs warnings to stderr, leaving stdout for the report.
fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();
}
