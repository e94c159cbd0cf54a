//! Command-line interface for twigstones.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use twigstones_core::GameMode;

/// Twigs & Stones - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "twigstones")]
#[command(about = "Tic-tac-toe with undo, scoring and a random AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, global = true, default_value = "twigstones.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Game mode: pvp or ai
        #[arg(long)]
        mode: Option<GameMode>,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the AI moves, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,
    },

    /// Replay a list of moves and print the result
    Replay {
        /// Comma-separated cells, as indices 0-8 or labels like "center"
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Game mode: pvp or ai
        #[arg(long, default_value = "pvp")]
        mode: GameMode,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The subcommand, with `play` filled in when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            mode: None,
            seed: None,
            ai_delay_ms: None,
        })
    }
}
