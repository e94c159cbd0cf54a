//! Twigs & Stones application library.
//!
//! Wires the [`twigstones_core`] engine to a terminal UI and a
//! non-interactive replay command.
//!
//! # Example
//!
//! ```
//! use twigstones::{render_report, replay};
//! use twigstones_core::GameMode;
//!
//! let engine = replay(&["0", "3", "1", "4", "2"], GameMode::PlayerVsPlayer).unwrap();
//! assert!(render_report(&engine).contains("X wins"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod scheduler;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use replay::{ReplayError, parse_moves, render_json, render_report, replay};
pub use scheduler::{AiScheduler, DelayScheduler};
pub use tui::{App, run_tui};
