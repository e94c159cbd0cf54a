//! Terminal UI for Twigs & Stones.
//!
//! A thin adapter: key presses become [`Action`]s, the [`App`] turns them
//! into engine calls, and every frame is redrawn from the engine state.

mod app;
mod input;
mod ui;

pub use app::{App, side_name};
pub use input::{Action, Direction, KEY_HELP, action_for, move_cursor};

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

/// Longest wait for input before re-checking the AI scheduler.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the interactive game until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!(mode = %config.mode(), "Starting Twigs & Stones TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        games = app.engine().scoreboard().games_played(),
        "Session ended"
    );
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = app
            .scheduler()
            .remaining(Instant::now())
            .map_or(POLL_INTERVAL, |left| left.min(POLL_INTERVAL));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && let Some(action) = action_for(key)
        {
            app.handle(action, Instant::now());
        }

        app.tick(Instant::now());
    }
    Ok(())
}
