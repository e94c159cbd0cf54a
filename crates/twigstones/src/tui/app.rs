//! Application state and logic.
//!
//! [`App`] adapts user actions onto the engine and keeps the bits of
//! state that only matter on screen: the cursor, the history panel and
//! the last hint.

use super::input::{Action, Direction, move_cursor};
use crate::config::AppConfig;
use crate::scheduler::{AiScheduler, DelayScheduler};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use twigstones_core::{
    Cell, Difficulty, GameEngine, GameError, Mark, MoveSelector, Outcome, RandomMoveSelector,
};

/// Display name of a mark's side.
pub fn side_name(mark: Mark) -> &'static str {
    match mark {
        Mark::X => "Twigs",
        Mark::O => "Stones",
    }
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    selector: Box<dyn MoveSelector>,
    scheduler: Box<dyn AiScheduler>,
    difficulty: Difficulty,
    cursor: Cell,
    show_history: bool,
    hint: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the application from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        let selector: Box<dyn MoveSelector> = match config.seed() {
            Some(seed) => Box::new(RandomMoveSelector::seeded(*seed)),
            None => Box::new(RandomMoveSelector::from_entropy()),
        };
        Self::with_parts(
            GameEngine::with_mode(*config.mode()),
            selector,
            Box::new(DelayScheduler::new(config.ai_delay())),
            *config.difficulty(),
        )
    }

    /// Creates the application from explicit parts.
    pub fn with_parts(
        engine: GameEngine,
        selector: Box<dyn MoveSelector>,
        scheduler: Box<dyn AiScheduler>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            engine,
            selector,
            scheduler,
            difficulty,
            cursor: Cell::Center,
            show_history: false,
            hint: None,
            should_quit: false,
        }
    }

    /// The engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The cursor cell.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// The selected difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether the history panel is open.
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    /// The last hint, such as why a move was refused.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether an AI move is waiting for its delay.
    pub fn ai_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// The scheduler, for computing poll timeouts.
    pub fn scheduler(&self) -> &dyn AiScheduler {
        self.scheduler.as_ref()
    }

    /// Applies one user action at time `now`.
    #[instrument(skip(self, now))]
    pub fn handle(&mut self, action: Action, now: Instant) {
        self.hint = None;
        match action {
            Action::Place(cell) => self.place(cell, now),
            Action::PlaceAtCursor => self.place(self.cursor, now),
            Action::MoveCursor(direction) => self.move_cursor(direction),
            Action::Undo => self.undo(),
            Action::NewGame => {
                self.scheduler.cancel();
                self.engine.reset();
            }
            Action::ResetScores => {
                self.scheduler.cancel();
                self.engine.reset_scores();
            }
            Action::ToggleMode => {
                self.scheduler.cancel();
                let mode = self.engine.mode().toggled();
                self.engine.set_mode(mode);
            }
            Action::CycleDifficulty => {
                self.difficulty = self.difficulty.next();
                info!(difficulty = %self.difficulty, "Difficulty changed");
            }
            Action::ToggleHistory => self.show_history = !self.show_history,
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Plays the AI move once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if !self.scheduler.take_due(now) {
            return;
        }
        if !self.engine.is_ai_turn() {
            debug!("Scheduled AI move no longer applies");
            return;
        }
        match self.engine.play_ai_turn(self.selector.as_mut()) {
            Ok(snapshot) => {
                if let Some(mv) = snapshot.history.last() {
                    debug!(%mv, "AI played");
                }
            }
            Err(e) => warn!(error = %e, "AI move failed"),
        }
    }

    fn place(&mut self, cell: Cell, now: Instant) {
        self.cursor = cell;
        match self.engine.apply_move(cell) {
            Ok(_) => {
                if self.engine.is_ai_turn() {
                    self.scheduler.schedule(now);
                }
            }
            Err(e) => {
                debug!(error = %e, %cell, "Move ignored");
                self.hint = Some(e.to_string());
            }
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        self.cursor = move_cursor(self.cursor, direction);
    }

    /// Takes back moves until a person is to move.
    ///
    /// Against the AI, its reply and the human move before it go together.
    fn undo(&mut self) {
        self.scheduler.cancel();
        match self.engine.undo() {
            Ok(_) => {
                while self.engine.is_ai_turn() && !self.engine.history().is_empty() {
                    if let Err(e) = self.engine.undo() {
                        warn!(error = %e, "Undo failed");
                        break;
                    }
                }
            }
            Err(GameError::EmptyHistory) => self.hint = Some("Nothing to undo".to_string()),
            Err(e) => self.hint = Some(e.to_string()),
        }
    }

    /// Status line: whose turn it is, or the result.
    pub fn status_text(&self) -> String {
        match self.engine.outcome() {
            Outcome::InProgress => {
                let turn = self.engine.turn();
                format!("Current Turn: {} ({})", side_name(turn), turn)
            }
            Outcome::Won { mark, .. } => format!("Winner: {}", side_name(*mark)),
            Outcome::Draw => "It's a Draw".to_string(),
        }
    }

    /// Footer line: mode and move count.
    pub fn footer_text(&self) -> String {
        format!(
            "Handcrafted with nature • {} • Total Moves: {}",
            self.engine.mode(),
            self.engine.history().len()
        )
    }

    /// Numbered history entries, oldest first.
    pub fn history_lines(&self) -> Vec<String> {
        self.engine
            .history()
            .list()
            .iter()
            .enumerate()
            .map(|(i, mv)| format!("{}. {}", i + 1, mv))
            .collect()
    }

    /// Mark previewed at `cell`, if the cursor sits on an open cell.
    pub fn preview(&self, cell: Cell) -> Option<Mark> {
        let open = !self.engine.is_finished() && self.engine.board().is_empty(cell);
        (cell == self.cursor && open && !self.engine.is_ai_turn()).then(|| self.engine.turn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use twigstones_core::GameMode;

    fn app(mode: GameMode) -> App {
        App::with_parts(
            GameEngine::with_mode(mode),
            Box::new(RandomMoveSelector::seeded(9)),
            Box::new(DelayScheduler::new(Duration::from_millis(500))),
            Difficulty::Medium,
        )
    }

    #[test]
    fn test_pvp_status_and_footer() {
        let mut app = app(GameMode::PlayerVsPlayer);
        let now = Instant::now();
        assert_eq!(app.status_text(), "Current Turn: Twigs (X)");

        app.handle(Action::Place(Cell::Center), now);
        assert_eq!(app.status_text(), "Current Turn: Stones (O)");
        assert_eq!(
            app.footer_text(),
            "Handcrafted with nature • Player vs Player • Total Moves: 1"
        );
        assert_eq!(app.history_lines(), vec!["1. X → 4".to_string()]);
        assert!(!app.ai_pending());
    }

    #[test]
    fn test_illegal_move_is_hinted_and_ignored() {
        let mut app = app(GameMode::PlayerVsPlayer);
        let now = Instant::now();
        app.handle(Action::Place(Cell::Center), now);
        app.handle(Action::Place(Cell::Center), now);
        assert!(app.hint().is_some_and(|h| h.contains("occupied")));
        assert_eq!(app.engine().history().len(), 1);
    }

    #[test]
    fn test_ai_replies_after_delay() {
        let mut app = app(GameMode::PlayerVsAi);
        let now = Instant::now();
        app.handle(Action::Place(Cell::Center), now);
        assert!(app.ai_pending());

        // Human input is refused while the AI is pending.
        app.handle(Action::Place(Cell::TopLeft), now);
        assert!(app.hint().is_some());
        assert_eq!(app.engine().history().len(), 1);

        app.tick(now + Duration::from_millis(100));
        assert_eq!(app.engine().history().len(), 1);

        app.tick(now + Duration::from_millis(500));
        assert_eq!(app.engine().history().len(), 2);
        assert_eq!(app.engine().turn(), Mark::X);
        assert!(!app.ai_pending());
    }

    #[test]
    fn test_undo_against_ai_returns_turn_to_human() {
        let mut app = app(GameMode::PlayerVsAi);
        let now = Instant::now();
        app.handle(Action::Place(Cell::Center), now);
        app.tick(now + Duration::from_secs(1));
        assert_eq!(app.engine().history().len(), 2);

        app.handle(Action::Undo, now);
        assert!(app.engine().history().is_empty());
        assert_eq!(app.engine().turn(), Mark::X);

        // Undo while the AI is still thinking cancels its move.
        app.handle(Action::Place(Cell::Center), now);
        app.handle(Action::Undo, now);
        assert!(!app.ai_pending());
        assert!(app.engine().history().is_empty());

        app.handle(Action::Undo, now);
        assert_eq!(app.hint(), Some("Nothing to undo"));
    }

    #[test]
    fn test_mode_toggle_resets_game_and_keeps_scores() {
        let mut app = app(GameMode::PlayerVsPlayer);
        let now = Instant::now();
        for cell in [0, 3, 1, 4, 2] {
            app.handle(Action::Place(Cell::ALL[cell]), now);
        }
        assert_eq!(app.status_text(), "Winner: Twigs");

        app.handle(Action::ToggleMode, now);
        assert_eq!(app.engine().mode(), GameMode::PlayerVsAi);
        assert!(app.engine().history().is_empty());
        assert_eq!(app.engine().scoreboard().wins_x(), 1);

        app.handle(Action::ResetScores, now);
        assert_eq!(app.engine().scoreboard().games_played(), 0);
    }

    #[test]
    fn test_draw_status() {
        let mut app = app(GameMode::PlayerVsPlayer);
        let now = Instant::now();
        for cell in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
            app.handle(Action::Place(Cell::ALL[cell]), now);
        }
        assert_eq!(app.status_text(), "It's a Draw");
        assert_eq!(app.preview(app.cursor()), None);
    }

    #[test]
    fn test_cursor_preview_and_panels() {
        let mut app = app(GameMode::PlayerVsPlayer);
        let now = Instant::now();
        assert_eq!(app.preview(Cell::Center), Some(Mark::X));
        assert_eq!(app.preview(Cell::TopLeft), None);

        app.handle(Action::MoveCursor(Direction::Up), now);
        assert_eq!(app.cursor(), Cell::TopCenter);
        app.handle(Action::PlaceAtCursor, now);
        assert_eq!(app.engine().history().list()[0].cell, Cell::TopCenter);

        app.handle(Action::ToggleHistory, now);
        assert!(app.show_history());
        app.handle(Action::CycleDifficulty, now);
        assert_eq!(app.difficulty(), Difficulty::Hard);
        app.handle(Action::Quit, now);
        assert!(app.should_quit());
    }
}
