//! The game state machine.
//!
//! [`GameEngine`] owns the board, turn, outcome, history, scoreboard and
//! mode. Nothing else mutates them; callers go through the operations
//! below and read the result from a [`GameSnapshot`].

use crate::action::{Move, MoveOrigin};
use crate::cell::Cell;
use crate::error::{GameError, IllegalMoveReason};
use crate::history::MoveHistory;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::mode::GameMode;
use crate::outcome::Outcome;
use crate::rules;
use crate::score::Scoreboard;
use crate::selector::MoveSelector;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Everything a presentation layer can observe after a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board contents.
    pub board: Board,
    /// Mark to move next.
    pub turn: Mark,
    /// Current classification, with the winning line if any.
    pub outcome: Outcome,
    /// Score tallies.
    pub scoreboard: Scoreboard,
    /// Moves played this game, oldest first.
    pub history: Vec<Move>,
    /// Current mode.
    pub mode: GameMode,
}

/// Tic-tac-toe engine with history, undo and scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    outcome: Outcome,
    history: MoveHistory,
    scoreboard: Scoreboard,
    mode: GameMode,
}

impl GameEngine {
    /// A fresh player-vs-player game, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_mode(GameMode::default())
    }

    /// A fresh game in the given mode.
    #[instrument]
    pub fn with_mode(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            outcome: Outcome::InProgress,
            history: MoveHistory::new(),
            scoreboard: Scoreboard::new(),
            mode,
        }
    }

    /// Plays `cells` in order on a fresh engine.
    ///
    /// Under [`GameMode::PlayerVsAi`] the AI mark's cells are submitted
    /// through the AI path, so any game that could have happened
    /// interactively replays cleanly.
    #[instrument(skip(cells))]
    pub fn replay<I>(mode: GameMode, cells: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut engine = Self::with_mode(mode);
        for cell in cells {
            let origin = if engine.is_ai_turn() {
                MoveOrigin::Ai
            } else {
                MoveOrigin::Human
            };
            engine.apply_move_from(cell, origin)?;
        }
        Ok(engine)
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// The current outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Moves played this game.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Score tallies.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// The current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// True once the game is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// True when the next move belongs to the AI and the game is open.
    pub fn is_ai_turn(&self) -> bool {
        !self.is_finished() && self.mode.ai_mark() == Some(self.turn)
    }

    /// Copies every observable.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            turn: self.turn,
            outcome: self.outcome,
            scoreboard: self.scoreboard,
            history: self.history.list().to_vec(),
            mode: self.mode,
        }
    }

    /// Plays the current mark at `cell` on behalf of a person.
    ///
    /// # Errors
    ///
    /// `IllegalMove` if the game is over, the cell is taken, or the AI
    /// mark is to move under [`GameMode::PlayerVsAi`].
    pub fn apply_move(&mut self, cell: Cell) -> Result<GameSnapshot, GameError> {
        self.apply_move_from(cell, MoveOrigin::Human)
    }

    /// Plays the current mark at `cell`, checking that `origin` may move.
    ///
    /// Board, history, turn and outcome change together or not at all.
    #[instrument(skip(self), fields(turn = %self.turn, mode = ?self.mode))]
    pub fn apply_move_from(
        &mut self,
        cell: Cell,
        origin: MoveOrigin,
    ) -> Result<GameSnapshot, GameError> {
        self.check_may_move(origin)?;

        let mark = self.turn;
        self.board.set(cell, mark)?;
        self.history.append(Move::new(cell, mark));
        self.turn = mark.opponent();
        self.outcome = rules::evaluate(&self.board);
        debug!(%cell, %mark, outcome = %self.outcome, "Move applied");

        if self.outcome.is_finished() {
            self.scoreboard.record(&self.outcome);
            info!(
                outcome = %self.outcome,
                wins_x = self.scoreboard.wins_x(),
                wins_o = self.scoreboard.wins_o(),
                draws = self.scoreboard.draws(),
                "Game finished"
            );
        }

        self.verify_invariants();
        Ok(self.snapshot())
    }

    /// Asks `selector` for a cell and plays it through the AI path.
    ///
    /// # Errors
    ///
    /// `IllegalMove` if it is not the AI's turn, or whatever the selector
    /// or the move validation reports.
    #[instrument(skip_all, fields(turn = %self.turn))]
    pub fn play_ai_turn<S>(&mut self, selector: &mut S) -> Result<GameSnapshot, GameError>
    where
        S: MoveSelector + ?Sized,
    {
        self.check_may_move(MoveOrigin::Ai)?;
        let cell = selector.select_move(&self.board)?;
        self.apply_move_from(cell, MoveOrigin::Ai)
    }

    /// Takes back the most recent move.
    ///
    /// A finished game is reopened: the outcome goes back to
    /// `InProgress` and the mark whose move was removed moves again. The
    /// scoreboard keeps the finished game.
    ///
    /// # Errors
    ///
    /// `EmptyHistory` if no move has been played; nothing changes.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn undo(&mut self) -> Result<GameSnapshot, GameError> {
        let last = self.history.pop_last()?;
        if self.outcome.is_finished() {
            debug!(outcome = %self.outcome, "Reopening finished game");
        }
        self.outcome = Outcome::InProgress;
        self.board.clear_cell(last.cell);
        self.turn = last.mark;
        debug!(undone = %last, "Move undone");

        self.verify_invariants();
        Ok(self.snapshot())
    }

    /// Starts a new game. The scoreboard is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameSnapshot {
        self.board.clear();
        self.history.clear();
        self.outcome = Outcome::InProgress;
        self.turn = Mark::X;
        info!(mode = %self.mode, "New game");
        self.snapshot()
    }

    /// Zeroes the scoreboard and starts a new game.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) -> GameSnapshot {
        self.scoreboard.reset();
        info!("Scores reset");
        self.reset()
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) -> GameSnapshot {
        info!(from = %self.mode, to = %mode, "Mode changed");
        self.mode = mode;
        self.reset()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn check_may_move(&self, origin: MoveOrigin) -> Result<(), GameError> {
        if self.outcome.is_finished() {
            return Err(GameError::IllegalMove(IllegalMoveReason::GameFinished));
        }
        let ai_to_move = self.mode.ai_mark() == Some(self.turn);
        let allowed = match origin {
            MoveOrigin::Human => !ai_to_move,
            MoveOrigin::Ai => ai_to_move,
        };
        if !allowed {
            return Err(GameError::IllegalMove(IllegalMoveReason::NotYourTurn(
                self.turn,
            )));
        }
        Ok(())
    }

    fn verify_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(invariant = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "engine invariants violated");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
