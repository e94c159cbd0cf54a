//! Non-interactive replay of a move list.

use derive_more::{Display, Error};
use serde::Serialize;
use std::fmt::Write;
use tracing::{info, instrument};
use twigstones_core::{Cell, GameEngine, GameError, GameMode, GameSnapshot};

/// Why a replay stopped.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A move could not be read as a cell.
    #[display("Move #{} ('{}'): {}", number, input, source)]
    Parse {
        /// 1-based position in the move list.
        number: usize,
        /// The text given.
        input: String,
        /// What was wrong with it.
        source: GameError,
    },

    /// The engine refused a move.
    #[display("Replay stopped: {}", _0)]
    Rejected(GameError),
}

/// Parses cells from user text, such as `["4", "center", "8"]`.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn parse_moves<S: AsRef<str>>(moves: &[S]) -> Result<Vec<Cell>, ReplayError> {
    moves
        .iter()
        .enumerate()
        .map(|(i, text)| {
            Cell::from_label_or_number(text.as_ref()).map_err(|source| ReplayError::Parse {
                number: i + 1,
                input: text.as_ref().to_string(),
                source,
            })
        })
        .collect()
}

/// Parses and plays `moves` on a fresh engine.
#[instrument(skip(moves))]
pub fn replay<S: AsRef<str>>(moves: &[S], mode: GameMode) -> Result<GameEngine, ReplayError> {
    let cells = parse_moves(moves)?;
    let engine = GameEngine::replay(mode, cells).map_err(ReplayError::Rejected)?;
    info!(outcome = %engine.outcome(), moves = engine.history().len(), "Replay finished");
    Ok(engine)
}

/// Plain-text report: board, result, scores and the numbered move list.
pub fn render_report(engine: &GameEngine) -> String {
    let mut out = String::new();
    let score = engine.scoreboard();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", engine.board());
    let _ = writeln!(out);
    let _ = writeln!(out, "Mode:    {}", engine.mode());
    let _ = writeln!(out, "Outcome: {}", engine.outcome());
    if !engine.is_finished() {
        let _ = writeln!(out, "To move: {}", engine.turn());
    }
    let _ = writeln!(
        out,
        "Score:   X {} / O {} / draws {}",
        score.wins_x(),
        score.wins_o(),
        score.draws()
    );
    for (i, mv) in engine.history().list().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, mv);
    }
    out
}

/// JSON form of the final snapshot.
pub fn render_json(engine: &GameEngine) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct Report<'a> {
        snapshot: &'a GameSnapshot,
        finished: bool,
    }
    let snapshot = engine.snapshot();
    serde_json::to_string_pretty(&Report {
        snapshot: &snapshot,
        finished: engine.is_finished(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use twigstones_core::{IllegalMoveReason, Mark};

    #[test]
    fn test_parse_error_names_the_move() {
        let err = parse_moves(&["4", "nine", "8"]).unwrap_err();
        assert!(matches!(err, ReplayError::Parse { number: 2, .. }));
        assert!(err.to_string().starts_with("Move #2 ('nine')"));
    }

    #[test]
    fn test_occupied_move_rejected() {
        let err = replay(&["4", "4"], GameMode::PlayerVsPlayer).unwrap_err();
        assert_eq!(
            err,
            ReplayError::Rejected(GameError::IllegalMove(IllegalMoveReason::Occupied(
                Cell::Center
            )))
        );
    }

    #[test]
    fn test_report_for_win() {
        let engine = replay(&["0", "3", "1", "4", "2"], GameMode::PlayerVsPlayer).unwrap();
        assert_eq!(engine.outcome().winner(), Some(Mark::X));
        let report = render_report(&engine);
        assert!(report.starts_with("X|X|X\n-+-+-\nO|O|6"));
        assert!(report.contains("Outcome: X wins on [0, 1, 2]"));
        assert!(report.contains("Score:   X 1 / O 0 / draws 0"));
        assert!(report.contains("5. X → 2"));
        assert!(!report.contains("To move"));
    }

    #[test]
    fn test_ai_mode_replay_and_json() {
        let engine = replay(&["center", "top-left"], GameMode::PlayerVsAi).unwrap();
        assert_eq!(engine.history().len(), 2);
        let json = render_json(&engine).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["finished"], false);
        assert_eq!(value["snapshot"]["mode"], "ai");
        assert_eq!(value["snapshot"]["history"][1]["mark"], "O");
    }
}
