//! Twigs & Stones core - a tic-tac-toe game state engine.
//!
//! The engine is synchronous and owns all game state. A presentation
//! layer calls its operations and redraws from the returned
//! [`GameSnapshot`].
//!
//! # Architecture
//!
//! - **Board**: nine cells holding a mark or nothing
//! - **Rules**: win and draw detection over a board
//! - **MoveHistory**: ordered log that powers undo
//! - **GameEngine**: the state machine tying them together with scoring
//! - **MoveSelector**: random legal-move picker standing in for an AI
//!
//! # Example
//!
//! ```
//! use twigstones_core::{Cell, GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new();
//! for cell in [Cell::Center, Cell::TopLeft, Cell::BottomRight, Cell::TopRight, Cell::BottomLeft] {
//!     engine.apply_move(cell)?;
//! }
//! assert_eq!(engine.outcome().winner(), None);
//! assert_eq!(engine.turn(), Mark::O);
//! assert_eq!(engine.outcome(), &Outcome::InProgress);
//! # Ok::<(), twigstones_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
mod engine;
mod error;
mod history;
pub mod invariants;
mod mode;
mod outcome;
pub mod rules;
mod score;
mod selector;
mod types;

pub use action::{Move, MoveOrigin};
pub use cell::Cell;
pub use engine::{GameEngine, GameSnapshot};
pub use error::{GameError, IllegalMoveReason};
pub use history::MoveHistory;
pub use mode::{Difficulty, GameMode};
pub use outcome::{Outcome, WinningLine};
pub use score::Scoreboard;
pub use selector::{MoveSelector, RandomMoveSelector};
pub use types::{Board, Mark, Square};
