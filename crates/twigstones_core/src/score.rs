//! Score tallies across games.

use crate::outcome::Outcome;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Wins per mark and draws.
///
/// Counters only ever go up; [`Scoreboard::reset`] is the one way back to
/// zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    wins_x: u32,
    wins_o: u32,
    draws: u32,
}

impl Scoreboard {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by X.
    pub fn wins_x(&self) -> u32 {
        self.wins_x
    }

    /// Games won by O.
    pub fn wins_o(&self) -> u32 {
        self.wins_o
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Games won by `mark`.
    pub fn wins_for(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        }
    }

    /// Total completed games.
    pub fn games_played(&self) -> u32 {
        self.wins_x + self.wins_o + self.draws
    }

    /// Counts a finished game. `InProgress` is ignored.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::InProgress => {}
            Outcome::Won { mark: Mark::X, .. } => self.wins_x += 1,
            Outcome::Won { mark: Mark::O, .. } => self.wins_o += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
