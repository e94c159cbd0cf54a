//! Game mode and difficulty settings.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Who plays the second mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two people share the board.
    #[default]
    #[strum(serialize = "pvp")]
    #[serde(rename = "pvp")]
    PlayerVsPlayer,
    /// O is played by the move selector.
    #[strum(serialize = "ai")]
    #[serde(rename = "ai")]
    PlayerVsAi,
}

impl GameMode {
    /// The mark whose moves must come from the AI path, if any.
    pub fn ai_mark(self) -> Option<Mark> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsAi => Some(Mark::O),
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsAi => "Player vs AI",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsAi,
            GameMode::PlayerVsAi => GameMode::PlayerVsPlayer,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// AI difficulty as chosen by the user.
///
/// The setting is remembered and displayed. Move selection is uniform
/// random at every level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Easy.
    Easy,
    /// Medium.
    #[default]
    Medium,
    /// Hard.
    Hard,
}

impl Difficulty {
    /// The next level, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_ai_mark() {
        assert_eq!(GameMode::PlayerVsPlayer.ai_mark(), None);
        assert_eq!(GameMode::PlayerVsAi.ai_mark(), Some(Mark::O));
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(GameMode::from_str("pvp"), Ok(GameMode::PlayerVsPlayer));
        assert_eq!(GameMode::from_str("AI"), Ok(GameMode::PlayerVsAi));
        assert!(GameMode::from_str("online").is_err());
        assert_eq!(GameMode::PlayerVsAi.toggled(), GameMode::PlayerVsPlayer);
    }

    #[test]
    fn test_difficulty_cycles() {
        assert_eq!(Difficulty::from_str("hard"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
        assert_eq!(Difficulty::default().to_string(), "medium");
    }
}
