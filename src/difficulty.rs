use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Wrong guesses allowed before the round is lost
    pub fn max_attempts(&self) -> u32 {
        match self {
            Difficulty::Easy => 15,
            Difficulty::Medium => 10,
            Difficulty::Hard => 5,
        }
    }

    pub fn multiplier(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

/// Case-insensitive match against the difficulty names. Padding is not
/// stripped, only the line terminator.
pub fn parse_difficulty(raw: &str) -> Result<Difficulty> {
    let wanted = raw.trim_end_matches(&['\r', '\n'][..]);
    Difficulty::ALL
        .into_iter()
        .find(|d| d.to_string().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| GameError::InvalidDifficulty(raw.to_string()))
}
