// Library surface shared by the binary and the integration tests.
pub mod config;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod scoreboard;
pub mod session;
pub mod word_bank;

pub use difficulty::Difficulty;
pub use error::GameError;
pub use game::{GameState, GuessOutcome, RoundStatus};
pub use scoreboard::{FileScoreStore, ScoreEntry, ScoreStore};
pub use session::{RoundSummary, SessionController};
pub use word_bank::{Category, WordBank, WordEntry};
