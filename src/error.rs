use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while playing a round.
///
/// The `Invalid*` variants are input validation failures; the session
/// recovers from them by prompting again. The rest end the program.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid category: {0:?}")]
    InvalidCategory(String),

    #[error("invalid difficulty: {0:?}")]
    InvalidDifficulty(String),

    #[error("invalid guess: {0:?}")]
    InvalidGuess(String),

    #[error("invalid word: {0:?}")]
    InvalidWord(String),

    #[error("embedded word bank is malformed: {0}")]
    CorruptWordBank(#[source] serde_json::Error),

    #[error("could not read scoreboard {}: {source}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("could not write scoreboard {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input closed before the round finished")]
    InputClosed,

    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}

impl GameError {
    /// True for errors the session answers with a reprompt.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidCategory(_)
                | GameError::InvalidDifficulty(_)
                | GameError::InvalidGuess(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
