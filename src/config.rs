use crate::scoreboard::{FileScoreStore, DEFAULT_SCOREBOARD_FILE};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// guess the hidden word one letter at a time before your attempts run out
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Guess the hidden word one letter at a time before your attempts run out.\n\nRun without arguments to play one round against scoreboard.json in the current directory. The flags are optional and only exist for scripting and repeatable test runs."
)]
pub struct Cli {
    /// scoreboard file to read and append to
    #[clap(long, value_name = "PATH", default_value = DEFAULT_SCOREBOARD_FILE)]
    pub scoreboard: PathBuf,

    /// seed the word picker for a repeatable round
    #[clap(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub scoreboard_path: PathBuf,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scoreboard_path: PathBuf::from(DEFAULT_SCOREBOARD_FILE),
            seed: None,
        }
    }
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            scoreboard_path: cli.scoreboard.clone(),
            seed: cli.seed,
        }
    }
}

impl Settings {
    pub fn score_store(&self) -> FileScoreStore {
        FileScoreStore::with_path(&self.scoreboard_path)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
