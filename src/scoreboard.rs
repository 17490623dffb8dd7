use crate::difficulty::Difficulty;
use crate::error::{GameError, Result};
use itertools::Itertools;
use log::info;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_SCOREBOARD_FILE: &str = "scoreboard.json";
pub const LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub difficulty: Difficulty,
}

/// Durable history of finished rounds, oldest first.
pub trait ScoreStore {
    fn load(&self) -> Result<Vec<ScoreEntry>>;
    fn save(&self, entries: &[ScoreEntry]) -> Result<()>;

    /// Read-modify-write: the whole history is rewritten with `entry` at the end.
    fn append(&self, entry: ScoreEntry) -> Result<()> {
        let mut entries = self.load()?;
        entries.push(entry);
        self.save(&entries)
    }
}

#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error<E>(&self, source: E) -> GameError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        GameError::StorageRead {
            path: self.path.clone(),
            source: Box::new(source),
        }
    }

    fn write_error(&self, source: io::Error) -> GameError {
        GameError::StorageWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<Vec<ScoreEntry>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.read_error(e)),
        };
        serde_json::from_slice(&bytes).map_err(|e| self.read_error(e))
    }

    fn save(&self, entries: &[ScoreEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }
        let data = to_pretty_json(entries).map_err(|e| self.write_error(e.into()))?;
        fs::write(&self.path, data).map_err(|e| self.write_error(e))?;
        info!("saved {} scores to {}", entries.len(), self.path.display());
        Ok(())
    }
}

/// Four-space indented JSON array.
fn to_pretty_json(entries: &[ScoreEntry]) -> serde_json::Result<Vec<u8>> {
    let mut data = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut data, formatter);
    entries.serialize(&mut ser)?;
    Ok(data)
}

/// Highest scores first; equal scores keep their recorded order.
pub fn leaderboard(entries: &[ScoreEntry], limit: usize) -> Vec<&ScoreEntry> {
    entries
        .iter()
        .sorted_by_key(|e| Reverse(e.score))
        .take(limit)
        .collect()
}
