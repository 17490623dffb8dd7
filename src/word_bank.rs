use crate::error::{GameError, Result};
use include_dir::{include_dir, Dir};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

static WORDS_DIR: Dir = include_dir!("src/words");

const CATEGORIES_FILE: &str = "categories.json";

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub words: Vec<WordEntry>,
}

/// Fixed set of categories, in the order they are offered to the player.
#[derive(Clone, Debug)]
pub struct WordBank {
    categories: Vec<Category>,
}

impl WordBank {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The categories compiled into the binary.
    pub fn builtin() -> Result<Self> {
        let bytes = WORDS_DIR
            .get_file(CATEGORIES_FILE)
            .map(|file| file.contents())
            .unwrap_or_default();
        let categories: Vec<Category> =
            serde_json::from_slice(bytes).map_err(GameError::CorruptWordBank)?;
        Ok(Self::new(categories))
    }

    pub fn list_categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Resolves a 1-based menu choice to a category.
    pub fn category_by_choice(&self, raw: &str) -> Result<&Category> {
        let invalid = || GameError::InvalidCategory(raw.to_string());
        let choice: usize = raw.trim().parse().map_err(|_| invalid())?;
        choice
            .checked_sub(1)
            .and_then(|idx| self.categories.get(idx))
            .ok_or_else(invalid)
    }

    pub fn pick_word<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Result<&WordEntry> {
        let entry = self
            .category(name)
            .and_then(|c| c.words.choose(rng))
            .ok_or_else(|| GameError::InvalidCategory(name.to_string()))?;
        debug!("picked a {}-letter word from {name}", entry.word.chars().count());
        Ok(entry)
    }
}
