use crate::difficulty::{parse_difficulty, Difficulty};
use crate::error::{GameError, Result};
use crate::game::{parse_guess, GameState, GuessOutcome, RoundStatus};
use crate::scoreboard::{leaderboard, ScoreEntry, ScoreStore, LEADERBOARD_SIZE};
use crate::word_bank::{Category, WordBank};
use log::debug;
use rand::Rng;
use std::io::{BufRead, Write};

const DIFFICULTY_RETRY: &str = "Invalid choice. Please choose Easy, Medium, or Hard.";
const CATEGORY_RETRY: &str = "Invalid choice. Please select a valid category number.";
const GUESS_RETRY: &str = "Invalid input. Please enter a single letter.";

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub word: String,
    pub difficulty: Difficulty,
    pub status: RoundStatus,
    /// Only set for won rounds; lost rounds are not recorded.
    pub score: Option<u32>,
}

/// Drives one play session over a line-based console.
pub struct SessionController<R, W, S, G> {
    input: R,
    output: W,
    store: S,
    bank: WordBank,
    rng: G,
}

impl<R, W, S, G> SessionController<R, W, S, G>
where
    R: BufRead,
    W: Write,
    S: ScoreStore,
    G: Rng,
{
    pub fn new(input: R, output: W, store: S, bank: WordBank, rng: G) -> Self {
        Self {
            input,
            output,
            store,
            bank,
            rng,
        }
    }

    /// Plays a full round, then thanks the player and shows the leaderboard.
    pub fn run_round(&mut self) -> Result<RoundSummary> {
        let difficulty = self.select_difficulty()?;
        let category = self.select_category()?;
        let mut state = self.start_round(difficulty, &category)?;

        writeln!(self.output, "\nWelcome to the Advanced Word Guessing Game!")?;
        while state.status() == RoundStatus::InProgress {
            self.play_turn(&mut state)?;
        }
        let summary = self.finish_round(&mut state)?;

        writeln!(self.output, "Thanks for playing!")?;
        self.display_scoreboard()?;
        Ok(summary)
    }

    pub fn select_difficulty(&mut self) -> Result<Difficulty> {
        writeln!(self.output, "Choose Difficulty: Easy, Medium, Hard")?;
        self.ask("Enter difficulty: ", DIFFICULTY_RETRY, |_, raw| {
            parse_difficulty(raw)
        })
    }

    pub fn select_category(&mut self) -> Result<Category> {
        writeln!(self.output, "\nAvailable Categories:")?;
        for (idx, name) in self.bank.list_categories().iter().enumerate() {
            writeln!(self.output, "{}. {name}", idx + 1)?;
        }
        self.ask("Enter category number: ", CATEGORY_RETRY, |bank, raw| {
            bank.category_by_choice(raw).cloned()
        })
    }

    pub fn start_round(&mut self, difficulty: Difficulty, category: &Category) -> Result<GameState> {
        let entry = self.bank.pick_word(&category.name, &mut self.rng)?;
        GameState::new(&entry.word, &entry.hint, difficulty)
    }

    /// Shows the board, reads one line and applies it if it is a valid guess.
    pub fn play_turn(&mut self, state: &mut GameState) -> Result<()> {
        writeln!(self.output, "\nGuessed Word: {}", state.revealed())?;
        writeln!(self.output, "Attempts Left: {}", state.attempts_remaining())?;
        writeln!(self.output, "Hint: {}", state.hint())?;

        let line = self.read_line("Enter a letter: ")?;
        let letter = match parse_guess(&line) {
            Ok(letter) => letter,
            Err(e) => {
                debug!("{e}");
                writeln!(self.output, "{GUESS_RETRY}")?;
                return Ok(());
            }
        };

        match state.apply_guess(letter)? {
            GuessOutcome::Hit => writeln!(self.output, "Good guess! '{letter}' is in the word.")?,
            GuessOutcome::Miss => {
                writeln!(self.output, "Wrong guess. '{letter}' is not in the word.")?
            }
        }
        Ok(())
    }

    /// Announces the result and records the score of a won round.
    pub fn finish_round(&mut self, state: &mut GameState) -> Result<RoundSummary> {
        let status = state.status();
        let score = match status {
            RoundStatus::Won => {
                let score = state.record_score();
                writeln!(
                    self.output,
                    "\nCongratulations! You've guessed the word: {}",
                    state.word()
                )?;
                writeln!(self.output, "Your Score: {score}")?;
                let name = self.read_line("Enter your name for the scoreboard: ")?;
                self.store.append(ScoreEntry {
                    name,
                    score,
                    difficulty: state.difficulty(),
                })?;
                Some(score)
            }
            RoundStatus::Lost => {
                writeln!(self.output, "\nGame Over. The word was: {}", state.word())?;
                None
            }
            RoundStatus::InProgress => None,
        };

        Ok(RoundSummary {
            word: state.word(),
            difficulty: state.difficulty(),
            status,
            score,
        })
    }

    pub fn display_scoreboard(&mut self) -> Result<()> {
        let entries = self.store.load()?;
        if entries.is_empty() {
            writeln!(self.output, "\nNo scores yet.")?;
            return Ok(());
        }

        writeln!(self.output, "\n--- Scoreboard ---")?;
        for entry in leaderboard(&entries, LEADERBOARD_SIZE) {
            writeln!(
                self.output,
                "{} - {} ({})",
                entry.name, entry.score, entry.difficulty
            )?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts until `parse` accepts the line. Only validation errors reprompt.
    fn ask<T, F>(&mut self, prompt: &str, retry: &str, parse: F) -> Result<T>
    where
        F: Fn(&WordBank, &str) -> Result<T>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&self.bank, &line) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    debug!("{e}");
                    writeln!(self.output, "{retry}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(line)
    }
}
