use crate::difficulty::Difficulty;
use crate::error::{GameError, Result};
use log::debug;

pub const PLACEHOLDER: char = '_';

const BASE_SCORE: u32 = 100;
const MISS_PENALTY: u32 = 10;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    Miss,
}

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Validates one line of guess input.
///
/// The line terminator is dropped, nothing else: the guess must be exactly
/// one alphabetic character. Returns it lowercased.
pub fn parse_guess(raw: &str) -> Result<char> {
    let line = raw.trim_end_matches(&['\r', '\n'][..]);
    let invalid = || GameError::InvalidGuess(line.to_string());

    let mut chars = line.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => c,
        _ => return Err(invalid()),
    };

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Ok(l),
        _ => Err(invalid()),
    }
}

/// The round being played: hidden word, what has been revealed so far,
/// and the miss count against the difficulty's allowance.
#[derive(Debug, Clone)]
pub struct GameState {
    selected_word: Vec<char>,
    hint: String,
    revealed: Vec<char>,
    wrong_attempts: u32,
    max_attempts: u32,
    difficulty: Difficulty,
    score: u32,
}

impl GameState {
    pub fn new(word: &str, hint: &str, difficulty: Difficulty) -> Result<Self> {
        let selected_word: Vec<char> = word.to_lowercase().chars().collect();
        if selected_word.is_empty() {
            return Err(GameError::InvalidWord(word.to_string()));
        }

        Ok(Self {
            revealed: vec![PLACEHOLDER; selected_word.len()],
            selected_word,
            hint: hint.to_string(),
            wrong_attempts: 0,
            max_attempts: difficulty.max_attempts(),
            difficulty,
            score: 0,
        })
    }

    /// Reveals every occurrence of `letter`, or counts a miss.
    ///
    /// Guessing an already revealed letter is a hit and costs nothing.
    /// Repeating a wrong letter is a fresh miss each time.
    pub fn apply_guess(&mut self, letter: char) -> Result<GuessOutcome> {
        let letter = parse_guess(&letter.to_string())?;

        let mut hit = false;
        for (slot, &c) in self.revealed.iter_mut().zip(&self.selected_word) {
            if c == letter {
                *slot = c;
                hit = true;
            }
        }

        let outcome = if hit {
            GuessOutcome::Hit
        } else {
            self.wrong_attempts += 1;
            GuessOutcome::Miss
        };
        debug!(
            "guess {letter:?}: {outcome:?}, {} of {} misses used",
            self.wrong_attempts, self.max_attempts
        );
        Ok(outcome)
    }

    pub fn is_won(&self) -> bool {
        self.revealed == self.selected_word
    }

    pub fn is_lost(&self) -> bool {
        self.wrong_attempts >= self.max_attempts && !self.is_won()
    }

    pub fn status(&self) -> RoundStatus {
        if self.is_won() {
            RoundStatus::Won
        } else if self.is_lost() {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    pub fn compute_score(&self) -> u32 {
        BASE_SCORE.saturating_sub(self.wrong_attempts.saturating_mul(MISS_PENALTY))
            * self.difficulty.multiplier()
    }

    /// Captures the final score for this round.
    pub fn record_score(&mut self) -> u32 {
        self.score = self.compute_score();
        self.score
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.wrong_attempts)
    }

    pub fn revealed(&self) -> String {
        self.revealed.iter().collect()
    }

    pub fn word(&self) -> String {
        self.selected_word.iter().collect()
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn guess_all(state: &mut GameState, letters: &str) {
        for c in letters.chars() {
            state.apply_guess(c).unwrap();
        }
    }

    #[test]
    fn new_round_is_fully_masked() {
        let state = GameState::new("Tiger", "Striped predator", Difficulty::Medium).unwrap();
        assert_eq!(state.word(), "tiger");
        assert_eq!(state.revealed(), "_____");
        assert_eq!(state.wrong_attempts(), 0);
        assert_eq!(state.max_attempts(), 10);
        assert_eq!(state.score(), 0);
        assert_eq!(state.hint(), "Striped predator");
        assert_eq!(state.status(), RoundStatus::InProgress);
    }

    #[test]
    fn word_is_lowercased_not_trimmed() {
        let state = GameState::new(" TiGeR ", "", Difficulty::Easy).unwrap();
        assert_eq!(state.word(), " tiger ");
        assert_eq!(state.revealed(), "_______");
    }

    #[test]
    fn empty_word_is_rejected() {
        assert_matches!(
            GameState::new("", "nothing", Difficulty::Easy),
            Err(GameError::InvalidWord(_))
        );
    }

    #[test]
    fn tiger_on_medium() {
        let mut state = GameState::new("tiger", "Striped predator", Difficulty::Medium).unwrap();
        let expected = ["t____", "ti___", "tig__", "tige_", "tiger"];
        for (c, pattern) in "tiger".chars().zip(expected) {
            assert_eq!(state.apply_guess(c).unwrap(), GuessOutcome::Hit);
            assert_eq!(state.revealed(), pattern);
        }
        assert!(state.is_won());
        assert!(!state.is_lost());
        assert_eq!(state.wrong_attempts(), 0);
        assert_eq!(state.compute_score(), 200);
    }

    #[test]
    fn japan_on_hard_is_lost() {
        let mut state = GameState::new("japan", "Land of the Rising Sun", Difficulty::Hard).unwrap();
        for c in ['x', 'q', 'z', 'w', 'y'] {
            assert_eq!(state.apply_guess(c).unwrap(), GuessOutcome::Miss);
        }
        assert_eq!(state.wrong_attempts(), 5);
        assert!(state.is_lost());
        assert!(!state.is_won());
        assert_eq!(state.status(), RoundStatus::Lost);
        assert_eq!(state.attempts_remaining(), 0);
    }

    #[test]
    fn hit_reveals_every_occurrence() {
        let mut state = GameState::new("banana", "fruit", Difficulty::Easy).unwrap();
        state.apply_guess('a').unwrap();
        assert_eq!(state.revealed(), "_a_a_a");
        state.apply_guess('n').unwrap();
        assert_eq!(state.revealed(), "_anana");
    }

    #[test]
    fn repeated_hit_is_idempotent() {
        let mut state = GameState::new("elephant", "trunk", Difficulty::Easy).unwrap();
        assert_eq!(state.apply_guess('e').unwrap(), GuessOutcome::Hit);
        let after_first = state.revealed();
        assert_eq!(state.apply_guess('e').unwrap(), GuessOutcome::Hit);
        assert_eq!(state.revealed(), after_first);
        assert_eq!(state.wrong_attempts(), 0);
    }

    #[test]
    fn repeated_miss_counts_every_time() {
        let mut state = GameState::new("tiger", "Striped predator", Difficulty::Hard).unwrap();
        guess_all(&mut state, "zzz");
        assert_eq!(state.wrong_attempts(), 3);
        assert_eq!(state.attempts_remaining(), 2);
    }

    #[test]
    fn uppercase_guess_is_normalized() {
        let mut state = GameState::new("dolphin", "marine", Difficulty::Easy).unwrap();
        assert_eq!(state.apply_guess('D').unwrap(), GuessOutcome::Hit);
        assert_eq!(state.revealed(), "d______");
    }

    #[test]
    fn non_letter_guess_leaves_state_alone() {
        let mut state = GameState::new("canada", "maple", Difficulty::Medium).unwrap();
        assert_matches!(state.apply_guess('3'), Err(GameError::InvalidGuess(_)));
        assert_matches!(state.apply_guess(' '), Err(GameError::InvalidGuess(_)));
        assert_eq!(state.wrong_attempts(), 0);
        assert_eq!(state.revealed(), "______");
    }

    #[test]
    fn any_order_of_correct_letters_wins_cleanly() {
        let bank = crate::word_bank::WordBank::builtin().unwrap();
        for name in bank.list_categories() {
            for entry in &bank.category(name).unwrap().words {
                let mut letters: Vec<char> = entry.word.chars().collect();
                letters.sort_unstable();
                letters.dedup();

                let mut orders = Vec::new();
                for shift in 0..letters.len() {
                    let mut rotated = letters.clone();
                    rotated.rotate_left(shift);
                    orders.push(rotated.clone());
                    rotated.reverse();
                    orders.push(rotated);
                }

                for order in orders {
                    let mut state = GameState::new(&entry.word, &entry.hint, Difficulty::Hard).unwrap();
                    for c in &order {
                        assert!(!state.is_won());
                        assert_eq!(state.apply_guess(*c).unwrap(), GuessOutcome::Hit);
                    }
                    assert!(state.is_won(), "{} via {order:?}", entry.word);
                    assert_eq!(state.wrong_attempts(), 0);
                }
            }
        }
    }

    #[test]
    fn max_distinct_misses_lose_on_every_difficulty() {
        for difficulty in Difficulty::ALL {
            let mut state = GameState::new("q", "", difficulty).unwrap();
            let misses: Vec<char> = ('a'..='z')
                .filter(|&c| c != 'q')
                .take(difficulty.max_attempts() as usize)
                .collect();
            let (last, before) = misses.split_last().unwrap();
            for &c in before {
                state.apply_guess(c).unwrap();
                assert!(!state.is_lost());
            }
            state.apply_guess(*last).unwrap();
            assert!(state.is_lost(), "{difficulty} should be lost");
        }
    }

    #[test]
    fn win_checked_before_loss() {
        let mut state = GameState::new("ab", "", Difficulty::Hard).unwrap();
        guess_all(&mut state, "xyzw");
        guess_all(&mut state, "a");
        state.apply_guess('b').unwrap();
        assert!(state.is_won());
        assert!(!state.is_lost());
        assert_eq!(state.status(), RoundStatus::Won);
    }

    #[test]
    fn score_floors_at_zero_and_scales() {
        for difficulty in Difficulty::ALL {
            let mut state = GameState::new("tiger", "", difficulty).unwrap();
            let mut previous = state.compute_score();
            assert_eq!(previous, 100 * difficulty.multiplier());
            for _ in 0..difficulty.max_attempts() {
                state.apply_guess('z').unwrap();
                let current = state.compute_score();
                assert!(current <= previous);
                previous = current;
            }
        }

        let mut easy = GameState::new("tiger", "", Difficulty::Easy).unwrap();
        guess_all(&mut easy, &"z".repeat(12));
        assert_eq!(easy.compute_score(), 0);
    }

    #[test]
    fn record_score_captures_current_score() {
        let mut state = GameState::new("tiger", "", Difficulty::Hard).unwrap();
        guess_all(&mut state, "qtiger");
        assert_eq!(state.record_score(), 270);
        assert_eq!(state.score(), 270);
    }

    #[test]
    fn parse_guess_rules() {
        assert_eq!(parse_guess("a\n").unwrap(), 'a');
        assert_eq!(parse_guess("Q\r\n").unwrap(), 'q');
        assert_matches!(parse_guess(""), Err(GameError::InvalidGuess(_)));
        assert_matches!(parse_guess("ab"), Err(GameError::InvalidGuess(_)));
        assert_matches!(parse_guess(" a"), Err(GameError::InvalidGuess(_)));
        assert_matches!(parse_guess("7"), Err(GameError::InvalidGuess(_)));
        assert_matches!(parse_guess("?"), Err(GameError::InvalidGuess(_)));
    }
}
