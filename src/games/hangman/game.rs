use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_core::RngCore;
use tracing::{debug, info};

use crate::core::assets::WordBank;
use crate::core::game::{GameResult, TurnGame};
use crate::error::{HangmanError, Result};

/// Symbol shown for letters not yet revealed
pub const MASK: char = '*';

/// Incorrect guesses allowed per level
pub const TRIES_PER_LEVEL: u32 = 3;

pub fn max_tries_for_level(level: u32) -> u32 {
    TRIES_PER_LEVEL * level
}

/// Snapshot emitted whenever a round begins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStatus {
    pub round: u32,
    pub level: u32,
    pub max_tries: u32,
    pub word_len: usize,
    pub masked_word: String,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Miss { guess: char, tries_left: u32 },
    /// The miss that used up the last try
    GameOver { guess: char, hidden_word: String },
    PartialReveal { guess: char, masked_word: String },
    /// Word solved below the final level; the next round has already started
    RoundWon { guess: char, solved_word: String, next_round: RoundStatus },
    /// Word solved on the final level
    GameComplete { guess: char, solved_word: String },
}

impl GuessOutcome {
    pub fn guess(&self) -> char {
        match self {
            GuessOutcome::Miss { guess, .. }
            | GuessOutcome::GameOver { guess, .. }
            | GuessOutcome::PartialReveal { guess, .. }
            | GuessOutcome::RoundWon { guess, .. }
            | GuessOutcome::GameComplete { guess, .. } => *guess,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GuessOutcome::GameOver { .. } | GuessOutcome::GameComplete { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Active,
    GameOver,
    Complete,
}

/// Single-player, multi-level hangman session
pub struct GameSession<R = StdRng> {
    words: Arc<WordBank>,
    rng: R,
    phase: Phase,
    level: u32,
    round_count: u32,
    max_tries: u32,
    current_tries: u32,
    hidden_word: Vec<char>,
    masked_word: Vec<char>,
}

impl GameSession<StdRng> {
    /// Session with a deterministic word sequence
    pub fn seeded(words: Arc<WordBank>, start_level: u32, seed: u64) -> Self {
        Self::new(words, start_level, StdRng::seed_from_u64(seed))
    }

    /// Session seeded from the operating system
    pub fn from_entropy(words: Arc<WordBank>, start_level: u32) -> Self {
        Self::new(words, start_level, StdRng::from_os_rng())
    }
}

impl<R: RngCore> GameSession<R> {
    pub fn new(words: Arc<WordBank>, start_level: u32, rng: R) -> Self {
        Self {
            words,
            rng,
            phase: Phase::Idle,
            level: start_level,
            round_count: 0,
            max_tries: 0,
            current_tries: 0,
            hidden_word: Vec::new(),
            masked_word: Vec::new(),
        }
    }

    /// Pick a fresh word for the current level and reset the try counters.
    pub fn start_round(&mut self) -> Result<RoundStatus> {
        let candidates = self.words.words_for_level(self.level)?;
        let word = &candidates[self.rng.random_range(0..candidates.len())];

        self.round_count += 1;
        self.max_tries = max_tries_for_level(self.level);
        self.current_tries = 0;
        self.hidden_word = word.chars().collect();
        self.masked_word = vec![MASK; self.hidden_word.len()];
        self.phase = Phase::Active;

        info!(
            round = self.round_count,
            level = self.level,
            max_tries = self.max_tries,
            word_len = self.hidden_word.len(),
            "round started"
        );

        Ok(self.round_status())
    }

    /// Apply one line of input as a guess.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome> {
        if self.phase != Phase::Active {
            return Err(HangmanError::NoActiveRound);
        }

        let mut chars = input.chars();
        let guess = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(HangmanError::InvalidGuess(input.to_string())),
        };

        // Every matching slot takes the typed character, even if already revealed.
        let mut found = false;
        for (slot, &hidden) in self.masked_word.iter_mut().zip(&self.hidden_word) {
            if same_letter(hidden, guess) {
                *slot = guess;
                found = true;
            }
        }

        let outcome = if !found {
            self.current_tries += 1;
            if self.current_tries >= self.max_tries {
                self.phase = Phase::GameOver;
                info!(level = self.level, round = self.round_count, "out of tries");
                GuessOutcome::GameOver {
                    guess,
                    hidden_word: self.hidden_word(),
                }
            } else {
                GuessOutcome::Miss {
                    guess,
                    tries_left: self.tries_left(),
                }
            }
        } else if !self.is_round_won() {
            GuessOutcome::PartialReveal {
                guess,
                masked_word: self.masked_word(),
            }
        } else if self.level >= self.words.max_level() {
            self.phase = Phase::Complete;
            info!(level = self.level, rounds = self.round_count, "final level cleared");
            GuessOutcome::GameComplete {
                guess,
                solved_word: self.masked_word(),
            }
        } else {
            let solved_word = self.masked_word();
            self.level += 1;
            info!(level = self.level, "level up");
            let next_round = self.start_round()?;
            GuessOutcome::RoundWon {
                guess,
                solved_word,
                next_round,
            }
        };

        debug!(?outcome, tries = self.current_tries, "guess applied");
        Ok(outcome)
    }

    /// True when every slot of the mask matches the hidden word.
    pub fn is_round_won(&self) -> bool {
        !self.hidden_word.is_empty()
            && self
                .masked_word
                .iter()
                .zip(&self.hidden_word)
                .all(|(&shown, &hidden)| same_letter(shown, hidden))
    }

    /// True once the session has reached either terminal state.
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver | Phase::Complete)
    }

    pub fn round_status(&self) -> RoundStatus {
        RoundStatus {
            round: self.round_count,
            level: self.level,
            max_tries: self.max_tries,
            word_len: self.hidden_word.len(),
            masked_word: self.masked_word(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    pub fn max_tries(&self) -> u32 {
        self.max_tries
    }

    pub fn current_tries(&self) -> u32 {
        self.current_tries
    }

    pub fn tries_left(&self) -> u32 {
        self.max_tries - self.current_tries
    }

    pub fn masked_word(&self) -> String {
        self.masked_word.iter().collect()
    }

    pub fn hidden_word(&self) -> String {
        self.hidden_word.iter().collect()
    }
}

impl<R: RngCore> TurnGame for GameSession<R> {
    type Round = RoundStatus;
    type Outcome = GuessOutcome;

    fn start(&mut self) -> Result<RoundStatus> {
        self.start_round()
    }

    fn play_turn(&mut self, input: &str) -> Result<GuessOutcome> {
        self.submit_guess(input)
    }

    fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::Complete => Some(GameResult::Won),
            Phase::GameOver => Some(GameResult::Lost),
            Phase::Idle | Phase::Active => None,
        }
    }
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
