//! Error types for Hangman

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HangmanError {
    #[error("Failed to load asset {path:?}: {reason}")]
    AssetLoad { path: PathBuf, reason: String },

    #[error("Invalid word list: {0}")]
    InvalidWordBank(String),

    #[error("No words configured for level {0}")]
    LevelNotFound(u32),

    #[error("Invalid guess {0:?}: type exactly one character")]
    InvalidGuess(String),

    #[error("No round in progress")]
    NoActiveRound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HangmanError {
    pub(crate) fn asset(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        HangmanError::AssetLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the driver can re-prompt and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, HangmanError::InvalidGuess(_))
    }
}

pub type Result<T> = std::result::Result<T, HangmanError>;
