pub mod cli;
pub mod core;
pub mod error;
pub mod games;

// Re-export for convenience
pub use crate::core::game::{GameResult, TurnGame};
pub use crate::error::{HangmanError, Result};
