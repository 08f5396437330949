/// Single-player hangman with level progression
pub mod game;
pub mod renderer;

pub use game::{GameSession, GuessOutcome, RoundStatus};
pub use renderer::HangmanRenderer;
