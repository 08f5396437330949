/// Core game interface driven by the console engine
use crate::error::Result;

/// How a game ended, as seen by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The player finished the final level
    Won,
    /// The player ran out of tries
    Lost,
    /// Input closed before the game ended
    Abandoned,
    /// No guess arrived within the idle timeout
    TimedOut,
}

/// Main trait for line-driven, turn-based games.
/// The engine owns the game and calls these one at a time.
pub trait TurnGame {
    /// Status produced when a round begins
    type Round;

    /// Result of a single accepted turn
    type Outcome;

    /// Begin the first round
    fn start(&mut self) -> Result<Self::Round>;

    /// Apply one line of player input.
    /// Recoverable errors (see `HangmanError::is_recoverable`) leave the game unchanged.
    fn play_turn(&mut self, input: &str) -> Result<Self::Outcome>;

    /// `Some` once the game has reached a terminal state
    fn result(&self) -> Option<GameResult>;
}
