/// Generic game renderer trait, injected into the engine
use std::io;

use crate::core::game::TurnGame;

/// Turns game events into console output. No game logic lives here.
pub trait GameRenderer<G: TurnGame> {
    /// Shown once before the first round
    fn welcome(&mut self) -> io::Result<()>;

    fn round_started(&mut self, round: &G::Round) -> io::Result<()>;

    /// Shown before every line is read
    fn prompt(&mut self, game: &G) -> io::Result<()>;

    fn invalid_input(&mut self, input: &str) -> io::Result<()>;

    fn turn_played(&mut self, outcome: &G::Outcome) -> io::Result<()>;

    fn abandoned(&mut self) -> io::Result<()>;

    fn timed_out(&mut self) -> io::Result<()>;
}
