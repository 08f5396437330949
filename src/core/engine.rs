use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::core::game::{GameResult, TurnGame};
use crate::core::renderer::GameRenderer;
use crate::error::Result;

/// Line-driven game loop: prompt, read, apply, render, until the game ends.
pub struct Engine<G: TurnGame, R: GameRenderer<G>> {
    game: G,
    renderer: R,
    idle_timeout: Option<Duration>,
}

impl<G: TurnGame, R: GameRenderer<G>> Engine<G, R> {
    pub fn new(game: G, renderer: R) -> Self {
        Self {
            game,
            renderer,
            idle_timeout: None,
        }
    }

    /// Give up when no line arrives within `timeout` of a prompt.
    pub fn with_idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub async fn run<I>(&mut self, input: I) -> Result<GameResult>
    where
        I: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        self.renderer.welcome()?;
        let round = self.game.start()?;
        self.renderer.round_started(&round)?;

        loop {
            if let Some(result) = self.game.result() {
                info!(?result, "game finished");
                return Ok(result);
            }

            self.renderer.prompt(&self.game)?;

            let next = match self.idle_timeout {
                Some(limit) => match tokio::time::timeout(limit, lines.next_line()).await {
                    Ok(line) => line?,
                    Err(_) => {
                        warn!(?limit, "no guess before idle timeout");
                        self.renderer.timed_out()?;
                        return Ok(GameResult::TimedOut);
                    }
                },
                None => lines.next_line().await?,
            };

            let Some(line) = next else {
                info!("input closed before the game ended");
                self.renderer.abandoned()?;
                return Ok(GameResult::Abandoned);
            };

            match self.game.play_turn(&line) {
                Ok(outcome) => self.renderer.turn_played(&outcome)?,
                Err(e) if e.is_recoverable() => {
                    warn!(input = %line, "rejected guess: {e}");
                    self.renderer.invalid_input(&line)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn into_parts(self) -> (G, R) {
        (self.game, self.renderer)
    }
}
