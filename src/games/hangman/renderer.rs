/// Hangman-specific renderer - injected into the engine
use std::io::{self, Write};

use rand_core::RngCore;

use crate::core::assets::GameAssets;
use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::game::{GameSession, GuessOutcome, RoundStatus};

const RULE: &str = "--------------------------------------------------------------------------";

pub struct HangmanRenderer<W: Write> {
    ctx: TerminalContext<W>,
    welcome_message: String,
    winner_message: String,
}

impl<W: Write> HangmanRenderer<W> {
    pub fn new(ctx: TerminalContext<W>, assets: &GameAssets) -> Self {
        Self {
            ctx,
            welcome_message: assets.welcome_message.clone(),
            winner_message: assets.winner_message.clone(),
        }
    }

    pub fn into_inner(self) -> W {
        self.ctx.into_inner()
    }

    fn winner(&mut self, solved_word: &str) -> io::Result<()> {
        self.ctx.print_colored_line(&format!("You found the word {solved_word}!"), TerminalColor::Green)?;
        self.ctx.print_line(self.winner_message.trim_end())
    }
}

impl<W: Write, R: RngCore> GameRenderer<GameSession<R>> for HangmanRenderer<W> {
    fn welcome(&mut self) -> io::Result<()> {
        self.ctx.print_line(self.welcome_message.trim_end())?;
        self.ctx.flush()
    }

    fn round_started(&mut self, round: &RoundStatus) -> io::Result<()> {
        self.ctx.print_line(RULE)?;
        self.ctx.empty_line()?;
        self.ctx.print_colored_line(
            &format!("Welcome to round {} of Hangman.", round.round),
            TerminalColor::Cyan,
        )?;
        self.ctx.print_line(&format!(
            "You are at level {}, which gives you {} guesses.",
            round.level, round.max_tries
        ))?;
        self.ctx.empty_line()?;
        self.ctx.print_line(&format!(
            "Try to guess this {} letter word: {}",
            round.word_len, round.masked_word
        ))?;
        self.ctx.empty_line()?;
        self.ctx.print_line(RULE)?;
        self.ctx.flush()
    }

    fn prompt(&mut self, game: &GameSession<R>) -> io::Result<()> {
        self.ctx.empty_line()?;
        match game.tries_left() {
            1 => self.ctx.print_colored_line("Last try!", TerminalColor::Yellow)?,
            n => self.ctx.print_line(&format!("{n} tries left."))?,
        }
        self.ctx.print_line(&format!("Current word {}", game.masked_word()))?;
        self.ctx.print("Type in your next guess: ")?;
        self.ctx.flush()
    }

    fn invalid_input(&mut self, _input: &str) -> io::Result<()> {
        self.ctx.empty_line()?;
        self.ctx.print_colored_line(
            "Please, write only one (1) character at each guess",
            TerminalColor::Yellow,
        )?;
        self.ctx.flush()
    }

    fn turn_played(&mut self, outcome: &GuessOutcome) -> io::Result<()> {
        self.ctx.empty_line()?;
        self.ctx.print_line(&format!("You guessed {}", outcome.guess()))?;

        match outcome {
            GuessOutcome::Miss { .. } => {
                self.ctx.print_colored_line("Sorry, not in the hidden word!", TerminalColor::Red)?;
            }
            GuessOutcome::GameOver { hidden_word, .. } => {
                self.ctx.print_colored_line("Sorry, not in the hidden word!", TerminalColor::Red)?;
                self.ctx.print_line(&format!("The word was {hidden_word}."))?;
                self.ctx.print_colored_line("Game over", TerminalColor::Red)?;
            }
            GuessOutcome::PartialReveal { .. } => {
                self.ctx.print_colored_line("Congrats! You've revealed one letter!", TerminalColor::Green)?;
            }
            GuessOutcome::RoundWon { solved_word, next_round, .. } => {
                self.winner(solved_word)?;
                self.ctx.print_line(&format!("Level up! On to level {}.", next_round.level))?;
                GameRenderer::<GameSession<R>>::round_started(self, next_round)?;
            }
            GuessOutcome::GameComplete { solved_word, .. } => {
                self.winner(solved_word)?;
                self.ctx.print_colored_line(
                    "CHAMP! You've completed the final level.",
                    TerminalColor::Green,
                )?;
            }
        }
        self.ctx.flush()
    }

    fn abandoned(&mut self) -> io::Result<()> {
        self.ctx.empty_line()?;
        self.ctx.print_line("No more input. Game over")?;
        self.ctx.flush()
    }

    fn timed_out(&mut self) -> io::Result<()> {
        self.ctx.empty_line()?;
        self.ctx.print_colored_line("Too slow! Game over", TerminalColor::Red)?;
        self.ctx.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::WordBank;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn assets() -> GameAssets {
        let mut levels = BTreeMap::new();
        levels.insert(1, vec!["dog".to_string()]);
        levels.insert(2, vec!["horse".to_string()]);
        GameAssets {
            words: WordBank::new(levels).unwrap(),
            welcome_message: "WELCOME\n".into(),
            winner_message: "WINNER\n".into(),
        }
    }

    fn render(f: impl FnOnce(&mut HangmanRenderer<Vec<u8>>, &mut GameSession)) -> String {
        let assets = assets();
        let mut session = GameSession::seeded(Arc::new(assets.words.clone()), 1, 3);
        let mut renderer = HangmanRenderer::new(TerminalContext::plain(Vec::new()), &assets);
        f(&mut renderer, &mut session);
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn round_banner_lists_round_details() {
        let out = render(|r, s| {
            let status = s.start_round().unwrap();
            GameRenderer::<GameSession>::round_started(r, &status).unwrap();
        });
        assert!(out.contains("Welcome to round 1 of Hangman."));
        assert!(out.contains("You are at level 1, which gives you 3 guesses."));
        assert!(out.contains("Try to guess this 3 letter word: ***"));
    }

    #[test]
    fn prompt_warns_on_last_try() {
        let out = render(|r, s| {
            s.start_round().unwrap();
            GameRenderer::<GameSession>::prompt(r, s).unwrap();
            s.submit_guess("x").unwrap();
            s.submit_guess("y").unwrap();
            GameRenderer::<GameSession>::prompt(r, s).unwrap();
        });
        assert!(out.contains("3 tries left."));
        assert!(out.contains("Last try!"));
        assert!(out.contains("Current word ***"));
        assert!(out.ends_with("Type in your next guess: "));
    }

    #[test]
    fn level_up_shows_winner_message_and_next_round() {
        let out = render(|r, s| {
            s.start_round().unwrap();
            s.submit_guess("d").unwrap();
            s.submit_guess("o").unwrap();
            let outcome = s.submit_guess("g").unwrap();
            GameRenderer::<GameSession>::turn_played(r, &outcome).unwrap();
        });
        assert!(out.contains("You guessed g"));
        assert!(out.contains("WINNER"));
        assert!(out.contains("Welcome to round 2 of Hangman."));
        assert!(out.contains("You are at level 2, which gives you 6 guesses."));
        assert!(!out.contains("CHAMP"));
    }

    #[test]
    fn game_over_reveals_word() {
        let out = render(|r, _| {
            let outcome = GuessOutcome::GameOver { guess: 'q', hidden_word: "dog".into() };
            GameRenderer::<GameSession>::turn_played(r, &outcome).unwrap();
        });
        assert!(out.contains("The word was dog."));
        assert!(out.trim_end().ends_with("Game over"));
    }
}
