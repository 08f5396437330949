use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::AsyncBufRead;
use tracing::{info, warn};

use crate::core::assets::GameAssets;
use crate::core::engine::Engine;
use crate::core::game::GameResult;
use crate::core::terminal::TerminalContext;
use crate::error::{HangmanError, Result};
use crate::games::hangman::{GameSession, HangmanRenderer};

#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Guess the hidden word, one letter at a time, level by level")]
#[command(version)]
pub struct Cli {
    /// Directory holding words.json and the message files
    #[arg(short, long, default_value = "assets")]
    pub assets: PathBuf,

    /// Level to start at
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub level: u32,

    /// Seed for word selection (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Seconds to wait for each guess before giving up
    #[arg(long, value_name = "SECS")]
    pub idle_timeout: Option<u64>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// Everything needed to start a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub assets_dir: PathBuf,
    pub start_level: u32,
    pub seed: Option<u64>,
    pub idle_timeout: Option<Duration>,
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            start_level: 1,
            seed: None,
            idle_timeout: None,
            color: true,
        }
    }
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        Self {
            assets_dir: cli.assets,
            start_level: cli.level,
            seed: cli.seed,
            idle_timeout: cli.idle_timeout.map(Duration::from_secs),
            color: !cli.no_color,
        }
    }
}

/// Load assets and play one game to the end on the given input and output.
pub async fn play<I, W>(config: &GameConfig, input: I, out: W) -> Result<GameResult>
where
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let assets = GameAssets::load(&config.assets_dir)?;
    if !assets.words.contains_level(config.start_level) {
        warn!(
            start_level = config.start_level,
            max_level = assets.words.max_level(),
            "start level not in word list"
        );
        return Err(HangmanError::LevelNotFound(config.start_level));
    }
    let words = Arc::new(assets.words.clone());

    let session = match config.seed {
        Some(seed) => GameSession::seeded(words, config.start_level, seed),
        None => GameSession::from_entropy(words, config.start_level),
    };
    let ctx = if config.color {
        TerminalContext::new(out)
    } else {
        TerminalContext::plain(out)
    };
    let renderer = HangmanRenderer::new(ctx, &assets);

    info!(
        start_level = config.start_level,
        max_level = assets.words.max_level(),
        seed = ?config.seed,
        "starting game"
    );

    let mut engine = Engine::new(session, renderer).with_idle_timeout(config.idle_timeout);
    engine.run(input).await
}
