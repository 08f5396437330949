use anyhow::{Context, Result};
use clap::Parser;
use hangman::cli::{self, Cli, GameConfig};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GameConfig::from(Cli::parse());
    let stdin = BufReader::new(tokio::io::stdin());

    let result = cli::play(&config, stdin, std::io::stdout())
        .await
        .with_context(|| format!("hangman failed (assets: {})", config.assets_dir.display()))?;

    // Every way a game ends is a normal exit.
    tracing::debug!(?result, "game ended");
    Ok(())
}
