use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use perfect_ttt::config::{GameConfig, ThemeKind};
use perfect_ttt::console::{Console, Theme};
use perfect_ttt::Game;

#[derive(Parser)]
#[command(name = "perfect-ttt")]
#[command(version, about = "Play tic-tac-toe against a perfect minimax opponent", long_about = None)]
struct Cli {
    /// Names and messages to use
    #[arg(long, value_enum, default_value_t = ThemeKind::Marvel)]
    theme: ThemeKind,

    /// Seed for the computer's choice between equally good moves
    #[arg(long)]
    seed: Option<u64>,

    /// Memoize position scores between turns
    #[arg(long)]
    cache: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level))
        )
        .with_writer(io::stderr)
        .init();

    let mut config = GameConfig::new()
        .with_theme(cli.theme)
        .with_cache(cli.cache);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    info!(?config, "starting game");

    let mut rng = config.rng();
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), Theme::from(config.theme));
    let mut game = Game::new(&config);
    let outcome = game.play_out(&mut rng, &mut console).context("game aborted")?;

    let stats = game.ranker().stats();
    info!(%outcome, states = stats.state_scored_count, cache_hits = stats.cache_hit_count, "game over");
    Ok(())
}
