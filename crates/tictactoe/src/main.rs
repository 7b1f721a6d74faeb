//! tictactoe - two players, one terminal.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe::{AppConfig, BoardRenderer, Cli, Console, Session, init_tracing};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli).context("Failed to load configuration")?;
    init_tracing(config.log_file().as_deref()).context("Failed to open log file")?;

    let rng = match cli.seed {
        Some(seed) => {
            info!(seed, "Seeding coin toss");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let renderer = BoardRenderer::from_config(&config);

    let mut session = Session::new(console, renderer, *config.symbols(), rng);
    let summary = session.run().context("Game session ended early")?;

    info!(
        rounds = summary.rounds(),
        player_one_wins = summary.player_one_wins(),
        player_two_wins = summary.player_two_wins(),
        draws = summary.draws(),
        "Goodbye"
    );
    Ok(())
}
