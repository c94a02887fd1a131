//! Terminal dungeon crawler.
//!
//! Loads a level and plays it turn by turn from standard input.
//!
//! # Examples
//!
//! ```bash
//! cargo run -p crawler-client -- levels/level2.txt
//! RUST_LOG=debug CRAWLER_STRICT_SYMBOLS=true cargo run -p crawler-client
//! ```
mod config;
mod session;

use std::io;

use anyhow::{Context, Result};
use config::ClientConfig;
use game_content::LevelLoader;
use session::Session;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = ClientConfig::from_env().with_level_arg(std::env::args().nth(1));
    tracing::debug!("Client configuration: {:?}", config);

    let level = LevelLoader::with_policy(config.symbol_policy)
        .load(&config.level_path)
        .with_context(|| format!("cannot start level {}", config.level_path.display()))?;

    println!("Move with w/a/s/d, wait with e, quit with q. Press Enter to play.");

    let mut session = Session::new(level, config.game);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let end = session.run(stdin.lock(), &mut stdout)?;

    tracing::info!(
        "Session ended after {} turns with {} treasure: {:?}",
        session.turns(),
        session.level().treasure(),
        end
    );
    println!("{}", end.message());
    Ok(())
}

/// Logs go to stderr so they never interleave with the map on stdout.
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
