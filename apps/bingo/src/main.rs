mod config;
mod errors;
mod generation;
mod layout;
mod questions;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Cli, Config};
use crate::generation::bingo;

fn main() -> Result<()> {
    // Parse flags before anything else so --help never touches the environment.
    let cli = Cli::parse();

    // Load configuration (env / .env, then command-line overrides)
    let config = Config::from_env()?.with_cli(cli);

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bingo v{}", env!("CARGO_PKG_VERSION"));

    let mut rng = match config.seed {
        Some(seed) => {
            info!(seed, "Using fixed shuffle seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let cards = bingo(&config, &mut rng).with_context(|| {
        format!(
            "Failed to generate cards from {}",
            config.questions_path.display()
        )
    })?;

    for card in &cards {
        info!(
            index = card.index,
            rows = card.shape.rows,
            cols = card.shape.cols,
            "Card written to {}",
            card.path.display()
        );
    }
    info!(
        "Generated {} card(s) in {}",
        cards.len(),
        config.output_dir.display()
    );
    Ok(())
}
