use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use startrader_lib::{load_world, load_world_seeded};

#[derive(Parser, Debug)]
#[command(author, version, about = "Star Trader - an interstellar trading game")]
struct Cli {
    /// Path to the world-definition file.
    world_file: PathBuf,

    /// Override the price-generator seed.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut world = match cli.seed {
        Some(seed) => load_world_seeded(&cli.world_file, seed),
        None => load_world(&cli.world_file),
    }
    .with_context(|| format!("failed to load world from {}", cli.world_file.display()))?;

    startrader_cli::session::run(&mut world)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
