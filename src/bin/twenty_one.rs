//! Console 21: one player against the dealer.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use parlor::{Console, TwentyOne, TwentyOneTable};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play 21 against the dealer.
#[derive(Parser, Debug)]
#[command(name = "twenty_one", version, about, long_about = None)]
struct Args {
    /// Seed for shuffling; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!(seed, "starting 21");

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut table = TwentyOneTable::seat(console, TwentyOne::new(seed))?;
    table.play()?;

    Ok(())
}
