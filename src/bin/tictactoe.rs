//! Console Tic-Tac-Toe against a heuristic computer opponent.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use parlor::{Console, MatchOptions, MatchTable};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Tic-Tac-Toe against the computer.
#[derive(Parser, Debug)]
#[command(name = "tictactoe", version, about, long_about = None)]
struct Args {
    /// Seed for the computer's random choices; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// Round wins needed to become grand champion
    #[arg(long, default_value_t = 3)]
    score_to_win: u32,
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
    let options = MatchOptions::default().with_score_to_win(args.score_to_win);
    info!(seed, score_to_win = options.score_to_win, "starting tic-tac-toe");

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut table = MatchTable::seat(console, options, seed)?;
    table.play()?;

    Ok(())
}
