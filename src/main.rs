//! BlackJack: console card game against the bank
//!
//! Plays interactive rounds on stdin/stdout and keeps a JSON leaderboard.

use anyhow::{Context, Result};
use blackjack_cli::store::DEFAULT_SCORES_FILE;
use blackjack_cli::{RngSource, ScoreStore, Session};
use clap::Parser;
use log::{debug, info};
use std::io;
use std::path::PathBuf;

/// BlackJack in the terminal
///
/// Get as close to 21 as you can without going over, and beat the bank.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Leaderboard file (created on first use)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_SCORES_FILE)]
    scores: PathBuf,

    /// Seed for the card source, for a reproducible session
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Enable logging on stderr (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Quiet by default so log lines don't interleave with the game screen
    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("BlackJack v{}", env!("CARGO_PKG_VERSION"));
    debug!("Scores: {:?}", args.scores);

    let rng = match args.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            RngSource::seeded(seed)
        }
        None => RngSource::from_entropy(),
    };

    let store = ScoreStore::new(&args.scores);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), rng, store);

    let stats = session
        .run()
        .with_context(|| format!("Game session failed (leaderboard {:?})", args.scores))?;

    info!(
        "Played {} rounds, saved {} to {:?}",
        stats.rounds_played, stats.rounds_saved, args.scores
    );

    Ok(())
}
