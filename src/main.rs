use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showdown::{score_batch, Tally};

/// Scores a batch of two-player 5-card poker showdowns.
///
/// The record file holds one showdown per line: ten whitespace-separated
/// card tokens, the first five for player one and the last five for
/// player two.
#[derive(Debug, Parser)]
#[command(name = "showdown", version)]
struct Args {
    /// Path to the record file
    file: PathBuf,

    /// Print the tally as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showdown=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let file = match File::open(&args.file) {
        Ok(file) => file,
        Err(err) => {
            tracing::error!(%err, path = %args.file.display(), "could not open record file");
            return ExitCode::FAILURE;
        }
    };

    let tally = match score_batch(BufReader::new(file)) {
        Ok(tally) => tally,
        Err(err) => {
            tracing::error!(%err, "batch aborted");
            return ExitCode::FAILURE;
        }
    };

    report(&tally, args.json);
    ExitCode::SUCCESS
}

fn report(tally: &Tally, json: bool) {
    if json {
        match serde_json::to_string_pretty(tally) {
            Ok(body) => println!("{}", body),
            Err(err) => tracing::error!(%err, "could not encode tally"),
        }
    } else {
        println!("Player 1: {} hands", tally.first_wins);
        println!("Player 2: {} hands", tally.second_wins);
        println!("Ties: {} hands", tally.ties);
    }
}
