//! Command line front end for weapon desirability scoring.
//!
//! Run with: `armory-cli <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Score, Sweep};

/// Score weapons with their fuzzy rule bases
#[derive(Parser)]
#[command(name = "armory-cli")]
#[command(about = "Fuzzy weapon desirability scoring", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Score every weapon for one situation and pick the best
    Score(Score),

    /// Print one weapon's desirability across a range of distances
    Sweep(Sweep),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Score(cmd) => cmd.execute(),
        Command::Sweep(cmd) => cmd.execute(),
    }
}
