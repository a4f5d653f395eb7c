//! Entry point for the polesearch binary.
//!
//! Two subcommands: `run` performs a single training run and can plot the
//! per-episode score curve; `stats` repeats independent trials and reports
//! the episodes-to-solve distribution, optionally as JSON or as a histogram
//! SVG.

mod app;
mod plot;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "polesearch",
    about = "Random-search training harness for the CartPole control benchmark"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train once and report when the task was solved.
    Run(app::RunArgs),
    /// Repeat independent trials and report the episodes-to-solve distribution.
    Stats(app::StatsArgs),
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Run(args) => app::run(&args),
        Command::Stats(args) => app::stats(&args),
    }
}
