//! Application logic for the polesearch binary.
//!
//! Builds the environment and agent from the CLI options, drives the trial
//! driver in the `search` crate, and hands results to the plotting layer.

use anyhow::Result;
use clap::Args;
use envs::{CartPole, Env};
use search::{solve_distribution, Agent, RunOptions, Session, SolveStatistics};
use std::path::PathBuf;

use crate::plot;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Maximum number of training episodes.
    #[arg(long, default_value_t = 1000)]
    pub episodes: usize,
    /// Base RNG seed for the environment and the agent.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Perturb around the best weights instead of sampling fresh ones.
    #[arg(long)]
    pub hill_climbing: bool,
    /// Scale of the hill-climbing perturbation.
    #[arg(long, default_value_t = 1.0)]
    pub hill_rate: f32,
    /// Log a textual frame for every simulation step.
    #[arg(long)]
    pub render: bool,
    /// Write the per-episode score curve to this SVG file.
    #[arg(long)]
    pub plot: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Number of independent trials.
    #[arg(long, default_value_t = 100)]
    pub trials: usize,
    /// Episode budget per trial.
    #[arg(long, default_value_t = 1000)]
    pub max_episodes: usize,
    /// Base RNG seed; trial i derives its seeds from seed + i.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Perturb around the best weights instead of sampling fresh ones.
    #[arg(long)]
    pub hill_climbing: bool,
    /// Scale of the hill-climbing perturbation.
    #[arg(long, default_value_t = 1.0)]
    pub hill_rate: f32,
    /// Write the episodes-to-solve histogram to this SVG file.
    #[arg(long)]
    pub plot: Option<PathBuf>,
    /// Print the summary as JSON instead of log lines.
    #[arg(long)]
    pub json: bool,
}

fn build_session(env_seed: u64, hill_climbing: bool, hill_rate: f32) -> Session<CartPole> {
    let env = CartPole::new(env_seed);
    let mut agent = Agent::new(env.obs_size(), env_seed.wrapping_add(1));
    agent.hill_climbing = hill_climbing;
    agent.hill_rate = hill_rate;
    Session::new(env, agent)
}

/// One training run: sample policies, apply the greedy update after every
/// episode, stop once the rolling average clears the solved threshold.
pub fn run(args: &RunArgs) -> Result<()> {
    tracing_subscriber::fmt::init();

    let env = CartPole::new(args.seed);
    tracing::info!(
        observations = env.obs_size(),
        actions = env.action_size(),
        solved_threshold = env.solved_threshold(),
        "environment ready"
    );
    let mut agent = Agent::new(env.obs_size(), args.seed.wrapping_add(1));
    agent.hill_climbing = args.hill_climbing;
    agent.hill_rate = args.hill_rate;
    let mut session = Session::new(env, agent);

    let outcome = session.run(
        args.episodes,
        &RunOptions {
            render: args.render,
            log_episodes: true,
        },
    );
    match outcome.solved_at {
        Some(episode) => tracing::info!(episode, "task solved"),
        None => tracing::info!(
            episodes = outcome.scores.len(),
            "episode budget exhausted before solving"
        ),
    }
    session.agent().save();

    if let Some(path) = &args.plot {
        plot::score_curve(path, &outcome.scores)?;
        tracing::info!(path = %path.display(), "score curve written");
    }
    Ok(())
}

/// Repeated independent trials; reports the episodes-to-solve distribution.
pub fn stats(args: &StatsArgs) -> Result<()> {
    tracing_subscriber::fmt::init();

    let sample = solve_distribution(
        |trial| {
            build_session(
                args.seed.wrapping_add(trial as u64),
                args.hill_climbing,
                args.hill_rate,
            )
        },
        args.trials,
        args.max_episodes,
    );

    let summary = SolveStatistics::from_sample(&sample);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        tracing::info!(
            trials = summary.trials,
            mean = summary.mean,
            std_dev = summary.std_dev,
            min = summary.min,
            max = summary.max,
            median = summary.median,
            "episodes to solve"
        );
    }

    if let Some(path) = &args.plot {
        plot::solve_histogram(path, &summary)?;
        tracing::info!(path = %path.display(), "histogram written");
    }
    Ok(())
}
