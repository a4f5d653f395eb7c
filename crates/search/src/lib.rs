//! # Learning layer
//!
//! Random-search policy optimization for the polesearch harness.
//!
//! The pieces, bottom-up:
//!
//! -   [`LinearPolicy`]: a single affine transform scoring an observation
//!     vector, with a snapshot of the best weights seen so far.
//! -   [`Agent`]: samples policy parameters between episodes (fresh Gaussian
//!     draws, or hill-climbing perturbations around the kept set), maps
//!     scores to discrete actions, and applies the greedy keep-if-not-worse
//!     update rule.
//! -   [`Session`]: rolls out episodes against an [`envs::Env`], tracks the
//!     rolling-average solved condition, and repeats independent trials to
//!     sample the episodes-to-solve distribution.
//! -   [`SolveStatistics`]: summary of that distribution for reporting.

pub mod agent;
pub mod linear;
pub mod stats;
pub mod trial;

pub use agent::Agent;
pub use linear::LinearPolicy;
pub use stats::{HistogramBin, SolveStatistics, HISTOGRAM_BINS};
pub use trial::{
    rolling_average_met, solve_distribution, EpisodeOutcome, RunOptions, RunOutcome, Session,
    SOLVED_WINDOW,
};
