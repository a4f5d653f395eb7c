//! # polesearch
//!
//! A minimal reinforcement-learning experiment harness: a single-layer
//! linear policy is trained on the CartPole balancing benchmark by random
//! search (optionally hill-climbing around the best weights), a rolling
//! 100-episode average decides when the task is solved, and repeated
//! independent trials yield the distribution of episodes-to-solve.
//!
//! ## The crates
//!
//! -   **`polesearch`:** this crate; the documentation entry point and the
//!     CLI binary with its `run` and `stats` subcommands.
//! -   **[`envs`]:** the environment layer. A gym-style [`envs::Env`] trait
//!     and a native implementation of the classic CartPole dynamics with the
//!     200-step episode cap.
//! -   **[`search`]:** the learning layer. The linear scoring function, the
//!     random-search agent with its greedy keep-if-not-worse update, the
//!     episode rollout and trial driver, and the solve-time statistics.
//!
//! ## How training works
//!
//! Each episode the agent draws fresh Gaussian policy weights (or perturbs
//! the kept set when hill-climbing), rolls the episode out, and keeps the
//! weights whenever the return is at least as good as the best seen so far.
//! Once any episode reaches the 200-step reward limit the harness switches
//! to pure exploitation and replays the kept weights. The task counts as
//! solved when the average of the last 100 episode returns reaches 195.

pub use envs;
pub use search;
