//! # Environment layer
//!
//! Simulation environments for the polesearch harness.
//!
//! The [`Env`] trait defines a gym-style interface: an environment is reset
//! at the start of an episode, stepped with a discrete action until it
//! reports termination, and can describe its observation and action spaces.
//! Each environment also carries the constants that drive the harness's
//! convergence logic: the rolling-average score at which the task counts as
//! solved and the maximum return an episode can reach.
//!
//! The only environment currently implemented is [`CartPole`], a native
//! rendition of the classic cart-pole balancing benchmark.

pub mod cartpole;
pub mod env;

pub use cartpole::{CartPole, CartPoleConfig};
pub use env::Env;
