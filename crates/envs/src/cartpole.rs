//! Cart-pole balancing benchmark.
//!
//! Native implementation of the classic control task: a pole is hinged to a
//! cart that slides along a frictionless track, and the agent pushes the cart
//! left or right to keep the pole upright. Dynamics, termination limits and
//! the 200-step episode cap follow the reference CartPole-v0 task.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::env::Env;

/// Width of the textual track drawn by [`CartPole::render`].
const TRACK_CELLS: usize = 41;

/// Physical constants and limits for a [`CartPole`] instance.
#[derive(Clone, Debug)]
pub struct CartPoleConfig {
    /// Gravitational acceleration in m/s^2.
    pub gravity: f32,
    /// Cart mass in kg.
    pub cart_mass: f32,
    /// Pole mass in kg.
    pub pole_mass: f32,
    /// Half the pole length in meters.
    pub half_length: f32,
    /// Magnitude of the force applied to the cart per action.
    pub force_mag: f32,
    /// Integration time step in seconds.
    pub tau: f32,
    /// Cart position at which the episode fails (meters from center).
    pub x_limit: f32,
    /// Pole angle at which the episode fails (radians from vertical).
    pub angle_limit: f32,
    /// Episode length cap in steps.
    pub max_steps: u32,
    /// Rolling-average score at which the task counts as solved.
    pub solved_threshold: f32,
}

impl Default for CartPoleConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            cart_mass: 1.0,
            pole_mass: 0.1,
            half_length: 0.5,
            force_mag: 10.0,
            tau: 0.02,
            x_limit: 2.4,
            angle_limit: 12.0_f32.to_radians(),
            max_steps: 200,
            solved_threshold: 195.0,
        }
    }
}

/// The cart-pole environment.
///
/// State is `[x, x_dot, theta, theta_dot]`: cart position and velocity, pole
/// angle from vertical and pole angular velocity. Positive `theta` leans the
/// pole toward positive `x`. Action 0 pushes the cart left, action 1 pushes
/// it right. Every step is worth a reward of 1, so the maximum return equals
/// the episode cap.
pub struct CartPole {
    config: CartPoleConfig,
    state: [f32; 4],
    steps: u32,
    rng: SmallRng,
}

impl CartPole {
    /// Create a cart-pole with the default configuration and a seeded RNG
    /// for the reset distribution.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(CartPoleConfig::default(), seed)
    }

    #[must_use]
    pub fn with_config(config: CartPoleConfig, seed: u64) -> Self {
        Self {
            config,
            state: [0.0; 4],
            steps: 0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Current state vector `[x, x_dot, theta, theta_dot]`.
    #[must_use]
    pub fn state(&self) -> [f32; 4] {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &CartPoleConfig {
        &self.config
    }

    fn failed(&self) -> bool {
        let [x, _, theta, _] = self.state;
        x.abs() > self.config.x_limit || theta.abs() > self.config.angle_limit
    }
}

impl Env for CartPole {
    fn step(&mut self, action: usize) -> (Vec<f32>, f32, bool) {
        let force = if action == 1 {
            self.config.force_mag
        } else {
            -self.config.force_mag
        };

        let [x, x_dot, theta, theta_dot] = self.state;
        let (sin, cos) = theta.sin_cos();
        let total_mass = self.config.cart_mass + self.config.pole_mass;
        let pole_moment = self.config.pole_mass * self.config.half_length;

        let temp = (force + pole_moment * theta_dot * theta_dot * sin) / total_mass;
        let theta_acc = (self.config.gravity * sin - cos * temp)
            / (self.config.half_length
                * (4.0 / 3.0 - self.config.pole_mass * cos * cos / total_mass));
        let x_acc = temp - pole_moment * theta_acc * cos / total_mass;

        // Explicit Euler, positions updated with the previous velocities.
        let tau = self.config.tau;
        self.state = [
            x + tau * x_dot,
            x_dot + tau * x_acc,
            theta + tau * theta_dot,
            theta_dot + tau * theta_acc,
        ];
        self.steps += 1;

        let done = self.failed() || self.steps >= self.config.max_steps;
        (self.state.to_vec(), 1.0, done)
    }

    fn reset(&mut self) -> Vec<f32> {
        for v in &mut self.state {
            *v = self.rng.gen_range(-0.05..0.05);
        }
        self.steps = 0;
        self.state.to_vec()
    }

    fn obs_size(&self) -> usize {
        4
    }

    fn action_size(&self) -> usize {
        2
    }

    fn render(&self) -> String {
        let [x, _, theta, _] = self.state;
        let span = 2.0 * self.config.x_limit;
        let cell = ((x + self.config.x_limit) / span * (TRACK_CELLS - 1) as f32)
            .round()
            .clamp(0.0, (TRACK_CELLS - 1) as f32) as usize;
        let pole = if theta > 0.05 {
            '/'
        } else if theta < -0.05 {
            '\\'
        } else {
            '|'
        };
        let mut track: Vec<char> = vec!['-'; TRACK_CELLS];
        track[cell] = pole;
        let track: String = track.into_iter().collect();
        format!("[{track}] x={x:+.2} theta={theta:+.3}")
    }

    fn solved_threshold(&self) -> f32 {
        self.config.solved_threshold
    }

    fn reward_limit(&self) -> f32 {
        self.config.max_steps as f32
    }
}
