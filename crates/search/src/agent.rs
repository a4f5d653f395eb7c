use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::linear::LinearPolicy;

/// Random-search agent over a [`LinearPolicy`].
///
/// Between episodes the agent resamples its policy parameters: a fresh
/// Gaussian draw by default, or a perturbation around the kept weights when
/// `hill_climbing` is set. After each episode the greedy rule keeps the
/// parameters whenever the return is at least as good as the best seen so
/// far.
pub struct Agent {
    policy: LinearPolicy,
    rng: SmallRng,
    /// Perturb around the kept weights instead of sampling fresh ones.
    pub hill_climbing: bool,
    /// Scale of the hill-climbing perturbation.
    pub hill_rate: f32,
    best_return: f32,
    accepted: usize,
}

impl Agent {
    #[must_use]
    pub fn new(obs_size: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let policy = LinearPolicy::new(obs_size, &mut rng);
        Self {
            policy,
            rng,
            hill_climbing: false,
            hill_rate: 1.0,
            best_return: 0.0,
            accepted: 0,
        }
    }

    /// Prepare the policy for a new episode.
    ///
    /// When `exploit` is set the kept weights are restored unchanged;
    /// otherwise a fresh parameter sample is drawn.
    pub fn begin_episode(&mut self, exploit: bool) {
        if exploit {
            self.policy.restore();
        } else if self.hill_climbing {
            self.policy.perturb(self.hill_rate, &mut self.rng);
        } else {
            self.policy.randomize(&mut self.rng);
        }
    }

    /// Map an observation to a discrete action: 0 when the score is
    /// positive, 1 otherwise.
    #[must_use]
    pub fn act(&self, obs: &[f32]) -> usize {
        usize::from(self.policy.score(obs) <= 0.0)
    }

    /// Greedy update: keep the current weights if the episode return is at
    /// least as good as the best so far. Returns whether the update was
    /// accepted.
    pub fn observe_return(&mut self, ret: f32) -> bool {
        if ret >= self.best_return {
            self.best_return = ret;
            self.policy.keep();
            self.accepted += 1;
            return true;
        }
        false
    }

    #[must_use]
    pub fn best_return(&self) -> f32 {
        self.best_return
    }

    /// Number of accepted greedy updates.
    #[must_use]
    pub fn accepted_updates(&self) -> usize {
        self.accepted
    }

    #[must_use]
    pub fn policy(&self) -> &LinearPolicy {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut LinearPolicy {
        &mut self.policy
    }

    /// Log the kept weights. Parameters are never written to disk; this is
    /// the harness's only "save" operation.
    pub fn save(&self) {
        tracing::info!(weights = ?self.policy.kept_weights(), "kept policy weights");
    }
}
