use rand::Rng;
use rand_distr::StandardNormal;

/// Single-layer linear scoring function with a trailing bias weight.
///
/// Holds two parameter vectors: the live weights used for scoring and a kept
/// snapshot of the best weights found so far. Both have `obs_size + 1`
/// entries; the last entry is the bias.
pub struct LinearPolicy {
    pub weights: Vec<f32>,
    kept: Vec<f32>,
}

impl LinearPolicy {
    /// Create a policy with standard-normal initial weights, immediately
    /// kept as the starting snapshot.
    pub fn new(obs_size: usize, rng: &mut impl Rng) -> Self {
        let mut policy = Self {
            weights: vec![0.0; obs_size + 1],
            kept: vec![0.0; obs_size + 1],
        };
        policy.randomize(rng);
        policy.keep();
        policy
    }

    /// Dot product of the observation with the weights, plus the bias.
    #[must_use]
    pub fn score(&self, obs: &[f32]) -> f32 {
        debug_assert_eq!(obs.len() + 1, self.weights.len());
        let bias = self.weights[self.weights.len() - 1];
        obs.iter().zip(&self.weights).map(|(x, w)| x * w).sum::<f32>() + bias
    }

    /// Replace every weight with a fresh standard-normal draw.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        for w in &mut self.weights {
            *w = rng.sample(StandardNormal);
        }
    }

    /// Set the weights to the kept snapshot plus `rate`-scaled Gaussian noise.
    pub fn perturb(&mut self, rate: f32, rng: &mut impl Rng) {
        for (w, &k) in self.weights.iter_mut().zip(&self.kept) {
            let noise: f32 = rng.sample(StandardNormal);
            *w = k + rate * noise;
        }
    }

    /// Snapshot the live weights as the kept set.
    pub fn keep(&mut self) {
        self.kept.copy_from_slice(&self.weights);
    }

    /// Overwrite the live weights with the kept set.
    pub fn restore(&mut self) {
        self.weights.copy_from_slice(&self.kept);
    }

    /// The kept snapshot.
    #[must_use]
    pub fn kept_weights(&self) -> &[f32] {
        &self.kept
    }
}
