/// Reinforcement learning environment trait.
///
/// Modeled on the reset/step interface popularized by OpenAI Gym. An episode
/// starts with [`reset`] and advances one tick per call to [`step`] until the
/// environment reports termination.
///
/// [`reset`]: Env::reset
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one discrete action.
    ///
    /// Returns `(obs, reward, done)` where `obs` is the new observation
    /// vector, `reward` is the scalar reward for this tick, and `done`
    /// indicates episode termination.
    fn step(&mut self, action: usize) -> (Vec<f32>, f32, bool);

    /// Reset the environment to a fresh starting state and return the
    /// initial observation vector.
    fn reset(&mut self) -> Vec<f32>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Number of discrete actions.
    fn action_size(&self) -> usize;

    /// One-line textual visualization of the current state.
    fn render(&self) -> String {
        String::new()
    }

    /// Rolling-average score at which the task counts as solved.
    fn solved_threshold(&self) -> f32;

    /// Maximum return a single episode can reach.
    fn reward_limit(&self) -> f32;
}
