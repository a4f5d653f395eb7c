//! Episode rollout and trial driver.

use envs::Env;

use crate::agent::Agent;

/// Number of trailing episodes averaged by the solved condition.
pub const SOLVED_WINDOW: usize = 100;

/// Options for a training run.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Log a textual frame for every simulation step.
    pub render: bool,
    /// Log per-episode progress.
    pub log_episodes: bool,
}

/// Result of a single episode rollout.
pub struct EpisodeOutcome {
    /// Total accumulated reward.
    pub ret: f32,
    /// Number of environment steps taken.
    pub steps: u32,
}

/// Result of a training run.
pub struct RunOutcome {
    /// Per-episode returns, in order.
    pub scores: Vec<f32>,
    /// Index of the episode at which the solved condition first held, or
    /// `None` if the episode budget ran out first.
    pub solved_at: Option<usize>,
}

/// True when at least `window` scores exist and the mean of the last
/// `window` of them meets the threshold.
#[must_use]
pub fn rolling_average_met(scores: &[f32], window: usize, threshold: f32) -> bool {
    if scores.len() < window {
        return false;
    }
    let tail = &scores[scores.len() - window..];
    tail.iter().sum::<f32>() / window as f32 >= threshold
}

/// One environment paired with one agent, driven episode by episode.
pub struct Session<E: Env> {
    env: E,
    agent: Agent,
}

impl<E: Env> Session<E> {
    #[must_use]
    pub fn new(env: E, agent: Agent) -> Self {
        Self { env, agent }
    }

    #[must_use]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }

    /// Roll out one episode from reset to termination.
    ///
    /// When `exploit` is set the agent replays its kept weights; otherwise it
    /// draws a fresh parameter sample first.
    pub fn run_episode(&mut self, exploit: bool, render: bool) -> EpisodeOutcome {
        self.agent.begin_episode(exploit);
        let mut obs = self.env.reset();
        let mut ret = 0.0;
        let mut steps = 0u32;
        loop {
            if render {
                tracing::info!("{}", self.env.render());
            }
            let action = self.agent.act(&obs);
            let (next_obs, reward, done) = self.env.step(action);
            obs = next_obs;
            ret += reward;
            steps += 1;
            if done {
                break;
            }
        }
        EpisodeOutcome { ret, steps }
    }

    /// Train for up to `max_episodes` episodes, stopping early once the
    /// rolling-average solved condition holds.
    ///
    /// Sampling switches to pure exploitation after the first episode that
    /// reaches the environment's reward limit; from then on every episode
    /// replays the kept weights.
    pub fn run(&mut self, max_episodes: usize, opts: &RunOptions) -> RunOutcome {
        let mut exploit = false;
        let mut scores = Vec::with_capacity(max_episodes);
        for episode in 0..max_episodes {
            let outcome = self.run_episode(exploit, opts.render);
            self.agent.observe_return(outcome.ret);
            if outcome.ret >= self.env.reward_limit() {
                exploit = true;
            }
            if opts.log_episodes {
                tracing::info!(episode, steps = outcome.steps, score = outcome.ret, "episode complete");
            }
            scores.push(outcome.ret);
            if rolling_average_met(&scores, SOLVED_WINDOW, self.env.solved_threshold()) {
                tracing::info!(
                    "solved after {} episodes",
                    scores.len() - SOLVED_WINDOW
                );
                return RunOutcome {
                    scores,
                    solved_at: Some(episode),
                };
            }
        }
        RunOutcome {
            scores,
            solved_at: None,
        }
    }
}

/// Repeat independent training runs and collect, for each, the episode index
/// at which the task was solved. Unsolved trials record `max_episodes`.
pub fn solve_distribution<E, F>(
    mut make_session: F,
    trials: usize,
    max_episodes: usize,
) -> Vec<usize>
where
    E: Env,
    F: FnMut(usize) -> Session<E>,
{
    let mut sample = Vec::with_capacity(trials);
    for trial in 0..trials {
        let mut session = make_session(trial);
        let outcome = session.run(max_episodes, &RunOptions::default());
        let episodes = outcome.solved_at.unwrap_or(max_episodes);
        tracing::info!(trial, episodes, "trial finished");
        sample.push(episodes);
    }
    sample
}
