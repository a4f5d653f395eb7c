use envs::{CartPole, Env};

#[test]
fn spaces_match_the_classic_task() {
    let env = CartPole::new(0);
    assert_eq!(env.obs_size(), 4);
    assert_eq!(env.action_size(), 2);
    assert_eq!(env.solved_threshold(), 195.0);
    assert_eq!(env.reward_limit(), 200.0);
}

#[test]
fn reset_starts_near_the_upright_equilibrium() {
    let mut env = CartPole::new(3);
    for _ in 0..20 {
        let obs = env.reset();
        assert_eq!(obs.len(), 4);
        for v in obs {
            assert!(v.abs() < 0.05, "reset component out of range: {v}");
        }
    }
}

/// A constant push drives the cart off the track well before the step cap.
#[test]
fn constant_push_ends_the_episode() {
    let mut env = CartPole::new(5);
    let _ = env.reset();
    let mut steps = 0;
    let mut done = false;
    while !done && steps < 200 {
        let (_obs, _r, d) = env.step(1);
        done = d;
        steps += 1;
    }
    assert!(done, "episode should terminate under constant force");
    assert!(steps < 200, "termination should come from the limits, not the cap");
}

#[test]
fn push_direction_matches_the_action() {
    let mut env = CartPole::new(7);
    let _ = env.reset();
    let mut obs = Vec::new();
    for _ in 0..10 {
        let (o, _r, _d) = env.step(1);
        obs = o;
    }
    assert!(obs[1] > 0.0, "cart should gain velocity to the right");

    let _ = env.reset();
    for _ in 0..10 {
        let (o, _r, _d) = env.step(0);
        obs = o;
    }
    assert!(obs[1] < 0.0, "cart should gain velocity to the left");
}

#[test]
fn each_step_is_worth_one_reward() {
    let mut env = CartPole::new(11);
    let _ = env.reset();
    let (_obs, reward, _done) = env.step(0);
    assert_eq!(reward, 1.0);
}

/// Bang-bang feedback on the pole angle keeps the episode alive until the
/// 200-step cap, so the return equals the reward limit.
#[test]
fn simple_feedback_reaches_the_step_cap() {
    let mut env = CartPole::new(13);
    let mut obs = env.reset();
    let mut ret = 0.0;
    loop {
        let action = usize::from(3.0 * obs[2] + obs[3] > 0.0);
        let (o, r, done) = env.step(action);
        obs = o;
        ret += r;
        if done {
            break;
        }
    }
    assert_eq!(ret, env.reward_limit(), "feedback controller should survive to the cap");
}

#[test]
fn render_draws_the_track() {
    let mut env = CartPole::new(17);
    let _ = env.reset();
    let frame = env.render();
    assert!(frame.contains('['), "frame: {frame}");
    assert!(frame.contains("x="), "frame: {frame}");
}
