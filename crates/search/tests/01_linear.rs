use rand::rngs::SmallRng;
use rand::SeedableRng;
use search::LinearPolicy;

#[test]
fn score_is_dot_product_plus_bias() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut policy = LinearPolicy::new(4, &mut rng);
    policy.weights.copy_from_slice(&[1.0, 2.0, -1.0, 0.5, 0.25]);
    let score = policy.score(&[1.0, 1.0, 1.0, 2.0]);
    assert!((score - (1.0 + 2.0 - 1.0 + 1.0 + 0.25)).abs() < 1e-6);
}

#[test]
fn bias_is_applied_exactly_once() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut policy = LinearPolicy::new(4, &mut rng);
    policy.weights.copy_from_slice(&[3.0, -2.0, 1.0, 4.0, 0.75]);
    assert!((policy.score(&[0.0; 4]) - 0.75).abs() < 1e-6);
}

#[test]
fn score_is_linear_in_the_observation() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut policy = LinearPolicy::new(4, &mut rng);
    // zero bias so scaling the input scales the score
    let last = policy.weights.len() - 1;
    policy.weights[last] = 0.0;
    let obs = [0.3, -1.2, 0.7, 2.0];
    let doubled: Vec<f32> = obs.iter().map(|v| v * 2.0).collect();
    let a = policy.score(&obs);
    let b = policy.score(&doubled);
    assert!((b - 2.0 * a).abs() < 1e-5, "a={a} b={b}");
}

#[test]
fn keep_and_restore_round_trip() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut policy = LinearPolicy::new(4, &mut rng);
    policy.weights.copy_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    policy.keep();
    policy.randomize(&mut rng);
    assert_ne!(policy.weights, policy.kept_weights());
    policy.restore();
    assert_eq!(policy.weights, &[1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn zero_rate_perturbation_reproduces_the_kept_weights() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut policy = LinearPolicy::new(4, &mut rng);
    policy.weights.copy_from_slice(&[1.0, -1.0, 0.5, -0.5, 0.0]);
    policy.keep();
    policy.perturb(0.0, &mut rng);
    assert_eq!(policy.weights, policy.kept_weights());
}

#[test]
fn new_policy_keeps_its_initial_draw() {
    let mut rng = SmallRng::seed_from_u64(5);
    let policy = LinearPolicy::new(4, &mut rng);
    assert_eq!(policy.weights.len(), 5);
    assert_eq!(policy.weights, policy.kept_weights());
}
