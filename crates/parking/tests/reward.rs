use parking::{ParkingConfig, ParkingError, RewardEngine};
use vehicle::{Feature, FeatureRecord, Landmark, Vehicle};
use road::DVec2;

fn default_engine() -> RewardEngine {
    RewardEngine::from_config(&ParkingConfig::default()).unwrap()
}

fn pose(x: f64, y: f64, heading: f64) -> FeatureRecord {
    FeatureRecord::from_pose(x, y, heading, 0.0, 0.0)
}

#[test]
fn reward_is_zero_only_at_the_goal() {
    for p in [0.1, 0.5, 1.0, 2.0] {
        let engine = RewardEngine::new(
            vec![Feature::X, Feature::Y, Feature::CosH, Feature::SinH],
            vec![0.01, 0.003, 0.02, 0.02],
            p,
            0.12,
        )
        .unwrap();
        let goal = pose(-2.0, 14.0, std::f64::consts::FRAC_PI_2);
        assert_eq!(engine.compute_reward(&goal, &goal), 0.0);
        assert!(engine.compute_reward(&pose(-2.0, 14.001, std::f64::consts::FRAC_PI_2), &goal) < 0.0);
    }
}

#[test]
fn reward_decreases_strictly_with_each_weighted_difference() {
    let engine = default_engine();
    let goal = pose(0.0, 0.0, 0.0);
    for feature in [Feature::X, Feature::Y, Feature::CosH, Feature::SinH] {
        let mut previous = 0.0;
        for k in 1..=20 {
            let mut achieved = goal;
            achieved.set(feature, goal.get(feature) + f64::from(k) * 0.5);
            let r = engine.compute_reward(&achieved, &goal);
            assert!(r < previous, "{feature}: {r} !< {previous}");
            previous = r;
        }
    }
}

#[test]
fn zero_weighted_features_do_not_matter() {
    let engine = default_engine();
    let goal = pose(1.0, 2.0, 0.5);
    let moving = FeatureRecord::from_pose(1.0, 2.0, 0.5, 3.0, -4.0);
    assert_eq!(engine.compute_reward(&moving, &goal), 0.0);
}

#[test]
fn success_threshold_is_strict() {
    let engine = RewardEngine::new(vec![Feature::X], vec![1.0], 0.5, 0.5).unwrap();
    let goal = pose(0.0, 0.0, 0.0);
    // sqrt(0.25) = 0.5 exactly
    let boundary = pose(0.25, 0.0, 0.0);
    assert_eq!(engine.compute_reward(&boundary, &goal), -0.5);
    assert!(!engine.is_success(&boundary, &goal));
    assert!(engine.is_success(&pose(0.24, 0.0, 0.0), &goal));
    assert!(!engine.is_success(&pose(0.26, 0.0, 0.0), &goal));
}

#[test]
fn aggregate_reward_is_a_sum() {
    let engine = default_engine();
    let goal = Landmark::new(DVec2::new(-2.0, 14.0), std::f64::consts::FRAC_PI_2);
    let cars = vec![
        Vehicle::new(DVec2::ZERO, 0.0, 0.0),
        Vehicle::new(DVec2::new(20.0, 0.0), 1.0, 0.0),
        Vehicle::new(DVec2::new(40.0, 0.0), 2.0, 0.0),
    ];
    let individual: f64 = cars.iter().map(|c| engine.compute_reward(c, &goal)).sum();
    assert_eq!(engine.total_reward(&cars, &goal), individual);
    assert!(engine.total_reward(&cars, &goal) < engine.total_reward(&cars[..1], &goal));
}

#[test]
fn nan_features_propagate() {
    let engine = default_engine();
    let goal = pose(0.0, 0.0, 0.0);
    let mut broken = goal;
    broken.set(Feature::Y, f64::NAN);
    assert!(engine.compute_reward(&broken, &goal).is_nan());
    assert!(!engine.is_success(&broken, &goal));
    match engine.checked_reward(&broken, &goal) {
        Err(ParkingError::NumericAnomaly { feature }) => assert_eq!(feature, Feature::Y),
        other => panic!("expected a numeric anomaly, got {other:?}"),
    }
    assert_eq!(engine.checked_reward(&goal, &goal).unwrap(), 0.0);
}

#[test]
fn nan_in_an_unconfigured_feature_is_ignored() {
    let engine = RewardEngine::new(vec![Feature::X], vec![1.0], 0.5, 0.1).unwrap();
    let goal = pose(0.0, 0.0, 0.0);
    let mut achieved = goal;
    achieved.set(Feature::Heading, f64::NAN);
    assert_eq!(engine.compute_reward(&achieved, &goal), 0.0);
}
