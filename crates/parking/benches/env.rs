use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parking::{Action, ParkingConfig, ParkingEnv, Resettable, RewardEngine, Steppable};
use road::DVec2;
use vehicle::{Landmark, Vehicle};

fn bench_reward(c: &mut Criterion) {
    let engine = RewardEngine::from_config(&ParkingConfig::default()).unwrap();
    let car = Vehicle::new(DVec2::new(3.0, 1.0), 0.4, 2.0);
    let goal = Landmark::new(DVec2::new(-2.0, 14.0), std::f64::consts::FRAC_PI_2);
    c.bench_function("compute_reward", |b| {
        b.iter(|| engine.compute_reward(black_box(&car), black_box(&goal)));
    });
}

fn bench_episode(c: &mut Criterion) {
    let mut env = ParkingEnv::new(ParkingConfig { controlled_vehicles: 4, ..ParkingConfig::default() })
        .unwrap();
    env.reset(Some(0)).unwrap();
    let action = Action::Multi(vec![[0.3, 0.1]; 4]);
    c.bench_function("step_4_vehicles", |b| {
        b.iter(|| {
            let step = env.step(black_box(&action)).unwrap();
            if step.terminal {
                env.reset(None).unwrap();
            }
        });
    });
    c.bench_function("reset", |b| b.iter(|| env.reset(None).unwrap()));
}

criterion_group!(benches, bench_reward, bench_episode);
criterion_main!(benches);
