//! Scripted policies used by the runner.

use std::f64::consts::{FRAC_PI_4, PI, TAU};

use clap::ValueEnum;
use parking::{Action, ParkingEnv};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Never accelerate or steer
    Idle,
    /// Uniform random actions
    Random,
    /// Steer towards the goal and slow down on arrival
    Seek,
}

pub struct Policy {
    kind: PolicyKind,
    rng: fastrand::Rng,
}

/// Wrap an angle to `(-π, π]`.
fn wrap(angle: f64) -> f64 {
    let a = (angle + PI).rem_euclid(TAU) - PI;
    if a == -PI { PI } else { a }
}

impl Policy {
    pub fn new(kind: PolicyKind, seed: u64) -> Self {
        Self { kind, rng: fastrand::Rng::with_seed(seed) }
    }

    pub fn act(&mut self, env: &ParkingEnv) -> Action {
        let vehicles = env.controlled_vehicles();
        let Some(goal) = env.goal() else {
            return Action::idle(vehicles.len());
        };
        let mut actions: Vec<[f64; 2]> = vehicles
            .iter()
            .map(|v| match self.kind {
                PolicyKind::Idle => [0.0, 0.0],
                PolicyKind::Random => [self.rng.f64() * 2.0 - 1.0, self.rng.f64() * 2.0 - 1.0],
                PolicyKind::Seek => {
                    let to_goal = goal.position - v.position;
                    let distance = to_goal.length();
                    let error = wrap(to_goal.y.atan2(to_goal.x) - v.heading);
                    let target_speed = (0.5 * distance).min(3.0);
                    let acceleration = ((target_speed - v.speed) / 2.0).clamp(-1.0, 1.0);
                    [acceleration, (error / FRAC_PI_4).clamp(-1.0, 1.0)]
                }
            })
            .collect();
        if actions.len() == 1 {
            Action::Single(actions.remove(0))
        } else {
            Action::Multi(actions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_angles_in_range() {
        assert!((wrap(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
        assert!((wrap(-PI) - PI).abs() < 1e-12);
        assert!((wrap(0.3) - 0.3).abs() < 1e-12);
    }
}
