//! Continuous actions: `[acceleration, steering]`, each in `[-1, 1]`.

use vehicle::Control;

use crate::config::{ActionConfig, ParkingConfig};
use crate::error::ParkingError;

/// Policy output for one step.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Single controlled vehicle
    Single([f64; 2]),
    /// One action per controlled vehicle, in spawn order
    Multi(Vec<[f64; 2]>),
}

impl Action {
    /// Do-nothing action for `count` controlled vehicles.
    #[must_use]
    pub fn idle(count: usize) -> Self {
        if count == 1 {
            Self::Single([0.0, 0.0])
        } else {
            Self::Multi(vec![[0.0, 0.0]; count])
        }
    }

    fn as_slice(&self) -> &[[f64; 2]] {
        match self {
            Self::Single(a) => std::slice::from_ref(a),
            Self::Multi(actions) => actions,
        }
    }
}

/// Linear map of `value` from `[-1, 1]` to `[lo, hi]`.
fn lmap(value: f64, [lo, hi]: [f64; 2]) -> f64 {
    lo + (value + 1.0) * (hi - lo) / 2.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContinuousAction {
    acceleration_range: [f64; 2],
    steering_range: [f64; 2],
}

impl ContinuousAction {
    #[must_use]
    pub fn from_config(config: &ParkingConfig) -> Self {
        let ActionConfig::ContinuousAction(action) = &config.action;
        Self {
            acceleration_range: action.acceleration_range,
            steering_range: [-config.steering_range, config.steering_range],
        }
    }

    /// Clip an action to `[-1, 1]` and scale it to a vehicle command.
    #[must_use]
    pub fn to_control(&self, action: [f64; 2]) -> Control {
        let [acceleration, steering] = action.map(|a| a.clamp(-1.0, 1.0));
        Control {
            acceleration: lmap(acceleration, self.acceleration_range),
            steering: lmap(steering, self.steering_range),
        }
    }

    /// Commands for `count` controlled vehicles.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::ActionShape`] if the action does not carry
    /// exactly one entry per controlled vehicle.
    pub fn controls(&self, action: &Action, count: usize) -> Result<Vec<Control>, ParkingError> {
        let actions = action.as_slice();
        if actions.len() != count {
            return Err(ParkingError::ActionShape { expected: count, got: actions.len() });
        }
        Ok(actions.iter().map(|&a| self.to_control(a)).collect())
    }
}
