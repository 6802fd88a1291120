//! # Environment Configuration
//!
//! [`ParkingConfig`] holds every option of the parking task. It deserializes
//! from JSON with every field optional: missing fields take the default
//! value. Construction of an environment always goes through
//! [`ParkingConfig::validate`], so a bad option fails before the first reset.

use road::LotLayout;
use serde::{Deserialize, Serialize};
use vehicle::Feature;

use crate::error::ConfigError;

const DEFAULT_FEATURES: [Feature; 6] = [
    Feature::X,
    Feature::Y,
    Feature::Vx,
    Feature::Vy,
    Feature::CosH,
    Feature::SinH,
];

/// Observation type and its parameters, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObservationConfig {
    KinematicsGoal(KinematicsGoalConfig),
}

impl Default for ObservationConfig {
    fn default() -> Self {
        Self::KinematicsGoal(KinematicsGoalConfig::default())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicsGoalConfig {
    pub features: Vec<Feature>,
    /// Divisor applied to each feature, in `features` order
    pub scales: Vec<f64>,
    /// Clip scaled values to [-1, 1]
    pub normalize: bool,
}

impl Default for KinematicsGoalConfig {
    fn default() -> Self {
        Self {
            features: DEFAULT_FEATURES.to_vec(),
            scales: vec![100.0, 100.0, 5.0, 5.0, 1.0, 1.0],
            normalize: false,
        }
    }
}

/// Action type and its parameters, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActionConfig {
    ContinuousAction(ContinuousActionConfig),
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self::ContinuousAction(ContinuousActionConfig::default())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuousActionConfig {
    /// Acceleration reached at action -1 and +1, in m/s²
    pub acceleration_range: [f64; 2],
}

impl Default for ContinuousActionConfig {
    fn default() -> Self {
        Self { acceleration_range: [-5.0, 5.0] }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkingConfig {
    pub observation: ObservationConfig,
    pub action: ActionConfig,
    pub reward_features: Vec<Feature>,
    pub reward_weights: Vec<f64>,
    /// Exponent of the weighted distance in the reward
    pub reward_p: f64,
    /// A vehicle is parked when its reward is above `-success_goal_reward`
    pub success_goal_reward: f64,
    pub collision_reward: f64,
    /// Maximum steering angle in radians
    pub steering_range: f64,
    pub simulation_frequency: u32,
    pub policy_frequency: u32,
    /// Maximum number of policy steps per episode
    pub duration: u32,
    pub screen_width: u32,
    pub screen_height: u32,
    pub centering_position: [f64; 2],
    pub scaling: f64,
    pub controlled_vehicles: usize,
    pub lot: LotLayout,
}

impl Default for ParkingConfig {
    fn default() -> Self {
        Self {
            observation: ObservationConfig::default(),
            action: ActionConfig::default(),
            reward_features: DEFAULT_FEATURES.to_vec(),
            reward_weights: vec![1.0 / 100.0, 0.3 / 100.0, 0.0, 0.0, 0.02, 0.02],
            reward_p: 0.5,
            success_goal_reward: 0.12,
            collision_reward: -5.0,
            steering_range: 45f64.to_radians(),
            simulation_frequency: 15,
            policy_frequency: 5,
            duration: 100,
            screen_width: 600,
            screen_height: 300,
            centering_position: [0.5, 0.5],
            scaling: 7.0,
            controlled_vehicles: 1,
            lot: LotLayout::default(),
        }
    }
}

impl ParkingConfig {
    /// Reduced-rate variant: one decision per simulated second, 20 decisions per episode.
    #[must_use]
    pub fn action_repeat() -> Self {
        Self { policy_frequency: 1, duration: 20, ..Self::default() }
    }

    /// Parse a JSON document. Absent options keep their default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, unknown observation
    /// or action types and unknown feature names.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the top-level options present in `overrides`, keeping the others.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if an override has the wrong shape.
    pub fn merged(&self, overrides: &serde_json::Value) -> Result<Self, ConfigError> {
        let mut base = serde_json::to_value(self)?;
        if let (Some(base), Some(overrides)) = (base.as_object_mut(), overrides.as_object()) {
            for (key, value) in overrides {
                base.insert(key.clone(), value.clone());
            }
        }
        Ok(serde_json::from_value(base)?)
    }

    /// Number of simulation sub-steps per policy step.
    #[must_use]
    pub fn frames_per_step(&self) -> u32 {
        self.simulation_frequency / self.policy_frequency.max(1)
    }

    /// Integration time step in seconds.
    #[must_use]
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.simulation_frequency)
    }

    /// Check every option. Called by the environment constructor.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lot.validate()?;
        if self.reward_features.len() != self.reward_weights.len() {
            return Err(ConfigError::FeatureWeightMismatch {
                features: self.reward_features.len(),
                weights: self.reward_weights.len(),
            });
        }
        for (&feature, &weight) in self.reward_features.iter().zip(&self.reward_weights) {
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(ConfigError::NegativeWeight { feature, weight });
            }
        }
        if !(self.reward_p.is_finite() && self.reward_p > 0.0) {
            return Err(ConfigError::InvalidExponent(self.reward_p));
        }
        if !(self.success_goal_reward.is_finite() && self.success_goal_reward >= 0.0) {
            return Err(ConfigError::InvalidThreshold(self.success_goal_reward));
        }
        if self.duration == 0 {
            return Err(ConfigError::NonPositiveDuration);
        }
        if self.policy_frequency == 0 || self.policy_frequency > self.simulation_frequency {
            return Err(ConfigError::InvalidFrequency {
                simulation: self.simulation_frequency,
                policy: self.policy_frequency,
            });
        }
        if self.controlled_vehicles == 0 {
            return Err(ConfigError::NoControlledVehicles);
        }
        if !(self.steering_range.is_finite() && self.steering_range > 0.0) {
            return Err(ConfigError::InvalidSteeringRange(self.steering_range));
        }
        match &self.observation {
            ObservationConfig::KinematicsGoal(obs) => {
                if obs.features.len() != obs.scales.len() {
                    return Err(ConfigError::FeatureScaleMismatch {
                        features: obs.features.len(),
                        scales: obs.scales.len(),
                    });
                }
                for (&feature, &scale) in obs.features.iter().zip(&obs.scales) {
                    if !scale.is_finite() || scale == 0.0 {
                        return Err(ConfigError::InvalidScale { feature, scale });
                    }
                }
            }
        }
        match &self.action {
            ActionConfig::ContinuousAction(action) => {
                let [lo, hi] = action.acceleration_range;
                if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                    return Err(ConfigError::InvalidAccelerationRange(action.acceleration_range));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        ParkingConfig::default().validate().unwrap();
        ParkingConfig::action_repeat().validate().unwrap();
        assert_eq!(ParkingConfig::default().frames_per_step(), 3);
        assert_eq!(ParkingConfig::action_repeat().frames_per_step(), 15);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = ParkingConfig::from_json(r#"{"duration": 7, "controlled_vehicles": 2}"#).unwrap();
        assert_eq!(cfg.duration, 7);
        assert_eq!(cfg.controlled_vehicles, 2);
        assert_eq!(cfg.policy_frequency, 5);
        assert_eq!(cfg.reward_weights.len(), 6);
    }

    #[test]
    fn nested_types_are_tagged() {
        let cfg = ParkingConfig::from_json(
            r#"{"observation": {"type": "KinematicsGoal", "features": ["x", "y"], "scales": [10, 10]},
                "action": {"type": "ContinuousAction"}}"#,
        )
        .unwrap();
        let ObservationConfig::KinematicsGoal(obs) = &cfg.observation;
        assert_eq!(obs.features, vec![Feature::X, Feature::Y]);
        assert!(!obs.normalize);
        let ActionConfig::ContinuousAction(action) = &cfg.action;
        assert_eq!(action.acceleration_range, [-5.0, 5.0]);
    }

    #[test]
    fn unknown_types_fail_to_parse() {
        let err = ParkingConfig::from_json(r#"{"observation": {"type": "GrayscaleObservation"}}"#);
        assert!(matches!(err, Err(ConfigError::Parse(_))));
        let err = ParkingConfig::from_json(r#"{"action": {"type": "DiscreteMetaAction"}}"#);
        assert!(matches!(err, Err(ConfigError::Parse(_))));
        let err = ParkingConfig::from_json(r#"{"reward_features": ["x", "speed"]}"#);
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn merge_overrides_top_level_options() {
        let base = ParkingConfig::default();
        let cfg = base.merged(&serde_json::json!({"policy_frequency": 1, "duration": 20})).unwrap();
        assert_eq!(cfg, ParkingConfig::action_repeat());
    }

    #[test]
    fn validation_catches_bad_options() {
        let cfg = ParkingConfig { reward_weights: vec![1.0], ..ParkingConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::FeatureWeightMismatch { features: 6, weights: 1 })
        ));

        let cfg = ParkingConfig { duration: 0, ..ParkingConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::NonPositiveDuration)));

        let mut cfg = ParkingConfig::default();
        cfg.lot.spots = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::Lot(_))));

        let mut cfg = ParkingConfig::default();
        cfg.reward_weights[2] = -1.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NegativeWeight { feature: Feature::Vx, .. })
        ));

        let cfg = ParkingConfig { policy_frequency: 30, ..ParkingConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidFrequency { .. })));

        let cfg = ParkingConfig { reward_p: 0.0, ..ParkingConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidExponent(_))));

        let cfg = ParkingConfig { controlled_vehicles: 0, ..ParkingConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::NoControlledVehicles)));
    }
}
