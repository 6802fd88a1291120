//! # Goal-Distance Reward
//!
//! The reward of a vehicle with respect to the goal is the negated weighted
//! `L_p^p` distance between their feature records:
//!
//! ```text
//! r = -( Σ_i w_i · |achieved_i − desired_i| )^p
//! ```
//!
//! With `p < 1` the reward is sharply peaked around the goal, which makes
//! the last few centimeters of a parking maneuver matter more than with a
//! linear (`p = 1`) or Euclidean-like (`p = 2`) shaping.
//!
//! NaN features are never clamped: they make the reward NaN, and a NaN
//! reward is never a success. [`RewardEngine::checked_reward`] reports the
//! offending feature instead.

use vehicle::{Feature, FeatureRecord, HasFeatures};

use crate::config::ParkingConfig;
use crate::error::{ConfigError, ParkingError};

#[derive(Clone, Debug)]
pub struct RewardEngine {
    features: Vec<Feature>,
    weights: Vec<f64>,
    p: f64,
    success_threshold: f64,
}

impl RewardEngine {
    /// Create an engine from an ordered feature list and matching weights.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the lengths differ, a weight is negative
    /// or not finite, `p` is not positive, or the threshold is negative.
    pub fn new(
        features: Vec<Feature>,
        weights: Vec<f64>,
        p: f64,
        success_threshold: f64,
    ) -> Result<Self, ConfigError> {
        if features.len() != weights.len() {
            return Err(ConfigError::FeatureWeightMismatch {
                features: features.len(),
                weights: weights.len(),
            });
        }
        if let Some((&feature, &weight)) =
            features.iter().zip(&weights).find(|(_, w)| !(w.is_finite() && **w >= 0.0))
        {
            return Err(ConfigError::NegativeWeight { feature, weight });
        }
        if !(p.is_finite() && p > 0.0) {
            return Err(ConfigError::InvalidExponent(p));
        }
        if !(success_threshold.is_finite() && success_threshold >= 0.0) {
            return Err(ConfigError::InvalidThreshold(success_threshold));
        }
        Ok(Self { features, weights, p, success_threshold })
    }

    /// # Errors
    ///
    /// See [`RewardEngine::new`].
    pub fn from_config(config: &ParkingConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.reward_features.clone(),
            config.reward_weights.clone(),
            config.reward_p,
            config.success_goal_reward,
        )
    }

    /// Weighted `L1` distance between two records over the configured features.
    #[must_use]
    pub fn weighted_distance(&self, achieved: &FeatureRecord, desired: &FeatureRecord) -> f64 {
        self.features
            .iter()
            .zip(&self.weights)
            .map(|(&f, &w)| w * (achieved.get(f) - desired.get(f)).abs())
            .sum()
    }

    /// Reward of `achieved` with respect to `desired`, in `(-∞, 0]`.
    pub fn compute_reward(&self, achieved: &impl HasFeatures, desired: &impl HasFeatures) -> f64 {
        let distance =
            self.weighted_distance(&achieved.feature_record(), &desired.feature_record());
        -distance.powf(self.p)
    }

    /// Like [`RewardEngine::compute_reward`], but a NaN feature is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::NumericAnomaly`] naming the first configured
    /// feature that is NaN in either record.
    pub fn checked_reward(
        &self,
        achieved: &impl HasFeatures,
        desired: &impl HasFeatures,
    ) -> Result<f64, ParkingError> {
        let (a, d) = (achieved.feature_record(), desired.feature_record());
        if let Some(&feature) =
            self.features.iter().find(|&&f| a.get(f).is_nan() || d.get(f).is_nan())
        {
            return Err(ParkingError::NumericAnomaly { feature });
        }
        Ok(-self.weighted_distance(&a, &d).powf(self.p))
    }

    /// Whether `achieved` is close enough to `desired` to count as parked.
    ///
    /// The comparison is strict: a reward of exactly `-threshold` is not a success.
    pub fn is_success(&self, achieved: &impl HasFeatures, desired: &impl HasFeatures) -> bool {
        self.compute_reward(achieved, desired) > -self.success_threshold
    }

    /// Sum of the individual rewards of every vehicle against the shared goal.
    pub fn total_reward<'a, V>(
        &self,
        vehicles: impl IntoIterator<Item = &'a V>,
        goal: &impl HasFeatures,
    ) -> f64
    where
        V: HasFeatures + 'a,
    {
        vehicles.into_iter().map(|v| self.compute_reward(v, goal)).sum()
    }
}
