//! # Goal Observations
//!
//! Each controlled vehicle observes its own kinematic features, the same
//! features as the achieved goal, and the goal's features as the desired
//! goal. Every value is divided by its configured scale.

use vehicle::{Feature, HasFeatures, Landmark, Vehicle};

use crate::config::{ObservationConfig, ParkingConfig};

#[derive(Clone, Debug, PartialEq)]
pub struct GoalObservation {
    pub observation: Vec<f64>,
    pub achieved_goal: Vec<f64>,
    pub desired_goal: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Observation {
    /// Single controlled vehicle
    Single(GoalObservation),
    /// One observation per controlled vehicle, in spawn order
    Multi(Vec<GoalObservation>),
}

impl Observation {
    #[must_use]
    pub fn per_vehicle(&self) -> &[GoalObservation] {
        match self {
            Self::Single(obs) => std::slice::from_ref(obs),
            Self::Multi(obs) => obs,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KinematicsGoalObservation {
    features: Vec<Feature>,
    scales: Vec<f64>,
    normalize: bool,
}

impl KinematicsGoalObservation {
    #[must_use]
    pub fn from_config(config: &ParkingConfig) -> Self {
        let ObservationConfig::KinematicsGoal(obs) = &config.observation;
        Self { features: obs.features.clone(), scales: obs.scales.clone(), normalize: obs.normalize }
    }

    fn scaled(&self, entity: &impl HasFeatures) -> Vec<f64> {
        let record = entity.feature_record();
        self.features
            .iter()
            .zip(&self.scales)
            .map(|(&f, &s)| {
                let v = record.get(f) / s;
                if self.normalize { v.clamp(-1.0, 1.0) } else { v }
            })
            .collect()
    }

    #[must_use]
    pub fn observe(&self, vehicle: &Vehicle, goal: &Landmark) -> GoalObservation {
        let own = self.scaled(vehicle);
        GoalObservation { achieved_goal: own.clone(), observation: own, desired_goal: self.scaled(goal) }
    }

    #[must_use]
    pub fn observe_all<'a>(
        &self,
        vehicles: impl IntoIterator<Item = &'a Vehicle>,
        goal: &Landmark,
    ) -> Observation {
        let mut obs: Vec<GoalObservation> =
            vehicles.into_iter().map(|v| self.observe(v, goal)).collect();
        if obs.len() == 1 {
            Observation::Single(obs.remove(0))
        } else {
            Observation::Multi(obs)
        }
    }
}
