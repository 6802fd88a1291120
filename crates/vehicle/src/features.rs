//! # Feature Records
//!
//! A feature record is the flat, named view of an entity's state. Rewards and
//! observations select features from it by name, in a configured order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named scalar feature of a vehicle or landmark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Presence,
    X,
    Y,
    Vx,
    Vy,
    Heading,
    CosH,
    SinH,
}

impl Feature {
    pub const COUNT: usize = 8;

    pub const ALL: [Feature; Self::COUNT] = [
        Feature::Presence,
        Feature::X,
        Feature::Y,
        Feature::Vx,
        Feature::Vy,
        Feature::Heading,
        Feature::CosH,
        Feature::SinH,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Feature::Presence => "presence",
            Feature::X => "x",
            Feature::Y => "y",
            Feature::Vx => "vx",
            Feature::Vy => "vy",
            Feature::Heading => "heading",
            Feature::CosH => "cos_h",
            Feature::SinH => "sin_h",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values of every [`Feature`] for one entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureRecord {
    values: [f64; Feature::COUNT],
}

impl FeatureRecord {
    /// Build a record from a planar pose and velocity.
    #[must_use]
    pub fn from_pose(x: f64, y: f64, heading: f64, vx: f64, vy: f64) -> Self {
        let mut values = [0.0; Feature::COUNT];
        values[Feature::Presence.slot()] = 1.0;
        values[Feature::X.slot()] = x;
        values[Feature::Y.slot()] = y;
        values[Feature::Vx.slot()] = vx;
        values[Feature::Vy.slot()] = vy;
        values[Feature::Heading.slot()] = heading;
        values[Feature::CosH.slot()] = heading.cos();
        values[Feature::SinH.slot()] = heading.sin();
        Self { values }
    }

    #[must_use]
    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.slot()]
    }

    /// Overwrite a single feature value.
    pub fn set(&mut self, feature: Feature, value: f64) {
        self.values[feature.slot()] = value;
    }

    /// Values of `features`, in the given order.
    #[must_use]
    pub fn select(&self, features: &[Feature]) -> Vec<f64> {
        features.iter().map(|&f| self.get(f)).collect()
    }
}

/// Anything that can be scored against a goal.
pub trait HasFeatures {
    fn feature_record(&self) -> FeatureRecord;
}

impl HasFeatures for FeatureRecord {
    fn feature_record(&self) -> FeatureRecord {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_serde() {
        for f in Feature::ALL {
            let json = format!("\"{}\"", f.name());
            let parsed: Feature = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, f);
        }
        assert!(serde_json::from_str::<Feature>("\"speed\"").is_err());
    }

    #[test]
    fn record_derives_trig_features() {
        let r = FeatureRecord::from_pose(1.0, 2.0, std::f64::consts::FRAC_PI_2, 0.0, 3.0);
        assert!((r.get(Feature::CosH)).abs() < 1e-12);
        assert!((r.get(Feature::SinH) - 1.0).abs() < 1e-12);
        assert_eq!(r.select(&[Feature::Y, Feature::X]), vec![2.0, 1.0]);
        assert_eq!(r.get(Feature::Presence), 1.0);
    }
}
