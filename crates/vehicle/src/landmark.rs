use glam::DVec2;

use crate::features::{FeatureRecord, HasFeatures};

/// Static target pose. It has no dynamics and takes no part in collisions.
#[derive(Clone, Debug, PartialEq)]
pub struct Landmark {
    pub position: DVec2,
    pub heading: f64,
}

impl Landmark {
    #[must_use]
    pub fn new(position: DVec2, heading: f64) -> Self {
        Self { position, heading }
    }
}

impl HasFeatures for Landmark {
    fn feature_record(&self) -> FeatureRecord {
        FeatureRecord::from_pose(self.position.x, self.position.y, self.heading, 0.0, 0.0)
    }
}
