//! # Parking Lot Generation
//!
//! The lot is a row of `spots` slots. Each slot is a pair of opposing lanes:
//! one above the central aisle (`a → b`, pointing towards +y) and one below
//! it (`b → c`, pointing towards −y). Slots are centered around
//! `x = −width / 2`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::RoadError;
use crate::lane::{LineType, StraightLane};
use crate::network::RoadNetwork;

/// Parameters of the generated parking lot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotLayout {
    /// Number of slots. Signed so that malformed configurations can be reported.
    pub spots: i64,
    /// Slot (lane) width in meters
    pub width: f64,
    /// Extra gap between neighbouring slots
    pub x_offset: f64,
    /// Distance from the aisle centerline to the slot entrance
    pub y_offset: f64,
    /// Slot depth in meters
    pub length: f64,
}

impl Default for LotLayout {
    fn default() -> Self {
        Self { spots: 15, width: 4.0, x_offset: 0.0, y_offset: 10.0, length: 8.0 }
    }
}

impl LotLayout {
    /// Reject layouts that would produce an empty or degenerate network.
    ///
    /// # Errors
    ///
    /// Returns [`RoadError::InvalidLayout`] for a non-positive slot count or a
    /// non-positive / non-finite width or length.
    pub fn validate(&self) -> Result<(), RoadError> {
        if self.spots <= 0 {
            return Err(RoadError::InvalidLayout("slot count must be positive"));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(RoadError::InvalidLayout("slot width must be positive"));
        }
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(RoadError::InvalidLayout("slot length must be positive"));
        }
        if !(self.x_offset.is_finite() && self.y_offset.is_finite()) {
            return Err(RoadError::InvalidLayout("offsets must be finite"));
        }
        Ok(())
    }

    /// Lateral position of slot `k`.
    ///
    /// Uses floor division for the centering term so odd slot counts place
    /// the middle slot at `x = −width / 2`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slot_x(&self, k: i64) -> f64 {
        (k - self.spots.div_euclid(2)) as f64 * (self.width + self.x_offset) - self.width / 2.0
    }
}

/// Build the lane graph of a parking lot.
///
/// The layout is expected to have passed [`LotLayout::validate`]; a
/// non-positive slot count yields an empty network.
#[must_use]
pub fn build_lot(layout: &LotLayout) -> RoadNetwork {
    let mut net = RoadNetwork::new();
    let lt = [LineType::Continuous, LineType::Continuous];
    let (y, len) = (layout.y_offset, layout.length);
    for k in 0..layout.spots {
        let x = layout.slot_x(k);
        net.add_lane(
            "a",
            "b",
            StraightLane::new(DVec2::new(x, y), DVec2::new(x, y + len), layout.width, lt),
        );
        net.add_lane(
            "b",
            "c",
            StraightLane::new(DVec2::new(x, -y), DVec2::new(x, -y - len), layout.width, lt),
        );
    }
    net
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_lot() {
        let layout = LotLayout { spots: 0, ..LotLayout::default() };
        assert_eq!(
            layout.validate(),
            Err(RoadError::InvalidLayout("slot count must be positive"))
        );
        let layout = LotLayout { spots: -3, ..LotLayout::default() };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_slots() {
        let layout = LotLayout { width: 0.0, ..LotLayout::default() };
        assert!(layout.validate().is_err());
        let layout = LotLayout { length: f64::NAN, ..LotLayout::default() };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn single_slot_sits_left_of_origin() {
        let layout = LotLayout { spots: 1, ..LotLayout::default() };
        assert!((layout.slot_x(0) + 2.0).abs() < 1e-12);
        assert_eq!(build_lot(&layout).lane_count(), 2);
    }
}
