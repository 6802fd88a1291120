//! # Straight Lanes
//!
//! A lane is described by its centerline. Positions along the lane are given
//! in lane coordinates: `longitudinal` is the distance travelled from the
//! start point, `lateral` is the signed offset to the left of the centerline.

use glam::DVec2;

/// Boundary marking on one side of a lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineType {
    None,
    Striped,
    Continuous,
}

/// Straight lane segment between two points.
#[derive(Clone, Debug, PartialEq)]
pub struct StraightLane {
    pub start: DVec2,
    pub end: DVec2,
    pub width: f64,
    /// Markings on the (left, right) sides.
    pub line_types: [LineType; 2],
    pub length: f64,
    direction: DVec2,
    direction_lateral: DVec2,
    heading: f64,
}

impl StraightLane {
    /// Create a lane from `start` to `end`.
    ///
    /// `start` and `end` must differ; a zero-length lane has no direction.
    #[must_use]
    pub fn new(start: DVec2, end: DVec2, width: f64, line_types: [LineType; 2]) -> Self {
        let delta = end - start;
        let length = delta.length();
        let direction = delta / length;
        let direction_lateral = DVec2::new(-direction.y, direction.x);
        Self {
            start,
            end,
            width,
            line_types,
            length,
            direction,
            direction_lateral,
            heading: direction.y.atan2(direction.x),
        }
    }

    /// World position of a point given in lane coordinates.
    #[must_use]
    pub fn position(&self, longitudinal: f64, lateral: f64) -> DVec2 {
        self.start + longitudinal * self.direction + lateral * self.direction_lateral
    }

    /// Heading of the lane at a longitudinal position. Constant for straight lanes.
    #[must_use]
    pub fn heading_at(&self, _longitudinal: f64) -> f64 {
        self.heading
    }

    /// Lane coordinates `(longitudinal, lateral)` of a world position.
    #[must_use]
    pub fn local_coordinates(&self, position: DVec2) -> (f64, f64) {
        let delta = position - self.start;
        (delta.dot(self.direction), delta.dot(self.direction_lateral))
    }

    /// Whether a world position lies within the lane bounds.
    #[must_use]
    pub fn on_lane(&self, position: DVec2) -> bool {
        let (longitudinal, lateral) = self.local_coordinates(position);
        lateral.abs() <= self.width / 2.0 && (0.0..=self.length).contains(&longitudinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const LT: [LineType; 2] = [LineType::Continuous, LineType::Continuous];

    #[test]
    fn midpoint_of_vertical_lane() {
        let lane = StraightLane::new(DVec2::new(-2.0, 10.0), DVec2::new(-2.0, 18.0), 4.0, LT);
        assert!((lane.length - 8.0).abs() < 1e-12);
        let mid = lane.position(lane.length / 2.0, 0.0);
        assert!((mid - DVec2::new(-2.0, 14.0)).length() < 1e-12);
        assert!((lane.heading_at(0.0) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn lateral_offset_is_to_the_left() {
        let lane = StraightLane::new(DVec2::ZERO, DVec2::new(10.0, 0.0), 4.0, LT);
        let p = lane.position(3.0, 1.0);
        assert!((p - DVec2::new(3.0, 1.0)).length() < 1e-12);
        let (s, r) = lane.local_coordinates(p);
        assert!((s - 3.0).abs() < 1e-12 && (r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn on_lane_respects_width_and_length() {
        let lane = StraightLane::new(DVec2::ZERO, DVec2::new(0.0, -8.0), 4.0, LT);
        assert!(lane.on_lane(DVec2::new(1.5, -4.0)));
        assert!(!lane.on_lane(DVec2::new(2.5, -4.0)));
        assert!(!lane.on_lane(DVec2::new(0.0, 1.0)));
    }
}
