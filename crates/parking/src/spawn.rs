//! Vehicle and goal placement at episode start.
//!
//! Both functions draw from the episode generator passed in, in a fixed
//! order: one heading per vehicle, then one lane index for the goal.

use std::f64::consts::TAU;

use glam::DVec2;
use road::{LaneIndex, RoadNetwork};
use vehicle::{Landmark, Vehicle};

use crate::error::ParkingError;

/// Spacing between consecutive spawn points along x, in meters.
const SPAWN_SPACING: f64 = 20.0;

/// Place `count` vehicles at rest along the aisle with a uniform random heading.
///
/// Vehicles are returned in spawn order. Overlaps are not checked.
#[allow(clippy::cast_precision_loss)]
pub fn spawn_vehicles(count: usize, rng: &mut fastrand::Rng) -> Vec<Vehicle> {
    (0..count)
        .map(|i| {
            let heading = TAU * rng.f64();
            Vehicle::new(DVec2::new(SPAWN_SPACING * i as f64, 0.0), heading, 0.0)
        })
        .collect()
}

/// Put the goal at the midpoint of a lane drawn uniformly from every lane of the network.
///
/// # Errors
///
/// Returns [`ParkingError::EmptyNetwork`] if the network has no lanes.
pub fn select_goal(
    network: &RoadNetwork,
    rng: &mut fastrand::Rng,
) -> Result<(LaneIndex, Landmark), ParkingError> {
    let indices = network.lane_indices();
    if indices.is_empty() {
        return Err(ParkingError::EmptyNetwork);
    }
    let index = indices[rng.usize(..indices.len())].clone();
    let lane = network.lane(&index).ok_or(ParkingError::EmptyNetwork)?;
    let mid = lane.length / 2.0;
    let goal = Landmark::new(lane.position(mid, 0.0), lane.heading_at(mid));
    Ok((index, goal))
}
