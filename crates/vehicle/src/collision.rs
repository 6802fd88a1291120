//! # Vehicle Collisions
//!
//! Vehicles are oriented rectangles. Overlap is decided with a separating-axis
//! test on the edge normals of both rectangles, after a cheap center-distance
//! rejection.

use glam::DVec2;

use crate::kinematics::Vehicle;

/// Project `corners` on `axis` and return the covered interval.
fn project(corners: &[DVec2; 4], axis: DVec2) -> (f64, f64) {
    corners.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
        let p = c.dot(axis);
        (lo.min(p), hi.max(p))
    })
}

/// Whether the footprints of two vehicles overlap. Touching edges do not count.
#[must_use]
pub fn is_colliding(a: &Vehicle, b: &Vehicle) -> bool {
    if a.position.distance(b.position) > Vehicle::LENGTH {
        return false;
    }
    let ca = a.corners();
    let cb = b.corners();
    let axes = [a.direction(), a.direction().perp(), b.direction(), b.direction().perp()];
    axes.iter().all(|&axis| {
        let (min_a, max_a) = project(&ca, axis);
        let (min_b, max_b) = project(&cb, axis);
        min_a < max_b && min_b < max_a
    })
}

/// Flag every pair of overlapping vehicles as crashed.
///
/// Both vehicles of a colliding pair take the smaller (in magnitude) of the
/// two speeds. A pair is skipped only when both vehicles already crashed, so a
/// wreck still flags any vehicle that runs into it. Returns the number of new
/// collisions.
pub fn check_collisions(vehicles: &mut [Vehicle]) -> usize {
    let mut hits = 0;
    for i in 0..vehicles.len() {
        for j in (i + 1)..vehicles.len() {
            let (left, right) = vehicles.split_at_mut(j);
            let (a, b) = (&mut left[i], &mut right[0]);
            if (a.crashed && b.crashed) || !is_colliding(a, b) {
                continue;
            }
            let speed = if a.speed.abs() <= b.speed.abs() { a.speed } else { b.speed };
            a.speed = speed;
            b.speed = speed;
            a.crashed = true;
            b.crashed = true;
            hits += 1;
        }
    }
    hits
}
