//! # Kinematic Vehicle
//!
//! Bicycle model with the reference point at the vehicle center. The slip
//! angle `β` follows from the front-wheel steering angle, and the yaw rate
//! from the speed and half the wheelbase.

use glam::DVec2;

use crate::features::{FeatureRecord, HasFeatures};

/// Low-level command applied to a vehicle for the next integration steps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Control {
    /// Longitudinal acceleration in m/s²
    pub acceleration: f64,
    /// Front-wheel steering angle in radians
    pub steering: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub position: DVec2,
    pub heading: f64,
    pub speed: f64,
    pub crashed: bool,
    control: Control,
}

impl Vehicle {
    /// Vehicle length in meters
    pub const LENGTH: f64 = 5.0;
    /// Vehicle width in meters
    pub const WIDTH: f64 = 2.0;
    /// Maximum speed in m/s, forwards or backwards
    pub const MAX_SPEED: f64 = 40.0;

    #[must_use]
    pub fn new(position: DVec2, heading: f64, speed: f64) -> Self {
        Self { position, heading, speed, crashed: false, control: Control::default() }
    }

    /// Set the command for the next steps.
    ///
    /// Crashed vehicles ignore the command and brake to a halt. The
    /// acceleration is limited so the speed stays within `±MAX_SPEED`.
    pub fn act(&mut self, control: Control) {
        let mut control = control;
        if self.crashed {
            control.steering = 0.0;
            control.acceleration = -self.speed;
        }
        if self.speed > Self::MAX_SPEED {
            control.acceleration = control.acceleration.min(Self::MAX_SPEED - self.speed);
        } else if self.speed < -Self::MAX_SPEED {
            control.acceleration = control.acceleration.max(-Self::MAX_SPEED - self.speed);
        }
        self.control = control;
    }

    /// Integrate the pose over `dt` seconds using the current command.
    pub fn step(&mut self, dt: f64) {
        let delta_f = self.control.steering;
        let beta = (0.5 * delta_f.tan()).atan();
        let v = self.speed * DVec2::new((self.heading + beta).cos(), (self.heading + beta).sin());
        self.position += v * dt;
        self.heading += self.speed * beta.sin() / (Self::LENGTH / 2.0) * dt;
        self.speed += self.control.acceleration * dt;
    }

    #[must_use]
    pub fn control(&self) -> Control {
        self.control
    }

    #[must_use]
    pub fn direction(&self) -> DVec2 {
        DVec2::new(self.heading.cos(), self.heading.sin())
    }

    #[must_use]
    pub fn velocity(&self) -> DVec2 {
        self.speed * self.direction()
    }

    /// Corners of the vehicle footprint, counter-clockwise from rear-right.
    #[must_use]
    pub fn corners(&self) -> [DVec2; 4] {
        let d = self.direction() * (Self::LENGTH / 2.0);
        let l = self.direction().perp() * (Self::WIDTH / 2.0);
        let c = self.position;
        [c - d - l, c + d - l, c + d + l, c - d + l]
    }
}

impl HasFeatures for Vehicle {
    fn feature_record(&self) -> FeatureRecord {
        let v = self.velocity();
        FeatureRecord::from_pose(self.position.x, self.position.y, self.heading, v.x, v.y)
    }
}
