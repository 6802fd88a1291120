#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Vehicles and Goals
//!
//! Entities that move over the parking lot:
//!
//! -   [`Vehicle`]: a kinematic bicycle with a pose, a speed and a `crashed`
//!     flag. [`Vehicle::step`] integrates the pose for one time step.
//! -   [`Landmark`]: a static pose used as the parking goal.
//! -   [`FeatureRecord`]: the named scalar features both expose through
//!     [`HasFeatures`], consumed by rewards and observations.
//! -   [`collision`]: oriented-rectangle overlap tests between vehicles.

pub mod collision;
pub mod features;
pub mod kinematics;
pub mod landmark;

pub use collision::{check_collisions, is_colliding};
pub use features::{Feature, FeatureRecord, HasFeatures};
pub use kinematics::{Control, Vehicle};
pub use landmark::Landmark;
