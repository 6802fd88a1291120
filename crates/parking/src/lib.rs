#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Parking Task
//!
//! Episodic, goal-conditioned parking. Each episode builds a parking lot,
//! spawns the controlled vehicles in the central aisle, picks one random slot
//! as the shared goal, and scores every vehicle against it with a weighted
//! p-norm distance.
//!
//! ## Key Components
//!
//! -   **Configuration:** [`ParkingConfig`] with JSON loading and validation.
//! -   **Placement:** [`spawn::spawn_vehicles`] and [`spawn::select_goal`].
//! -   **Reward:** [`RewardEngine`] computes the reward and success predicate.
//! -   **Termination:** [`EpisodeMonitor`] decides when an episode is over.
//! -   **Environment:** [`ParkingEnv`] ties them together behind the
//!     [`Resettable`], [`Steppable`] and [`GoalConditioned`] traits.
//! -   **Variants:** [`EnvRegistry`] maps ids such as `parking-v0` to
//!     configurations.
//!
//! ## Usage
//!
//! ```rust
//! use parking::{Action, EnvRegistry, Resettable, Steppable};
//!
//! let registry = EnvRegistry::with_defaults();
//! let mut env = registry.make("parking-v0")?;
//! env.reset(Some(0))?;
//! let step = env.step(&Action::Single([0.5, 0.0]))?;
//! assert!(step.reward <= 0.0);
//! # Ok::<(), parking::ParkingError>(())
//! ```

pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod monitor;
pub mod observation;
pub mod registry;
pub mod reward;
pub mod spawn;
pub mod viewport;

pub use action::{Action, ContinuousAction};
pub use config::{ActionConfig, ObservationConfig, ParkingConfig};
pub use env::{GoalConditioned, Info, ParkingEnv, Resettable, Step, Steppable};
pub use error::{ConfigError, ParkingError};
pub use monitor::{EpisodeMonitor, EpisodeState, Success, TerminalReason};
pub use observation::{GoalObservation, KinematicsGoalObservation, Observation};
pub use registry::{EnvRegistry, PARKING_ACTION_REPEAT_V0, PARKING_V0};
pub use reward::RewardEngine;
pub use viewport::Viewport;
