//! # Parking Environment
//!
//! [`ParkingEnv`] composes the lot, the controlled vehicles, the goal, the
//! reward engine and the episode monitor, and exposes them through three
//! capabilities:
//!
//! -   [`Resettable`]: destroy the episode and build a fresh one.
//! -   [`Steppable`]: apply one policy action and advance the simulation.
//! -   [`GoalConditioned`]: score arbitrary feature records against a goal.
//!
//! One call to [`Steppable::step`] runs `simulation_frequency /
//! policy_frequency` integration sub-steps before the reward and the
//! termination state are computed, so sub-stepping is never observable from
//! the outside.

use road::{build_lot, LaneIndex, RoadNetwork};
use serde::Serialize;
use vehicle::{check_collisions, FeatureRecord, Landmark, Vehicle};

use crate::action::{Action, ContinuousAction};
use crate::config::ParkingConfig;
use crate::error::ParkingError;
use crate::monitor::{EpisodeMonitor, EpisodeState, Success, TerminalReason};
use crate::observation::{KinematicsGoalObservation, Observation};
use crate::reward::RewardEngine;
use crate::spawn::{select_goal, spawn_vehicles};

/// An environment that can start a new episode.
pub trait Resettable {
    type Observation;

    /// Start a new episode. With `Some(seed)` the random source is reseeded
    /// first; with `None` its stream continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the episode cannot be built.
    fn reset(&mut self, seed: Option<u64>) -> Result<Self::Observation, ParkingError>;
}

/// An environment that advances by one policy decision.
pub trait Steppable {
    type Action;
    type Observation;

    /// # Errors
    ///
    /// Returns an error if the action is malformed or no episode is running.
    fn step(&mut self, action: &Self::Action) -> Result<Step<Self::Observation>, ParkingError>;
}

/// A task whose reward only depends on achieved and desired goal features.
pub trait GoalConditioned {
    fn compute_reward(&self, achieved: &FeatureRecord, desired: &FeatureRecord) -> f64;
    fn is_success(&self, achieved: &FeatureRecord, desired: &FeatureRecord) -> bool;
}

/// Result of one policy step.
#[derive(Clone, Debug)]
pub struct Step<O> {
    pub observation: O,
    pub reward: f64,
    pub terminal: bool,
    pub info: Info,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Info {
    pub steps: u32,
    pub is_success: Success,
    /// Any controlled vehicle crashed
    pub crashed: bool,
    /// Individual rewards of the controlled vehicles, in spawn order
    pub rewards: Vec<f64>,
    /// `collision_reward` if a controlled vehicle crashed, else 0. Not part of the reward.
    pub collision_penalty: f64,
    /// A reward was NaN because of a NaN feature
    pub numeric_anomaly: bool,
    pub terminal_reason: Option<TerminalReason>,
}

/// Everything that lives for a single episode.
#[derive(Clone, Debug)]
struct Episode {
    network: RoadNetwork,
    /// Every vehicle on the road
    vehicles: Vec<Vehicle>,
    /// Indices into `vehicles` of the controlled vehicles, in spawn order
    controlled: Vec<usize>,
    goal: Landmark,
    goal_lane: LaneIndex,
}

impl Episode {
    fn controlled_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.controlled.iter().map(|&i| &self.vehicles[i])
    }
}

pub struct ParkingEnv {
    config: ParkingConfig,
    reward: RewardEngine,
    observation_type: KinematicsGoalObservation,
    action_type: ContinuousAction,
    monitor: EpisodeMonitor,
    rng: fastrand::Rng,
    episode: Option<Episode>,
}

impl ParkingEnv {
    /// Validate `config` and build an environment. Call [`Resettable::reset`]
    /// before stepping.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::Config`] if any option is invalid.
    pub fn new(config: ParkingConfig) -> Result<Self, ParkingError> {
        config.validate()?;
        Ok(Self {
            reward: RewardEngine::from_config(&config)?,
            observation_type: KinematicsGoalObservation::from_config(&config),
            action_type: ContinuousAction::from_config(&config),
            monitor: EpisodeMonitor::new(config.duration),
            rng: fastrand::Rng::new(),
            episode: None,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ParkingConfig {
        &self.config
    }

    #[must_use]
    pub fn reward_engine(&self) -> &RewardEngine {
        &self.reward
    }

    #[must_use]
    pub fn observation_type(&self) -> &KinematicsGoalObservation {
        &self.observation_type
    }

    #[must_use]
    pub fn monitor(&self) -> &EpisodeMonitor {
        &self.monitor
    }

    #[must_use]
    pub fn state(&self) -> EpisodeState {
        self.monitor.state()
    }

    #[must_use]
    pub fn network(&self) -> Option<&RoadNetwork> {
        self.episode.as_ref().map(|e| &e.network)
    }

    #[must_use]
    pub fn goal(&self) -> Option<&Landmark> {
        self.episode.as_ref().map(|e| &e.goal)
    }

    #[must_use]
    pub fn goal_lane(&self) -> Option<&LaneIndex> {
        self.episode.as_ref().map(|e| &e.goal_lane)
    }

    /// Every vehicle on the road.
    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        match &self.episode {
            Some(e) => &e.vehicles,
            None => &[],
        }
    }

    /// Controlled vehicles in spawn order.
    #[must_use]
    pub fn controlled_vehicles(&self) -> Vec<&Vehicle> {
        self.episode.as_ref().map(|e| e.controlled_vehicles().collect()).unwrap_or_default()
    }

    /// Mutable access to the `i`-th controlled vehicle, e.g. to teleport it.
    pub fn controlled_vehicle_mut(&mut self, i: usize) -> Option<&mut Vehicle> {
        let episode = self.episode.as_mut()?;
        let idx = *episode.controlled.get(i)?;
        episode.vehicles.get_mut(idx)
    }

    /// Observation of the current state without stepping.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::NotReset`] before the first reset.
    pub fn observe(&self) -> Result<Observation, ParkingError> {
        let episode = self.episode.as_ref().ok_or(ParkingError::NotReset)?;
        Ok(self.observation_type.observe_all(episode.controlled_vehicles(), &episode.goal))
    }

    /// Advance every vehicle by one policy step worth of sub-steps.
    fn simulate(&mut self, action: &Action) -> Result<(), ParkingError> {
        let episode = self.episode.as_mut().ok_or(ParkingError::NotReset)?;
        let controls = self.action_type.controls(action, episode.controlled.len())?;
        let dt = self.config.dt();
        for frame in 0..self.config.frames_per_step() {
            for (i, vehicle) in episode.vehicles.iter_mut().enumerate() {
                let control = match episode.controlled.iter().position(|&c| c == i) {
                    Some(k) if frame == 0 => controls[k],
                    _ => vehicle.control(),
                };
                vehicle.act(control);
            }
            for vehicle in &mut episode.vehicles {
                vehicle.step(dt);
            }
            let hits = check_collisions(&mut episode.vehicles);
            if hits > 0 {
                tracing::warn!(frame, hits, "vehicle collision");
            }
        }
        Ok(())
    }
}

impl Resettable for ParkingEnv {
    type Observation = Observation;

    fn reset(&mut self, seed: Option<u64>) -> Result<Observation, ParkingError> {
        if let Some(seed) = seed {
            self.rng.seed(seed);
        }
        // Drop the previous episode before building the next one.
        self.episode = None;
        let network = build_lot(&self.config.lot);
        let vehicles = spawn_vehicles(self.config.controlled_vehicles, &mut self.rng);
        let (goal_lane, goal) = select_goal(&network, &mut self.rng)?;
        tracing::debug!(
            ?seed,
            lanes = network.lane_count(),
            goal_lane = ?goal_lane,
            headings = ?vehicles.iter().map(|v| v.heading).collect::<Vec<_>>(),
            "episode reset"
        );
        self.episode = Some(Episode {
            controlled: (0..vehicles.len()).collect(),
            network,
            vehicles,
            goal,
            goal_lane,
        });
        self.monitor.reset();
        self.observe()
    }
}

impl Steppable for ParkingEnv {
    type Action = Action;
    type Observation = Observation;

    fn step(&mut self, action: &Action) -> Result<Step<Observation>, ParkingError> {
        self.simulate(action)?;
        self.monitor.tick();

        let episode = self.episode.as_ref().ok_or(ParkingError::NotReset)?;
        let goal = &episode.goal;
        let mut rewards = Vec::with_capacity(episode.controlled.len());
        let mut numeric_anomaly = false;
        for (i, vehicle) in episode.controlled_vehicles().enumerate() {
            match self.reward.checked_reward(vehicle, goal) {
                Ok(r) => rewards.push(r),
                Err(err) => {
                    tracing::warn!(vehicle = i, %err, "reward is NaN");
                    numeric_anomaly = true;
                    rewards.push(self.reward.compute_reward(vehicle, goal));
                }
            }
        }
        let reward = self.reward.total_reward(episode.controlled_vehicles(), goal);
        let crashed: Vec<bool> = episode.controlled_vehicles().map(|v| v.crashed).collect();
        let successes: Vec<bool> =
            episode.controlled_vehicles().map(|v| self.reward.is_success(v, goal)).collect();
        let any_crashed = crashed.iter().any(|&c| c);

        let state = self.monitor.record(crashed, successes);
        let observation = self.observation_type.observe_all(episode.controlled_vehicles(), goal);
        if let EpisodeState::Terminated(reason) = state {
            tracing::info!(steps = self.monitor.steps(), ?reason, reward, "episode terminated");
        }

        Ok(Step {
            observation,
            reward,
            terminal: state.is_terminal(),
            info: Info {
                steps: self.monitor.steps(),
                is_success: self.monitor.success(),
                crashed: any_crashed,
                rewards,
                collision_penalty: if any_crashed { self.config.collision_reward } else { 0.0 },
                numeric_anomaly,
                terminal_reason: state.reason(),
            },
        })
    }
}

impl GoalConditioned for ParkingEnv {
    fn compute_reward(&self, achieved: &FeatureRecord, desired: &FeatureRecord) -> f64 {
        self.reward.compute_reward(achieved, desired)
    }

    fn is_success(&self, achieved: &FeatureRecord, desired: &FeatureRecord) -> bool {
        self.reward.is_success(achieved, desired)
    }
}
