//! # Episode Termination
//!
//! [`EpisodeMonitor`] counts policy steps and turns the per-vehicle crash and
//! success flags of the latest step into an [`EpisodeState`]. The checks run
//! in a fixed priority order every step: time limit, then collisions, then
//! success of every controlled vehicle.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TerminalReason {
    Timeout,
    Collision,
    Success,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum EpisodeState {
    #[default]
    Running,
    Terminated(TerminalReason),
}

impl EpisodeState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminated(_))
    }

    #[must_use]
    pub const fn reason(self) -> Option<TerminalReason> {
        match self {
            Self::Running => None,
            Self::Terminated(reason) => Some(reason),
        }
    }
}

/// Success flags as reported in the step info.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Success {
    /// Exactly one controlled vehicle
    Single(bool),
    /// One flag per controlled vehicle, in spawn order
    PerVehicle(Vec<bool>),
}

impl Success {
    #[must_use]
    pub fn from_flags(flags: &[bool]) -> Self {
        match flags {
            [single] => Self::Single(*single),
            many => Self::PerVehicle(many.to_vec()),
        }
    }

    #[must_use]
    pub fn all(&self) -> bool {
        match self {
            Self::Single(flag) => *flag,
            Self::PerVehicle(flags) => flags.iter().all(|&f| f),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EpisodeMonitor {
    duration: u32,
    steps: u32,
    crashed: Vec<bool>,
    successes: Vec<bool>,
    state: EpisodeState,
}

impl EpisodeMonitor {
    #[must_use]
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            steps: 0,
            crashed: Vec::new(),
            successes: Vec::new(),
            state: EpisodeState::Running,
        }
    }

    /// Back to `Running` with a zero step count.
    pub fn reset(&mut self) {
        self.steps = 0;
        self.crashed.clear();
        self.successes.clear();
        self.state = EpisodeState::Running;
    }

    /// Count one policy step.
    pub fn tick(&mut self) {
        self.steps += 1;
    }

    /// Record the flags of the controlled vehicles after a step and decide
    /// whether the episode is over.
    pub fn record(&mut self, crashed: Vec<bool>, successes: Vec<bool>) -> EpisodeState {
        self.state = if self.steps >= self.duration {
            EpisodeState::Terminated(TerminalReason::Timeout)
        } else if crashed.iter().any(|&c| c) {
            EpisodeState::Terminated(TerminalReason::Collision)
        } else if successes.iter().all(|&s| s) {
            EpisodeState::Terminated(TerminalReason::Success)
        } else {
            EpisodeState::Running
        };
        self.crashed = crashed;
        self.successes = successes;
        self.state
    }

    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[must_use]
    pub fn state(&self) -> EpisodeState {
        self.state
    }

    #[must_use]
    pub fn any_crashed(&self) -> bool {
        self.crashed.iter().any(|&c| c)
    }

    /// Success info of the last recorded step.
    #[must_use]
    pub fn success(&self) -> Success {
        Success::from_flags(&self.successes)
    }
}
