//! Named environment variants.
//!
//! The registry is an ordinary value owned by the application; nothing is
//! registered as a side effect of loading the crate.

use std::collections::BTreeMap;

use crate::config::ParkingConfig;
use crate::env::ParkingEnv;
use crate::error::ParkingError;

pub const PARKING_V0: &str = "parking-v0";
pub const PARKING_ACTION_REPEAT_V0: &str = "parking-ActionRepeat-v0";

/// Factory of the base configuration of a variant.
pub type ConfigFactory = fn() -> ParkingConfig;

#[derive(Clone, Debug, Default)]
pub struct EnvRegistry {
    entries: BTreeMap<String, ConfigFactory>,
}

impl EnvRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `parking-v0` and `parking-ActionRepeat-v0`.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(PARKING_V0, ParkingConfig::default);
        registry.register(PARKING_ACTION_REPEAT_V0, ParkingConfig::action_repeat);
        registry
    }

    /// Add or replace a variant.
    pub fn register(&mut self, id: &str, factory: ConfigFactory) {
        self.entries.insert(id.to_owned(), factory);
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Base configuration of a variant.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::UnknownEnvironment`] for an unregistered id.
    pub fn config(&self, id: &str) -> Result<ParkingConfig, ParkingError> {
        self.entries
            .get(id)
            .map(|factory| factory())
            .ok_or_else(|| ParkingError::UnknownEnvironment(id.to_owned()))
    }

    /// Build a variant with its base configuration.
    ///
    /// # Errors
    ///
    /// Unknown id or invalid configuration.
    pub fn make(&self, id: &str) -> Result<ParkingEnv, ParkingError> {
        ParkingEnv::new(self.config(id)?)
    }

    /// Build a variant with top-level options replaced by `overrides`.
    ///
    /// # Errors
    ///
    /// Unknown id, malformed overrides or invalid resulting configuration.
    pub fn make_with(
        &self,
        id: &str,
        overrides: &serde_json::Value,
    ) -> Result<ParkingEnv, ParkingError> {
        ParkingEnv::new(self.config(id)?.merged(overrides)?)
    }
}
