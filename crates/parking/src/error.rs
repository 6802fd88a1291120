use road::RoadError;
use thiserror::Error;
use vehicle::Feature;

/// Invalid environment configuration. Always reported before an episode starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("reward_features has {features} entries but reward_weights has {weights}")]
    FeatureWeightMismatch { features: usize, weights: usize },
    #[error("observation features has {features} entries but scales has {scales}")]
    FeatureScaleMismatch { features: usize, scales: usize },
    #[error("observation scale for `{feature}` must be finite and nonzero, got {scale}")]
    InvalidScale { feature: Feature, scale: f64 },
    #[error("reward weight for `{feature}` must be finite and non-negative, got {weight}")]
    NegativeWeight { feature: Feature, weight: f64 },
    #[error("reward exponent must be finite and positive, got {0}")]
    InvalidExponent(f64),
    #[error("success_goal_reward must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
    #[error("duration must be positive")]
    NonPositiveDuration,
    #[error("invalid frequencies: simulation {simulation} Hz, policy {policy} Hz")]
    InvalidFrequency { simulation: u32, policy: u32 },
    #[error("at least one controlled vehicle is required")]
    NoControlledVehicles,
    #[error("steering_range must be finite and positive, got {0}")]
    InvalidSteeringRange(f64),
    #[error("acceleration_range must be finite and increasing, got {0:?}")]
    InvalidAccelerationRange([f64; 2]),
    #[error(transparent)]
    Lot(#[from] RoadError),
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ParkingError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("feature `{feature}` is NaN")]
    NumericAnomaly { feature: Feature },
    #[error("expected {expected} action(s), got {got}")]
    ActionShape { expected: usize, got: usize },
    #[error("no environment registered as `{0}`")]
    UnknownEnvironment(String),
    #[error("environment stepped before reset")]
    NotReset,
    #[error("road network has no lanes to place a goal on")]
    EmptyNetwork,
}
