use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoadError {
    #[error("invalid parking lot layout: {0}")]
    InvalidLayout(&'static str),
}
