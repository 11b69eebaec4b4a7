use duelsweep_core::GameError;
use thiserror::Error;

/// Failures surfaced to the participant that sent the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Game not found")]
    NotFound,
    #[error("Game is already full")]
    Full,
    #[error("Already seated in this game")]
    AlreadyParticipant,
    #[error(transparent)]
    Game(#[from] GameError),
}

pub type Result<T> = core::result::Result<T, SessionError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] GameError),
}
