use schema::{IndividualId, SpeciesId, TrainerId, ZoneId};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the monster-quest engine
#[derive(Debug, Error)]
pub enum GameError {
    /// Invalid player input that reached the engine
    #[error("action error: {0}")]
    Action(#[from] ActionError),
    /// Missing or malformed authored data
    #[error("data error: {0}")]
    Data(#[from] DataError),
    /// Persistence failure
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
    /// Configuration file could not be used
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to player actions. Menus validate indices before calling the
/// engine, so reaching one of these ends the current interaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("invalid item slot: {0}")]
    InvalidItemSlot(usize),
    #[error("invalid team index: {0}")]
    InvalidTeamIndex(usize),
    #[error("the team is empty")]
    EmptyTeam,
    #[error("no team member is able to fight")]
    NoEligibleCreature,
}

/// Errors related to species, zone and asset data
#[derive(Debug, Error)]
pub enum DataError {
    #[error("species not found: id {id}")]
    SpeciesNotFound { id: SpeciesId },
    #[error("species not found: {0}")]
    SpeciesNameNotFound(String),
    #[error("zone not found: id {0}")]
    ZoneNotFound(ZoneId),
    #[error("trainer not found: id {0}")]
    TrainerNotFound(TrainerId),
    #[error("no zones are defined")]
    NoZones,
    #[error("zone {zone} has no species to spawn")]
    EmptySpeciesPool { zone: ZoneId },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("{kind} not found: id {id}")]
    NotFound { kind: &'static str, id: u32 },

    #[error("individual {0} has no owning trainer")]
    Unowned(IndividualId),
}

/// Errors raised while loading the game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Serialization(err.to_string())
    }
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Type alias for Results using RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;
