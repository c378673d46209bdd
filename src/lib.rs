// In: src/lib.rs

//! Monster Quest Engine
//!
//! A turn-based creature-collection game: species templates, individual
//! monsters that grow with experience, trainers with a team and a box, kube
//! captures and a one-on-one battle state machine, played from a console.

// --- MODULE DECLARATIONS ---
pub mod art;
pub mod battle;
pub mod config;
pub mod console;
pub mod data;
pub mod errors;
pub mod game;
pub mod item;
pub mod monster;
pub mod progression;
pub mod repository;
pub mod rng;
pub mod species;
pub mod trainer;
pub mod zone;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Core data definitions shared with the data files and the save format.
pub use schema::{
    ElementTag, GrowthModifiers, IndividualId, IndividualRecord, ItemRecord, SpeciesData,
    SpeciesId, StatKind, Stats, TrainerId, TrainerRecord, ZoneData, ZoneId,
};

// --- From this crate's modules (`src/`) ---

// Battle engine and its events.
pub use battle::capture::{attempt_capture, CaptureOutcome};
pub use battle::controller::{PlayerAction, PlayerController};
pub use battle::engine::BattleSession;
pub use battle::state::{BattleEvent, BattleOutcome, EventBus};

// Core runtime types.
pub use item::{Badge, Item, MonsterKube, UseOnTarget};
pub use monster::Individual;
pub use progression::{level_threshold, HpGrowthPolicy, ProgressEvent};
pub use trainer::{Placement, Trainer, TEAM_CAPACITY};
pub use zone::{Zone, ZoneAtlas};

// Collaborators.
pub use art::{ArtProvider, Facing, FileArt};
pub use config::GameConfig;
pub use console::{Console, ScriptedConsole, StdConsole};
pub use game::{GameSession, World};
pub use repository::{
    GameStore, IndividualRepository, JsonFileStore, MemoryStore, SpeciesRepository,
    TrainerRepository, ZoneRepository,
};
pub use rng::{LiveRng, RngOracle, ScriptedRng};
pub use species::SpeciesCatalog;

// Crate-specific error and result types.
pub use errors::{
    ActionError, ConfigError, DataError, GameError, GameResult, RepositoryError, RepositoryResult,
};
