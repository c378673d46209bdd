// Monster Quest Schema - Shared data definitions
// This crate holds the plain data that is authored in RON files (species,
// zones) and the flat records written by the persistence layer. It carries no
// game logic; the engine crate builds live objects from these definitions.

pub use records::*;
pub use species_data::*;
pub use stats::*;

pub mod records;
pub mod species_data;
pub mod stats;

/// Identifier of a species template.
pub type SpeciesId = u32;
/// Identifier of a trainer.
pub type TrainerId = u32;
/// Identifier of an individual creature. `0` means "not yet persisted".
pub type IndividualId = u32;
/// Identifier of a zone.
pub type ZoneId = u32;
/// Identifier of an item definition.
pub type ItemId = u32;
