//! Repository contracts for static content and saved games.
//!
//! Species and zones are read-only content loaded once at startup. Trainers and
//! individuals change during play and are written back through a [`GameStore`].

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::errors::{DataError, GameResult, RepositoryError, RepositoryResult};
use crate::item::Item;
use crate::monster::Individual;
use crate::trainer::{Placement, Trainer};
use crate::zone::Zone;
use schema::{
    IndividualId, IndividualRecord, SpeciesData, SpeciesId, TrainerId, TrainerRecord, ZoneId,
};
use std::sync::Arc;

/// Read-only species templates.
pub trait SpeciesRepository {
    fn find_by_id(&self, id: SpeciesId) -> Option<Arc<SpeciesData>>;
    fn find_by_name(&self, name: &str) -> Option<Arc<SpeciesData>>;
    fn find_all(&self) -> Vec<Arc<SpeciesData>>;
}

/// Read-only world map.
pub trait ZoneRepository {
    fn find_by_id(&self, id: ZoneId) -> Option<&Zone>;
    fn find_all(&self) -> Vec<&Zone>;

    /// The zone with the lowest id, where a new game starts.
    fn starting_zone(&self) -> Option<&Zone> {
        self.find_all().into_iter().min_by_key(|zone| zone.id)
    }
}

/// Saved trainers. Saving a record with id `0` assigns a fresh id.
pub trait TrainerRepository {
    fn find_trainer(&self, id: TrainerId) -> RepositoryResult<Option<TrainerRecord>>;
    fn all_trainers(&self) -> RepositoryResult<Vec<TrainerRecord>>;
    fn save_trainer(&mut self, record: TrainerRecord) -> RepositoryResult<TrainerRecord>;
    fn delete_trainer(&mut self, id: TrainerId) -> RepositoryResult<()>;
}

/// Saved individuals. Only owned individuals are persisted.
pub trait IndividualRepository {
    fn find_individual(&self, id: IndividualId) -> RepositoryResult<Option<IndividualRecord>>;
    fn all_individuals(&self) -> RepositoryResult<Vec<IndividualRecord>>;

    /// Team members first, then the box, each in position order.
    fn individuals_of(&self, owner: TrainerId) -> RepositoryResult<Vec<IndividualRecord>>;

    fn save_individual(&mut self, record: IndividualRecord) -> RepositoryResult<IndividualRecord>;
    fn delete_individual(&mut self, id: IndividualId) -> RepositoryResult<()>;
}

/// Everything a saved game needs.
pub trait GameStore: TrainerRepository + IndividualRepository {}

impl<T: TrainerRepository + IndividualRepository> GameStore for T {}

/// Write the trainer and its whole roster, returning how many records were
/// written. Ids assigned by the store are copied back onto the live values, and
/// individuals released since the last save are removed.
pub fn save_trainer(store: &mut dyn GameStore, trainer: &mut Trainer) -> RepositoryResult<usize> {
    let saved = store.save_trainer(trainer.to_record())?;
    if saved.id != trainer.id {
        trainer.id = saved.id;
        for member in trainer.roster_mut() {
            member.owner = Some(saved.id);
        }
    }

    let placements: Vec<Placement> = trainer.roster().map(|(placement, _)| placement).collect();
    let mut kept = Vec::with_capacity(placements.len());
    for placement in placements {
        let Some(member) = trainer.member_mut(placement) else {
            continue;
        };
        let record = store.save_individual(member.to_record(Some(placement)))?;
        member.id = record.id;
        kept.push(record.id);
    }

    for stale in store.individuals_of(trainer.id)? {
        if !kept.contains(&stale.id) {
            log::debug!("removing released individual {}", stale.id);
            store.delete_individual(stale.id)?;
        }
    }

    let written = 1 + kept.len();
    log::info!("saved trainer {} with {} records", trainer.id, written);
    Ok(written)
}

/// Rebuild a trainer and its roster from saved records.
pub fn load_trainer(
    store: &dyn GameStore,
    species: &dyn SpeciesRepository,
    id: TrainerId,
) -> GameResult<Trainer> {
    let record = store
        .find_trainer(id)?
        .ok_or(RepositoryError::NotFound { kind: "trainer", id })?;

    let mut team = Vec::new();
    let mut storage = Vec::new();
    for saved in store.individuals_of(id)? {
        let template = species
            .find_by_id(saved.species_id)
            .ok_or(DataError::SpeciesNotFound {
                id: saved.species_id,
            })?;
        let individual = Individual::from_record(&saved, template);
        if saved.team_owner.is_some() {
            team.push(individual);
        } else {
            storage.push(individual);
        }
    }

    let bag = record.bag.iter().map(Item::from_record).collect();
    log::info!(
        "restored trainer {} with {} team members and {} boxed",
        record.name,
        team.len(),
        storage.len()
    );
    Ok(Trainer::from_parts(&record, team, storage, bag))
}
