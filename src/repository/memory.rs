use super::{IndividualRepository, TrainerRepository};
use crate::errors::{RepositoryError, RepositoryResult};
use schema::{IndividualId, IndividualRecord, TrainerId, TrainerRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// In-memory trainer and individual store. Ids are assigned on first save and
/// never reused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    trainers: BTreeMap<TrainerId, TrainerRecord>,
    individuals: BTreeMap<IndividualId, IndividualRecord>,
    /// Lowest id the next new trainer may take.
    #[serde(default)]
    next_trainer: TrainerId,
    #[serde(default)]
    next_individual: IndividualId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_trainer_id(&mut self) -> TrainerId {
        let above_stored = self.trainers.keys().next_back().map_or(1, |id| id + 1);
        let id = self.next_trainer.max(above_stored);
        self.next_trainer = id + 1;
        id
    }

    fn next_individual_id(&mut self) -> IndividualId {
        let above_stored = self.individuals.keys().next_back().map_or(1, |id| id + 1);
        let id = self.next_individual.max(above_stored);
        self.next_individual = id + 1;
        id
    }
}

impl TrainerRepository for MemoryStore {
    fn find_trainer(&self, id: TrainerId) -> RepositoryResult<Option<TrainerRecord>> {
        let found = self.trainers.get(&id).cloned();
        log::trace!("trainer {} lookup: {}", id, if found.is_some() { "hit" } else { "miss" });
        Ok(found)
    }

    fn all_trainers(&self) -> RepositoryResult<Vec<TrainerRecord>> {
        Ok(self.trainers.values().cloned().collect())
    }

    fn save_trainer(&mut self, mut record: TrainerRecord) -> RepositoryResult<TrainerRecord> {
        if record.id == 0 {
            record.id = self.next_trainer_id();
            log::debug!("assigned trainer id {} to {}", record.id, record.name);
        }
        self.trainers.insert(record.id, record.clone());
        Ok(record)
    }

    /// Removes the trainer together with every individual it owns.
    fn delete_trainer(&mut self, id: TrainerId) -> RepositoryResult<()> {
        if self.trainers.remove(&id).is_none() {
            return Err(RepositoryError::NotFound { kind: "trainer", id });
        }
        self.individuals
            .retain(|_, record| record.team_owner != Some(id) && record.box_owner != Some(id));
        Ok(())
    }
}

impl IndividualRepository for MemoryStore {
    fn find_individual(&self, id: IndividualId) -> RepositoryResult<Option<IndividualRecord>> {
        Ok(self.individuals.get(&id).cloned())
    }

    fn all_individuals(&self) -> RepositoryResult<Vec<IndividualRecord>> {
        Ok(self.individuals.values().cloned().collect())
    }

    fn individuals_of(&self, owner: TrainerId) -> RepositoryResult<Vec<IndividualRecord>> {
        let mut owned: Vec<IndividualRecord> = self
            .individuals
            .values()
            .filter(|record| record.team_owner == Some(owner) || record.box_owner == Some(owner))
            .cloned()
            .collect();
        owned.sort_by_key(|record| (record.team_owner.is_none(), record.position));
        Ok(owned)
    }

    fn save_individual(
        &mut self,
        mut record: IndividualRecord,
    ) -> RepositoryResult<IndividualRecord> {
        if record.team_owner.is_none() && record.box_owner.is_none() {
            return Err(RepositoryError::Unowned(record.id));
        }
        if record.id == 0 {
            record.id = self.next_individual_id();
        }
        self.individuals.insert(record.id, record.clone());
        Ok(record)
    }

    fn delete_individual(&mut self, id: IndividualId) -> RepositoryResult<()> {
        self.individuals
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound {
                kind: "individual",
                id,
            })
    }
}
