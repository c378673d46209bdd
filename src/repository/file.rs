//! Save-game file backed by a [`MemoryStore`].

use super::{IndividualRepository, MemoryStore, TrainerRepository};
use crate::errors::RepositoryResult;
use schema::{IndividualId, IndividualRecord, TrainerId, TrainerRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// JSON save file holding every trainer and individual record.
///
/// Reads are served from memory. Every write rewrites the whole file through a
/// temporary sibling and a rename, so a crash never leaves a torn save.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    memory: MemoryStore,
}

impl JsonFileStore {
    /// Open a save file, starting empty when it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref().to_path_buf();
        let memory = if path.exists() {
            let bytes = fs::read(&path)?;
            let memory: MemoryStore = serde_json::from_slice(&bytes)?;
            log::info!("loaded save file {}", path.display());
            memory
        } else {
            log::debug!("no save file at {}, starting fresh", path.display());
            MemoryStore::new()
        };
        Ok(Self { path, memory })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(&self.memory)?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;
        log::debug!("wrote save file {}", self.path.display());
        Ok(())
    }
}

impl TrainerRepository for JsonFileStore {
    fn find_trainer(&self, id: TrainerId) -> RepositoryResult<Option<TrainerRecord>> {
        self.memory.find_trainer(id)
    }

    fn all_trainers(&self) -> RepositoryResult<Vec<TrainerRecord>> {
        self.memory.all_trainers()
    }

    fn save_trainer(&mut self, record: TrainerRecord) -> RepositoryResult<TrainerRecord> {
        let saved = self.memory.save_trainer(record)?;
        self.flush()?;
        Ok(saved)
    }

    fn delete_trainer(&mut self, id: TrainerId) -> RepositoryResult<()> {
        self.memory.delete_trainer(id)?;
        self.flush()
    }
}

impl IndividualRepository for JsonFileStore {
    fn find_individual(&self, id: IndividualId) -> RepositoryResult<Option<IndividualRecord>> {
        self.memory.find_individual(id)
    }

    fn all_individuals(&self) -> RepositoryResult<Vec<IndividualRecord>> {
        self.memory.all_individuals()
    }

    fn individuals_of(&self, owner: TrainerId) -> RepositoryResult<Vec<IndividualRecord>> {
        self.memory.individuals_of(owner)
    }

    fn save_individual(&mut self, record: IndividualRecord) -> RepositoryResult<IndividualRecord> {
        let saved = self.memory.save_individual(record)?;
        self.flush()?;
        Ok(saved)
    }

    fn delete_individual(&mut self, id: IndividualId) -> RepositoryResult<()> {
        self.memory.delete_individual(id)?;
        self.flush()
    }
}
