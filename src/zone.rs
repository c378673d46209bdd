use crate::battle::controller::PlayerController;
use crate::battle::engine::BattleSession;
use crate::battle::state::{BattleOutcome, EventBus};
use crate::data::load_ron_dir;
use crate::errors::{DataError, GameResult};
use crate::monster::Individual;
use crate::progression::HpGrowthPolicy;
use crate::repository::{SpeciesRepository, ZoneRepository};
use crate::rng::RngOracle;
use crate::trainer::Trainer;
use schema::{SpeciesId, ZoneData, ZoneId};
use std::collections::BTreeMap;
use std::path::Path;

/// A world location with its own spawn pool. Neighbours are referenced by id
/// and resolved through a [`ZoneRepository`].
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub base_experience: i32,
    pub species: Vec<SpeciesId>,
    pub next: Option<ZoneId>,
    pub previous: Option<ZoneId>,
}

impl From<ZoneData> for Zone {
    fn from(data: ZoneData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            base_experience: data.base_experience,
            species: data.species,
            next: data.next,
            previous: data.previous,
        }
    }
}

impl Zone {
    /// Generate an unowned creature from the spawn pool with
    /// `base_experience ± spread` experience.
    pub fn spawn_wild(
        &self,
        species: &dyn SpeciesRepository,
        rng: &mut dyn RngOracle,
        spread: i32,
        policy: HpGrowthPolicy,
    ) -> Result<Individual, DataError> {
        if self.species.is_empty() {
            return Err(DataError::EmptySpeciesPool { zone: self.id });
        }

        let species_id = self.species[rng.pick(self.species.len())];
        let template = species
            .find_by_id(species_id)
            .ok_or(DataError::SpeciesNotFound { id: species_id })?;
        let experience = (self.base_experience + rng.stat_jitter(spread)).max(0) as f64;
        let name = format!("Wild {}", template.name);

        log::debug!("{} spawns {} with {} exp", self.name, name, experience);
        Ok(Individual::new(name, template, None, experience, policy, rng))
    }

    /// Spawn a wild creature and fight it with the trainer's first living team
    /// member until the battle ends.
    #[allow(clippy::too_many_arguments)]
    pub fn encounter(
        &self,
        trainer: &mut Trainer,
        species: &dyn SpeciesRepository,
        controller: &mut dyn PlayerController,
        rng: &mut dyn RngOracle,
        spread: i32,
        policy: HpGrowthPolicy,
        events: &mut EventBus,
    ) -> GameResult<BattleOutcome> {
        let wild = self.spawn_wild(species, rng, spread, policy)?;
        let mut session = BattleSession::with_first_living(trainer, wild, policy)?;
        session.run_to_completion(controller, rng, events)
    }
}

/// Every zone of the world, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ZoneAtlas {
    zones: BTreeMap<ZoneId, Zone>,
}

impl ZoneAtlas {
    pub fn new(zones: Vec<Zone>) -> Self {
        let zones: BTreeMap<ZoneId, Zone> = zones.into_iter().map(|zone| (zone.id, zone)).collect();
        for zone in zones.values() {
            for link in [zone.next, zone.previous].into_iter().flatten() {
                if !zones.contains_key(&link) {
                    log::warn!("zone {} links to unknown zone {}", zone.id, link);
                }
            }
        }
        Self { zones }
    }

    /// Load every zone file under `<data_dir>/zones`.
    pub fn load(data_dir: &Path) -> Result<Self, DataError> {
        let zones: Vec<ZoneData> = load_ron_dir(&data_dir.join("zones"))?;
        Ok(Self::new(zones.into_iter().map(Zone::from).collect()))
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn get(&self, id: ZoneId) -> Result<&Zone, DataError> {
        self.find_by_id(id).ok_or(DataError::ZoneNotFound(id))
    }
}

impl ZoneRepository for ZoneAtlas {
    fn find_by_id(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(&id)
    }

    fn find_all(&self) -> Vec<&Zone> {
        self.zones.values().collect()
    }
}
