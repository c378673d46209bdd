use crate::errors::ActionError;
use crate::item::Item;
use crate::monster::Individual;
use schema::{TrainerId, TrainerRecord};
use serde::{Deserialize, Serialize};

/// Hard cap on the active team; further captures go to the box.
pub const TEAM_CAPACITY: usize = 6;

/// Where a roster member lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    Team(usize),
    Box(usize),
}

/// A player or NPC holding a team, a box and an item bag.
#[derive(Debug, Clone)]
pub struct Trainer {
    pub id: TrainerId,
    pub name: String,
    pub money: i64,
    team: Vec<Individual>,
    storage: Vec<Individual>,
    bag: Vec<Item>,
}

impl Trainer {
    pub fn new(id: TrainerId, name: impl Into<String>, money: i64) -> Self {
        Self {
            id,
            name: name.into(),
            money,
            team: Vec::new(),
            storage: Vec::new(),
            bag: Vec::new(),
        }
    }

    /// Rebuild a trainer from its record and already restored roster.
    pub fn from_parts(
        record: &TrainerRecord,
        team: Vec<Individual>,
        storage: Vec<Individual>,
        bag: Vec<Item>,
    ) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            money: record.money,
            team,
            storage,
            bag,
        }
    }

    pub fn to_record(&self) -> TrainerRecord {
        TrainerRecord {
            id: self.id,
            name: self.name.clone(),
            money: self.money,
            bag: self.bag.iter().map(Item::to_record).collect(),
        }
    }

    pub fn team(&self) -> &[Individual] {
        &self.team
    }

    pub fn boxed(&self) -> &[Individual] {
        &self.storage
    }

    pub fn bag(&self) -> &[Item] {
        &self.bag
    }

    pub fn add_item(&mut self, item: Item) {
        self.bag.push(item);
    }

    pub fn item(&self, slot: usize) -> Result<&Item, ActionError> {
        self.bag.get(slot).ok_or(ActionError::InvalidItemSlot(slot))
    }

    pub fn team_member(&self, index: usize) -> Result<&Individual, ActionError> {
        self.team.get(index).ok_or(ActionError::InvalidTeamIndex(index))
    }

    pub fn team_member_mut(&mut self, index: usize) -> Result<&mut Individual, ActionError> {
        self.team
            .get_mut(index)
            .ok_or(ActionError::InvalidTeamIndex(index))
    }

    pub fn member_mut(&mut self, placement: Placement) -> Option<&mut Individual> {
        match placement {
            Placement::Team(index) => self.team.get_mut(index),
            Placement::Box(index) => self.storage.get_mut(index),
        }
    }

    /// Every roster member with where it sits, team first.
    pub fn roster(&self) -> impl Iterator<Item = (Placement, &Individual)> {
        let team = self
            .team
            .iter()
            .enumerate()
            .map(|(index, member)| (Placement::Team(index), member));
        let storage = self
            .storage
            .iter()
            .enumerate()
            .map(|(index, member)| (Placement::Box(index), member));
        team.chain(storage)
    }

    pub fn roster_mut(&mut self) -> impl Iterator<Item = &mut Individual> {
        self.team.iter_mut().chain(self.storage.iter_mut())
    }

    /// Take ownership of a new member: team while there is room, box otherwise.
    pub fn add_captured(&mut self, mut individual: Individual) -> Placement {
        individual.owner = Some(self.id);
        if self.team.len() < TEAM_CAPACITY {
            self.team.push(individual);
            Placement::Team(self.team.len() - 1)
        } else {
            self.storage.push(individual);
            Placement::Box(self.storage.len() - 1)
        }
    }

    /// Index of the first team member still able to fight.
    pub fn select_active(&self) -> Option<usize> {
        self.team.iter().position(|member| !member.is_fainted())
    }

    /// True when no team member has HP left (an empty team counts as defeated).
    pub fn all_fainted(&self) -> bool {
        self.team.iter().all(Individual::is_fainted)
    }

    /// Swap two team positions.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), ActionError> {
        for index in [from, to] {
            if index >= self.team.len() {
                return Err(ActionError::InvalidTeamIndex(index));
            }
        }
        self.team.swap(from, to);
        Ok(())
    }

    /// Restore every team member to full HP.
    pub fn heal_team(&mut self) {
        for member in &mut self.team {
            member.heal_full();
        }
    }
}
