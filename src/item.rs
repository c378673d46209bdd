use crate::battle::capture::{attempt_capture, CaptureOutcome};
use crate::monster::Individual;
use crate::rng::RngOracle;
use crate::trainer::Trainer;
use schema::{ItemId, ItemRecord, TrainerId};

/// Items that act on a battle target.
pub trait UseOnTarget {
    fn use_on(
        &self,
        target: &mut Individual,
        trainer: &mut Trainer,
        rng: &mut dyn RngOracle,
    ) -> CaptureOutcome;
}

/// Capture device. Throwing one does not consume it.
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterKube {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub capture_chance: f64,
}

impl UseOnTarget for MonsterKube {
    fn use_on(
        &self,
        target: &mut Individual,
        trainer: &mut Trainer,
        rng: &mut dyn RngOracle,
    ) -> CaptureOutcome {
        attempt_capture(target, trainer, self.capture_chance, rng)
    }
}

/// Trophy won from a champion.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub champion: TrainerId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Kube(MonsterKube),
    Badge(Badge),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Kube(kube) => &kube.name,
            Item::Badge(badge) => &badge.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Item::Kube(kube) => &kube.description,
            Item::Badge(badge) => &badge.description,
        }
    }

    /// The use-on-target capability, if this item has one.
    pub fn as_usable(&self) -> Option<&dyn UseOnTarget> {
        match self {
            Item::Kube(kube) => Some(kube),
            Item::Badge(_) => None,
        }
    }

    pub fn to_record(&self) -> ItemRecord {
        match self {
            Item::Kube(kube) => ItemRecord::Kube {
                id: kube.id,
                name: kube.name.clone(),
                description: kube.description.clone(),
                capture_chance: kube.capture_chance,
            },
            Item::Badge(badge) => ItemRecord::Badge {
                id: badge.id,
                name: badge.name.clone(),
                description: badge.description.clone(),
                champion: badge.champion,
            },
        }
    }

    pub fn from_record(record: &ItemRecord) -> Self {
        match record {
            ItemRecord::Kube {
                id,
                name,
                description,
                capture_chance,
            } => Item::Kube(MonsterKube {
                id: *id,
                name: name.clone(),
                description: description.clone(),
                capture_chance: *capture_chance,
            }),
            ItemRecord::Badge {
                id,
                name,
                description,
                champion,
            } => Item::Badge(Badge {
                id: *id,
                name: name.clone(),
                description: description.clone(),
                champion: *champion,
            }),
        }
    }
}
