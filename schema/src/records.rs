use crate::{IndividualId, ItemId, SpeciesId, Stats, TrainerId};
use serde::{Deserialize, Serialize};

/// Flat persisted form of an individual creature. Foreign keys are plain ids;
/// the engine resolves them through the species catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualRecord {
    pub id: IndividualId,
    pub name: String,
    pub species_id: SpeciesId,
    pub level: u32,
    pub stats: Stats,
    pub potential: f64,
    pub experience: f64,
    pub hp: i32,
    pub team_owner: Option<TrainerId>,
    pub box_owner: Option<TrainerId>,
    /// Index inside the owner's team or box.
    #[serde(default)]
    pub position: u32,
}

/// Persisted item definition held in a trainer's bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemRecord {
    Kube {
        id: ItemId,
        name: String,
        description: String,
        capture_chance: f64,
    },
    Badge {
        id: ItemId,
        name: String,
        description: String,
        champion: TrainerId,
    },
}

/// Persisted trainer. The roster is stored as individual records pointing
/// back at the trainer, so only the bag is embedded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerRecord {
    pub id: TrainerId,
    pub name: String,
    pub money: i64,
    pub bag: Vec<ItemRecord>,
}
