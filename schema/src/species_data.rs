use crate::{GrowthModifiers, SpeciesId, Stats, ZoneId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-text elemental tag ("Graine", "Animal", ...). Carried for display
/// only; no effectiveness chart is attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementTag(pub String);

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable creature-kind template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub id: SpeciesId,
    pub name: String,
    pub element: ElementTag,
    pub base_stats: Stats,
    pub growth: GrowthModifiers,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub trait_text: String,
    #[serde(default)]
    pub personality: String,
}

/// A world location as authored in the zone data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneData {
    pub id: ZoneId,
    pub name: String,
    pub base_experience: i32,
    pub species: Vec<SpeciesId>,
    #[serde(default)]
    pub next: Option<ZoneId>,
    #[serde(default)]
    pub previous: Option<ZoneId>,
}
