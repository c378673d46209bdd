use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// The six numeric stats every creature carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum StatKind {
    Attack,
    Defense,
    Speed,
    SpecialAttack,
    SpecialDefense,
    MaxHp,
}

impl StatKind {
    pub fn all() -> impl Iterator<Item = StatKind> {
        StatKind::iter()
    }

    /// The five stats that take part in combat growth (everything except max HP).
    pub fn combat() -> impl Iterator<Item = StatKind> {
        StatKind::iter().filter(|stat| *stat != StatKind::MaxHp)
    }

    /// Spread of the sign-flip jitter applied when an individual is created.
    pub fn creation_spread(self) -> i32 {
        match self {
            StatKind::MaxHp => 5,
            _ => 2,
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            StatKind::Attack => "Attack",
            StatKind::Defense => "Defense",
            StatKind::Speed => "Speed",
            StatKind::SpecialAttack => "Sp. Atk",
            StatKind::SpecialDefense => "Sp. Def",
            StatKind::MaxHp => "Max HP",
        };
        write!(f, "{}", display_name)
    }
}

/// Integer stat block. Used both for species base stats and for the current
/// stats of an individual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub sp_attack: i32,
    pub sp_defense: i32,
    pub max_hp: i32,
}

impl Stats {
    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::SpecialAttack => self.sp_attack,
            StatKind::SpecialDefense => self.sp_defense,
            StatKind::MaxHp => self.max_hp,
        }
    }

    pub fn get_mut(&mut self, stat: StatKind) -> &mut i32 {
        match stat {
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::Speed => &mut self.speed,
            StatKind::SpecialAttack => &mut self.sp_attack,
            StatKind::SpecialDefense => &mut self.sp_defense,
            StatKind::MaxHp => &mut self.max_hp,
        }
    }
}

/// Per-stat growth multipliers applied at each level-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthModifiers {
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub sp_attack: f64,
    pub sp_defense: f64,
    pub max_hp: f64,
}

impl GrowthModifiers {
    pub fn get(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::SpecialAttack => self.sp_attack,
            StatKind::SpecialDefense => self.sp_defense,
            StatKind::MaxHp => self.max_hp,
        }
    }
}
