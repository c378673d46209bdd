use crate::progression::{level_threshold, HpGrowthPolicy, ProgressEvent, GROWTH_JITTER};
use crate::rng::RngOracle;
use crate::trainer::Placement;
use schema::{IndividualId, IndividualRecord, SpeciesData, StatKind, Stats, TrainerId};
use std::fmt;
use std::sync::Arc;

/// A live creature instance derived from a species template.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// Persistence id, `0` until first saved.
    pub id: IndividualId,
    name: String,
    species: Arc<SpeciesData>,
    /// Owning trainer; `None` for wild creatures.
    pub owner: Option<TrainerId>,
    level: u32,
    stats: Stats,
    potential: f64,
    experience: f64,
    hp: i32,
}

impl Individual {
    /// Create a level 1 individual with jittered base stats and a fresh
    /// potential, then feed it `initial_experience`. Level-ups granted here
    /// are silent.
    pub fn new(
        name: impl Into<String>,
        species: Arc<SpeciesData>,
        owner: Option<TrainerId>,
        initial_experience: f64,
        policy: HpGrowthPolicy,
        rng: &mut dyn RngOracle,
    ) -> Self {
        let mut stats = species.base_stats;
        for stat in StatKind::all() {
            *stats.get_mut(stat) += rng.stat_jitter(stat.creation_spread());
        }
        let potential = rng.potential();

        let mut individual = Self {
            id: 0,
            name: name.into(),
            species,
            owner,
            level: 1,
            hp: stats.max_hp.max(0),
            stats,
            potential,
            experience: 0.0,
        };

        let events = individual.add_experience(initial_experience, policy, rng);
        log::debug!(
            "created {} ({}) at level {} after {} level-ups",
            individual.name,
            individual.species.name,
            individual.level,
            events.len()
        );
        individual
    }

    /// Rebuild a persisted individual with its exact stored values.
    pub fn from_record(record: &IndividualRecord, species: Arc<SpeciesData>) -> Self {
        let mut individual = Self {
            id: record.id,
            name: record.name.clone(),
            species,
            owner: record.team_owner.or(record.box_owner),
            level: record.level.max(1),
            stats: record.stats,
            potential: record.potential,
            experience: record.experience,
            hp: 0,
        };
        individual.set_hp(record.hp);
        individual
    }

    /// Flatten into a persisted record. `placement` says where the owner keeps it.
    pub fn to_record(&self, placement: Option<Placement>) -> IndividualRecord {
        let (team_owner, box_owner, position) = match (self.owner, placement) {
            (Some(owner), Some(Placement::Team(index))) => (Some(owner), None, index as u32),
            (Some(owner), Some(Placement::Box(index))) => (None, Some(owner), index as u32),
            (Some(owner), None) => (Some(owner), None, 0),
            (None, _) => (None, None, 0),
        };

        IndividualRecord {
            id: self.id,
            name: self.name.clone(),
            species_id: self.species.id,
            level: self.level,
            stats: self.stats,
            potential: self.potential,
            experience: self.experience,
            hp: self.hp,
            team_owner,
            box_owner,
            position,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &Arc<SpeciesData> {
        &self.species
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stat(&self, stat: StatKind) -> i32 {
        self.stats.get(stat)
    }

    pub fn potential(&self) -> f64 {
        self.potential
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.stats.max_hp
    }

    pub fn is_fainted(&self) -> bool {
        self.hp <= 0
    }

    /// Set current HP, clamped to `[0, max_hp]`.
    pub fn set_hp(&mut self, value: i32) {
        self.hp = value.clamp(0, self.stats.max_hp.max(0));
    }

    pub fn heal_full(&mut self) {
        self.set_hp(self.stats.max_hp);
    }

    /// Add experience and apply every level-up it unlocks.
    ///
    /// Whether the level-ups are announced is decided once, on entry: an
    /// individual entering at level 1 levels up silently.
    pub fn add_experience(
        &mut self,
        amount: f64,
        policy: HpGrowthPolicy,
        rng: &mut dyn RngOracle,
    ) -> Vec<ProgressEvent> {
        self.experience += amount;
        let announced = self.level != 1;

        let mut events = Vec::new();
        while self.experience >= level_threshold(self.level + 1) {
            let hp_gain = self.level_up(policy, rng);
            if announced {
                log::info!("{} reached level {}", self.name, self.level);
            }
            events.push(ProgressEvent::LevelUp {
                name: self.name.clone(),
                new_level: self.level,
                hp_gain,
                announced,
            });
        }
        events
    }

    /// Returns the max HP delta.
    fn level_up(&mut self, policy: HpGrowthPolicy, rng: &mut dyn RngOracle) -> i32 {
        self.level += 1;

        let previous_max = self.stats.max_hp;
        self.stats.max_hp =
            policy.next_max_hp(previous_max, self.species.growth.max_hp, self.potential, rng);

        for stat in StatKind::combat() {
            let growth = (self.species.growth.get(stat) * self.potential).round() as i32;
            *self.stats.get_mut(stat) += growth + rng.growth_jitter(GROWTH_JITTER);
        }

        let hp_gain = self.stats.max_hp - previous_max;
        self.set_hp(self.hp + hp_gain);
        hp_gain
    }

    /// Strike `target` for `max(1, attack - target.defense / 2)`. Returns the
    /// HP actually removed, which is smaller than the damage when the target
    /// drops to 0.
    pub fn attack(&self, target: &mut Individual) -> i32 {
        let damage = calculate_damage(self.stats.attack, target.stats.defense);
        let before = target.hp;
        target.set_hp(before - damage);
        let dealt = before - target.hp;
        log::debug!("{} hits {} for {} ({} dealt)", self.name, target.name, damage, dealt);
        dealt
    }

    /// Replace the display name; an empty candidate keeps the current one.
    pub fn rename(&mut self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return false;
        }
        self.name = candidate.to_string();
        true
    }

    /// Stat sheet shown by the team menu.
    pub fn detail(&self) -> String {
        format!(
            "Name : {}\nSpecies : {} [{}]\nLevel : {}\nExp : {:.1}\nHP : {} / {}\n{} : {}\n{} : {}\n{} : {}\n{} : {}\n{} : {}",
            self.name,
            self.species.name,
            self.species.element,
            self.level,
            self.experience,
            self.hp,
            self.stats.max_hp,
            StatKind::Attack,
            self.stats.attack,
            StatKind::Defense,
            self.stats.defense,
            StatKind::Speed,
            self.stats.speed,
            StatKind::SpecialAttack,
            self.stats.sp_attack,
            StatKind::SpecialDefense,
            self.stats.sp_defense,
        )
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Lv. {}, {}/{} HP)",
            self.name, self.level, self.hp, self.stats.max_hp
        )
    }
}

/// Damage of a basic attack; never below 1.
pub fn calculate_damage(attack: i32, defense: i32) -> i32 {
    (attack - defense / 2).max(1)
}
