use crate::battle::controller::{PlayerAction, PlayerController};
use crate::battle::engine::BattleSession;
use crate::battle::state::BattleEvent;
use crate::item::MonsterKube;
use crate::monster::Individual;
use crate::progression::HpGrowthPolicy;
use crate::rng::ScriptedRng;
use crate::trainer::Trainer;
use schema::{ElementTag, GrowthModifiers, SpeciesData, SpeciesId, StatKind, Stats, TrainerId};
use std::collections::VecDeque;
use std::sync::Arc;

/// Trainer id used by test players.
pub const PLAYER_ID: TrainerId = 1;

fn species(
    id: SpeciesId,
    name: &str,
    element: &str,
    base: [i32; 6],
    growth: [f64; 6],
) -> Arc<SpeciesData> {
    let [attack, defense, speed, sp_attack, sp_defense, max_hp] = base;
    let [g_attack, g_defense, g_speed, g_sp_attack, g_sp_defense, g_max_hp] = growth;
    Arc::new(SpeciesData {
        id,
        name: name.to_string(),
        element: ElementTag(element.to_string()),
        base_stats: Stats {
            attack,
            defense,
            speed,
            sp_attack,
            sp_defense,
            max_hp,
        },
        growth: GrowthModifiers {
            attack: g_attack,
            defense: g_defense,
            speed: g_speed,
            sp_attack: g_sp_attack,
            sp_defense: g_sp_defense,
            max_hp: g_max_hp,
        },
        description: String::new(),
        trait_text: String::new(),
        personality: String::new(),
    })
}

pub fn springleaf() -> Arc<SpeciesData> {
    species(1, "Springleaf", "Graine", [9, 11, 10, 12, 14, 60], [6.5, 9.0, 8.0, 7.0, 10.0, 34.0])
}

pub fn flamkip() -> Arc<SpeciesData> {
    species(4, "Flamkip", "Animal", [12, 8, 13, 16, 7, 50], [10.0, 5.5, 9.5, 9.5, 6.5, 22.0])
}

pub fn aquamy() -> Arc<SpeciesData> {
    species(7, "Aquamy", "Meteo", [10, 11, 9, 14, 14, 55], [9.0, 10.0, 7.5, 12.0, 12.0, 27.0])
}

pub fn laoumi() -> Arc<SpeciesData> {
    species(8, "Laoumi", "Animal", [11, 10, 9, 8, 11, 58], [11.0, 8.0, 7.0, 6.0, 11.5, 23.0])
}

pub fn bugsyface() -> Arc<SpeciesData> {
    species(10, "Bugsyface", "Insecte", [10, 13, 8, 7, 13, 45], [7.0, 11.0, 6.5, 8.0, 11.5, 21.0])
}

pub fn galum() -> Arc<SpeciesData> {
    species(13, "Galum", "Minéral", [12, 15, 6, 8, 12, 55], [9.0, 13.0, 4.0, 6.5, 10.5, 13.0])
}

pub fn test_kube(capture_chance: f64) -> MonsterKube {
    MonsterKube {
        id: 1,
        name: "Kube".to_string(),
        description: "A capture cube".to_string(),
        capture_chance,
    }
}

/// A builder for creating test creatures with common defaults: no jitter,
/// potential 1.0, no experience, full HP.
///
/// # Example
/// ```ignore
/// let monster = TestMonsterBuilder::new(flamkip())
///     .with_speed(30)
///     .with_hp(5)
///     .build();
/// ```
pub struct TestMonsterBuilder {
    species: Arc<SpeciesData>,
    name: Option<String>,
    owner: Option<TrainerId>,
    experience: f64,
    potential: f64,
    stats: Vec<(StatKind, i32)>,
    hp: Option<i32>,
}

impl TestMonsterBuilder {
    pub fn new(species: Arc<SpeciesData>) -> Self {
        Self {
            species,
            name: None,
            owner: None,
            experience: 0.0,
            potential: 1.0,
            stats: Vec::new(),
            hp: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_owner(mut self, owner: TrainerId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Initial experience, applied through the normal level-up path.
    pub fn with_experience(mut self, experience: f64) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_potential(mut self, potential: f64) -> Self {
        self.potential = potential;
        self
    }

    pub fn with_attack(self, value: i32) -> Self {
        self.with_stat(StatKind::Attack, value)
    }

    pub fn with_defense(self, value: i32) -> Self {
        self.with_stat(StatKind::Defense, value)
    }

    pub fn with_speed(self, value: i32) -> Self {
        self.with_stat(StatKind::Speed, value)
    }

    pub fn with_max_hp(self, value: i32) -> Self {
        self.with_stat(StatKind::MaxHp, value)
    }

    pub fn with_stat(mut self, stat: StatKind, value: i32) -> Self {
        self.stats.push((stat, value));
        self
    }

    /// Current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn build(self) -> Individual {
        let mut rng = ScriptedRng::new().with_potential(self.potential);
        let name = self.name.unwrap_or_else(|| self.species.name.clone());
        let grown = Individual::new(
            name,
            Arc::clone(&self.species),
            self.owner,
            self.experience,
            HpGrowthPolicy::Incremental,
            &mut rng,
        );

        let mut record = grown.to_record(None);
        for (stat, value) in self.stats {
            *record.stats.get_mut(stat) = value;
        }
        record.hp = self.hp.unwrap_or(record.stats.max_hp);
        Individual::from_record(&record, self.species)
    }
}

/// Creates a trainer owning `team` in order.
pub fn create_test_trainer(team: Vec<Individual>) -> Trainer {
    let mut trainer = Trainer::new(PLAYER_ID, "Sacha", 100);
    for member in team {
        trainer.add_captured(member);
    }
    trainer
}

/// Plays back queued actions, then repeats the fallback (if any). Every
/// observed event is recorded.
pub struct ScriptedController {
    actions: VecDeque<PlayerAction>,
    fallback: Option<PlayerAction>,
    nicknames: VecDeque<String>,
    pub observed: Vec<BattleEvent>,
    pub decisions: usize,
}

impl ScriptedController {
    pub fn new(actions: Vec<PlayerAction>) -> Self {
        Self {
            actions: actions.into(),
            fallback: None,
            nicknames: VecDeque::new(),
            observed: Vec::new(),
            decisions: 0,
        }
    }

    pub fn always(action: PlayerAction) -> Self {
        Self::new(Vec::new()).then_always(action)
    }

    pub fn then_always(mut self, action: PlayerAction) -> Self {
        self.fallback = Some(action);
        self
    }

    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.nicknames.push_back(nickname.to_string());
        self
    }
}

impl PlayerController for ScriptedController {
    fn choose_action(&mut self, _session: &BattleSession<'_>) -> PlayerAction {
        self.decisions += 1;
        match self.actions.pop_front().or(self.fallback) {
            Some(action) => action,
            None => panic!(
                "ScriptedController exhausted! Decision {} has no scripted action.",
                self.decisions
            ),
        }
    }

    fn nickname(&mut self, _captured: &Individual) -> Option<String> {
        self.nicknames.pop_front()
    }

    fn observe(&mut self, events: &[BattleEvent]) {
        self.observed.extend_from_slice(events);
    }
}
