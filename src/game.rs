//! A running game: the player's trainer wandering the zones through a
//! console menu.

use crate::art::ArtProvider;
use crate::battle::state::{BattleOutcome, EventBus};
use crate::config::GameConfig;
use crate::console::{prompt, prompt_index, Console, ConsoleController};
use crate::errors::{DataError, GameResult};
use crate::monster::Individual;
use crate::repository::{self, GameStore, SpeciesRepository, ZoneRepository};
use crate::rng::RngOracle;
use crate::trainer::Trainer;
use crate::zone::Zone;
use schema::ZoneId;

/// Read-only content shared by every session.
#[derive(Clone, Copy)]
pub struct World<'a> {
    pub species: &'a dyn SpeciesRepository,
    pub zones: &'a dyn ZoneRepository,
    pub art: &'a dyn ArtProvider,
}

pub struct GameSession<'a> {
    config: GameConfig,
    world: World<'a>,
    store: &'a mut dyn GameStore,
    console: &'a mut dyn Console,
    rng: &'a mut dyn RngOracle,
    trainer: Trainer,
    zone: ZoneId,
}

impl<'a> GameSession<'a> {
    /// Resume the first saved trainer, or create a new one and let the player
    /// pick a starter.
    pub fn start(
        config: GameConfig,
        world: World<'a>,
        store: &'a mut dyn GameStore,
        console: &'a mut dyn Console,
        rng: &'a mut dyn RngOracle,
    ) -> GameResult<Self> {
        let zone = world.zones.starting_zone().ok_or(DataError::NoZones)?.id;
        let trainer = match store.all_trainers()?.first() {
            Some(saved) => repository::load_trainer(&*store, world.species, saved.id)?,
            None => {
                let mut trainer = Trainer::new(0, config.player_name.clone(), config.starting_money);
                for item in config.starting_bag() {
                    trainer.add_item(item);
                }
                trainer
            }
        };

        let mut session = Self {
            config,
            world,
            store,
            console,
            rng,
            trainer,
            zone,
        };
        if session.trainer.team().is_empty() {
            session.choose_starter()?;
        } else {
            session
                .console
                .print(&format!("Welcome back, {}!", session.trainer.name));
        }
        Ok(session)
    }

    pub fn trainer(&self) -> &Trainer {
        &self.trainer
    }

    pub fn zone_id(&self) -> ZoneId {
        self.zone
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn current_zone(&self) -> Result<&'a Zone, DataError> {
        let zones = self.world.zones;
        zones
            .find_by_id(self.zone)
            .ok_or(DataError::ZoneNotFound(self.zone))
    }

    /// Offer the configured starter species and add the chosen one to the
    /// team. Returns false when input ends before a choice is made.
    pub fn choose_starter(&mut self) -> GameResult<bool> {
        let mut candidates = Vec::with_capacity(self.config.starter_species.len());
        for name in &self.config.starter_species {
            let species = self
                .world
                .species
                .find_by_name(name)
                .ok_or_else(|| DataError::SpeciesNameNotFound(name.clone()))?;
            candidates.push(Individual::new(
                species.name.clone(),
                species,
                Some(self.trainer.id),
                self.config.starter_experience,
                self.config.hp_growth,
                &mut *self.rng,
            ));
        }

        for (index, candidate) in candidates.iter().enumerate() {
            self.console
                .print(&format!("--- {} ---\n{}", index + 1, candidate.detail()));
        }
        let prompt_text = format!("Choose your starter (1-{})", candidates.len());
        let Some(choice) = prompt_index(&mut *self.console, &prompt_text, candidates.len()) else {
            return Ok(false);
        };

        let mut starter = candidates.swap_remove(choice);
        let question = format!("Give {} a nickname? (leave empty to keep it)", starter.name());
        if let Some(nickname) = prompt(&mut *self.console, &question) {
            starter.rename(&nickname);
        }

        self.console
            .print(&format!("{} joins your team!", starter.name()));
        log::info!("starter chosen: {} ({})", starter.name(), starter.species().name);
        self.trainer.add_captured(starter);
        Ok(true)
    }

    /// Main menu loop. Ends on `0` or when input runs out.
    pub fn explore(&mut self) -> GameResult<()> {
        loop {
            let zone = self.current_zone()?;
            self.console.print(&format!("You are in {}", zone.name));
            for species_id in &zone.species {
                if let Some(species) = self.world.species.find_by_id(*species_id) {
                    self.console
                        .print(&format!(" - {} [{}]", species.name, species.element));
                }
            }
            self.console.print("1. Meet a wild monster");
            self.console.print("2. Examine your team");
            self.console.print("3. Go to the next zone");
            self.console.print("4. Go back to the previous zone");
            self.console.print("5. Save");
            self.console.print("0. Quit");

            let Some(choice) = prompt(&mut *self.console, "What do you want to do?") else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.encounter(zone)?,
                "2" => self.examine_team()?,
                "3" => self.travel(zone.next, "There is no next zone."),
                "4" => self.travel(zone.previous, "There is no previous zone."),
                "5" => {
                    let written = self.save_game()?;
                    self.console
                        .print(&format!("Game saved ({} records).", written));
                }
                "0" => return Ok(()),
                _ => self.console.print("Unknown choice."),
            }
        }
    }

    fn travel(&mut self, destination: Option<ZoneId>, missing: &str) {
        let zones = self.world.zones;
        let Some(target) = destination.and_then(|id| zones.find_by_id(id)) else {
            self.console.print(missing);
            return;
        };
        self.zone = target.id;
        self.console.print(&format!("You travel to {}.", target.name));
    }

    fn encounter(&mut self, zone: &Zone) -> GameResult<()> {
        if self.trainer.select_active().is_none() {
            self.console.print("You have no monster able to fight.");
            return Ok(());
        }

        let mut events = EventBus::new();
        let mut controller = ConsoleController::new(&mut *self.console, self.world.art);
        let outcome = zone.encounter(
            &mut self.trainer,
            self.world.species,
            &mut controller,
            &mut *self.rng,
            self.config.wild_exp_spread,
            self.config.hp_growth,
            &mut events,
        )?;

        match outcome {
            BattleOutcome::PlayerWon => log::info!("encounter in {} won", zone.name),
            BattleOutcome::PlayerLost => log::info!("encounter in {} lost", zone.name),
            BattleOutcome::InProgress => log::warn!("encounter ended while still in progress"),
        }
        Ok(())
    }

    /// Team menu: a number shows that member's stat sheet, `m` reorders, `q`
    /// goes back.
    pub fn examine_team(&mut self) -> GameResult<()> {
        loop {
            self.console.print("Team:");
            for (index, member) in self.trainer.team().iter().enumerate() {
                self.console.print(&format!("{}. {}", index + 1, member));
            }
            let Some(answer) = prompt(
                &mut *self.console,
                "Monster number for details, m to reorder, q to go back",
            ) else {
                return Ok(());
            };

            match answer.as_str() {
                "q" => return Ok(()),
                "m" => self.reorder_team()?,
                other => match other.parse::<usize>() {
                    Ok(number) if (1..=self.trainer.team().len()).contains(&number) => {
                        let detail = self.trainer.team()[number - 1].detail();
                        self.console.print(&detail);
                    }
                    _ => self.console.print("Unknown choice."),
                },
            }
        }
    }

    fn reorder_team(&mut self) -> GameResult<()> {
        let len = self.trainer.team().len();
        if len < 2 {
            self.console
                .print("You need at least two monsters to change the order.");
            return Ok(());
        }
        let Some(from) = prompt_index(&mut *self.console, "Which monster do you want to move?", len)
        else {
            return Ok(());
        };
        let Some(to) = prompt_index(&mut *self.console, "To which position?", len) else {
            return Ok(());
        };
        self.trainer.reorder(from, to)?;
        log::debug!("team positions {} and {} swapped", from, to);
        Ok(())
    }

    /// Persist the trainer and its roster. Returns the number of records
    /// written.
    pub fn save_game(&mut self) -> GameResult<usize> {
        Ok(repository::save_trainer(&mut *self.store, &mut self.trainer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::FileArt;
    use crate::battle::tests::common::{create_test_trainer, flamkip, springleaf, TestMonsterBuilder};
    use crate::console::ScriptedConsole;
    use crate::repository::{IndividualRepository, MemoryStore, TrainerRepository};
    use crate::rng::ScriptedRng;
    use crate::species::SpeciesCatalog;
    use crate::zone::ZoneAtlas;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    struct Fixture {
        species: SpeciesCatalog,
        zones: ZoneAtlas,
        art: FileArt,
    }

    impl Fixture {
        fn new() -> Self {
            let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
            Self {
                species: SpeciesCatalog::load(&data_dir).unwrap(),
                zones: ZoneAtlas::load(&data_dir).unwrap(),
                art: FileArt::new("/nonexistent/art"),
            }
        }

        fn world(&self) -> World<'_> {
            World {
                species: &self.species,
                zones: &self.zones,
                art: &self.art,
            }
        }
    }

    #[test]
    fn test_new_game_chooses_starter() {
        let fixture = Fixture::new();
        let mut store = MemoryStore::new();
        let mut console = ScriptedConsole::new(&["7", "2", "Pyro", "0"]);
        let mut rng = ScriptedRng::new();

        let mut session = GameSession::start(
            GameConfig::default(),
            fixture.world(),
            &mut store,
            &mut console,
            &mut rng,
        )
        .unwrap();
        session.explore().unwrap();

        let trainer = session.trainer();
        assert_eq!(trainer.team().len(), 1);
        assert_eq!(trainer.team()[0].name(), "Pyro");
        assert_eq!(trainer.team()[0].species().name, "Flamkip");
        assert_eq!(trainer.team()[0].level(), 4);
        assert_eq!(trainer.bag().len(), 1);
        assert_eq!(trainer.money, 100);
    }

    #[test]
    fn test_starter_without_input() {
        let fixture = Fixture::new();
        let mut store = MemoryStore::new();
        let mut console = ScriptedConsole::new(&[]);
        let mut rng = ScriptedRng::new();

        let session = GameSession::start(
            GameConfig::default(),
            fixture.world(),
            &mut store,
            &mut console,
            &mut rng,
        )
        .unwrap();

        assert!(session.trainer().team().is_empty());
    }

    #[test]
    fn test_save_then_resume() {
        let fixture = Fixture::new();
        let mut store = MemoryStore::new();
        let mut rng = ScriptedRng::new();

        let mut console = ScriptedConsole::new(&["1", "", "5", "0"]);
        {
            let mut session = GameSession::start(
                GameConfig::default(),
                fixture.world(),
                &mut store,
                &mut console,
                &mut rng,
            )
            .unwrap();
            session.explore().unwrap();
        }
        assert!(console.transcript().contains("Game saved (2 records)."));
        assert_eq!(store.all_trainers().unwrap().len(), 1);
        assert_eq!(store.all_individuals().unwrap().len(), 1);

        let mut console = ScriptedConsole::new(&["0"]);
        let session = GameSession::start(
            GameConfig::default(),
            fixture.world(),
            &mut store,
            &mut console,
            &mut rng,
        )
        .unwrap();

        assert_eq!(session.trainer().team()[0].species().name, "Springleaf");
        assert_eq!(session.trainer().bag().len(), 1);
        drop(session);
        assert!(console.transcript().contains("Welcome back, Sacha!"));
        assert!(!console.transcript().contains("Choose your starter"));
    }

    #[test]
    fn test_zone_navigation() {
        let fixture = Fixture::new();
        let mut store = MemoryStore::new();
        let mut console = ScriptedConsole::new(&["1", "", "4", "3", "3", "9", "0"]);
        let mut rng = ScriptedRng::new();

        let zone = {
            let mut session = GameSession::start(
                GameConfig::default(),
                fixture.world(),
                &mut store,
                &mut console,
                &mut rng,
            )
            .unwrap();
            session.explore().unwrap();
            session.zone_id()
        };

        assert_eq!(zone, 2);
        let transcript = console.transcript();
        assert!(transcript.contains("There is no previous zone."));
        assert!(transcript.contains("You travel to Route 2."));
        assert!(transcript.contains("There is no next zone."));
        assert!(transcript.contains("Unknown choice."));
    }

    #[test]
    fn test_examine_and_reorder_team() {
        let fixture = Fixture::new();
        let mut store = MemoryStore::new();
        let mut saved = create_test_trainer(vec![
            TestMonsterBuilder::new(springleaf()).build(),
            TestMonsterBuilder::new(flamkip()).build(),
        ]);
        repository::save_trainer(&mut store, &mut saved).unwrap();
        let mut console = ScriptedConsole::new(&["2", "m", "1", "2", "1", "x", "q", "0"]);
        let mut rng = ScriptedRng::new();

        let order: Vec<String> = {
            let mut session = GameSession::start(
                GameConfig::default(),
                fixture.world(),
                &mut store,
                &mut console,
                &mut rng,
            )
            .unwrap();
            session.explore().unwrap();
            session
                .trainer()
                .team()
                .iter()
                .map(|member| member.species().name.clone())
                .collect()
        };

        assert_eq!(order, vec!["Flamkip", "Springleaf"]);
        assert!(console.transcript().contains("Species : Flamkip"));
    }

    #[test]
    fn test_wild_encounter_is_won() {
        let fixture = Fixture::new();
        let mut store = MemoryStore::new();
        // Starter, no nickname, one encounter, three attacks, quit.
        let mut console = ScriptedConsole::new(&["1", "", "1", "1", "1", "1", "0"]);
        let mut rng = ScriptedRng::new().with_picks(vec![0]);

        let experience = {
            let mut session = GameSession::start(
                GameConfig::default(),
                fixture.world(),
                &mut store,
                &mut console,
                &mut rng,
            )
            .unwrap();
            session.explore().unwrap();
            session.trainer().team()[0].experience()
        };

        // 20% of the wild Springleaf's 50 exp.
        assert_eq!(experience, 1510.0);
        assert!(console.transcript().contains("Sacha wins!"));
        assert_eq!(console.remaining_inputs(), 0);
    }
}
