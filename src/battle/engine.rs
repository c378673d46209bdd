use crate::battle::capture::CaptureOutcome;
use crate::battle::controller::{PlayerAction, PlayerController};
use crate::battle::state::{BattleEvent, BattleOutcome, EventBus};
use crate::errors::{ActionError, GameResult};
use crate::monster::Individual;
use crate::progression::HpGrowthPolicy;
use crate::rng::RngOracle;
use crate::trainer::Trainer;
use schema::StatKind;

/// Share of the opponent's experience awarded for knocking it out.
pub const VICTORY_EXPERIENCE_SHARE: f64 = 0.20;

/// One encounter between a trainer's active team member and an opposing
/// creature. Lives only for the duration of the fight.
#[derive(Debug)]
pub struct BattleSession<'a> {
    trainer: &'a mut Trainer,
    active: usize,
    opponent: Individual,
    round: u32,
    outcome: BattleOutcome,
    experience_awarded: bool,
    hp_policy: HpGrowthPolicy,
}

impl<'a> BattleSession<'a> {
    /// Start a battle with `active` as the player's acting team member. The
    /// caller is expected to pick a living lead.
    pub fn new(
        trainer: &'a mut Trainer,
        active: usize,
        opponent: Individual,
        hp_policy: HpGrowthPolicy,
    ) -> Result<Self, ActionError> {
        if trainer.team().is_empty() {
            return Err(ActionError::EmptyTeam);
        }
        if trainer.team_member(active)?.is_fainted() {
            log::warn!("battle starts with a knocked out lead at index {}", active);
        }

        Ok(Self {
            trainer,
            active,
            opponent,
            round: 1,
            outcome: BattleOutcome::InProgress,
            experience_awarded: false,
            hp_policy,
        })
    }

    /// Start a battle led by the first team member still standing.
    pub fn with_first_living(
        trainer: &'a mut Trainer,
        opponent: Individual,
        hp_policy: HpGrowthPolicy,
    ) -> Result<Self, ActionError> {
        if trainer.team().is_empty() {
            return Err(ActionError::EmptyTeam);
        }
        let lead = trainer
            .select_active()
            .ok_or(ActionError::NoEligibleCreature)?;
        Self::new(trainer, lead, opponent, hp_policy)
    }

    pub fn trainer(&self) -> &Trainer {
        &*self.trainer
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The player's acting creature.
    pub fn active(&self) -> &Individual {
        // The index is validated on construction and on every switch, and the
        // team cannot shrink during a battle.
        &self.trainer.team()[self.active]
    }

    pub fn opponent(&self) -> &Individual {
        &self.opponent
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    /// True once the opponent belongs to the player's trainer.
    pub fn opponent_captured(&self) -> bool {
        self.opponent.owner == Some(self.trainer.id)
    }

    /// Speed ties go to the player.
    pub fn player_acts_first(&self) -> bool {
        self.active().stat(StatKind::Speed) >= self.opponent.stat(StatKind::Speed)
    }

    /// Resolve one round: both sides act in speed order, unless the first
    /// action captures or knocks out the other side.
    pub fn play_round(
        &mut self,
        controller: &mut dyn PlayerController,
        rng: &mut dyn RngOracle,
        events: &mut EventBus,
    ) -> GameResult<()> {
        if self.outcome != BattleOutcome::InProgress {
            return Ok(());
        }

        events.push(BattleEvent::RoundStarted { round: self.round });
        log::debug!("round {} begins", self.round);

        if self.player_acts_first() {
            self.player_turn(controller, rng, events)?;
            if !self.opponent.is_fainted() && !self.opponent_captured() {
                self.opponent_turn(events);
            }
        } else {
            let active_was_standing = !self.active().is_fainted();
            self.opponent_turn(events);
            if !(active_was_standing && self.active().is_fainted()) {
                self.player_turn(controller, rng, events)?;
            }
        }

        events.push(BattleEvent::RoundEnded { round: self.round });
        self.round += 1;
        Ok(())
    }

    fn player_turn(
        &mut self,
        controller: &mut dyn PlayerController,
        rng: &mut dyn RngOracle,
        events: &mut EventBus,
    ) -> GameResult<()> {
        let action = controller.choose_action(self);
        log::debug!("player action: {:?}", action);

        match action {
            PlayerAction::Attack => self.player_attack(events),
            PlayerAction::UseItem { slot } => self.use_item(slot, controller, rng, events)?,
            PlayerAction::Switch { team_index } => self.switch_active(team_index, events)?,
        }
        Ok(())
    }

    fn player_attack(&mut self, events: &mut EventBus) {
        let attacker = &self.trainer.team()[self.active];
        if attacker.is_fainted() {
            events.push(BattleEvent::CannotAct {
                name: attacker.name().to_string(),
            });
            return;
        }

        let damage = attacker.attack(&mut self.opponent);
        events.push(BattleEvent::Attacked {
            attacker: attacker.name().to_string(),
            target: self.opponent.name().to_string(),
            damage,
            remaining_hp: self.opponent.hp(),
        });
        if self.opponent.is_fainted() {
            events.push(BattleEvent::Fainted {
                name: self.opponent.name().to_string(),
            });
        }
    }

    fn use_item(
        &mut self,
        slot: usize,
        controller: &mut dyn PlayerController,
        rng: &mut dyn RngOracle,
        events: &mut EventBus,
    ) -> Result<(), ActionError> {
        let item = self.trainer.item(slot)?.clone();
        let Some(usable) = item.as_usable() else {
            events.push(BattleEvent::ItemNotUsable {
                item: item.name().to_string(),
            });
            return Ok(());
        };

        events.push(BattleEvent::ItemUsed {
            trainer: self.trainer.name.clone(),
            item: item.name().to_string(),
        });

        match usable.use_on(&mut self.opponent, self.trainer, rng) {
            CaptureOutcome::Captured(placement) => {
                if let Some(nickname) = controller.nickname(&self.opponent) {
                    let old = self.opponent.name().to_string();
                    if self.opponent.rename(&nickname) {
                        if let Some(stored) = self.trainer.member_mut(placement) {
                            stored.rename(&nickname);
                        }
                        events.push(BattleEvent::Renamed {
                            old,
                            new: self.opponent.name().to_string(),
                        });
                    }
                }
                events.push(BattleEvent::CaptureSucceeded {
                    name: self.opponent.name().to_string(),
                    placement,
                });
            }
            CaptureOutcome::Failed { chance, roll } => {
                events.push(BattleEvent::CaptureFailed {
                    name: self.opponent.name().to_string(),
                    chance,
                    roll,
                });
            }
            CaptureOutcome::NotEligible => {
                events.push(BattleEvent::CaptureNotEligible {
                    name: self.opponent.name().to_string(),
                });
            }
        }
        Ok(())
    }

    fn switch_active(&mut self, team_index: usize, events: &mut EventBus) -> Result<(), ActionError> {
        let candidate = self.trainer.team_member(team_index)?;
        if candidate.is_fainted() {
            events.push(BattleEvent::SwitchRejected {
                name: candidate.name().to_string(),
            });
            return Ok(());
        }

        let new = candidate.name().to_string();
        let old = self.active().name().to_string();
        self.active = team_index;
        events.push(BattleEvent::Switched { old, new });
        Ok(())
    }

    /// The opponent always attacks while it has HP and the active member is
    /// still standing.
    fn opponent_turn(&mut self, events: &mut EventBus) {
        if self.opponent.is_fainted() {
            return;
        }
        let Ok(target) = self.trainer.team_member_mut(self.active) else {
            return;
        };
        if target.is_fainted() {
            log::debug!("{} has nothing to attack", self.opponent.name());
            return;
        }

        let damage = self.opponent.attack(target);
        events.push(BattleEvent::Attacked {
            attacker: self.opponent.name().to_string(),
            target: target.name().to_string(),
            damage,
            remaining_hp: target.hp(),
        });
        if target.is_fainted() {
            events.push(BattleEvent::Fainted {
                name: target.name().to_string(),
            });
        }
    }

    /// Opponent knocked out (awarding experience once) or captured.
    pub fn check_victory(&mut self, rng: &mut dyn RngOracle, events: &mut EventBus) -> bool {
        if self.opponent.is_fainted() {
            if !self.experience_awarded {
                self.experience_awarded = true;
                self.award_experience(rng, events);
            }
            self.declare_win(events);
            return true;
        }

        if self.opponent_captured() {
            self.declare_win(events);
            return true;
        }
        false
    }

    fn award_experience(&mut self, rng: &mut dyn RngOracle, events: &mut EventBus) {
        let amount = self.opponent.experience() * VICTORY_EXPERIENCE_SHARE;
        let policy = self.hp_policy;
        let Ok(winner) = self.trainer.team_member_mut(self.active) else {
            return;
        };

        events.push(BattleEvent::ExperienceGained {
            name: winner.name().to_string(),
            amount,
        });
        for progress in winner.add_experience(amount, policy, rng) {
            events.push(BattleEvent::Progress(progress));
        }
    }

    fn declare_win(&mut self, events: &mut EventBus) {
        if self.outcome == BattleOutcome::InProgress {
            self.outcome = BattleOutcome::PlayerWon;
            events.push(BattleEvent::BattleWon {
                trainer: self.trainer.name.clone(),
            });
            log::info!("{} won after {} rounds", self.trainer.name, self.round - 1);
        }
    }

    /// Every team member is at 0 HP.
    pub fn check_defeat(&self) -> bool {
        self.trainer.all_fainted()
    }

    fn conclude_defeat(&mut self, events: &mut EventBus) {
        self.outcome = BattleOutcome::PlayerLost;
        events.push(BattleEvent::BattleLost {
            trainer: self.trainer.name.clone(),
        });
        self.trainer.heal_team();
        events.push(BattleEvent::TeamHealed {
            trainer: self.trainer.name.clone(),
        });
        log::info!("{} lost; team restored to full HP", self.trainer.name);
    }

    /// Play rounds until one side wins. A defeat heals the whole team before
    /// returning.
    pub fn run_to_completion(
        &mut self,
        controller: &mut dyn PlayerController,
        rng: &mut dyn RngOracle,
        events: &mut EventBus,
    ) -> GameResult<BattleOutcome> {
        let mut mark = events.len();
        loop {
            if self.check_defeat() {
                self.conclude_defeat(events);
            } else if !self.check_victory(rng, events) {
                self.play_round(controller, rng, events)?;
            }

            controller.observe(events.since(mark));
            mark = events.len();

            if self.outcome != BattleOutcome::InProgress {
                return Ok(self.outcome);
            }
        }
    }
}
