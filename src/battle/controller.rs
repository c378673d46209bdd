//! Decision makers for the player side of a battle.

use crate::battle::engine::BattleSession;
use crate::battle::state::BattleEvent;
use crate::monster::Individual;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    UseItem { slot: usize },
    Switch { team_index: usize },
}

/// A trait for any system that can decide on the player's battle actions.
/// The opponent needs none: it always attacks.
pub trait PlayerController {
    /// Inspects the battle and decides what the player does this turn.
    fn choose_action(&mut self, session: &BattleSession<'_>) -> PlayerAction;

    /// Offered a new name for a freshly captured creature. `None` keeps the
    /// current name.
    fn nickname(&mut self, _captured: &Individual) -> Option<String> {
        None
    }

    /// Receives the events produced since the last call.
    fn observe(&mut self, _events: &[BattleEvent]) {}
}
