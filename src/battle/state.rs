use crate::progression::ProgressEvent;
use crate::trainer::Placement;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    InProgress,
    /// Opponent knocked out or captured
    PlayerWon,
    /// No team member left standing
    PlayerLost,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Round Management
    RoundStarted {
        round: u32,
    },
    RoundEnded {
        round: u32,
    },

    // Actions
    Attacked {
        attacker: String,
        target: String,
        damage: i32,
        remaining_hp: i32,
    },
    CannotAct {
        name: String,
    },
    Fainted {
        name: String,
    },
    Switched {
        old: String,
        new: String,
    },
    SwitchRejected {
        name: String,
    },

    // Items and Capture
    ItemUsed {
        trainer: String,
        item: String,
    },
    ItemNotUsable {
        item: String,
    },
    CaptureSucceeded {
        name: String,
        placement: Placement,
    },
    CaptureFailed {
        name: String,
        chance: f64,
        roll: u32,
    },
    CaptureNotEligible {
        name: String,
    },
    Renamed {
        old: String,
        new: String,
    },

    // Rewards
    ExperienceGained {
        name: String,
        amount: f64,
    },
    Progress(ProgressEvent),

    // Battle End
    BattleWon {
        trainer: String,
    },
    BattleLost {
        trainer: String,
    },
    TeamHealed {
        trainer: String,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            // === Round Events ===
            BattleEvent::RoundStarted { round } => Some(format!("===== Round {} =====", round)),
            BattleEvent::RoundEnded { .. } => None,

            // === Action Events ===
            BattleEvent::Attacked {
                attacker,
                target,
                damage,
                ..
            } => Some(format!("{} deals {} damage to {}", attacker, damage, target)),
            BattleEvent::CannotAct { name } => {
                Some(format!("{} is knocked out and cannot attack!", name))
            }
            BattleEvent::Fainted { name } => Some(format!("{} is knocked out!", name)),
            BattleEvent::Switched { old, new } => Some(format!("{} replaces {}", new, old)),
            BattleEvent::SwitchRejected { name } => {
                Some(format!("Impossible! {} is knocked out", name))
            }

            // === Item Events ===
            BattleEvent::ItemUsed { trainer, item } => {
                Some(format!("{} uses {}!", trainer, item))
            }
            BattleEvent::ItemNotUsable { item } => Some(format!("{} cannot be used here", item)),
            BattleEvent::CaptureSucceeded { name, placement } => match placement {
                Placement::Team(_) => Some(format!("{} was captured!", name)),
                Placement::Box(_) => Some(format!("{} was captured and sent to the box!", name)),
            },
            BattleEvent::CaptureFailed { name, .. } => {
                Some(format!("The kube could not hold {}!", name))
            }
            BattleEvent::CaptureNotEligible { name } => {
                Some(format!("{} cannot be captured", name))
            }
            BattleEvent::Renamed { old, new } => Some(format!("{} is now called {}", old, new)),

            // === Reward Events ===
            BattleEvent::ExperienceGained { name, amount } => {
                Some(format!("{} gains {:.1} exp", name, amount))
            }
            BattleEvent::Progress(progress) => progress.format(),

            // === End Events ===
            BattleEvent::BattleWon { trainer } => Some(format!("{} wins!", trainer)),
            BattleEvent::BattleLost { trainer } => {
                Some(format!("Game over! {} has no creature left", trainer))
            }
            BattleEvent::TeamHealed { .. } => Some("The team was fully healed.".to_string()),
        }
    }
}

/// Event bus for collecting and managing battle events.
///
/// ```rust,ignore
/// event_bus.print_debug();                       // Just print events
/// event_bus.print_formatted();                   // Human-readable format
/// println!("{}", event_bus);                     // Display trait
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Events pushed since `start` (an earlier `len()`).
    pub fn since(&self, start: usize) -> &[BattleEvent] {
        self.events.get(start..).unwrap_or(&[])
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events using their formatted text, falling back to debug
    /// format for silent events.
    pub fn print_formatted(&self) {
        for event in &self.events {
            match event.format() {
                Some(formatted) => println!("  {}", formatted),
                None => println!("  {:?} (silent)", event),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}
