use crate::rng::RngOracle;
use serde::{Deserialize, Serialize};

/// Spread of the uniform jitter added to each combat stat on level-up.
pub const GROWTH_JITTER: i32 = 2;
/// Spread of the jitter on the recomputed max HP.
pub const RECOMPUTE_HP_JITTER: i32 = 5;
/// Divisor applied to the HP modifier under the incremental policy.
const INCREMENTAL_HP_DIVISOR: f64 = 5.0;

/// Cumulative experience needed to stand at `level`: `100 * (level - 1)^2`.
pub fn level_threshold(level: u32) -> f64 {
    let steps = level.saturating_sub(1) as f64;
    100.0 * steps * steps
}

/// How max HP grows when an individual levels up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HpGrowthPolicy {
    /// `maxHP += round(modHp * potential / 5) + jitter[-2, 2]`
    #[default]
    Incremental,
    /// `maxHP = round(modHp * potential) + jitter[-5, 5]`
    Recompute,
}

impl HpGrowthPolicy {
    /// Max HP after one level-up.
    pub fn next_max_hp(
        self,
        current_max: i32,
        modifier: f64,
        potential: f64,
        rng: &mut dyn RngOracle,
    ) -> i32 {
        match self {
            HpGrowthPolicy::Incremental => {
                let gain = (modifier * potential / INCREMENTAL_HP_DIVISOR).round() as i32;
                current_max + gain + rng.growth_jitter(GROWTH_JITTER)
            }
            HpGrowthPolicy::Recompute => {
                (modifier * potential).round() as i32 + rng.growth_jitter(RECOMPUTE_HP_JITTER)
            }
        }
    }
}

/// Progress notifications produced by experience gain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProgressEvent {
    LevelUp {
        name: String,
        new_level: u32,
        hp_gain: i32,
        /// False for level-ups granted while the individual entered the gain at
        /// level 1 (construction with initial experience).
        announced: bool,
    },
}

impl ProgressEvent {
    /// Player-facing text, or None for silent events.
    pub fn format(&self) -> Option<String> {
        match self {
            ProgressEvent::LevelUp {
                name,
                new_level,
                announced: true,
                ..
            } => Some(format!("{} is now level {}!", name, new_level)),
            ProgressEvent::LevelUp { .. } => None,
        }
    }
}
