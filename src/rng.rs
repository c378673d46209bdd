//! Random sources for stat growth, spawning and capture rolls.
//!
//! Everything random in the engine goes through [`RngOracle`] so battles and
//! level-ups can be replayed with [`ScriptedRng`] in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RngOracle {
    /// Creation jitter: either `-spread` or `+spread`.
    fn stat_jitter(&mut self, spread: i32) -> i32;
    /// Level-up jitter: uniform in `[-spread, spread]`.
    fn growth_jitter(&mut self, spread: i32) -> i32;
    /// Growth potential, uniform in `[0.5, 2.0]`.
    fn potential(&mut self) -> f64;
    /// Capture draw, uniform integer in `[0, 100]`.
    fn capture_roll(&mut self) -> u32;
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Live randomness backed by a standard RNG.
pub struct LiveRng {
    rng: StdRng,
}

impl LiveRng {
    /// Seeded when `seed` is set, otherwise drawn from OS entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl RngOracle for LiveRng {
    fn stat_jitter(&mut self, spread: i32) -> i32 {
        if self.rng.random_bool(0.5) {
            spread
        } else {
            -spread
        }
    }

    fn growth_jitter(&mut self, spread: i32) -> i32 {
        self.rng.random_range(-spread..=spread)
    }

    fn potential(&mut self) -> f64 {
        self.rng.random_range(0.5..=2.0)
    }

    fn capture_roll(&mut self) -> u32 {
        self.rng.random_range(0..=100)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Deterministic oracle: fixed jitter and potential, scripted capture rolls
/// and picks. Running out of scripted values panics with the reason so a test
/// shows exactly which draw it forgot to provide.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    creation_jitter: i32,
    growth_jitter: i32,
    potential: f64,
    rolls: Vec<u32>,
    roll_index: usize,
    picks: Vec<usize>,
    pick_index: usize,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self {
            creation_jitter: 0,
            growth_jitter: 0,
            potential: 1.0,
            rolls: Vec::new(),
            roll_index: 0,
            picks: Vec::new(),
            pick_index: 0,
        }
    }

    pub fn with_creation_jitter(mut self, jitter: i32) -> Self {
        self.creation_jitter = jitter;
        self
    }

    pub fn with_growth_jitter(mut self, jitter: i32) -> Self {
        self.growth_jitter = jitter;
        self
    }

    pub fn with_potential(mut self, potential: f64) -> Self {
        self.potential = potential;
        self
    }

    pub fn with_rolls(mut self, rolls: Vec<u32>) -> Self {
        self.rolls = rolls;
        self.roll_index = 0;
        self
    }

    pub fn with_picks(mut self, picks: Vec<usize>) -> Self {
        self.picks = picks;
        self.pick_index = 0;
        self
    }

    /// Number of capture rolls consumed so far.
    pub fn rolls_used(&self) -> usize {
        self.roll_index
    }
}

impl Default for ScriptedRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngOracle for ScriptedRng {
    fn stat_jitter(&mut self, _spread: i32) -> i32 {
        self.creation_jitter
    }

    fn growth_jitter(&mut self, _spread: i32) -> i32 {
        self.growth_jitter
    }

    fn potential(&mut self) -> f64 {
        self.potential
    }

    fn capture_roll(&mut self) -> u32 {
        let Some(&roll) = self.rolls.get(self.roll_index) else {
            panic!("ScriptedRng exhausted! Tried to get a value for: 'capture roll'. Need more rolls.");
        };
        self.roll_index += 1;
        log::trace!("[RNG] consumed capture roll {}", roll);
        roll
    }

    fn pick(&mut self, len: usize) -> usize {
        let Some(&pick) = self.picks.get(self.pick_index) else {
            panic!("ScriptedRng exhausted! Tried to get a value for: 'pick of {}'. Need more picks.", len);
        };
        self.pick_index += 1;
        pick % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_rng_ranges() {
        let mut rng = LiveRng::from_seed(Some(7));
        for _ in 0..200 {
            let jitter = rng.stat_jitter(2);
            assert!(jitter == 2 || jitter == -2);
            assert!((-5..=5).contains(&rng.growth_jitter(5)));
            let potential = rng.potential();
            assert!((0.5..=2.0).contains(&potential));
            assert!(rng.capture_roll() <= 100);
            assert!(rng.pick(3) < 3);
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = LiveRng::from_seed(Some(42));
        let mut b = LiveRng::from_seed(Some(42));
        let first: Vec<u32> = (0..10).map(|_| a.capture_roll()).collect();
        let second: Vec<u32> = (0..10).map(|_| b.capture_roll()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scripted_rolls_in_order() {
        let mut rng = ScriptedRng::new().with_rolls(vec![10, 90]);
        assert_eq!(rng.capture_roll(), 10);
        assert_eq!(rng.capture_roll(), 90);
        assert_eq!(rng.rolls_used(), 2);
    }

    #[test]
    #[should_panic(expected = "ScriptedRng exhausted")]
    fn test_scripted_rolls_exhausted() {
        let mut rng = ScriptedRng::new();
        rng.capture_roll();
    }
}
