use crate::monster::Individual;
use crate::rng::RngOracle;

/// Lowest effective capture chance, in percentage points.
pub const MIN_CAPTURE_CHANCE: f64 = 5.0;

/// Capture chance from the remaining HP ratio.
/// Formula: effective = base * (1.5 - hp / max_hp), floored at 5.0
pub fn capture_chance(base_chance: f64, hp_ratio: f64) -> f64 {
    let hp_ratio = hp_ratio.clamp(0.0, 1.0);
    (base_chance * (1.5 - hp_ratio)).max(MIN_CAPTURE_CHANCE)
}

/// Effective capture chance against `target`.
pub fn calculate_capture_chance(target: &Individual, base_chance: f64) -> f64 {
    let hp_ratio = if target.max_hp() > 0 {
        target.hp() as f64 / target.max_hp() as f64
    } else {
        0.0
    };
    capture_chance(base_chance, hp_ratio)
}

/// Draw in `[0, 100]`; success iff the draw is below the chance.
/// Returns the success flag and the draw.
pub fn roll_capture_success(chance: f64, rng: &mut dyn RngOracle) -> (bool, u32) {
    let roll = rng.capture_roll();
    ((roll as f64) < chance, roll)
}

/// Get a descriptive capture chance category for display purposes
pub fn capture_chance_description(chance: f64) -> &'static str {
    match chance {
        c if c >= 75.0 => "Excellent",
        c if c >= 50.0 => "Good",
        c if c >= 25.0 => "Fair",
        c if c >= 10.0 => "Poor",
        _ => "Very Poor",
    }
}
