//! Critical hit rules.

use crate::config::BattleConfig;
use crate::rng::BattleRng;

/// Probability that an attack is critical.
///
/// `crit_base_chance + luck × crit_chance_per_luck`, capped at 1.0.
pub fn critical_chance(luck: u32, config: &BattleConfig) -> f64 {
    (config.crit_base_chance + luck as f64 * config.crit_chance_per_luck).min(1.0)
}

/// Roll a critical check for an attacker with the given luck.
pub fn roll_critical(luck: u32, rng: &mut dyn BattleRng, config: &BattleConfig) -> bool {
    rng.chance(critical_chance(luck, config))
}

/// `floor(damage × crit_multiplier)`.
pub fn critical_damage(damage: u32, config: &BattleConfig) -> u32 {
    (damage as f64 * config.crit_multiplier).floor() as u32
}
