//! Speed score, turn order, and flee chance.

use crate::config::BattleConfig;
use crate::rng::BattleRng;
use crate::stats::{CombatStats, Stats};

/// `combat speed + dexterity`. Used for initiative and flee attempts.
pub fn speed_score(stats: &Stats, combat: &CombatStats) -> u32 {
    combat.speed + stats.dexterity
}

/// Ties go to the player.
pub fn player_moves_first(player_score: u32, enemy_score: u32) -> bool {
    player_score >= enemy_score
}

/// `clamp(base + (player − enemy) × per_speed, min, max)`.
///
/// The upper bound wins over the lower one, and a NaN bound is ignored, so a
/// hand-built config with bad bounds never panics here.
pub fn flee_chance(player_score: u32, enemy_score: u32, config: &BattleConfig) -> f64 {
    let advantage = player_score as f64 - enemy_score as f64;
    let chance = config.flee_base_chance + advantage * config.flee_chance_per_speed;
    chance
        .max(config.flee_min_chance)
        .min(config.flee_max_chance)
}

/// Roll a flee attempt.
pub fn roll_flee(
    player_score: u32,
    enemy_score: u32,
    rng: &mut dyn BattleRng,
    config: &BattleConfig,
) -> bool {
    rng.chance(flee_chance(player_score, enemy_score, config))
}
