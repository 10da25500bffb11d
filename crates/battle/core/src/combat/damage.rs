//! Damage calculation.

use crate::rng::BattleRng;
use crate::stats::{CombatStats, Stats};

/// Lower bound of the damage variance multiplier (inclusive).
pub const DAMAGE_VARIANCE_MIN: f64 = 0.85;
/// Upper bound of the damage variance multiplier (exclusive).
pub const DAMAGE_VARIANCE_MAX: f64 = 1.15;

/// Damage before variance.
///
/// # Formula
///
/// ```text
/// base    = attack + strength × 2
/// defense = target.defense + target.dexterity
/// raw     = max(1, base − defense × 0.5)
/// ```
pub fn raw_damage(
    attacker_stats: &Stats,
    attacker_combat: &CombatStats,
    target_stats: &Stats,
    target_combat: &CombatStats,
) -> f64 {
    let base = attacker_combat.attack as f64 + attacker_stats.strength as f64 * 2.0;
    let defense = target_combat.defense as f64 + target_stats.dexterity as f64;
    (base - defense * 0.5).max(1.0)
}

/// `floor(raw × variance)`.
///
/// Can be 0 when `raw` is 1 and variance is below 1; the target's
/// `take_damage` still applies its 1-point floor.
pub fn apply_variance(raw: f64, variance: f64) -> u32 {
    (raw * variance).floor().max(0.0) as u32
}

/// Full damage roll: raw damage scaled by a uniform variance in
/// `[DAMAGE_VARIANCE_MIN, DAMAGE_VARIANCE_MAX)`.
pub fn calculate_damage(
    attacker_stats: &Stats,
    attacker_combat: &CombatStats,
    target_stats: &Stats,
    target_combat: &CombatStats,
    rng: &mut dyn BattleRng,
) -> u32 {
    let raw = raw_damage(attacker_stats, attacker_combat, target_stats, target_combat);
    let variance = rng.range_f64(DAMAGE_VARIANCE_MIN, DAMAGE_VARIANCE_MAX);
    apply_variance(raw, variance)
}
