//! Combatant capability set.
//!
//! [`Combatant`] is the only contract the battle rules consume. Heroes and
//! monsters are separate types built from different sources (player data and
//! monster templates) and share behavior through the trait's provided methods.

mod hero;
mod monster;

pub use hero::{Hero, HeroData};
pub use monster::{Monster, MonsterTemplate};

use crate::combat;
use crate::rng::BattleRng;
use crate::stats::{CombatStats, Stats};

/// Anything that can deal and receive damage in a battle.
///
/// Implementors provide the data accessors; the combat operations are shared
/// and must not be overridden with different semantics.
pub trait Combatant: Send {
    fn name(&self) -> &str;

    fn stats(&self) -> &Stats;

    fn combat_stats(&self) -> &CombatStats;

    fn combat_stats_mut(&mut self) -> &mut CombatStats;

    fn is_alive(&self) -> bool {
        self.combat_stats().health > 0
    }

    /// Apply a hit. Every hit lands for at least 1 point, even when `amount`
    /// is zero or negative. Returns the damage actually applied.
    fn take_damage(&mut self, amount: i64) -> u32 {
        let applied = amount.clamp(1, u32::MAX as i64) as u32;
        let combat = self.combat_stats_mut();
        combat.health = combat.health.saturating_sub(applied);
        applied
    }

    /// Restore health without exceeding the maximum. Negative amounts heal
    /// nothing. Returns the health actually restored.
    fn heal(&mut self, amount: i64) -> u32 {
        let combat = self.combat_stats_mut();
        let missing = combat.missing_health();
        let actual = amount.clamp(0, missing as i64) as u32;
        combat.health += actual;
        actual
    }

    /// Roll outgoing damage against `target`.
    fn calculate_damage(&self, target: &dyn Combatant, rng: &mut dyn BattleRng) -> u32 {
        combat::calculate_damage(
            self.stats(),
            self.combat_stats(),
            target.stats(),
            target.combat_stats(),
            rng,
        )
    }

    /// Initiative and flee score: combat speed + dexterity.
    fn speed_score(&self) -> u32 {
        combat::speed_score(self.stats(), self.combat_stats())
    }
}

/// A combatant that grants a reward when defeated.
pub trait Enemy: Combatant {
    fn exp_reward(&self) -> u32;

    fn level(&self) -> u32;
}
