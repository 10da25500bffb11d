//! Player-controlled combatant.

use crate::stats::{CombatStats, Stats};

use super::Combatant;

/// Player data a hero is built from.
///
/// Equipment and class bonuses are expected to be folded into these numbers
/// by the caller before the battle starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroData {
    pub name: String,
    pub stats: Stats,
    pub combat: CombatStats,
}

/// The player's combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    name: String,
    stats: Stats,
    combat: CombatStats,
}

impl Hero {
    pub fn new(data: HeroData) -> Self {
        let HeroData {
            name,
            stats,
            combat,
        } = data;
        Self {
            name,
            stats,
            combat: CombatStats::new(
                combat.health,
                combat.max_health,
                combat.attack,
                combat.defense,
                combat.speed,
            ),
        }
    }
}

impl From<HeroData> for Hero {
    fn from(data: HeroData) -> Self {
        Self::new(data)
    }
}

impl Combatant for Hero {
    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn combat_stats(&self) -> &CombatStats {
        &self.combat
    }

    fn combat_stats_mut(&mut self) -> &mut CombatStats {
        &mut self.combat
    }
}
