//! Template-driven enemy combatant.

use crate::stats::{CombatStats, Stats};

use super::{Combatant, Enemy};

/// Static monster definition from the content tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub name: String,
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Stats,
    pub base_health: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    pub base_speed: u32,
    pub exp_reward: u32,
}

/// A monster instance with its own health pool.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    name: String,
    level: u32,
    stats: Stats,
    combat: CombatStats,
    exp_reward: u32,
}

impl Monster {
    /// Instantiate a monster at full health.
    pub fn from_template(template: &MonsterTemplate) -> Self {
        Self {
            name: template.name.clone(),
            level: template.level,
            stats: template.stats,
            combat: CombatStats::at_full_health(
                template.base_health,
                template.base_attack,
                template.base_defense,
                template.base_speed,
            ),
            exp_reward: template.exp_reward,
        }
    }

    /// Template describing this monster's base values.
    pub fn to_template(&self) -> MonsterTemplate {
        MonsterTemplate {
            name: self.name.clone(),
            level: self.level,
            stats: self.stats,
            base_health: self.combat.max_health,
            base_attack: self.combat.attack,
            base_defense: self.combat.defense,
            base_speed: self.combat.speed,
            exp_reward: self.exp_reward,
        }
    }

    /// Fresh copy of this monster at full health.
    pub fn respawn(&self) -> Self {
        Self::from_template(&self.to_template())
    }
}

impl From<&MonsterTemplate> for Monster {
    fn from(template: &MonsterTemplate) -> Self {
        Self::from_template(template)
    }
}

impl Combatant for Monster {
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

impl Enemy for Monster {
    fn exp_reward(&self) -> u32 {
        self.exp_reward
    }

    fn level(&self) -> u32 {
        self.level
    }
}
