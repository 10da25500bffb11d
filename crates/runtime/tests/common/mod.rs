#![allow(dead_code)]

use battle_content::MonsterKind;
use battle_core::{CombatStats, Hero, HeroData, Monster, Stats};
use battle_runtime::RuntimeConfig;

/// Hero with attack 10, strength 5, speed 8, dexterity 5.
pub fn hero() -> Hero {
    Hero::new(HeroData {
        name: "Hero".into(),
        stats: Stats::new(5, 5, 1, 1, 1, 1),
        combat: CombatStats::at_full_health(100, 10, 5, 8),
    })
}

/// The sturdier hero the demos send on campaigns.
pub fn veteran(name: &str) -> Hero {
    Hero::new(HeroData {
        name: name.into(),
        stats: Stats::new(10, 8, 5, 6, 1, 4),
        combat: CombatStats::at_full_health(120, 15, 10, 12),
    })
}

pub fn monster(kind: MonsterKind) -> Monster {
    Monster::from_template(&kind.template())
}

pub fn seeded(seed: u64) -> RuntimeConfig {
    RuntimeConfig::default().with_seed(seed)
}
