//! Heroes the demos send into battle.

use battle_content::HeroClass;
use battle_core::{CombatStats, Hero, HeroData, Stats};

/// The seasoned adventurer used when no class is chosen.
pub fn demo_hero(name: &str) -> Hero {
    Hero::new(HeroData {
        name: name.to_owned(),
        stats: Stats::new(10, 8, 5, 6, 1, 4),
        combat: CombatStats::at_full_health(120, 15, 10, 12),
    })
}

/// One-line introduction of a class, e.g. `Mage: Wielders of arcane power...`.
pub fn class_banner(class: HeroClass) -> String {
    format!("{}: {}", class.display_name(), class.description())
}

/// A hero of `class`, or the demo hero when `None`.
pub fn build_hero(name: &str, class: Option<HeroClass>) -> Hero {
    match class {
        Some(class) => Hero::new(class.hero(name)),
        None => demo_hero(name),
    }
}
