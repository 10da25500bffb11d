//! Hero class presets.

use battle_core::{CombatStats, HeroData, Stats};

/// Playable hero classes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeroClass {
    Warrior,
    Mage,
    Rogue,
}

impl HeroClass {
    /// Combat speed every class starts with.
    pub const BASE_SPEED: u32 = 10;

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Rogue => "Rogue",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Warrior => "Strong and resilient, masters of melee combat",
            Self::Mage => "Wielders of arcane power and mystical knowledge",
            Self::Rogue => "Swift and cunning, experts in stealth and precision",
        }
    }

    /// Starting attributes. Attributes a class does not emphasize start at 1.
    pub const fn base_stats(self) -> Stats {
        let (strength, dexterity, intelligence) = match self {
            Self::Warrior => (8, 4, 3),
            Self::Mage => (3, 4, 8),
            Self::Rogue => (4, 8, 3),
        };
        Stats::new(strength, dexterity, intelligence, 1, 1, 1)
    }

    /// Starting combat numbers at full health.
    pub const fn base_combat(self) -> CombatStats {
        let (health, attack, defense) = match self {
            Self::Warrior => (120, 12, 8),
            Self::Mage => (80, 15, 4),
            Self::Rogue => (100, 10, 6),
        };
        CombatStats::at_full_health(health, attack, defense, Self::BASE_SPEED)
    }

    /// A fresh hero of this class.
    pub fn hero(self, name: impl Into<String>) -> HeroData {
        HeroData {
            name: name.into(),
            stats: self.base_stats(),
            combat: self.base_combat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn warrior_preset_matches_class_table() {
        let hero = HeroClass::Warrior.hero("Alice");

        assert_eq!(hero.name, "Alice");
        assert_eq!(hero.stats.strength, 8);
        assert_eq!(hero.stats.dexterity, 4);
        assert_eq!(hero.stats.intelligence, 3);
        assert_eq!(hero.combat.max_health, 120);
        assert_eq!(hero.combat.health, 120);
        assert_eq!(hero.combat.attack, 12);
        assert_eq!(hero.combat.defense, 8);
    }

    #[test]
    fn classes_parse_from_lowercase_names() {
        assert_eq!(HeroClass::from_str("mage").ok(), Some(HeroClass::Mage));
        assert_eq!(HeroClass::from_str("Rogue").ok(), Some(HeroClass::Rogue));
        assert_eq!(HeroClass::Rogue.to_string(), "rogue");
        assert!(HeroClass::from_str("bard").is_err());
    }
}
