//! Monster catalog.

use battle_core::{BattleRng, Monster, MonsterTemplate, Stats};

/// Keys of the built-in monsters, in catalog order.
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum MonsterKind {
    Slime,
    Goblin,
    Wolf,
    Orc,
    DarkKnight,
    Skeleton,
    Spider,
    Troll,
    Demon,
    Dragon,
}

impl MonsterKind {
    /// The built-in template for this monster.
    pub fn template(self) -> MonsterTemplate {
        // (name, level, [str, dex, int, wil, spd, luck], health, attack, defense, speed, exp)
        let (name, level, stats, health, attack, defense, speed, exp) = match self {
            Self::Slime => ("Slime", 1, Stats::uniform(1), 20, 3, 1, 3, 10),
            Self::Goblin => ("Goblin", 2, Stats::new(2, 3, 1, 1, 1, 2), 35, 6, 2, 7, 20),
            Self::Wolf => ("Wolf", 3, Stats::new(3, 4, 1, 2, 2, 2), 45, 8, 3, 9, 30),
            Self::Orc => ("Orc", 4, Stats::new(5, 2, 1, 3, 3, 1), 70, 12, 5, 5, 50),
            Self::DarkKnight => (
                "Dark Knight",
                6,
                Stats::new(7, 5, 3, 6, 4, 3),
                120,
                18,
                10,
                8,
                100,
            ),
            Self::Skeleton => ("Skeleton", 3, Stats::new(3, 3, 1, 1, 4, 1), 40, 7, 2, 6, 25),
            Self::Spider => ("Giant Spider", 4, Stats::new(4, 6, 1, 2, 4, 2), 50, 10, 3, 10, 40),
            Self::Troll => ("Troll", 5, Stats::new(8, 1, 1, 5, 3, 1), 100, 15, 8, 4, 75),
            Self::Demon => ("Demon", 7, Stats::new(8, 6, 7, 8, 6, 5), 150, 22, 12, 11, 150),
            Self::Dragon => (
                "Dragon",
                10,
                Stats::new(15, 8, 10, 12, 10, 8),
                300,
                35,
                20,
                12,
                500,
            ),
        };

        MonsterTemplate {
            name: name.to_owned(),
            level,
            stats,
            base_health: health,
            base_attack: attack,
            base_defense: defense,
            base_speed: speed,
            exp_reward: exp,
        }
    }
}

/// Keyed collection of monster templates.
///
/// Iteration and selection follow insertion order, so a seeded random pick
/// is reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonsterCatalog {
    entries: Vec<(String, MonsterTemplate)>,
}

impl MonsterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the ten built-in monsters.
    pub fn builtin() -> Self {
        use strum::IntoEnumIterator;

        let mut catalog = Self::new();
        for kind in MonsterKind::iter() {
            catalog.insert(kind.to_string(), kind.template());
        }
        catalog
    }

    /// Add or replace a template.
    pub fn insert(&mut self, key: impl Into<String>, template: MonsterTemplate) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = template,
            None => self.entries.push((key, template)),
        }
    }

    pub fn template(&self, key: &str) -> Option<&MonsterTemplate> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, template)| template)
    }

    /// Instantiate the monster stored under `key`.
    pub fn spawn(&self, key: &str) -> Option<Monster> {
        self.template(key).map(Monster::from_template)
    }

    /// Templates suitable for a hero of `level`: monster level within
    /// `[max(1, level − 1), level + 2]`.
    pub fn monsters_by_level(&self, level: u32) -> Vec<&MonsterTemplate> {
        let min = level.saturating_sub(1).max(1);
        let max = level.saturating_add(2);
        self.entries
            .iter()
            .map(|(_, template)| template)
            .filter(|template| (min..=max).contains(&template.level))
            .collect()
    }

    /// Pick a level-appropriate monster uniformly at random. `None` when no
    /// template fits.
    pub fn random_monster(&self, level: u32, rng: &mut dyn BattleRng) -> Option<Monster> {
        let candidates = self.monsters_by_level(level);
        if candidates.is_empty() {
            return None;
        }
        let pick = candidates[rng.index(candidates.len())];
        Some(Monster::from_template(pick))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MonsterTemplate)> {
        self.entries
            .iter()
            .map(|(key, template)| (key.as_str(), template))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, MonsterTemplate)> for MonsterCatalog {
    fn from_iter<I: IntoIterator<Item = (String, MonsterTemplate)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (key, template) in iter {
            catalog.insert(key, template);
        }
        catalog
    }
}
