//! Core attributes.

/// The six attributes that define a combatant.
///
/// - **strength**: adds twice its value to outgoing damage
/// - **dexterity**: reduces incoming damage, adds to turn order and flee score
/// - **intelligence** / **willpower**: carried for spell systems, unused by melee rules
/// - **speed**: attribute speed (combat speed lives in [`CombatStats`](super::CombatStats))
/// - **luck**: raises critical hit chance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Stats {
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub willpower: u32,
    pub speed: u32,
    pub luck: u32,
}

impl Stats {
    pub const fn new(
        strength: u32,
        dexterity: u32,
        intelligence: u32,
        willpower: u32,
        speed: u32,
        luck: u32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
            willpower,
            speed,
            luck,
        }
    }

    /// Every attribute set to `value`.
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value, value, value)
    }
}

impl Default for Stats {
    /// Untrained baseline: every attribute at 1.
    fn default() -> Self {
        Self::uniform(1)
    }
}
