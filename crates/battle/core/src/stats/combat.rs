//! Live combat values.

/// Health pool and combat ratings.
///
/// Invariant: `health <= max_health`. Health is unsigned so it never goes
/// below zero; damage and healing saturate at the bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl CombatStats {
    /// Create combat stats at full health.
    pub const fn at_full_health(max_health: u32, attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            attack,
            defense,
            speed,
        }
    }

    /// Create combat stats with explicit current health, clamped to `max_health`.
    pub fn new(health: u32, max_health: u32, attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            health: health.min(max_health),
            max_health,
            attack,
            defense,
            speed,
        }
    }

    /// Health still missing from the maximum.
    pub const fn missing_health(&self) -> u32 {
        self.max_health - self.health
    }

    pub const fn is_full_health(&self) -> bool {
        self.health == self.max_health
    }
}
