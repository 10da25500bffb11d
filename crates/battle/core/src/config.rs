/// Battle formula constants and tunable parameters.
///
/// Defaults reproduce the reference numbers exactly; overriding them is meant
/// for experiments and tests, not for balancing at runtime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Critical chance every attacker has before luck is applied.
    pub crit_base_chance: f64,
    /// Critical chance added per point of luck.
    pub crit_chance_per_luck: f64,
    /// Damage multiplier applied on a critical hit (result is floored).
    pub crit_multiplier: f64,
    /// Flee chance when both sides have the same speed score.
    pub flee_base_chance: f64,
    /// Flee chance added per point of speed-score advantage.
    pub flee_chance_per_speed: f64,
    /// Lower bound of the flee chance.
    pub flee_min_chance: f64,
    /// Upper bound of the flee chance.
    pub flee_max_chance: f64,
}

impl BattleConfig {
    // ===== formula defaults =====
    pub const DEFAULT_CRIT_BASE_CHANCE: f64 = 0.10;
    pub const DEFAULT_CRIT_CHANCE_PER_LUCK: f64 = 0.02;
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_FLEE_BASE_CHANCE: f64 = 0.5;
    pub const DEFAULT_FLEE_CHANCE_PER_SPEED: f64 = 0.05;
    pub const DEFAULT_FLEE_MIN_CHANCE: f64 = 0.20;
    pub const DEFAULT_FLEE_MAX_CHANCE: f64 = 0.90;

    pub const fn new() -> Self {
        Self {
            crit_base_chance: Self::DEFAULT_CRIT_BASE_CHANCE,
            crit_chance_per_luck: Self::DEFAULT_CRIT_CHANCE_PER_LUCK,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            flee_base_chance: Self::DEFAULT_FLEE_BASE_CHANCE,
            flee_chance_per_speed: Self::DEFAULT_FLEE_CHANCE_PER_SPEED,
            flee_min_chance: Self::DEFAULT_FLEE_MIN_CHANCE,
            flee_max_chance: Self::DEFAULT_FLEE_MAX_CHANCE,
        }
    }

    /// Configuration with critical hits disabled. Handy for exact-damage tests.
    pub const fn without_criticals() -> Self {
        let mut config = Self::new();
        config.crit_base_chance = 0.0;
        config.crit_chance_per_luck = 0.0;
        config
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
