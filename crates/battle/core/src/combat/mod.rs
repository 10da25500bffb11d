//! Combat formulas.
//!
//! Pure functions over stat bundles. Randomness enters only through the
//! roll arguments or an injected [`BattleRng`](crate::BattleRng), so every
//! formula can be checked with fixed values.
//!
//! - `damage`: base damage, defense reduction, variance
//! - `critical`: luck-scaled critical chance and multiplier
//! - `speed`: speed score, turn order, flee chance

pub mod critical;
pub mod damage;
pub mod speed;

pub use critical::{critical_chance, critical_damage, roll_critical};
pub use damage::{
    DAMAGE_VARIANCE_MAX, DAMAGE_VARIANCE_MIN, apply_variance, calculate_damage, raw_damage,
};
pub use speed::{flee_chance, player_moves_first, roll_flee, speed_score};
