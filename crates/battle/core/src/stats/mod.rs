//! Stat bundles consumed by the battle rules.
//!
//! ```text
//! [ Stats (attributes) ]   fixed for the duration of a battle
//! [ CombatStats ]          live health plus attack/defense/speed
//! ```
//!
//! Equipment and leveling mutate these between battles; the battle core only
//! reads [`Stats`] and mutates [`CombatStats::health`] through the
//! [`Combatant`](crate::Combatant) operations.

pub mod combat;
pub mod core;

pub use self::combat::CombatStats;
pub use self::core::Stats;
