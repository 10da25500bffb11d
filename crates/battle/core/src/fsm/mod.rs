//! Battle state machine.
//!
//! ```text
//! INITIALIZING → TURN_START → PLAYER_TURN ─┐
//!                    ↑      → ENEMY_TURN  ─┤
//!                    │                     ↓
//!                    │              PROCESSING_ACTION ──(flee ok)──→ FLED
//!                    │                     ↓
//!                    └────────────── CHECKING_VICTORY → VICTORY | DEFEAT
//! ```
//!
//! [`BattleFsm`] owns the [`BattleContext`] exclusively. Every mutation of
//! the combatants during a battle goes through its transition methods, and
//! every transition is reported as a `StateChange` event.

mod context;
mod machine;

pub use context::{BattleContext, BattleSnapshot};
pub use machine::BattleFsm;

/// States of a battle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum BattleState {
    Initializing,
    TurnStart,
    PlayerTurn,
    EnemyTurn,
    ProcessingAction,
    CheckingVictory,
    Victory,
    Defeat,
    Fled,
}

impl BattleState {
    /// VICTORY, DEFEAT, or FLED.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat | Self::Fled)
    }
}

/// Actions the player can choose during PLAYER_TURN.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum BattleAction {
    Attack,
    /// Accepted but not implemented yet: consumes the turn.
    Defend,
    Flee,
    /// Accepted but not implemented yet: consumes the turn.
    Item,
}
