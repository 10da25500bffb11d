//! Event variants.

use crate::fsm::BattleState;

/// Discriminant of [`BattleEventKind`], useful for filtering and counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventTag {
    BattleStart,
    TurnStart,
    Attack,
    Damage,
    Miss,
    Critical,
    Heal,
    Death,
    Victory,
    Defeat,
    Flee,
    StateChange,
    Log,
}

/// Everything observable during a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum BattleEventKind {
    BattleStart {
        player: String,
        enemy: String,
    },
    TurnStart {
        actor: String,
        turn_number: u32,
    },
    Attack {
        attacker: String,
        target: String,
    },
    Damage {
        target: String,
        damage: u32,
        remaining_health: u32,
    },
    /// Reserved: the melee rules always hit.
    Miss {
        attacker: String,
    },
    Critical {
        attacker: String,
        damage: u32,
    },
    /// Reserved for item and skill effects.
    Heal {
        target: String,
        amount: u32,
    },
    Death {
        entity: String,
    },
    Victory {
        exp_gained: u32,
    },
    Defeat,
    Flee {
        success: bool,
    },
    StateChange {
        from: BattleState,
        to: BattleState,
    },
    Log {
        message: String,
    },
}

impl BattleEventKind {
    pub fn tag(&self) -> EventTag {
        match self {
            Self::BattleStart { .. } => EventTag::BattleStart,
            Self::TurnStart { .. } => EventTag::TurnStart,
            Self::Attack { .. } => EventTag::Attack,
            Self::Damage { .. } => EventTag::Damage,
            Self::Miss { .. } => EventTag::Miss,
            Self::Critical { .. } => EventTag::Critical,
            Self::Heal { .. } => EventTag::Heal,
            Self::Death { .. } => EventTag::Death,
            Self::Victory { .. } => EventTag::Victory,
            Self::Defeat => EventTag::Defeat,
            Self::Flee { .. } => EventTag::Flee,
            Self::StateChange { .. } => EventTag::StateChange,
            Self::Log { .. } => EventTag::Log,
        }
    }

    /// Victory, Defeat, or a successful Flee.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Victory { .. } | Self::Defeat | Self::Flee { success: true }
        )
    }
}

/// A sequenced, timestamped event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleEvent {
    /// Position in the battle's event log, starting at 0.
    pub seq: u64,
    /// Milliseconds since the battle was created (monotonic clock).
    pub timestamp_ms: u64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: BattleEventKind,
}

impl BattleEvent {
    pub fn tag(&self) -> EventTag {
        self.kind.tag()
    }

    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }
}
