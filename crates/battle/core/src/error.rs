//! Errors surfaced by the battle state machine.
//!
//! All failures are local to one battle instance. Callers driving the FSM
//! directly receive them as typed results; the runtime's orchestrator swallows
//! the recoverable ones (see [`BattleError::is_recoverable`]).

use crate::fsm::{BattleAction, BattleState};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("cannot perform {action} during {state}: player actions require PLAYER_TURN")]
    InvalidAction {
        action: BattleAction,
        state: BattleState,
    },

    #[error("{operation} is not valid during {state}")]
    InvalidTransition {
        operation: String,
        state: BattleState,
    },

    #[error("battle has not been started ({operation} requires initialize first)")]
    BattleNotStarted { operation: String },

    #[error("battle already finished in {state}")]
    BattleAlreadyFinished { state: BattleState },

    #[error("battle is not finished yet (currently {state})")]
    BattleNotFinished { state: BattleState },

    #[error("{name} cannot act: already defeated")]
    EntityDead { name: String },
}

impl BattleError {
    /// Misuse that a polling caller can safely ignore and retry later.
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidAction { .. } | Self::InvalidTransition { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BattleError>;
