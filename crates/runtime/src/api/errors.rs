//! Unified error types surfaced by the runtime API.
//!
//! Wraps battle rule violations, worker coordination failures, and action
//! provider failures so clients can bubble them up with consistent context.
use thiserror::Error;

use battle_core::BattleError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("action provider channel closed")]
    ProviderChannelClosed,

    #[error("unknown monster '{0}'")]
    UnknownMonster(String),

    #[error("no monsters available for level {0}")]
    NoMonstersForLevel(u32),
}
