//! Asynchronous abstraction for sourcing player decisions.
//!
//! Runtime users plug in [`ActionProvider`] implementations so a battle can
//! run with human input, scripted fixtures, or simple policies.
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use battle_core::{BattleAction, BattleSnapshot};
use tokio::sync::mpsc;

use super::errors::{Result, RuntimeError};

/// Trait for choosing the player's action during PLAYER_TURN.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Scripted/replayed actions
/// - Testing fixtures
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provide the player's next action for the given battle snapshot.
    async fn provide_action(&self, snapshot: &BattleSnapshot) -> Result<BattleAction>;
}

/// Always attacks. This is the policy `run_auto_battle` uses.
pub struct AutoAttackProvider;

#[async_trait]
impl ActionProvider for AutoAttackProvider {
    async fn provide_action(&self, _snapshot: &BattleSnapshot) -> Result<BattleAction> {
        Ok(BattleAction::Attack)
    }
}

/// Replays a fixed list of actions, then keeps attacking.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    actions: Mutex<VecDeque<BattleAction>>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = BattleAction>) -> Self {
        Self {
            actions: Mutex::new(actions.into_iter().collect()),
        }
    }

    /// Actions not yet replayed.
    pub fn remaining(&self) -> usize {
        self.actions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[async_trait]
impl ActionProvider for ScriptedProvider {
    async fn provide_action(&self, _snapshot: &BattleSnapshot) -> Result<BattleAction> {
        let next = self
            .actions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();
        Ok(next.unwrap_or(BattleAction::Attack))
    }
}

/// Waits for actions sent from another task, typically a UI.
pub struct ChannelActionProvider {
    rx: tokio::sync::Mutex<mpsc::Receiver<BattleAction>>,
}

impl ChannelActionProvider {
    pub fn new(rx: mpsc::Receiver<BattleAction>) -> Self {
        Self {
            rx: tokio::sync::Mutex::new(rx),
        }
    }

    /// Create a provider together with the sender that feeds it.
    pub fn channel(buffer: usize) -> (mpsc::Sender<BattleAction>, Self) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (tx, Self::new(rx))
    }
}

#[async_trait]
impl ActionProvider for ChannelActionProvider {
    async fn provide_action(&self, _snapshot: &BattleSnapshot) -> Result<BattleAction> {
        self.rx
            .lock()
            .await
            .recv()
            .await
            .ok_or(RuntimeError::ProviderChannelClosed)
    }
}
