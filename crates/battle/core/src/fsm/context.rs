use crate::combatant::Combatant;

use super::{BattleAction, BattleState};

/// Mutable battle record owned by the state machine.
///
/// Callers only ever see it through `&BattleContext`; mutation goes through
/// [`BattleFsm`](super::BattleFsm).
#[derive(Clone, Debug)]
pub struct BattleContext<P, E> {
    pub(super) player: P,
    pub(super) enemy: E,
    pub(super) current_state: BattleState,
    pub(super) turn_number: u32,
    pub(super) is_player_turn: bool,
    pub(super) pending_player_action: Option<BattleAction>,
    pub(super) exp_reward: u32,
}

impl<P: Combatant, E: Combatant> BattleContext<P, E> {
    pub(super) fn new(player: P, enemy: E, exp_reward: u32) -> Self {
        Self {
            player,
            enemy,
            current_state: BattleState::Initializing,
            turn_number: 0,
            is_player_turn: true,
            pending_player_action: None,
            exp_reward,
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn enemy(&self) -> &E {
        &self.enemy
    }

    pub fn current_state(&self) -> BattleState {
        self.current_state
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn is_player_turn(&self) -> bool {
        self.is_player_turn
    }

    /// Last action the player chose, if any.
    pub fn pending_player_action(&self) -> Option<BattleAction> {
        self.pending_player_action
    }

    pub fn exp_reward(&self) -> u32 {
        self.exp_reward
    }

    /// Name of whoever acts in the current (or next) turn.
    pub fn current_actor(&self) -> &str {
        if self.is_player_turn {
            self.player.name()
        } else {
            self.enemy.name()
        }
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        let player = self.player.combat_stats();
        let enemy = self.enemy.combat_stats();
        BattleSnapshot {
            state: self.current_state,
            turn_number: self.turn_number,
            player_name: self.player.name().to_owned(),
            player_health: player.health,
            player_max_health: player.max_health,
            enemy_name: self.enemy.name().to_owned(),
            enemy_health: enemy.health,
            enemy_max_health: enemy.max_health,
        }
    }
}

/// Owned, read-only view of a battle for decision makers and UIs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    pub state: BattleState,
    pub turn_number: u32,
    pub player_name: String,
    pub player_health: u32,
    pub player_max_health: u32,
    pub enemy_name: String,
    pub enemy_health: u32,
    pub enemy_max_health: u32,
}
