//! High-level battle orchestrator.
//!
//! [`BattleSystem`] owns one [`BattleFsm`], drains its event channel after
//! every step, and exposes a forgiving step API (invalid requests are logged
//! and ignored) plus async drivers that run a battle to completion.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use battle_core::{
    BattleAction, BattleError, BattleEvent, BattleFsm, BattleResult, BattleRng, BattleSnapshot,
    BattleState, Combatant, Enemy,
};

use crate::api::{ActionProvider, Result};
use crate::config::RuntimeConfig;
use crate::events::{ChannelSink, EventHub, EventStream, RecentEvents, SubscriptionId};

/// Orchestrates a single battle between a player and an enemy.
pub struct BattleSystem<P, E> {
    fsm: BattleFsm<P, E>,
    receiver: mpsc::UnboundedReceiver<BattleEvent>,
    events: Vec<BattleEvent>,
    recent: RecentEvents,
    hub: EventHub,
    config: RuntimeConfig,
}

impl<P: Combatant, E: Enemy> BattleSystem<P, E> {
    /// Battle with default configuration and non-deterministic rolls.
    pub fn new(player: P, enemy: E) -> Self {
        Self::with_config(player, enemy, RuntimeConfig::default())
    }

    pub fn with_config(player: P, enemy: E, config: RuntimeConfig) -> Self {
        let rng = config.rng_for(0);
        Self::with_rng(player, enemy, config, rng)
    }

    /// Battle with an explicit random source.
    pub fn with_rng(
        player: P,
        enemy: E,
        config: RuntimeConfig,
        rng: impl BattleRng + 'static,
    ) -> Self {
        let exp_reward = enemy.exp_reward();
        let (sink, receiver) = ChannelSink::channel();
        let fsm = BattleFsm::new(player, enemy, exp_reward, sink)
            .with_config(config.battle.clone())
            .with_rng(rng);

        Self {
            fsm,
            receiver,
            events: Vec::new(),
            recent: RecentEvents::new(config.display_buffer_size),
            hub: EventHub::new(),
            config,
        }
    }

    /// Start the battle. Calling it again has no effect.
    pub fn start(&mut self) {
        if self.fsm.state() != BattleState::Initializing {
            return;
        }
        let outcome = self.fsm.initialize();
        self.settle("start", outcome);
        info!(
            target: "runtime::battle",
            player = %self.fsm.context().player().name(),
            enemy = %self.fsm.context().enemy().name(),
            "battle started"
        );
    }

    /// Advance one automatic step. Does nothing while the battle waits for
    /// the player, before `start`, or after the battle ended.
    pub fn tick(&mut self) {
        let outcome = match self.fsm.state() {
            BattleState::TurnStart => self.fsm.start_turn(),
            BattleState::EnemyTurn => self.fsm.execute_enemy_turn(),
            BattleState::CheckingVictory => self.fsm.check_victory_conditions(),
            _ => return,
        };
        self.settle("tick", outcome);
    }

    /// Submit a player action. Ignored unless the battle waits for input.
    pub fn player_action(&mut self, action: BattleAction) {
        if !self.is_waiting_for_player_input() {
            debug!(
                target: "runtime::battle",
                %action,
                state = %self.fsm.state(),
                "player action ignored outside PLAYER_TURN"
            );
            return;
        }
        let outcome = self.fsm.execute_action(action);
        self.settle("player_action", outcome);
    }

    pub fn player_attack(&mut self) {
        self.player_action(BattleAction::Attack);
    }

    pub fn player_flee(&mut self) {
        self.player_action(BattleAction::Flee);
    }

    pub fn player_defend(&mut self) {
        self.player_action(BattleAction::Defend);
    }

    pub fn is_waiting_for_player_input(&self) -> bool {
        self.fsm.state() == BattleState::PlayerTurn
    }

    pub fn is_finished(&self) -> bool {
        self.fsm.is_finished()
    }

    pub fn current_state(&self) -> BattleState {
        self.fsm.state()
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        self.fsm.context().snapshot()
    }

    pub fn fsm(&self) -> &BattleFsm<P, E> {
        &self.fsm
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Result of a finished battle, with the full event log.
    pub fn result(&self) -> std::result::Result<BattleResult, BattleError> {
        self.fsm.result(self.events.clone())
    }

    /// Run the battle to completion, attacking on every player turn.
    pub async fn run_auto_battle(&mut self) -> std::result::Result<BattleResult, BattleError> {
        self.start();
        while !self.is_finished() {
            if self.is_waiting_for_player_input() {
                self.player_attack();
            } else {
                self.tick();
            }
            pace(self.config.tick_delay).await;
        }
        self.finalize();
        self.result()
    }

    /// Run the battle to completion, asking `provider` for every player
    /// decision. Delivery ends even when the provider fails.
    pub async fn run_with_provider(&mut self, provider: &dyn ActionProvider) -> Result<BattleResult> {
        let driven = self.drive_with(provider).await;
        self.finalize();
        driven?;
        Ok(self.result()?)
    }

    async fn drive_with(&mut self, provider: &dyn ActionProvider) -> Result<()> {
        self.start();
        while !self.is_finished() {
            if self.is_waiting_for_player_input() {
                let snapshot = self.snapshot();
                let action = provider.provide_action(&snapshot).await?;
                self.player_action(action);
            } else {
                self.tick();
            }
            pace(self.config.tick_delay).await;
        }
        Ok(())
    }

    /// Every event emitted so far, in order.
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// The display window of the latest events.
    pub fn recent_events(&self) -> &RecentEvents {
        &self.recent
    }

    /// Register a push listener for events emitted from now on.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&BattleEvent) + Send + Sync + 'static,
    {
        self.hub.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.hub.unsubscribe(id)
    }

    /// Pull stream of the whole battle: replays everything emitted so far,
    /// then follows live events until the battle is finalized.
    pub fn event_stream(&self) -> EventStream {
        self.hub.stream_from(&self.events)
    }

    /// End event delivery: open streams finish and listeners are released.
    pub fn finalize(&mut self) {
        self.pump();
        if !self.hub.is_closed() {
            debug!(
                target: "runtime::battle",
                events = self.events.len(),
                state = %self.fsm.state(),
                "event delivery closed"
            );
            self.hub.close();
        }
    }

    /// Give both combatants back, with their final health.
    pub fn into_combatants(mut self) -> (P, E) {
        self.finalize();
        self.fsm.into_combatants()
    }

    fn settle(&mut self, operation: &str, outcome: battle_core::Result<()>) {
        if let Err(error) = outcome {
            if error.is_recoverable() {
                debug!(target: "runtime::battle", operation, %error, "step rejected");
            } else {
                warn!(target: "runtime::battle", operation, %error, "step failed");
            }
        }
        self.pump();
    }

    /// Move everything the FSM emitted into the log and out to subscribers.
    fn pump(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            self.hub.publish(&event);
            self.recent.push(event.clone());
            self.events.push(event);
        }
    }
}

/// Hand control back to the scheduler between steps.
async fn pace(delay: Option<Duration>) {
    tokio::task::yield_now().await;
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
}

/// Run a battle between `player` and `enemy` to completion with default
/// configuration, handing the combatants back with the result.
pub async fn run_battle<P: Combatant, E: Enemy>(
    player: P,
    enemy: E,
) -> std::result::Result<(BattleResult, P, E), BattleError> {
    let mut system = BattleSystem::new(player, enemy);
    let result = system.run_auto_battle().await?;
    let (player, enemy) = system.into_combatants();
    Ok((result, player, enemy))
}

impl<P, E> std::fmt::Debug for BattleSystem<P, E>
where
    P: std::fmt::Debug,
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleSystem")
            .field("fsm", &self.fsm)
            .field("events", &self.events.len())
            .field("hub", &self.hub)
            .finish_non_exhaustive()
    }
}
