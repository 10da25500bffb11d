use tracing::{debug, info};

use crate::combat;
use crate::combatant::Combatant;
use crate::config::BattleConfig;
use crate::error::{BattleError, Result};
use crate::events::{BattleEvent, BattleEventKind, EventEmitter, EventSink};
use crate::result::{BattleOutcome, BattleResult};
use crate::rng::{BattleRng, EntropyRng};

use super::{BattleAction, BattleContext, BattleState};

/// Turn-based battle state machine for one player and one enemy.
///
/// The FSM is a synchronous step machine: each public step method performs
/// exactly one logical transition (plus the transitions it implies) and
/// reports everything it did to the event sink.
pub struct BattleFsm<P, E> {
    context: BattleContext<P, E>,
    emitter: EventEmitter,
    rng: Box<dyn BattleRng>,
    config: BattleConfig,
}

impl<P: Combatant, E: Combatant> BattleFsm<P, E> {
    /// Create a battle in INITIALIZING. `exp_reward` is granted on victory.
    pub fn new(player: P, enemy: E, exp_reward: u32, sink: impl EventSink + 'static) -> Self {
        Self {
            context: BattleContext::new(player, enemy, exp_reward),
            emitter: EventEmitter::new(sink),
            rng: Box::new(EntropyRng::new()),
            config: BattleConfig::default(),
        }
    }

    pub fn with_rng(mut self, rng: impl BattleRng + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn state(&self) -> BattleState {
        self.context.current_state
    }

    pub fn context(&self) -> &BattleContext<P, E> {
        &self.context
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn is_finished(&self) -> bool {
        self.context.current_state.is_terminal()
    }

    /// Number of events emitted so far.
    pub fn events_emitted(&self) -> u64 {
        self.emitter.emitted()
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        BattleOutcome::from_state(self.context.current_state)
    }

    /// Start the battle: announce it and decide who moves first.
    pub fn initialize(&mut self) -> Result<()> {
        self.require("initialize", BattleState::Initializing)?;

        let player = self.context.player.name().to_owned();
        let enemy = self.context.enemy.name().to_owned();

        self.emitter.emit(BattleEventKind::BattleStart {
            player: player.clone(),
            enemy: enemy.clone(),
        });
        self.log(format!("Battle started! {player} vs {enemy}"));

        self.context.is_player_turn = combat::player_moves_first(
            self.context.player.speed_score(),
            self.context.enemy.speed_score(),
        );
        let first = if self.context.is_player_turn {
            player
        } else {
            enemy
        };
        self.log(format!("{first} moves first!"));

        self.transition(BattleState::TurnStart);
        Ok(())
    }

    /// Begin the next turn and hand control to whoever acts in it.
    pub fn start_turn(&mut self) -> Result<()> {
        self.require("start_turn", BattleState::TurnStart)?;

        self.context.turn_number += 1;
        let actor = self.context.current_actor().to_owned();
        self.emitter.emit(BattleEventKind::TurnStart {
            actor,
            turn_number: self.context.turn_number,
        });

        let next = if self.context.is_player_turn {
            BattleState::PlayerTurn
        } else {
            BattleState::EnemyTurn
        };
        self.transition(next);
        Ok(())
    }

    /// Resolve the player's chosen action. Only valid during PLAYER_TURN.
    pub fn execute_action(&mut self, action: BattleAction) -> Result<()> {
        let state = self.context.current_state;
        if state != BattleState::PlayerTurn {
            return Err(BattleError::InvalidAction { action, state });
        }

        self.context.pending_player_action = Some(action);
        self.transition(BattleState::ProcessingAction);

        match action {
            BattleAction::Attack => {
                resolve_attack(
                    &self.context.player,
                    &mut self.context.enemy,
                    self.rng.as_mut(),
                    &self.config,
                    &mut self.emitter,
                );
            }
            BattleAction::Flee => self.resolve_flee(),
            BattleAction::Defend | BattleAction::Item => {
                self.log(format!("{action} not yet implemented"));
            }
        }

        if self.context.current_state == BattleState::ProcessingAction {
            self.transition(BattleState::CheckingVictory);
        }
        Ok(())
    }

    /// Let the enemy attack the player.
    pub fn execute_enemy_turn(&mut self) -> Result<()> {
        self.require("execute_enemy_turn", BattleState::EnemyTurn)?;
        if !self.context.enemy.is_alive() {
            return Err(BattleError::EntityDead {
                name: self.context.enemy.name().to_owned(),
            });
        }

        self.transition(BattleState::ProcessingAction);
        resolve_attack(
            &self.context.enemy,
            &mut self.context.player,
            self.rng.as_mut(),
            &self.config,
            &mut self.emitter,
        );
        self.transition(BattleState::CheckingVictory);
        Ok(())
    }

    /// Settle the turn: end the battle if someone died, otherwise pass the
    /// turn to the other side.
    pub fn check_victory_conditions(&mut self) -> Result<()> {
        self.require("check_victory_conditions", BattleState::CheckingVictory)?;

        if !self.context.enemy.is_alive() {
            let exp_gained = self.context.exp_reward;
            self.emitter.emit(BattleEventKind::Victory { exp_gained });
            self.log(format!("Victory! Gained {exp_gained} experience!"));
            info!(
                target: "battle::fsm",
                player = %self.context.player.name(),
                enemy = %self.context.enemy.name(),
                turns = self.context.turn_number,
                exp_gained,
                "battle won"
            );
            self.transition(BattleState::Victory);
        } else if !self.context.player.is_alive() {
            self.emitter.emit(BattleEventKind::Defeat);
            self.log(format!("{} has been defeated...", self.context.player.name()));
            info!(
                target: "battle::fsm",
                player = %self.context.player.name(),
                enemy = %self.context.enemy.name(),
                turns = self.context.turn_number,
                "battle lost"
            );
            self.transition(BattleState::Defeat);
        } else {
            self.context.is_player_turn = !self.context.is_player_turn;
            self.transition(BattleState::TurnStart);
        }
        Ok(())
    }

    /// Summarize a finished battle. `events` is the full log collected by
    /// the caller from this battle's sink.
    pub fn result(&self, events: Vec<BattleEvent>) -> Result<BattleResult> {
        let outcome = self.outcome().ok_or(BattleError::BattleNotFinished {
            state: self.context.current_state,
        })?;
        Ok(BattleResult::new(
            outcome,
            self.context.exp_reward,
            self.context.turn_number,
            events,
        ))
    }

    /// Give both combatants back, with their final health.
    pub fn into_combatants(self) -> (P, E) {
        (self.context.player, self.context.enemy)
    }

    fn resolve_flee(&mut self) {
        let player_score = self.context.player.speed_score();
        let enemy_score = self.context.enemy.speed_score();
        let success = combat::roll_flee(
            player_score,
            enemy_score,
            self.rng.as_mut(),
            &self.config,
        );

        let name = self.context.player.name().to_owned();
        self.emitter.emit(BattleEventKind::Flee { success });
        if success {
            self.log(format!("{name} successfully fled from battle!"));
            info!(
                target: "battle::fsm",
                player = %name,
                turns = self.context.turn_number,
                "player fled"
            );
            self.transition(BattleState::Fled);
        } else {
            self.log(format!("{name} failed to flee!"));
        }
    }

    /// Check that a step is legal in the current state.
    fn require(&self, operation: &str, expected: BattleState) -> Result<()> {
        let state = self.context.current_state;
        if state == expected {
            Ok(())
        } else if state.is_terminal() {
            Err(BattleError::BattleAlreadyFinished { state })
        } else if state == BattleState::Initializing {
            Err(BattleError::BattleNotStarted {
                operation: operation.to_owned(),
            })
        } else {
            Err(BattleError::InvalidTransition {
                operation: operation.to_owned(),
                state,
            })
        }
    }

    fn transition(&mut self, to: BattleState) {
        let from = self.context.current_state;
        self.context.current_state = to;
        debug!(
            target: "battle::fsm",
            %from,
            %to,
            turn = self.context.turn_number,
            "state transition"
        );
        self.emitter.emit(BattleEventKind::StateChange { from, to });
    }

    fn log(&mut self, message: String) {
        self.emitter.emit(BattleEventKind::Log { message });
    }
}

/// One melee attack. Takes the pieces of the FSM it needs separately so the
/// attacker and target can be borrowed from the same context.
fn resolve_attack(
    attacker: &dyn Combatant,
    target: &mut dyn Combatant,
    rng: &mut dyn BattleRng,
    config: &BattleConfig,
    emitter: &mut EventEmitter,
) {
    let attacker_name = attacker.name().to_owned();
    let target_name = target.name().to_owned();

    emitter.emit(BattleEventKind::Attack {
        attacker: attacker_name.clone(),
        target: target_name.clone(),
    });

    let mut damage = attacker.calculate_damage(&*target, rng);
    let critical = combat::roll_critical(attacker.stats().luck, rng, config);
    if critical {
        damage = combat::critical_damage(damage, config);
        emitter.emit(BattleEventKind::Critical {
            attacker: attacker_name.clone(),
            damage,
        });
    }

    let applied = target.take_damage(i64::from(damage));
    let remaining_health = target.combat_stats().health;
    emitter.emit(BattleEventKind::Damage {
        target: target_name.clone(),
        damage: applied,
        remaining_health,
    });

    let message = if critical {
        format!("Critical hit! {attacker_name} deals {applied} damage to {target_name}!")
    } else {
        format!("{attacker_name} deals {applied} damage to {target_name}!")
    };
    emitter.emit(BattleEventKind::Log { message });

    if !target.is_alive() {
        emitter.emit(BattleEventKind::Death {
            entity: target_name.clone(),
        });
        emitter.emit(BattleEventKind::Log {
            message: format!("{target_name} has been defeated!"),
        });
    }
}

impl<P, E> std::fmt::Debug for BattleFsm<P, E>
where
    P: std::fmt::Debug,
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleFsm")
            .field("context", &self.context)
            .field("emitter", &self.emitter)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
