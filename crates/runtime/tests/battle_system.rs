mod common;

use std::sync::{Arc, Mutex};

use battle_content::MonsterKind;
use battle_core::{
    BattleAction, BattleConfig, BattleError, BattleEventKind, BattleOutcome, BattleResult,
    BattleState, Combatant, EventTag,
};
use battle_runtime::{BattleSystem, RuntimeConfig, ScriptedProvider, run_battle};

use common::{hero, monster, seeded};

#[tokio::test]
async fn hero_defeats_slime_quickly() {
    for seed in 0..20 {
        let mut battle = BattleSystem::with_config(hero(), monster(MonsterKind::Slime), seeded(seed));

        let result = battle.run_auto_battle().await.unwrap();

        assert!(result.victory, "seed {seed}");
        assert!(result.turn_count <= 5, "seed {seed}: {} turns", result.turn_count);
        assert_eq!(result.exp_gained, 10);
        assert_eq!(result.outcome, BattleOutcome::Victory);
    }
}

#[tokio::test]
async fn result_before_start_is_not_finished() {
    let battle = BattleSystem::new(hero(), monster(MonsterKind::Slime));

    assert_eq!(
        battle.result().unwrap_err(),
        BattleError::BattleNotFinished {
            state: BattleState::Initializing
        }
    );
}

#[tokio::test]
async fn start_is_idempotent() {
    let mut battle = BattleSystem::with_config(hero(), monster(MonsterKind::Goblin), seeded(1));

    battle.start();
    battle.start();

    let starts = battle
        .events()
        .iter()
        .filter(|e| e.tag() == EventTag::BattleStart)
        .count();
    assert_eq!(starts, 1);
    assert_eq!(battle.current_state(), BattleState::TurnStart);
}

#[tokio::test]
async fn manual_stepping_waits_for_player() {
    let mut battle = BattleSystem::with_config(hero(), monster(MonsterKind::Slime), seeded(2));

    // Nothing happens before start.
    battle.tick();
    battle.player_attack();
    assert!(battle.events().is_empty());

    battle.start();
    battle.tick();
    assert!(battle.is_waiting_for_player_input());

    // Ticking while the player decides changes nothing.
    let before = battle.events().len();
    battle.tick();
    assert_eq!(battle.events().len(), before);

    battle.player_attack();
    assert_eq!(battle.current_state(), BattleState::CheckingVictory);

    // Player actions outside PLAYER_TURN are ignored.
    let before = battle.events().len();
    battle.player_flee();
    assert_eq!(battle.events().len(), before);
}

#[tokio::test]
async fn consistent_event_log() {
    let mut battle = BattleSystem::with_config(hero(), monster(MonsterKind::Wolf), seeded(3));

    let result = battle.run_auto_battle().await.unwrap();

    assert_eq!(result.count(EventTag::BattleStart), 1);
    assert_eq!(result.events.iter().filter(|e| e.is_terminal()).count(), 1);
    assert_eq!(result.turn_count as usize, result.count(EventTag::TurnStart));
    assert_eq!(result.events.len(), battle.events().len());
    for (index, event) in result.events.iter().enumerate() {
        assert_eq!(event.seq, index as u64);
    }
}

#[tokio::test]
async fn combatants_come_back_with_final_health() {
    let mut battle = BattleSystem::with_config(hero(), monster(MonsterKind::Orc), seeded(4));
    let result = battle.run_auto_battle().await.unwrap();

    let (player, enemy) = battle.into_combatants();

    assert!(player.combat_stats().health <= player.combat_stats().max_health);
    if result.victory {
        assert!(!enemy.is_alive());
    } else {
        assert!(!player.is_alive());
    }
}

#[tokio::test]
async fn listeners_see_every_event_until_unsubscribed() {
    let mut battle = BattleSystem::with_config(hero(), monster(MonsterKind::Slime), seeded(5));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    battle.subscribe(move |event| sink.lock().unwrap().push(event.seq));

    let muted = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&muted);
    let id = battle.subscribe(move |_| *counter.lock().unwrap() += 1);
    assert!(battle.unsubscribe(id));

    let result = battle.run_auto_battle().await.unwrap();

    assert_eq!(seen.lock().unwrap().len(), result.events.len());
    assert_eq!(*muted.lock().unwrap(), 0);
}

#[tokio::test]
async fn recent_events_window_is_capped() {
    let config = RuntimeConfig {
        display_buffer_size: 4,
        ..seeded(6)
    };
    let mut battle = BattleSystem::with_config(hero(), monster(MonsterKind::Goblin), config);

    let result = battle.run_auto_battle().await.unwrap();

    let recent: Vec<u64> = battle.recent_events().iter().map(|e| e.seq).collect();
    let last = result.events.len() as u64;
    assert_eq!(recent, (last - 4..last).collect::<Vec<_>>());
}

#[tokio::test]
async fn scripted_flee_ends_battle_without_reward() {
    let config = RuntimeConfig {
        battle: BattleConfig {
            flee_min_chance: 1.0,
            flee_max_chance: 1.0,
            ..BattleConfig::default()
        },
        ..seeded(7)
    };
    let mut battle = BattleSystem::with_config(hero(), monster(MonsterKind::Slime), config);
    let provider = ScriptedProvider::new([BattleAction::Flee]);

    let result = battle.run_with_provider(&provider).await.unwrap();

    assert!(result.fled);
    assert_eq!(result.exp_gained, 0);
    assert_eq!(battle.current_state(), BattleState::Fled);
    assert!(result.events.iter().any(|e| e.kind
        == BattleEventKind::Log {
            message: "Hero successfully fled from battle!".into()
        }));
}

fn flee_config(chance: f64, seed: u64) -> RuntimeConfig {
    RuntimeConfig {
        battle: BattleConfig {
            flee_min_chance: chance,
            flee_max_chance: chance,
            ..BattleConfig::default()
        },
        ..seeded(seed)
    }
}

fn assert_single_start_and_end(result: &BattleResult) {
    assert_eq!(result.count(EventTag::BattleStart), 1);
    assert_eq!(result.events.iter().filter(|e| e.is_terminal()).count(), 1);
    assert_eq!(result.turn_count as usize, result.count(EventTag::TurnStart));
}

#[tokio::test]
async fn fled_battle_ends_on_successful_flee() {
    let mut battle =
        BattleSystem::with_config(hero(), monster(MonsterKind::Goblin), flee_config(1.0, 9));
    let provider = ScriptedProvider::new([BattleAction::Attack, BattleAction::Flee]);

    let result = battle.run_with_provider(&provider).await.unwrap();

    assert_eq!(result.outcome, BattleOutcome::Fled);
    assert_single_start_and_end(&result);
    assert_eq!(
        result.terminal_event().map(|e| &e.kind),
        Some(&BattleEventKind::Flee { success: true })
    );
    assert_eq!(result.count(EventTag::Flee), 1);
}

#[tokio::test]
async fn failed_flee_lets_the_battle_continue() {
    let mut battle =
        BattleSystem::with_config(hero(), monster(MonsterKind::Slime), flee_config(0.0, 10));
    let provider = ScriptedProvider::new([BattleAction::Flee, BattleAction::Attack]);

    let result = battle.run_with_provider(&provider).await.unwrap();

    assert!(result.victory);
    assert_single_start_and_end(&result);
    let failed: Vec<_> = result
        .events
        .iter()
        .filter(|e| e.kind == BattleEventKind::Flee { success: false })
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(result.count(EventTag::Flee), 1);

    let terminal = result.terminal_event().unwrap();
    assert!(matches!(terminal.kind, BattleEventKind::Victory { exp_gained: 10 }));
    assert!(terminal.seq > failed[0].seq);
}

#[tokio::test]
async fn oversized_display_buffer_is_accepted() {
    let config = RuntimeConfig::from_lookup(|key: &str| {
        (key == "BATTLE_DISPLAY_BUFFER").then(|| usize::MAX.to_string())
    });
    assert_eq!(config.display_buffer_size, usize::MAX);

    let mut battle = BattleSystem::with_config(hero(), monster(MonsterKind::Slime), config);
    let result = battle.run_auto_battle().await.unwrap();

    assert_eq!(battle.recent_events().len(), result.events.len());
}

#[tokio::test]
async fn defend_consumes_a_turn() {
    let mut battle = BattleSystem::with_config(hero(), monster(MonsterKind::Slime), seeded(8));
    let provider = ScriptedProvider::new([BattleAction::Defend]);

    let result = battle.run_with_provider(&provider).await.unwrap();

    assert!(result.victory);
    assert!(result.events.iter().any(|e| e.kind
        == BattleEventKind::Log {
            message: "DEFEND not yet implemented".into()
        }));
}

#[tokio::test]
async fn run_battle_returns_combatants() {
    let (result, player, enemy) = run_battle(hero(), monster(MonsterKind::Slime)).await.unwrap();

    assert!(result.victory);
    assert_eq!(player.name(), "Hero");
    assert_eq!(enemy.combat_stats().health, 0);
}
