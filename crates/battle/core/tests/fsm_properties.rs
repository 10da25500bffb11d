//! Whole-battle properties of the state machine, driven directly without the
//! async runtime.

use battle_core::{
    BattleAction, BattleEvent, BattleEventKind, BattleFsm, BattleOutcome, BattleResult,
    BattleState, CombatStats, Combatant, EventRecorder, EventTag, Hero, HeroData, Monster,
    MonsterTemplate, PcgRng, Stats,
};
use proptest::prelude::*;

const MAX_STEPS: usize = 10_000;

fn hero(stats: Stats, combat: CombatStats) -> Hero {
    Hero::new(HeroData {
        name: "Hero".into(),
        stats,
        combat,
    })
}

fn monster(level: u32, stats: Stats, health: u32, attack: u32, defense: u32, speed: u32) -> Monster {
    Monster::from_template(&MonsterTemplate {
        name: "Monster".into(),
        level,
        stats,
        base_health: health,
        base_attack: attack,
        base_defense: defense,
        base_speed: speed,
        exp_reward: 10 * level,
    })
}

/// Drive the FSM with an always-attack player, checking invariants after
/// every step.
fn run_always_attack(fsm: &mut BattleFsm<Hero, Monster>) -> usize {
    run_scripted(fsm, &[])
}

/// Player turns take `script` in order, then attack.
fn run_scripted(fsm: &mut BattleFsm<Hero, Monster>, script: &[BattleAction]) -> usize {
    let mut actions = script.iter().copied();
    let mut steps = 0;
    fsm.initialize().unwrap();
    while !fsm.is_finished() {
        let turn_before = fsm.context().turn_number();
        match fsm.state() {
            BattleState::TurnStart => {
                fsm.start_turn().unwrap();
                assert_eq!(fsm.context().turn_number(), turn_before + 1);
            }
            BattleState::PlayerTurn => fsm
                .execute_action(actions.next().unwrap_or(BattleAction::Attack))
                .unwrap(),
            BattleState::EnemyTurn => fsm.execute_enemy_turn().unwrap(),
            BattleState::CheckingVictory => fsm.check_victory_conditions().unwrap(),
            other => panic!("unexpected resting state {other}"),
        }

        for combat in [
            fsm.context().player().combat_stats(),
            fsm.context().enemy().combat_stats(),
        ] {
            assert!(combat.health <= combat.max_health);
        }

        steps += 1;
        assert!(steps < MAX_STEPS, "battle did not terminate");
    }
    steps
}

/// One BattleStart, one terminal event matching the outcome, one TurnStart
/// per turn, contiguous sequence numbers.
fn assert_consistent_log(result: &BattleResult) {
    assert_eq!(result.count(EventTag::BattleStart), 1);
    assert_eq!(result.events.iter().filter(|e| e.is_terminal()).count(), 1);
    assert_eq!(result.turn_count as usize, result.count(EventTag::TurnStart));

    let terminal = &result.terminal_event().unwrap().kind;
    match result.outcome {
        BattleOutcome::Victory => assert!(matches!(terminal, BattleEventKind::Victory { .. })),
        BattleOutcome::Defeat => assert_eq!(terminal, &BattleEventKind::Defeat),
        BattleOutcome::Fled => assert_eq!(terminal, &BattleEventKind::Flee { success: true }),
    }

    for (index, event) in result.events.iter().enumerate() {
        assert_eq!(event.seq, index as u64);
    }
}

fn action_strategy() -> impl Strategy<Value = BattleAction> {
    prop_oneof![
        Just(BattleAction::Attack),
        Just(BattleAction::Flee),
        Just(BattleAction::Defend),
    ]
}

fn stats_strategy() -> impl Strategy<Value = Stats> {
    (0u32..10, 0u32..10, 0u32..10, 0u32..10, 0u32..10, 0u32..10).prop_map(
        |(strength, dexterity, intelligence, willpower, speed, luck)| {
            Stats::new(strength, dexterity, intelligence, willpower, speed, luck)
        },
    )
}

proptest! {
    #[test]
    fn always_attack_battles_terminate_with_consistent_logs(
        seed in any::<u64>(),
        hero_stats in stats_strategy(),
        monster_stats in stats_strategy(),
        hero_health in 1u32..200,
        hero_attack in 1u32..30,
        hero_defense in 0u32..20,
        hero_speed in 0u32..15,
        monster_health in 1u32..200,
        monster_attack in 1u32..30,
        monster_defense in 0u32..20,
        monster_speed in 0u32..15,
    ) {
        let recorder = EventRecorder::new();
        let player = hero(
            hero_stats,
            CombatStats::at_full_health(hero_health, hero_attack, hero_defense, hero_speed),
        );
        let enemy = monster(3, monster_stats, monster_health, monster_attack, monster_defense, monster_speed);
        let mut fsm = BattleFsm::new(player, enemy, 30, recorder.clone()).with_rng(PcgRng::new(seed));

        run_always_attack(&mut fsm);

        let result = fsm.result(recorder.snapshot()).unwrap();
        prop_assert!(!result.fled);
        prop_assert_eq!(result.exp_gained, if result.victory { 30 } else { 0 });
        prop_assert_eq!(result.count(EventTag::BattleStart), 1);
        prop_assert_eq!(
            result.events.iter().filter(|e| e.is_terminal()).count(),
            1
        );
        prop_assert_eq!(result.turn_count as usize, result.count(EventTag::TurnStart));

        let seqs: Vec<u64> = result.events.iter().map(|e| e.seq).collect();
        let expected: Vec<u64> = (0..result.events.len() as u64).collect();
        prop_assert_eq!(seqs, expected);
    }

    #[test]
    fn mixed_action_battles_keep_consistent_logs(
        seed in any::<u64>(),
        script in prop::collection::vec(action_strategy(), 0..30),
        hero_speed in 0u32..15,
        monster_speed in 0u32..15,
    ) {
        let recorder = EventRecorder::new();
        let player = hero(
            Stats::new(3, 3, 1, 1, 1, 1),
            CombatStats::at_full_health(80, 12, 4, hero_speed),
        );
        let enemy = monster(2, Stats::new(2, 2, 1, 1, 1, 1), 60, 8, 3, monster_speed);
        let mut fsm = BattleFsm::new(player, enemy, 20, recorder.clone()).with_rng(PcgRng::new(seed));

        run_scripted(&mut fsm, &script);

        let result = fsm.result(recorder.snapshot()).unwrap();
        assert_consistent_log(&result);
        prop_assert_eq!(result.exp_gained, if result.victory { 20 } else { 0 });

        let failed_flees = result
            .events
            .iter()
            .filter(|e| e.kind == BattleEventKind::Flee { success: false })
            .count();
        let attempts = result.count(EventTag::Flee);
        prop_assert_eq!(attempts, failed_flees + usize::from(result.fled));
    }

    #[test]
    fn health_stays_within_bounds_under_any_damage(
        max_health in 1u32..500,
        hits in prop::collection::vec(-50i64..300, 0..20),
    ) {
        let mut target = hero(Stats::default(), CombatStats::at_full_health(max_health, 1, 0, 0));
        for hit in hits {
            let before = target.combat_stats().health;
            let applied = target.take_damage(hit);
            prop_assert!(applied >= 1);
            prop_assert!(target.combat_stats().health <= before);
            prop_assert!(target.combat_stats().health <= max_health);
        }
    }
}

#[test]
fn strong_hero_beats_slime_within_five_turns() {
    let player = hero(
        Stats::new(5, 5, 1, 1, 1, 1),
        CombatStats::at_full_health(100, 10, 5, 8),
    );
    let slime = monster(1, Stats::default(), 20, 3, 1, 3);

    for seed in 0..50 {
        let recorder = EventRecorder::new();
        let mut fsm = BattleFsm::new(player.clone(), slime.respawn(), 10, recorder.clone())
            .with_rng(PcgRng::new(seed));
        run_always_attack(&mut fsm);

        let result = fsm.result(recorder.snapshot()).unwrap();
        assert!(result.victory, "seed {seed} lost");
        assert!(result.turn_count <= 5, "seed {seed} took {} turns", result.turn_count);
        assert_eq!(result.exp_gained, 10);
    }
}

#[test]
fn even_flee_odds_converge_to_half() {
    let stats = Stats::new(5, 5, 5, 5, 5, 5);
    let trials = 1_000;
    let mut fled = 0;

    for seed in 0..trials {
        let recorder = EventRecorder::new();
        let player = hero(stats, CombatStats::at_full_health(100, 10, 5, 10));
        let enemy = monster(1, stats, 100, 10, 5, 10);
        let mut fsm = BattleFsm::new(player, enemy, 10, recorder)
            .with_rng(PcgRng::new(battle_core::compute_seed(7, seed, 0)));

        fsm.initialize().unwrap();
        fsm.start_turn().unwrap();
        assert_eq!(fsm.state(), BattleState::PlayerTurn);
        fsm.execute_action(BattleAction::Flee).unwrap();
        if fsm.state() == BattleState::Fled {
            fled += 1;
        }
    }

    let rate = fled as f64 / trials as f64;
    assert!((0.45..=0.55).contains(&rate), "flee rate {rate}");
}

#[test]
fn same_seed_replays_identical_battles() {
    let run = |seed: u64| -> Vec<BattleEvent> {
        let recorder = EventRecorder::new();
        let player = hero(Stats::uniform(3), CombatStats::at_full_health(80, 9, 3, 6));
        let enemy = monster(2, Stats::uniform(2), 60, 8, 2, 7);
        let mut fsm = BattleFsm::new(player, enemy, 20, recorder.clone()).with_rng(PcgRng::new(seed));
        run_always_attack(&mut fsm);
        recorder
            .snapshot()
            .into_iter()
            .map(|mut event| {
                event.timestamp_ms = 0;
                event
            })
            .collect()
    };

    assert_eq!(run(11), run(11));
}
