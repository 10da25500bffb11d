mod common;

use battle_content::{MonsterCatalog, MonsterKind};
use battle_core::{BattleOutcome, Combatant, EventTag, MonsterTemplate, Stats};
use battle_runtime::{Campaign, RuntimeError, run_concurrent};

use common::{monster, seeded, veteran};

#[tokio::test]
async fn concurrent_battles_are_independent() {
    let matchups = vec![
        (veteran("Alice"), monster(MonsterKind::Slime)),
        (veteran("Bob"), monster(MonsterKind::Goblin)),
        (veteran("Charlie"), monster(MonsterKind::Wolf)),
    ];

    let reports = run_concurrent(matchups, seeded(11)).await;

    assert_eq!(reports.len(), 3);
    let names = ["Alice", "Bob", "Charlie"];
    let rewards = [10, 20, 30];
    for ((report, name), reward) in reports.into_iter().zip(names).zip(rewards) {
        let report = report.unwrap();
        assert_eq!(report.player.name(), name);
        assert!(report.result.victory, "{name} lost");
        assert_eq!(report.result.exp_gained, reward);
        assert_eq!(report.result.count(EventTag::BattleStart), 1);
        assert_eq!(
            report.result.turn_count as usize,
            report.result.count(EventTag::TurnStart)
        );
        // Every event in a log belongs to that battle.
        assert!(report.result.events.iter().all(|e| match &e.kind {
            battle_core::BattleEventKind::BattleStart { player, .. } => player == name,
            _ => true,
        }));
    }
}

#[tokio::test]
async fn seeded_concurrent_runs_are_reproducible() {
    let run = || async {
        let matchups = vec![
            (veteran("Alice"), monster(MonsterKind::Orc)),
            (veteran("Bob"), monster(MonsterKind::Troll)),
        ];
        run_concurrent(matchups, seeded(12))
            .await
            .into_iter()
            .map(|report| {
                let report = report.unwrap();
                (report.result.outcome, report.result.turn_count, report.player.combat_stats().health)
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run().await, run().await);
}

#[tokio::test]
async fn campaign_tracks_victories_and_experience() {
    let (report, hero) = Campaign::new(veteran("Hero"), MonsterCatalog::builtin())
        .with_config(seeded(21))
        .run()
        .await
        .unwrap();

    assert_eq!(report.battles_planned, 5);
    assert!(!report.battles.is_empty());
    assert_eq!(report.final_health, hero.combat_stats().health);

    let won: Vec<_> = report
        .battles
        .iter()
        .filter(|b| b.outcome == BattleOutcome::Victory)
        .collect();
    assert_eq!(won.len() as u32, report.victories);
    assert_eq!(
        won.iter().map(|b| b.exp_gained).sum::<u32>(),
        report.total_exp
    );
    assert_eq!(report.final_level, 1 + report.levels_gained);

    // Only the last battle may be a loss.
    for summary in &report.battles[..report.battles.len() - 1] {
        assert_eq!(summary.outcome, BattleOutcome::Victory);
    }
    for (index, summary) in report.battles.iter().enumerate() {
        assert_eq!(summary.battle_number, index as u32 + 1);
    }

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["victories"], report.victories);
    assert_eq!(json["battles"][0]["battle_number"], 1);
}

#[tokio::test]
async fn campaign_heals_after_victories() {
    let mut catalog = MonsterCatalog::new();
    catalog.insert(
        "DUMMY",
        MonsterTemplate {
            name: "Training Dummy".into(),
            level: 1,
            stats: Stats::uniform(1),
            base_health: 1,
            base_attack: 1,
            base_defense: 0,
            base_speed: 0,
            exp_reward: 60,
        },
    );
    let mut hero = veteran("Hero");
    hero.take_damage(100);

    let (report, hero) = Campaign::new(hero, catalog)
        .with_battles(2)
        .with_config(seeded(22))
        .run()
        .await
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.total_exp, 120);
    assert_eq!(report.levels_gained, 1);
    // 20 HP left, two heals of floor(120 × 0.3) = 36.
    assert_eq!(hero.combat_stats().health, 92);
}

#[tokio::test]
async fn campaign_without_fitting_monsters_fails() {
    let mut catalog = MonsterCatalog::new();
    catalog.insert("DRAGON", MonsterKind::Dragon.template());

    let err = Campaign::new(veteran("Hero"), catalog)
        .with_config(seeded(23))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, RuntimeError::NoMonstersForLevel(1)));
}
