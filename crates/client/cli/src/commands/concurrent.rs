//! Several battles on separate tasks.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use battle_core::Combatant;
use battle_runtime::{RuntimeError, run_concurrent};

use crate::config::SimConfig;
use crate::hero::demo_hero;

const MATCHUPS: [(&str, &str); 3] = [("Alice", "SLIME"), ("Bob", "GOBLIN"), ("Charlie", "WOLF")];

/// Run three demo battles at the same time
#[derive(Parser, Debug)]
pub struct ConcurrentCmd {
    /// Seed for reproducible rolls
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ConcurrentCmd {
    pub async fn execute(self, config: &SimConfig) -> Result<()> {
        let runtime = config.runtime_config(self.seed)?;
        let catalog = config.catalog()?;

        let mut matchups = Vec::with_capacity(MATCHUPS.len());
        for (hero, monster) in MATCHUPS {
            let monster = catalog
                .spawn(monster)
                .ok_or_else(|| RuntimeError::UnknownMonster(monster.to_owned()))?;
            matchups.push((demo_hero(hero), monster));
        }

        let started = Instant::now();
        let reports = run_concurrent(matchups, runtime).await;
        let elapsed = started.elapsed();

        let mut rows = Vec::with_capacity(reports.len());
        for report in reports {
            let report = report?;
            rows.push(json!({
                "hero": report.player.name(),
                "enemy": report.enemy.name(),
                "outcome": report.result.outcome,
                "turns": report.result.turn_count,
                "exp_gained": report.result.exp_gained,
                "hero_health": report.player.combat_stats().health,
            }));
        }

        if self.json {
            let output = json!({ "elapsed_ms": elapsed.as_millis() as u64, "battles": rows });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        for row in &rows {
            println!(
                "{} vs {}: {} in {} turns ({} HP left)",
                row["hero"].as_str().unwrap_or_default(),
                row["enemy"].as_str().unwrap_or_default(),
                row["outcome"].as_str().unwrap_or_default(),
                row["turns"],
                row["hero_health"],
            );
        }
        println!();
        println!("{} battles finished in {:?}", rows.len(), elapsed);
        Ok(())
    }
}
