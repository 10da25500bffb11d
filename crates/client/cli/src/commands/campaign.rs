//! Battles in a row against level-scaled monsters.

use anyhow::Result;
use clap::Parser;

use battle_content::HeroClass;
use battle_runtime::Campaign;

use crate::config::SimConfig;
use crate::hero::{build_hero, class_banner};

/// Fight a series of battles
#[derive(Parser, Debug)]
pub struct CampaignCmd {
    /// Number of battles to fight
    #[arg(short, long, default_value_t = 5)]
    pub battles: u32,

    /// Hero class; the demo adventurer when omitted
    #[arg(short, long)]
    pub class: Option<HeroClass>,

    /// Seed for reproducible encounters and rolls
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CampaignCmd {
    pub async fn execute(self, config: &SimConfig) -> Result<()> {
        let runtime = config.runtime_config(self.seed)?;
        let hero = build_hero("Hero", self.class);
        if let (Some(class), false) = (self.class, self.json) {
            println!("{}", class_banner(class));
        }

        let (report, _hero) = Campaign::new(hero, config.catalog()?)
            .with_battles(self.battles)
            .with_config(runtime)
            .run()
            .await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        for battle in &report.battles {
            println!(
                "Battle {}: {} (lv {}) -> {} in {} turns, +{} exp, hero at {}/{} HP",
                battle.battle_number,
                battle.enemy,
                battle.enemy_level,
                battle.outcome,
                battle.turns,
                battle.exp_gained,
                battle.hero_health,
                report.max_health,
            );
        }
        println!();
        println!(
            "{}/{} victories, {} exp, level {} (+{})",
            report.victories,
            report.battles_planned,
            report.total_exp,
            report.final_level,
            report.levels_gained,
        );
        if !report.is_complete() {
            println!("The campaign ended early.");
        }
        Ok(())
    }
}
