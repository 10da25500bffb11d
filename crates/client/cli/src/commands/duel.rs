//! A single battle, narrated as it happens.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use battle_content::HeroClass;
use battle_core::{BattleAction, Combatant};
use battle_runtime::{BattleSystem, RuntimeError, ScriptedProvider};

use crate::config::SimConfig;
use crate::hero::{build_hero, class_banner};

/// Fight one monster
#[derive(Parser, Debug)]
pub struct DuelCmd {
    /// Monster key from the catalog; built-in keys match in any case
    #[arg(short, long, default_value = "SLIME")]
    pub monster: String,

    /// Hero class; the demo adventurer when omitted
    #[arg(short, long)]
    pub class: Option<HeroClass>,

    /// Player actions in order, e.g. `defend,attack,flee`. Once the script
    /// runs out the hero keeps attacking.
    #[arg(long, value_delimiter = ',')]
    pub actions: Vec<BattleAction>,

    /// Seed for reproducible rolls
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the result as JSON instead of narrating
    #[arg(long)]
    pub json: bool,
}

impl DuelCmd {
    pub async fn execute(self, config: &SimConfig) -> Result<()> {
        let runtime = config.runtime_config(self.seed)?;
        let catalog = config.catalog()?;

        let monster = catalog
            .spawn(&self.monster)
            .or_else(|| catalog.spawn(&self.monster.to_ascii_uppercase()))
            .ok_or_else(|| RuntimeError::UnknownMonster(self.monster.clone()))?;
        let hero = build_hero("Hero", self.class);

        info!(hero = %hero.name(), monster = %monster.name(), seed = ?runtime.seed, "duel");

        if let (Some(class), false) = (self.class, self.json) {
            println!("{}", class_banner(class));
        }

        let mut system = BattleSystem::with_config(hero, monster, runtime);
        let printer = (!self.json).then(|| super::print_events(system.event_stream()));

        let result = if self.actions.is_empty() {
            system.run_auto_battle().await?
        } else {
            let provider = ScriptedProvider::new(self.actions);
            system.run_with_provider(&provider).await?
        };

        if let Some(printer) = printer {
            printer.join().await?;
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!();
            println!(
                "Outcome: {} after {} turns ({} exp)",
                result.outcome, result.turn_count, result.exp_gained
            );
        }
        Ok(())
    }
}
