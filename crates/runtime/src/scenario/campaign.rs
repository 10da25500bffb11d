//! Sequential battles against random monsters.

use serde::Serialize;
use tracing::info;

use battle_content::MonsterCatalog;
use battle_core::{BattleOutcome, Combatant, Enemy, Experience};

use crate::api::{Result, RuntimeError};
use crate::battle::BattleSystem;
use crate::config::RuntimeConfig;

/// One battle of a campaign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BattleSummary {
    pub battle_number: u32,
    pub enemy: String,
    pub enemy_level: u32,
    pub outcome: BattleOutcome,
    pub turns: u32,
    pub exp_gained: u32,
    /// Hero health after the battle and any healing that followed it.
    pub hero_health: u32,
}

/// Outcome of a whole campaign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CampaignReport {
    pub battles_planned: u32,
    pub battles: Vec<BattleSummary>,
    pub victories: u32,
    pub total_exp: u32,
    pub levels_gained: u32,
    pub final_level: u32,
    pub final_health: u32,
    pub max_health: u32,
}

impl CampaignReport {
    /// Every planned battle was won.
    pub fn is_complete(&self) -> bool {
        self.victories == self.battles_planned
    }
}

/// A hero fighting `battles` monsters in a row. Battle `n` draws a monster
/// suited to level `n`. After each victory the hero recovers a fraction of
/// max health; the campaign stops at the first defeat or escape.
pub struct Campaign<P> {
    hero: P,
    catalog: MonsterCatalog,
    battles: u32,
    heal_fraction: f64,
    experience: Experience,
    config: RuntimeConfig,
}

impl<P: Combatant + 'static> Campaign<P> {
    pub const DEFAULT_BATTLES: u32 = 5;
    pub const DEFAULT_HEAL_FRACTION: f64 = 0.3;

    pub fn new(hero: P, catalog: MonsterCatalog) -> Self {
        Self {
            hero,
            catalog,
            battles: Self::DEFAULT_BATTLES,
            heal_fraction: Self::DEFAULT_HEAL_FRACTION,
            experience: Experience::default(),
            config: RuntimeConfig::default(),
        }
    }

    pub fn with_battles(mut self, battles: u32) -> Self {
        self.battles = battles;
        self
    }

    pub fn with_heal_fraction(mut self, fraction: f64) -> Self {
        self.heal_fraction = fraction.max(0.0);
        self
    }

    /// Starting level and experience of the hero.
    pub fn with_experience(mut self, experience: Experience) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Fight every battle. Returns the report together with the hero in its
    /// final condition.
    pub async fn run(self) -> Result<(CampaignReport, P)> {
        let Self {
            mut hero,
            catalog,
            battles,
            heal_fraction,
            mut experience,
            config,
        } = self;

        let mut selection = config.selection_rng();
        let starting_level = experience.level;
        let mut summaries = Vec::new();
        let mut victories = 0;
        let mut total_exp = 0;

        for battle_number in 1..=battles {
            let enemy = catalog
                .random_monster(battle_number, selection.as_mut())
                .ok_or(RuntimeError::NoMonstersForLevel(battle_number))?;
            let enemy_name = enemy.name().to_owned();
            let enemy_level = enemy.level();

            info!(
                target: "runtime::scenario",
                battle = battle_number,
                of = battles,
                enemy = %enemy_name,
                level = enemy_level,
                hero_health = hero.combat_stats().health,
                "campaign encounter"
            );

            let rng = config.rng_for(u64::from(battle_number));
            let mut system = BattleSystem::with_rng(hero, enemy, config.clone(), rng);
            let result = system.run_auto_battle().await?;
            let (returned, _) = system.into_combatants();
            hero = returned;

            if result.victory {
                victories += 1;
                total_exp += result.exp_gained;
                let levels = experience.gain_and_level(result.exp_gained);
                let healing = (hero.combat_stats().max_health as f64 * heal_fraction).floor();
                let healed = hero.heal(healing as i64);
                info!(
                    target: "runtime::scenario",
                    battle = battle_number,
                    turns = result.turn_count,
                    exp = result.exp_gained,
                    levels,
                    healed,
                    "campaign victory"
                );
            } else {
                info!(
                    target: "runtime::scenario",
                    battle = battle_number,
                    outcome = %result.outcome,
                    "campaign ended early"
                );
            }

            summaries.push(BattleSummary {
                battle_number,
                enemy: enemy_name,
                enemy_level,
                outcome: result.outcome,
                turns: result.turn_count,
                exp_gained: result.exp_gained,
                hero_health: hero.combat_stats().health,
            });

            if !result.victory || !hero.is_alive() {
                break;
            }
        }

        let report = CampaignReport {
            battles_planned: battles,
            battles: summaries,
            victories,
            total_exp,
            levels_gained: experience.level - starting_level,
            final_level: experience.level,
            final_health: hero.combat_stats().health,
            max_health: hero.combat_stats().max_health,
        };
        Ok((report, hero))
    }
}
