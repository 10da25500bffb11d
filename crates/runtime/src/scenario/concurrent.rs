//! Independent battles on separate tokio tasks.

use futures_util::future::join_all;
use tracing::{debug, info};

use battle_core::{BattleResult, Combatant, Enemy};

use crate::api::{Result, RuntimeError};
use crate::battle::BattleSystem;
use crate::config::RuntimeConfig;

/// One finished matchup with both combatants in their final condition.
#[derive(Debug)]
pub struct BattleReport<P, E> {
    pub result: BattleResult,
    pub player: P,
    pub enemy: E,
}

/// Run every matchup as its own task and wait for all of them.
///
/// Reports come back in matchup order. A failure in one battle only affects
/// that battle's slot. With a seeded config, matchup `i` uses stream `i`, so
/// results do not depend on scheduling.
pub async fn run_concurrent<P, E>(
    matchups: Vec<(P, E)>,
    config: RuntimeConfig,
) -> Vec<Result<BattleReport<P, E>>>
where
    P: Combatant + 'static,
    E: Enemy + 'static,
{
    info!(target: "runtime::scenario", battles = matchups.len(), "starting concurrent battles");

    let handles: Vec<_> = matchups
        .into_iter()
        .enumerate()
        .map(|(index, (player, enemy))| {
            let config = config.clone();
            let rng = config.rng_for(index as u64);
            tokio::spawn(async move {
                let mut system = BattleSystem::with_rng(player, enemy, config, rng);
                let result = system.run_auto_battle().await?;
                let (player, enemy) = system.into_combatants();
                debug!(
                    target: "runtime::scenario",
                    index,
                    outcome = %result.outcome,
                    turns = result.turn_count,
                    "concurrent battle finished"
                );
                Ok::<_, RuntimeError>(BattleReport {
                    result,
                    player,
                    enemy,
                })
            })
        })
        .collect();

    join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.map_err(RuntimeError::WorkerJoin).and_then(|report| report))
        .collect()
}
