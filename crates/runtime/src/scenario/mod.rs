//! Multi-battle runners built on [`BattleSystem`](crate::BattleSystem).
//!
//! - [`Campaign`]: one hero fights a sequence of level-scaled monsters
//! - [`run_concurrent`]: independent matchups on separate tokio tasks

mod campaign;
mod concurrent;

pub use campaign::{BattleSummary, Campaign, CampaignReport};
pub use concurrent::{BattleReport, run_concurrent};
