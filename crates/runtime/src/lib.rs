//! Async orchestration for turn-based battles.
//!
//! This crate drives [`battle_core::BattleFsm`] from tokio tasks, delivers
//! battle events to listeners and streams, and composes battles into larger
//! scenarios. Consumers embed [`BattleSystem`] to run a single battle, or use
//! the [`scenario`] runners for campaigns and concurrent matchups.
//!
//! Modules are organized by responsibility:
//! - [`battle`] hosts the orchestrator
//! - [`api`] exposes the error type and action providers
//! - [`events`] fans battle events out to push and pull subscribers
//! - [`workers`] keeps background tasks such as event forwarding
//! - [`scenario`] runs campaigns and concurrent battles
pub mod api;
pub mod battle;
pub mod config;
pub mod events;
pub mod scenario;
pub mod workers;

pub use api::{
    ActionProvider, AutoAttackProvider, ChannelActionProvider, Result, RuntimeError,
    ScriptedProvider,
};
pub use battle::{BattleSystem, run_battle};
pub use config::RuntimeConfig;
pub use events::{
    ChannelSink, EventHub, EventStream, RecentEvents, SubscriptionId, format_event,
};
pub use scenario::{BattleReport, BattleSummary, Campaign, CampaignReport, run_concurrent};
pub use workers::EventForwarder;
