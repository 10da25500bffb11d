//! Rules of a one-on-one, turn-based battle.
//!
//! `battle-core` is synchronous and I/O free. It defines the combatant
//! contract, the combat formulas, and the [`BattleFsm`] state machine that
//! resolves a battle step by step while publishing every change as a
//! [`BattleEvent`]. Async orchestration lives in `battle-runtime`; monster and
//! hero data lives in `battle-content`.
pub mod combat;
pub mod combatant;
pub mod config;
pub mod error;
pub mod events;
pub mod fsm;
pub mod progression;
pub mod result;
pub mod rng;
pub mod stats;

pub use combatant::{Combatant, Enemy, Hero, HeroData, Monster, MonsterTemplate};
pub use config::BattleConfig;
pub use error::{BattleError, Result};
pub use events::{BattleEvent, BattleEventKind, EventEmitter, EventRecorder, EventSink, EventTag};
pub use fsm::{BattleAction, BattleContext, BattleFsm, BattleSnapshot, BattleState};
pub use progression::{Experience, exp_to_level};
pub use result::{BattleOutcome, BattleResult};
pub use rng::{BattleRng, EntropyRng, PcgRng, compute_seed};
pub use stats::{CombatStats, Stats};
