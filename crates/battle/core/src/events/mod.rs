//! Battle event model.
//!
//! A battle is observable only through its event log: every step of the state
//! machine appends [`BattleEvent`]s to an [`EventSink`]. Events carry a
//! per-battle sequence number and a monotonic timestamp, so consumers can treat
//! the log as ordered and append-only regardless of how it was transported.

mod emitter;
mod kind;

pub use emitter::{EventEmitter, EventRecorder, EventSink};
pub use kind::{BattleEvent, BattleEventKind, EventTag};
