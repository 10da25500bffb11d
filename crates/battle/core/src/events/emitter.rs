//! Producer side of the event channel.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use super::{BattleEvent, BattleEventKind};

/// Destination for battle events.
///
/// Sinks must not drop events: the state machine emits each event exactly
/// once and never retries.
pub trait EventSink: Send {
    fn emit(&mut self, event: BattleEvent);
}

/// Sink that records into shared storage readable from outside the battle.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<BattleEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn snapshot(&self) -> Vec<BattleEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for EventRecorder {
    fn emit(&mut self, event: BattleEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

/// Stamps events with sequence numbers and timestamps before handing them to
/// the sink.
pub struct EventEmitter {
    sink: Box<dyn EventSink>,
    next_seq: u64,
    started: Instant,
}

impl EventEmitter {
    pub fn new(sink: impl EventSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            next_seq: 0,
            started: Instant::now(),
        }
    }

    pub fn emit(&mut self, kind: BattleEventKind) {
        let event = BattleEvent {
            seq: self.next_seq,
            timestamp_ms: self.started.elapsed().as_millis() as u64,
            kind,
        };
        self.next_seq += 1;
        self.sink.emit(event);
    }

    /// Number of events emitted so far.
    pub fn emitted(&self) -> u64 {
        self.next_seq
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("next_seq", &self.next_seq)
            .finish_non_exhaustive()
    }
}
