//! Fan-out of battle events to listeners and streams.

use std::sync::{Arc, Mutex, MutexGuard};

use battle_core::BattleEvent;
use tokio::sync::mpsc;

use super::stream::EventStream;

/// Handle returned by [`EventHub::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&BattleEvent) + Send + Sync>;

#[derive(Default)]
struct HubState {
    listeners: Vec<(SubscriptionId, Listener)>,
    streams: Vec<mpsc::UnboundedSender<BattleEvent>>,
    next_id: u64,
    closed: bool,
}

/// Delivers each published event to every listener and open stream.
///
/// Listeners run synchronously on the publishing thread, outside the hub's
/// lock, so a listener may subscribe or unsubscribe without deadlocking.
/// Publishing never drops events; streams are unbounded.
#[derive(Clone, Default)]
pub struct EventHub {
    state: Arc<Mutex<HubState>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HubState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn publish(&self, event: &BattleEvent) {
        let listeners: Vec<Listener> = {
            let mut state = self.lock();
            if state.closed {
                tracing::trace!(target: "runtime::events", seq = event.seq, "publish after close ignored");
                return;
            }
            state.streams.retain(|tx| tx.send(event.clone()).is_ok());
            state
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect()
        };

        for listener in listeners {
            listener(event);
        }
    }

    /// Register a push listener. It sees every event published from now on.
    /// On a closed hub the listener is dropped right away.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&BattleEvent) + Send + Sync + 'static,
    {
        let mut state = self.lock();
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        if state.closed {
            tracing::trace!(target: "runtime::events", ?id, "subscribe after close ignored");
        } else {
            state.listeners.push((id, Arc::new(listener)));
        }
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.lock();
        let before = state.listeners.len();
        state.listeners.retain(|(existing, _)| *existing != id);
        state.listeners.len() != before
    }

    /// Open a pull stream of events published from now on.
    pub fn stream(&self) -> EventStream {
        self.stream_from(&[])
    }

    /// Open a pull stream that first replays `backlog`, then follows live
    /// events. On a closed hub the stream yields the backlog and ends.
    pub fn stream_from(&self, backlog: &[BattleEvent]) -> EventStream {
        let (tx, rx) = mpsc::unbounded_channel();
        for event in backlog {
            // The receiver is alive in this scope.
            let _ = tx.send(event.clone());
        }

        let mut state = self.lock();
        if !state.closed {
            state.streams.push(tx);
        }
        EventStream::new(rx)
    }

    /// Stop delivery. Open streams end after their buffered events and
    /// listeners are released.
    pub fn close(&self) {
        let mut state = self.lock();
        state.closed = true;
        state.streams.clear();
        state.listeners.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    pub fn stream_count(&self) -> usize {
        self.lock().streams.len()
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("EventHub")
            .field("listeners", &state.listeners.len())
            .field("streams", &state.streams.len())
            .field("closed", &state.closed)
            .finish()
    }
}
