use std::collections::VecDeque;

use battle_core::BattleEvent;

/// Bounded window of the latest events, for display.
///
/// Only the window is bounded; the authoritative log is kept elsewhere.
#[derive(Clone, Debug)]
pub struct RecentEvents {
    events: VecDeque<BattleEvent>,
    capacity: usize,
}

impl RecentEvents {
    pub const DEFAULT_CAPACITY: usize = 20;

    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    pub fn push(&mut self, event: BattleEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &BattleEvent> {
        self.events.iter()
    }

    /// Formatted lines of the window, skipping events with no display form.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().filter_map(super::format_event).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecentEvents {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
