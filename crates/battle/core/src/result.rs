//! Battle outcome summary.

use crate::events::{BattleEvent, EventTag};
use crate::fsm::BattleState;

/// How a finished battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Fled,
}

impl BattleOutcome {
    /// Outcome for a terminal state, `None` while the battle is running.
    pub const fn from_state(state: BattleState) -> Option<Self> {
        match state {
            BattleState::Victory => Some(Self::Victory),
            BattleState::Defeat => Some(Self::Defeat),
            BattleState::Fled => Some(Self::Fled),
            _ => None,
        }
    }
}

/// Summary of a finished battle together with its full event log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub outcome: BattleOutcome,
    pub victory: bool,
    pub fled: bool,
    /// The enemy's reward on victory, 0 otherwise.
    pub exp_gained: u32,
    pub turn_count: u32,
    pub events: Vec<BattleEvent>,
}

impl BattleResult {
    pub fn new(
        outcome: BattleOutcome,
        exp_reward: u32,
        turn_count: u32,
        events: Vec<BattleEvent>,
    ) -> Self {
        let victory = outcome == BattleOutcome::Victory;
        Self {
            outcome,
            victory,
            fled: outcome == BattleOutcome::Fled,
            exp_gained: if victory { exp_reward } else { 0 },
            turn_count,
            events,
        }
    }

    /// Number of events with the given tag.
    pub fn count(&self, tag: EventTag) -> usize {
        self.events.iter().filter(|event| event.tag() == tag).count()
    }

    /// The Victory, Defeat, or successful Flee event.
    pub fn terminal_event(&self) -> Option<&BattleEvent> {
        self.events.iter().find(|event| event.is_terminal())
    }
}
