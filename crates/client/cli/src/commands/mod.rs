//! Subcommands of the simulator.

mod campaign;
mod concurrent;
mod duel;

pub use campaign::CampaignCmd;
pub use concurrent::ConcurrentCmd;
pub use duel::DuelCmd;

use battle_core::BattleEvent;
use battle_runtime::{EventForwarder, EventStream, format_event};

/// Print every displayable event of `stream` as it arrives.
fn print_events(stream: EventStream) -> EventForwarder {
    EventForwarder::spawn(stream, |event: BattleEvent| {
        if let Some(line) = format_event(&event) {
            println!("{line}");
        }
    })
}
