//! Worker tasks that back the runtime orchestration.
//!
//! The event forwarder drains a battle's event stream on its own task so a
//! consumer (UI, logger, network bridge) never blocks the battle loop.

mod forwarder;

pub use forwarder::EventForwarder;
