//! Event delivery for running battles.
//!
//! The state machine writes into a [`ChannelSink`]; the orchestrator drains
//! that channel after every step and republishes each event through an
//! [`EventHub`] to push listeners and pull streams. Delivery is lossless:
//! every subscriber sees the full ordered log from the moment it subscribed.

mod format;
mod hub;
mod recent;
mod sink;
mod stream;

pub use format::format_event;
pub use hub::{EventHub, SubscriptionId};
pub use recent::RecentEvents;
pub use sink::ChannelSink;
pub use stream::EventStream;
