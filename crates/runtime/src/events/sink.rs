use battle_core::{BattleEvent, EventSink};
use tokio::sync::mpsc;

/// Producer end of a battle's event channel.
#[derive(Clone, Debug)]
pub struct ChannelSink(mpsc::UnboundedSender<BattleEvent>);

impl ChannelSink {
    /// Create a sink and the receiver that drains it.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<BattleEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self(tx), rx)
    }
}

impl EventSink for ChannelSink {
    fn emit(&mut self, event: BattleEvent) {
        if self.0.send(event).is_err() {
            tracing::trace!(target: "runtime::events", "battle event receiver dropped");
        }
    }
}
