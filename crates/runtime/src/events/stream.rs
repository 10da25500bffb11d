use std::pin::Pin;
use std::task::{Context, Poll};

use battle_core::BattleEvent;
use tokio::sync::mpsc;

/// Pull-side subscription to a battle's events.
///
/// Yields events in emission order and ends once the battle is finalized
/// and everything already published has been read.
#[derive(Debug)]
pub struct EventStream {
    rx: mpsc::UnboundedReceiver<BattleEvent>,
}

impl EventStream {
    pub(crate) fn new(rx: mpsc::UnboundedReceiver<BattleEvent>) -> Self {
        Self { rx }
    }

    /// Wait for the next event. `None` once the stream has ended.
    pub async fn next(&mut self) -> Option<BattleEvent> {
        self.rx.recv().await
    }

    /// Drain everything until the stream ends.
    pub async fn collect_all(mut self) -> Vec<BattleEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.next().await {
            events.push(event);
        }
        events
    }
}

impl futures_util::Stream for EventStream {
    type Item = BattleEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
