//! Background task that relays a battle's events to a consumer.

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

use battle_core::BattleEvent;

use crate::api::{Result, RuntimeError};
use crate::events::EventStream;

/// Spawned task draining an [`EventStream`] into a callback.
///
/// The task ends when the stream ends (the battle was finalized) or when
/// [`shutdown`](Self::shutdown) is requested. Dropping the forwarder also
/// stops it.
pub struct EventForwarder {
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<u64>,
}

impl EventForwarder {
    /// Spawn the forwarding task on the current tokio runtime.
    pub fn spawn<F>(mut stream: EventStream, mut on_event: F) -> Self
    where
        F: FnMut(BattleEvent) + Send + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut forwarded = 0u64;
            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => {
                        debug!(target: "runtime::worker", forwarded, "event forwarder shut down");
                        break;
                    }
                    event = stream.next() => match event {
                        Some(event) => {
                            on_event(event);
                            forwarded += 1;
                        }
                        None => {
                            debug!(target: "runtime::worker", forwarded, "event stream ended");
                            break;
                        }
                    },
                }
            }
            forwarded
        });

        Self {
            shutdown_tx: Some(shutdown_tx),
            handle,
        }
    }

    /// Stop forwarding and wait for the task. Events still buffered in the
    /// stream are not delivered. Returns the number of events forwarded.
    pub async fn shutdown(mut self) -> Result<u64> {
        if let Some(tx) = self.shutdown_tx.take() {
            // The task may already have finished on its own.
            let _ = tx.send(());
        }
        self.handle.await.map_err(RuntimeError::WorkerJoin)
    }

    /// Wait until the stream ends and every event was forwarded. Returns
    /// the number of events forwarded.
    pub async fn join(self) -> Result<u64> {
        let Self {
            shutdown_tx,
            handle,
        } = self;
        let forwarded = handle.await.map_err(RuntimeError::WorkerJoin);
        drop(shutdown_tx);
        forwarded
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
