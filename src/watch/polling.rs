// src/watch/polling.rs

use std::time::Duration;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use crate::engine::RuntimeEvent;

/// Spawn the fixed-interval ticker.
///
/// Each iteration sleeps `interval` and then offers a `Tick`. If a tick is
/// already waiting in the channel (the runtime is busy rendering) the new
/// one is dropped, so a slow render is followed by a single check rather
/// than a burst. The task ends once the runtime side of the channel closes.
pub fn spawn_polling_source(
    interval: Duration,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> JoinHandle<()> {
    info!(interval_ms = interval.as_millis() as u64, "polling source started");

    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;

            match runtime_tx.try_send(RuntimeEvent::Tick) {
                Ok(()) => trace!("tick"),
                Err(TrySendError::Full(_)) => {
                    trace!("runtime busy; coalescing tick");
                }
                Err(TrySendError::Closed(_)) => {
                    debug!("runtime channel closed; polling source stopping");
                    break;
                }
            }
        }
    })
}
