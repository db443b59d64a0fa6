//! Sweep Task
//!
//! Background task that periodically runs a sweep tick over the store and
//! dispatches the resulting events.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{current_timestamp_ms, CacheStore};
use crate::events::{CacheEvent, EventBus};

/// Spawns a background task that sweeps the store every `interval`.
///
/// The first tick happens one full interval after spawning. Each tick holds
/// the store lock for its whole traversal and releases it before listeners
/// are notified. A tick contains no await point, so aborting the returned
/// handle stops future ticks but never interrupts one in progress.
///
/// # Arguments
/// * `store` - Shared store to sweep
/// * `events` - Bus receiving the `expired` and `overflow` events
/// * `interval` - Time between ticks
///
/// # Panics
/// Must be called from within a tokio runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(100, Duration::from_secs(300))));
/// let handle = spawn_sweep_task(store, Arc::new(EventBus::new()), Duration::from_secs(1));
/// // Later:
/// handle.abort();
/// ```
pub fn spawn_sweep_task<V>(
    store: Arc<Mutex<CacheStore<V>>>,
    events: Arc<EventBus<V>>,
    interval: Duration,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting sweep task with interval of {} ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            let emitted = store.lock().sweep(current_timestamp_ms());

            if emitted.is_empty() {
                debug!("Sweep: nothing expired or over capacity");
                continue;
            }

            let expired = emitted
                .iter()
                .filter(|e| matches!(e, CacheEvent::Expired { .. }))
                .count();
            info!(
                "Sweep: removed {} expired and {} overflowing entries",
                expired,
                emitted.len() - expired
            );

            for event in &emitted {
                events.emit(event);
            }
        }
    })
}
