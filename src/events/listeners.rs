//! Listener registry
//!
//! Listeners are kept in registration order and invoked outside the registry
//! lock, so a listener may register, remove or emit without deadlocking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use super::CacheEvent;

/// Callback invoked with each matching event.
pub type Listener<V> = Arc<dyn Fn(&CacheEvent<V>) + Send + Sync + 'static>;

/// Stable identity of a registration, used to remove it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Registration<V> {
    id: ListenerId,
    event: String,
    once: bool,
    callback: Listener<V>,
}

// == Event Bus ==
/// Dispatches cache events to the listeners registered for their name.
pub struct EventBus<V> {
    listeners: Mutex<Vec<Registration<V>>>,
    next_id: AtomicU64,
}

impl<V> EventBus<V> {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Registers a persistent listener for `event`.
    pub fn on<F>(&self, event: impl AsRef<str>, listener: F) -> ListenerId
    where
        F: Fn(&CacheEvent<V>) + Send + Sync + 'static,
    {
        self.register(event.as_ref(), false, Arc::new(listener))
    }

    /// Registers a listener that fires at most once.
    pub fn once<F>(&self, event: impl AsRef<str>, listener: F) -> ListenerId
    where
        F: Fn(&CacheEvent<V>) + Send + Sync + 'static,
    {
        self.register(event.as_ref(), true, Arc::new(listener))
    }

    /// Removes one listener. Returns whether it was still registered.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|r| r.id != id);
        listeners.len() != before
    }

    /// Removes every listener, or only those registered for `event`.
    pub fn remove_all(&self, event: Option<&str>) {
        let mut listeners = self.listeners.lock();
        match event {
            Some(name) => listeners.retain(|r| r.event != name),
            None => listeners.clear(),
        }
    }

    /// Number of listeners registered for `event`.
    pub fn listener_count(&self, event: impl AsRef<str>) -> usize {
        let name = event.as_ref();
        self.listeners
            .lock()
            .iter()
            .filter(|r| r.event == name)
            .count()
    }

    /// Delivers `event` to its listeners in registration order.
    ///
    /// One-shot listeners are unregistered before any callback runs. Returns
    /// whether at least one listener was invoked.
    pub fn emit(&self, event: &CacheEvent<V>) -> bool {
        let name = event.name();
        let callbacks: Vec<Listener<V>> = {
            let mut listeners = self.listeners.lock();
            let matched = listeners
                .iter()
                .filter(|r| r.event == name)
                .map(|r| Arc::clone(&r.callback))
                .collect();
            listeners.retain(|r| !(r.once && r.event == name));
            matched
        };

        trace!(event = name, listeners = callbacks.len(), "Dispatching cache event");
        for callback in &callbacks {
            callback(event);
        }
        !callbacks.is_empty()
    }

    fn register(&self, event: &str, once: bool, callback: Listener<V>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push(Registration {
            id,
            event: event.to_string(),
            once,
            callback,
        });
        id
    }
}

impl<V> Default for EventBus<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for EventBus<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}
