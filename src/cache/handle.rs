//! Cache Handle Module
//!
//! `InMemCache` ties the shared store, the event bus and the sweep task
//! together behind a synchronous API.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{current_timestamp_ms, CacheStats, CacheStore, Lookup};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::events::{CacheEvent, EventBus, ListenerId, Status};
use crate::tasks::spawn_sweep_task;

// == Sweeper Status ==
/// Whether a sweep task is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweeperStatus {
    Alive,
    Dead,
}

impl SweeperStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SweeperStatus::Alive => "alive",
            SweeperStatus::Dead => "dead",
        }
    }
}

impl fmt::Display for SweeperStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == In-Memory Cache ==
/// Namespaced cache with TTL expiry and a background sweeper.
///
/// All operations are synchronous and safe to call from any thread. Event
/// listeners run on the calling thread (or on the sweep task for `expired`
/// and `overflow`), after the store lock has been released.
///
/// Capacity is only restored by the sweeper, so `size` may exceed a
/// namespace's `max_count` between a burst of sets and the next tick.
pub struct InMemCache<V> {
    store: Arc<Mutex<CacheStore<V>>>,
    events: Arc<EventBus<V>>,
    /// At most one running sweep task
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl<V> InMemCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates a cache and starts its sweeper.
    ///
    /// Fails on an invalid config or when called outside a tokio runtime.
    pub fn new(config: &Config) -> Result<Self> {
        let cache = Self::detached(config);
        cache.init(config)?;
        Ok(cache)
    }

    /// Creates a cache whose sweeper is dead until `init` is called.
    pub fn detached(config: &Config) -> Self {
        Self {
            store: Arc::new(Mutex::new(CacheStore::from_config(config))),
            events: Arc::new(EventBus::new()),
            sweeper: Mutex::new(None),
        }
    }

    // == Lifecycle ==
    /// Starts the sweeper with `config`, or re-announces a running one.
    ///
    /// On a dead cache the config's `max_count` and `default_ttl` become the
    /// new global defaults and `status: init` is emitted. On a live cache the
    /// config is ignored and only `status: reinit` is emitted.
    pub fn init(&self, config: &Config) -> Result<()> {
        config.validate()?;

        let status = {
            let mut sweeper = self.sweeper.lock();
            if sweeper.as_ref().is_some_and(|h| !h.is_finished()) {
                debug!("Sweeper already running, init is a no-op");
                Status::Reinit
            } else {
                Handle::try_current().map_err(|_| CacheError::NoRuntime)?;
                self.store
                    .lock()
                    .settings_mut()
                    .set_defaults(config.max_count, config.default_ttl());
                *sweeper = Some(spawn_sweep_task(
                    Arc::clone(&self.store),
                    Arc::clone(&self.events),
                    config.cleanup_interval(),
                ));
                info!(
                    "Sweeper started: max_count={}, cleanup_interval={}ms, default_ttl={}ms",
                    config.max_count, config.cleanup_interval_ms, config.default_ttl_ms
                );
                Status::Init
            }
        };

        self.events.emit(&CacheEvent::Status(status));
        Ok(())
    }

    /// Stops the sweeper. A tick already running is allowed to finish.
    pub fn kill(&self) {
        self.events.emit(&CacheEvent::Status(Status::Kill));
        if let Some(handle) = self.sweeper.lock().take() {
            handle.abort();
            info!("Sweeper killed");
        }
    }

    pub fn status(&self) -> SweeperStatus {
        match self.sweeper.lock().as_ref() {
            Some(handle) if !handle.is_finished() => SweeperStatus::Alive,
            _ => SweeperStatus::Dead,
        }
    }

    // == Entry Operations ==
    /// Stores `value` under `namespace`/`key` and returns it.
    ///
    /// Without an explicit `ttl` the namespace's default applies, falling
    /// back to the global default.
    pub fn set(&self, namespace: &str, key: &str, value: V, ttl: Option<Duration>) -> V {
        self.store
            .lock()
            .set(namespace, key, value.clone(), ttl, current_timestamp_ms());
        self.events.emit(&CacheEvent::Set {
            namespace: namespace.to_string(),
            key: key.to_string(),
            value: value.clone(),
        });
        value
    }

    /// Returns the value if present and unexpired.
    ///
    /// Finding an expired entry removes it and emits `delete`.
    pub fn get(&self, namespace: &str, key: &str) -> Option<V> {
        let lookup = self
            .store
            .lock()
            .get(namespace, key, current_timestamp_ms());

        match lookup {
            Lookup::Hit(value) => Some(value),
            Lookup::Miss => None,
            Lookup::Expired => {
                debug!(namespace, key, "Expired entry removed on read");
                self.events.emit(&CacheEvent::Delete {
                    namespace: namespace.to_string(),
                    key: key.to_string(),
                });
                None
            }
        }
    }

    /// Whether an entry is stored. Unlike `get`, expiry is not checked: an
    /// expired entry counts until a read or a sweep removes it.
    pub fn has(&self, namespace: &str, key: &str) -> bool {
        self.store.lock().has(namespace, key)
    }

    /// Emits `delete`, then removes the entry. Returns whether one existed.
    pub fn delete(&self, namespace: &str, key: &str) -> bool {
        self.events.emit(&CacheEvent::Delete {
            namespace: namespace.to_string(),
            key: key.to_string(),
        });
        self.store.lock().delete(namespace, key)
    }

    /// Emits `clear`, then drops the namespace. Its overrides are kept.
    pub fn clear(&self, namespace: &str) {
        self.events.emit(&CacheEvent::Clear {
            namespace: namespace.to_string(),
        });
        self.store.lock().clear(namespace);
    }

    /// Emits `clear-all`, then drops every namespace.
    pub fn clear_all(&self) {
        self.events.emit(&CacheEvent::ClearAll);
        self.store.lock().clear_all();
    }

    /// Entry count of one namespace (0 if absent), or of the whole cache.
    pub fn size(&self, namespace: Option<&str>) -> usize {
        self.store.lock().size(namespace)
    }

    pub fn namespace_keys(&self) -> BTreeSet<String> {
        self.store.lock().namespace_keys()
    }

    /// Time left before the entry expires, if it is stored.
    pub fn ttl_remaining(&self, namespace: &str, key: &str) -> Option<Duration> {
        self.store
            .lock()
            .ttl_remaining(namespace, key, current_timestamp_ms())
    }

    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    // == Namespace Settings ==
    pub fn namespace_max_count(&self, namespace: &str) -> usize {
        self.store.lock().settings().max_count(namespace)
    }

    pub fn set_namespace_max_count(&self, namespace: &str, max_count: usize) {
        self.store.lock().settings_mut().set_max_count(namespace, max_count);
    }

    pub fn namespace_ttl(&self, namespace: &str) -> Duration {
        self.store.lock().settings().ttl(namespace)
    }

    pub fn set_namespace_ttl(&self, namespace: &str, ttl: Duration) {
        self.store.lock().settings_mut().set_ttl(namespace, ttl);
    }

    // == Listeners ==
    pub fn on<F>(&self, event: impl AsRef<str>, listener: F) -> ListenerId
    where
        F: Fn(&CacheEvent<V>) + Send + Sync + 'static,
    {
        self.events.on(event, listener)
    }

    pub fn once<F>(&self, event: impl AsRef<str>, listener: F) -> ListenerId
    where
        F: Fn(&CacheEvent<V>) + Send + Sync + 'static,
    {
        self.events.once(event, listener)
    }

    pub fn off(&self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    pub fn remove_all_listeners(&self, event: Option<&str>) {
        self.events.remove_all(event);
    }

    pub fn listener_count(&self, event: impl AsRef<str>) -> usize {
        self.events.listener_count(event)
    }

    /// Delivers an arbitrary event to its listeners.
    pub fn emit(&self, event: CacheEvent<V>) -> bool {
        self.events.emit(&event)
    }
}

impl<V> Drop for InMemCache<V> {
    fn drop(&mut self) {
        if let Some(handle) = self.sweeper.get_mut().take() {
            handle.abort();
        }
    }
}

impl<V> fmt::Debug for InMemCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemCache")
            .field("sweeper_running", &self.sweeper.lock().is_some())
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
