//! Cache Store Module
//!
//! Two-level storage: namespace -> key -> entry. Namespace overrides live in a
//! separate settings table so they survive the namespace being emptied.
//!
//! The store is clock-agnostic: every time-dependent operation takes `now`
//! as Unix milliseconds.

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, SettingsTable};
use crate::config::Config;

/// Entries of one namespace.
pub(super) type Namespace<V> = HashMap<String, CacheEntry<V>>;

// == Lookup ==
/// Outcome of a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<V> {
    /// The entry exists and has not expired
    Hit(V),
    /// Namespace or key absent
    Miss,
    /// The entry had expired and was removed by this read
    Expired,
}

impl<V> Lookup<V> {
    pub fn into_value(self) -> Option<V> {
        match self {
            Lookup::Hit(value) => Some(value),
            Lookup::Miss | Lookup::Expired => None,
        }
    }
}

// == Cache Store ==
/// Main cache storage with per-namespace capacity and TTL settings.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Namespace -> entries. A namespace is present only while it has entries.
    pub(super) namespaces: HashMap<String, Namespace<V>>,
    /// Global defaults and per-namespace overrides
    pub(super) settings: SettingsTable,
    /// Activity counters
    pub(super) stats: CacheStats,
    /// Next insertion sequence number
    next_seq: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given global defaults.
    ///
    /// # Arguments
    /// * `max_count` - Capacity applied to namespaces without an override
    /// * `default_ttl` - TTL applied when neither the call nor the namespace gives one
    pub fn new(max_count: usize, default_ttl: Duration) -> Self {
        Self {
            namespaces: HashMap::new(),
            settings: SettingsTable::new(max_count, default_ttl),
            stats: CacheStats::new(),
            next_seq: 0,
        }
    }

    /// Creates a new CacheStore from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_count, config.default_ttl())
    }

    // == Set ==
    /// Stores a value, replacing any previous entry under the same key.
    ///
    /// Capacity is not checked here; the sweep restores it.
    ///
    /// # Arguments
    /// * `ttl` - Explicit TTL, otherwise the namespace default, otherwise the global one
    pub fn set(&mut self, namespace: &str, key: &str, value: V, ttl: Option<Duration>, now: i64) {
        let ttl = ttl.unwrap_or_else(|| self.settings.ttl(namespace));
        let entry = CacheEntry::new(value, ttl, now, self.next_seq);
        self.next_seq += 1;

        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), entry);
    }

    // == Get ==
    /// Reads a value. An expired entry is removed on the spot.
    pub fn get(&mut self, namespace: &str, key: &str, now: i64) -> Lookup<V> {
        let Some(entries) = self.namespaces.get_mut(namespace) else {
            self.stats.record_miss();
            return Lookup::Miss;
        };

        let expired = match entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                self.stats.record_hit();
                return Lookup::Hit(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        self.stats.record_miss();
        if !expired {
            return Lookup::Miss;
        }
        entries.remove(key);
        if entries.is_empty() {
            self.namespaces.remove(namespace);
        }
        self.stats.record_expiration();
        Lookup::Expired
    }

    // == Has ==
    /// Reports whether an entry is stored, without looking at its expiry.
    pub fn has(&self, namespace: &str, key: &str) -> bool {
        self.namespaces
            .get(namespace)
            .is_some_and(|entries| entries.contains_key(key))
    }

    // == Delete ==
    /// Removes an entry. Returns whether anything was removed.
    pub fn delete(&mut self, namespace: &str, key: &str) -> bool {
        let Some(entries) = self.namespaces.get_mut(namespace) else {
            return false;
        };
        if entries.remove(key).is_none() {
            return false;
        }
        if entries.is_empty() {
            self.namespaces.remove(namespace);
        }
        self.stats.record_deletion();
        true
    }

    // == Clear ==
    /// Drops a namespace and all its entries. Its settings are kept.
    pub fn clear(&mut self, namespace: &str) -> bool {
        self.namespaces.remove(namespace).is_some()
    }

    /// Drops every namespace. Settings are kept.
    pub fn clear_all(&mut self) {
        self.namespaces.clear();
    }

    // == Size ==
    /// Entry count of one namespace, or of the whole store.
    pub fn size(&self, namespace: Option<&str>) -> usize {
        match namespace {
            Some(name) => self.namespaces.get(name).map_or(0, HashMap::len),
            None => self.namespaces.values().map(HashMap::len).sum(),
        }
    }

    /// Names of the namespaces currently holding data.
    pub fn namespace_keys(&self) -> BTreeSet<String> {
        self.namespaces.keys().cloned().collect()
    }

    /// Remaining lifetime of an entry; zero once expired but not yet removed.
    pub fn ttl_remaining(&self, namespace: &str, key: &str, now: i64) -> Option<Duration> {
        self.namespaces
            .get(namespace)?
            .get(key)
            .map(|entry| entry.ttl_remaining_at(now))
    }

    // == Settings ==
    pub fn settings(&self) -> &SettingsTable {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsTable {
        &mut self.settings
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.size(None);
        stats.namespaces = self.namespaces.len();
        stats
    }
}
