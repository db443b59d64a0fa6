//! Sweep Module
//!
//! One sweep tick over the whole store: drop expired entries, then trim each
//! namespace back to its capacity by evicting the entries closest to expiry.

use crate::cache::CacheStore;
use crate::events::CacheEvent;

impl<V: Clone> CacheStore<V> {
    // == Sweep ==
    /// Runs one tick at `now` and returns the `expired` and `overflow` events
    /// it produced, in removal order.
    ///
    /// Entries with equal expiry are evicted in insertion order. Namespaces
    /// left without entries are removed from the store; their settings stay.
    pub fn sweep(&mut self, now: i64) -> Vec<CacheEvent<V>> {
        let mut events = Vec::new();
        let mut emptied = Vec::new();

        for (name, entries) in self.namespaces.iter_mut() {
            // Expiry pass, collecting the survivors' ordering keys as we go
            let mut survivors = Vec::with_capacity(entries.len());
            entries.retain(|key, entry| {
                if entry.is_expired_at(now) {
                    self.stats.record_expiration();
                    events.push(CacheEvent::Expired {
                        namespace: name.clone(),
                        key: key.clone(),
                    });
                    false
                } else {
                    survivors.push((entry.expires_at, entry.seq, key.clone()));
                    true
                }
            });

            // Capacity pass
            let max_count = self.settings.max_count(name);
            if survivors.len() > max_count {
                let surplus = survivors.len() - max_count;
                survivors.sort_unstable_by_key(|&(expires_at, seq, _)| (expires_at, seq));
                for (_, _, key) in survivors.into_iter().take(surplus) {
                    entries.remove(&key);
                    self.stats.record_overflow();
                    events.push(CacheEvent::Overflow {
                        namespace: name.clone(),
                        key,
                    });
                }
            }

            if entries.is_empty() {
                emptied.push(name.clone());
            }
        }

        for name in emptied {
            self.namespaces.remove(&name);
        }
        events
    }
}
