//! Property-Based Tests for Cache Module
//!
//! Uses proptest against the clock-free store, so time is an input rather
//! than something the tests wait on.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::cache::{CacheStore, Lookup};
use crate::events::CacheEvent;

// == Test Configuration ==
const TEST_MAX_COUNT: usize = 100;
const TEST_DEFAULT_TTL: Duration = Duration::from_secs(300);
const NOW: i64 = 1_700_000_000_000;

// == Strategies ==
/// Generates cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,16}"
}

/// Generates namespace names from a small pool so operations collide
fn namespace_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["users", "sessions", "tokens"]).prop_map(str::to_string)
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,64}"
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { namespace: String, key: String, value: String },
    Get { namespace: String, key: String },
    Delete { namespace: String, key: String },
    Clear { namespace: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (namespace_strategy(), key_strategy(), value_strategy())
            .prop_map(|(namespace, key, value)| CacheOp::Set { namespace, key, value }),
        2 => (namespace_strategy(), key_strategy())
            .prop_map(|(namespace, key)| CacheOp::Get { namespace, key }),
        1 => (namespace_strategy(), key_strategy())
            .prop_map(|(namespace, key)| CacheOp::Delete { namespace, key }),
        1 => namespace_strategy().prop_map(|namespace| CacheOp::Clear { namespace }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // The store behaves like a plain two-level map while nothing expires,
    // and the hit/miss counters match what the reads returned.
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_MAX_COUNT, TEST_DEFAULT_TTL);
        let mut model: HashMap<(String, String), String> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { namespace, key, value } => {
                    store.set(&namespace, &key, value.clone(), None, NOW);
                    model.insert((namespace, key), value);
                }
                CacheOp::Get { namespace, key } => {
                    let got = store.get(&namespace, &key, NOW).into_value();
                    let want = model.get(&(namespace, key)).cloned();
                    if want.is_some() { expected_hits += 1 } else { expected_misses += 1 }
                    prop_assert_eq!(got, want);
                }
                CacheOp::Delete { namespace, key } => {
                    let removed = store.delete(&namespace, &key);
                    prop_assert_eq!(removed, model.remove(&(namespace, key)).is_some());
                }
                CacheOp::Clear { namespace } => {
                    store.clear(&namespace);
                    model.retain(|(ns, _), _| *ns != namespace);
                }
            }
        }

        prop_assert_eq!(store.size(None), model.len());
        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
    }

    // After one sweep every namespace is within capacity, and the evicted
    // keys are exactly the earliest-expiring ones.
    #[test]
    fn prop_sweep_restores_capacity(
        ttls in prop::collection::hash_map(key_strategy(), 1u64..10_000, 1..40),
        max_count in 0usize..20
    ) {
        let mut store = CacheStore::new(max_count, TEST_DEFAULT_TTL);
        for (key, ttl) in &ttls {
            store.set("test", key, *ttl, Some(Duration::from_millis(*ttl)), NOW);
        }

        let events = store.sweep(NOW);

        prop_assert!(store.size(Some("test")) <= max_count);
        let surplus = ttls.len().saturating_sub(max_count);
        prop_assert_eq!(events.len(), surplus);

        let evicted: HashSet<&str> = events
            .iter()
            .map(|event| match event {
                CacheEvent::Overflow { key, .. } => key.as_str(),
                other => panic!("unexpected event {:?}", other),
            })
            .collect();
        let survivor_min = ttls
            .iter()
            .filter(|(key, _)| !evicted.contains(key.as_str()))
            .map(|(_, ttl)| *ttl)
            .min();
        let evicted_max = ttls
            .iter()
            .filter(|(key, _)| evicted.contains(key.as_str()))
            .map(|(_, ttl)| *ttl)
            .max();
        if let (Some(evicted_max), Some(survivor_min)) = (evicted_max, survivor_min) {
            prop_assert!(evicted_max <= survivor_min);
        }
    }

    // Every entry set with a TTL is reported gone exactly once: either by a
    // read (lazy expiry) or by the sweep, never both.
    #[test]
    fn prop_expiry_reported_once(
        keys in prop::collection::hash_set(key_strategy(), 1..30),
        read_mask in prop::collection::vec(any::<bool>(), 30)
    ) {
        let mut store = CacheStore::new(TEST_MAX_COUNT, TEST_DEFAULT_TTL);
        for key in &keys {
            store.set("test", key, key.clone(), Some(Duration::from_millis(100)), NOW);
        }

        let later = NOW + 101;
        let mut lazily_removed = HashSet::new();
        for (key, read) in keys.iter().zip(read_mask) {
            if read {
                prop_assert_eq!(store.get("test", key, later), Lookup::Expired);
                lazily_removed.insert(key.clone());
            }
        }

        let swept: HashSet<String> = store
            .sweep(later)
            .into_iter()
            .filter_map(|event| match event {
                CacheEvent::Expired { key, .. } => Some(key),
                _ => None,
            })
            .collect();

        prop_assert!(swept.is_disjoint(&lazily_removed));
        prop_assert_eq!(swept.len() + lazily_removed.len(), keys.len());
        prop_assert_eq!(store.size(None), 0);
    }
}
