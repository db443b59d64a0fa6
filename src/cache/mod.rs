//! Cache Module
//!
//! Provides namespaced in-memory caching with TTL expiration and periodic
//! capacity sweeping.

mod entry;
mod handle;
mod settings;
mod stats;
mod store;
mod sweep;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, duration_to_ms, CacheEntry};
pub use handle::{InMemCache, SweeperStatus};
pub use settings::{NamespaceSettings, SettingsTable};
pub use stats::CacheStats;
pub use store::{CacheStore, Lookup};
