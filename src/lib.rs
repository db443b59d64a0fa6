//! InMem Cache - A namespaced in-process cache
//!
//! Provides per-entry TTL expiry, per-namespace capacity bounds enforced by a
//! background sweeper, and an event stream for every state transition.

pub mod cache;
pub mod config;
pub mod error;
pub mod events;
pub mod tasks;
pub mod timeouts;

pub use cache::{CacheStats, InMemCache, SweeperStatus};
pub use config::Config;
pub use error::{CacheError, Result};
pub use events::{CacheEvent, EventKind, ListenerId, Status};
