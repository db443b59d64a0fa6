//! Events Module
//!
//! Notifications for cache state transitions and the listener registry that
//! delivers them.
//!
//! # Events
//! - `status` - Sweeper lifecycle (`init`, `reinit`, `kill`)
//! - `set` - A value was stored
//! - `delete` - Explicit delete, or an expired entry found by a read
//! - `expired` - The sweeper removed an expired entry
//! - `overflow` - The sweeper evicted an entry over the namespace capacity
//! - `clear` / `clear-all` - Namespace or whole-cache clear

mod event;
mod listeners;

pub use event::{CacheEvent, EventKind, Status};
pub use listeners::{EventBus, Listener, ListenerId};
