//! Cache event payloads.

use std::fmt;

// == Status ==
/// Sweeper lifecycle transition carried by the `status` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// A sweep task was started
    Init,
    /// `init` was called while a task was already running
    Reinit,
    /// The sweep task was stopped
    Kill,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Init => "init",
            Status::Reinit => "reinit",
            Status::Kill => "kill",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Event Kind ==
/// Names of the built-in events, usable wherever a listener name is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Status,
    Set,
    Delete,
    Expired,
    Overflow,
    Clear,
    ClearAll,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Status => "status",
            EventKind::Set => "set",
            EventKind::Delete => "delete",
            EventKind::Expired => "expired",
            EventKind::Overflow => "overflow",
            EventKind::Clear => "clear",
            EventKind::ClearAll => "clear-all",
        }
    }
}

impl AsRef<str> for EventKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Cache Event ==
/// A notification emitted by the cache.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheEvent<V> {
    Status(Status),
    Set {
        namespace: String,
        key: String,
        value: V,
    },
    Delete {
        namespace: String,
        key: String,
    },
    Expired {
        namespace: String,
        key: String,
    },
    Overflow {
        namespace: String,
        key: String,
    },
    Clear {
        namespace: String,
    },
    ClearAll,
    /// Caller-defined event emitted through `emit`
    Custom {
        name: String,
        payload: serde_json::Value,
    },
}

impl<V> CacheEvent<V> {
    /// Builds a caller-defined event.
    pub fn custom(name: impl Into<String>, payload: serde_json::Value) -> Self {
        CacheEvent::Custom {
            name: name.into(),
            payload,
        }
    }

    /// Name listeners subscribe under.
    pub fn name(&self) -> &str {
        match self {
            CacheEvent::Status(_) => EventKind::Status.as_str(),
            CacheEvent::Set { .. } => EventKind::Set.as_str(),
            CacheEvent::Delete { .. } => EventKind::Delete.as_str(),
            CacheEvent::Expired { .. } => EventKind::Expired.as_str(),
            CacheEvent::Overflow { .. } => EventKind::Overflow.as_str(),
            CacheEvent::Clear { .. } => EventKind::Clear.as_str(),
            CacheEvent::ClearAll => EventKind::ClearAll.as_str(),
            CacheEvent::Custom { name, .. } => name.as_str(),
        }
    }

    /// `(namespace, key)` for the per-entry events.
    pub fn entry_key(&self) -> Option<(&str, &str)> {
        match self {
            CacheEvent::Set { namespace, key, .. }
            | CacheEvent::Delete { namespace, key }
            | CacheEvent::Expired { namespace, key }
            | CacheEvent::Overflow { namespace, key } => Some((namespace.as_str(), key.as_str())),
            _ => None,
        }
    }
}
