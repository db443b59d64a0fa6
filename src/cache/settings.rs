//! Namespace Settings Module
//!
//! Per-namespace overrides for capacity and default TTL. These live in their
//! own table so clearing or sweeping a namespace never loses them.

use std::collections::HashMap;
use std::time::Duration;

/// Overrides configured for one namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamespaceSettings {
    pub max_count: Option<usize>,
    pub default_ttl: Option<Duration>,
}

// == Settings Table ==
/// Global defaults plus the per-namespace override table.
#[derive(Debug, Clone)]
pub struct SettingsTable {
    max_count: usize,
    default_ttl: Duration,
    overrides: HashMap<String, NamespaceSettings>,
}

impl SettingsTable {
    pub fn new(max_count: usize, default_ttl: Duration) -> Self {
        Self {
            max_count,
            default_ttl,
            overrides: HashMap::new(),
        }
    }

    /// Replaces the global defaults. Namespace overrides are kept.
    pub fn set_defaults(&mut self, max_count: usize, default_ttl: Duration) {
        self.max_count = max_count;
        self.default_ttl = default_ttl;
    }

    /// Capacity for `namespace`, falling back to the global default.
    pub fn max_count(&self, namespace: &str) -> usize {
        self.overrides
            .get(namespace)
            .and_then(|s| s.max_count)
            .unwrap_or(self.max_count)
    }

    /// Default TTL for `namespace`, falling back to the global default.
    pub fn ttl(&self, namespace: &str) -> Duration {
        self.overrides
            .get(namespace)
            .and_then(|s| s.default_ttl)
            .unwrap_or(self.default_ttl)
    }

    pub fn set_max_count(&mut self, namespace: &str, max_count: usize) {
        self.entry(namespace).max_count = Some(max_count);
    }

    pub fn set_ttl(&mut self, namespace: &str, ttl: Duration) {
        self.entry(namespace).default_ttl = Some(ttl);
    }

    /// Raw overrides for `namespace`, if any were ever configured.
    pub fn overrides(&self, namespace: &str) -> Option<NamespaceSettings> {
        self.overrides.get(namespace).copied()
    }

    fn entry(&mut self, namespace: &str) -> &mut NamespaceSettings {
        self.overrides.entry(namespace.to_string()).or_default()
    }
}
