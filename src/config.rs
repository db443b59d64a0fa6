//! Configuration Module
//!
//! Handles loading and validating cache configuration.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

/// Default capacity bound per namespace
pub const DEFAULT_MAX_COUNT: usize = 100;
/// Default sweep cadence in milliseconds
pub const DEFAULT_CLEANUP_INTERVAL_MS: u64 = 1000;
/// Default entry TTL in milliseconds (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 300_000;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of entries a namespace keeps after a sweep
    pub max_count: usize,
    /// Sweep interval in milliseconds
    pub cleanup_interval_ms: u64,
    /// TTL in milliseconds for entries set without an explicit TTL
    pub default_ttl_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_COUNT` - Per-namespace capacity (default: 100)
    /// - `CACHE_CLEANUP_INTERVAL_MS` - Sweep frequency in ms (default: 1000)
    /// - `CACHE_DEFAULT_TTL_MS` - Default TTL in ms (default: 300000)
    pub fn from_env() -> Self {
        Self {
            max_count: env::var("CACHE_MAX_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_COUNT),
            cleanup_interval_ms: env::var("CACHE_CLEANUP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CLEANUP_INTERVAL_MS),
            default_ttl_ms: env::var("CACHE_DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_MS),
        }
    }

    /// Shorthand for the three knobs `init` accepts.
    pub fn new(max_count: usize, cleanup_interval_ms: u64, default_ttl_ms: u64) -> Self {
        Self {
            max_count,
            cleanup_interval_ms,
            default_ttl_ms,
        }
    }

    /// Rejects settings a sweeper cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.cleanup_interval_ms == 0 {
            return Err(CacheError::InvalidConfig(
                "cleanup_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_millis(self.cleanup_interval_ms)
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
            cleanup_interval_ms: DEFAULT_CLEANUP_INTERVAL_MS,
            default_ttl_ms: DEFAULT_TTL_MS,
        }
    }
}
