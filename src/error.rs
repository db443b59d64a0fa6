//! Error types for the cache
//!
//! Misses and absent keys are ordinary return values. Only setup failures
//! surface as errors.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Configuration values that cannot drive a sweeper
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The sweep task needs a tokio runtime to be spawned on
    #[error("No tokio runtime available to run the sweep task")]
    NoRuntime,
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
