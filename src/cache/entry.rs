//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with an absolute expiry.

use std::time::Duration;

use chrono::Utc;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: i64,
    /// Insertion sequence, breaks ties between equal expiry timestamps
    pub seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` after `now`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Time to live, measured from `now`
    /// * `now` - Current Unix timestamp in milliseconds
    /// * `seq` - Store-wide insertion counter
    pub fn new(value: V, ttl: Duration, now: i64, seq: u64) -> Self {
        Self {
            value,
            expires_at: now.saturating_add(duration_to_ms(ttl)),
            seq,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// An entry is still valid at the exact millisecond it expires; it is
    /// expired only once `now` has moved past `expires_at`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at < now
    }

    // == Time To Live ==
    /// Returns the remaining TTL, or zero once the entry has expired.
    pub fn ttl_remaining_at(&self, now: i64) -> Duration {
        let remaining = self.expires_at.saturating_sub(now);
        Duration::from_millis(u64::try_from(remaining).unwrap_or(0))
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Converts a duration to whole milliseconds, saturating at `i64::MAX`.
pub fn duration_to_ms(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value", Duration::from_secs(60), 1_000, 0);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.expires_at, 61_000);
        assert!(!entry.is_expired_at(1_000));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("test", Duration::from_millis(100), 5_000, 0);

        // Still valid at the expiry instant, expired one millisecond later
        assert!(!entry.is_expired_at(5_100));
        assert!(entry.is_expired_at(5_101));
    }

    #[test]
    fn test_zero_ttl_valid_at_creation() {
        let entry = CacheEntry::new("test", Duration::ZERO, 5_000, 0);
        assert!(!entry.is_expired_at(5_000));
        assert!(entry.is_expired_at(5_001));
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new("test", Duration::from_secs(10), 0, 0);

        assert_eq!(entry.ttl_remaining_at(0), Duration::from_secs(10));
        assert_eq!(entry.ttl_remaining_at(9_500), Duration::from_millis(500));
        assert_eq!(entry.ttl_remaining_at(20_000), Duration::ZERO);
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let entry = CacheEntry::new((), Duration::MAX, current_timestamp_ms(), 0);
        assert_eq!(entry.expires_at, i64::MAX);
        assert!(!entry.is_expired_at(current_timestamp_ms()));
    }
}
