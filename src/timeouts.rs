//! Named TTL durations
//!
//! Convenience constants for common time-to-live values. A month is a
//! twelfth of a 365-day year.

use std::time::Duration;

pub const TIMEOUT_1S: Duration = Duration::from_millis(1_000);
pub const TIMEOUT_2S: Duration = Duration::from_millis(2_000);
pub const TIMEOUT_5S: Duration = Duration::from_millis(5_000);
pub const TIMEOUT_10S: Duration = Duration::from_millis(10_000);
pub const TIMEOUT_15S: Duration = Duration::from_millis(15_000);
pub const TIMEOUT_30S: Duration = Duration::from_millis(30_000);
pub const TIMEOUT_1M: Duration = Duration::from_millis(60_000);
pub const TIMEOUT_2M: Duration = Duration::from_millis(120_000);
pub const TIMEOUT_5M: Duration = Duration::from_millis(300_000);
pub const TIMEOUT_10M: Duration = Duration::from_millis(600_000);
pub const TIMEOUT_15M: Duration = Duration::from_millis(900_000);
pub const TIMEOUT_30M: Duration = Duration::from_millis(1_800_000);
pub const TIMEOUT_1H: Duration = Duration::from_millis(3_600_000);
pub const TIMEOUT_2H: Duration = Duration::from_millis(7_200_000);
pub const TIMEOUT_3H: Duration = Duration::from_millis(10_800_000);
pub const TIMEOUT_6H: Duration = Duration::from_millis(21_600_000);
pub const TIMEOUT_12H: Duration = Duration::from_millis(43_200_000);
pub const TIMEOUT_24H: Duration = Duration::from_millis(86_400_000);
pub const TIMEOUT_1_DAY: Duration = TIMEOUT_24H;
pub const TIMEOUT_2_DAYS: Duration = Duration::from_millis(172_800_000);
pub const TIMEOUT_3_DAYS: Duration = Duration::from_millis(259_200_000);
pub const TIMEOUT_1_WEEK: Duration = Duration::from_millis(604_800_000);
pub const TIMEOUT_1_MONTH: Duration = Duration::from_millis(2_628_000_000);
pub const TIMEOUT_2_MONTHS: Duration = Duration::from_millis(5_256_000_000);
pub const TIMEOUT_3_MONTHS: Duration = Duration::from_millis(7_884_000_000);
pub const TIMEOUT_6_MONTHS: Duration = Duration::from_millis(15_768_000_000);
pub const TIMEOUT_1_YEAR: Duration = Duration::from_millis(31_536_000_000);

/// Builds a TTL out of day, hour, minute and second components.
pub fn calc_timeout(days: u64, hours: u64, minutes: u64, seconds: u64) -> Duration {
    let secs = days
        .saturating_mul(TIMEOUT_1_DAY.as_secs())
        .saturating_add(hours.saturating_mul(TIMEOUT_1H.as_secs()))
        .saturating_add(minutes.saturating_mul(TIMEOUT_1M.as_secs()))
        .saturating_add(seconds);
    Duration::from_secs(secs)
}
