//! Quota snapshot reported by the server.

use serde::{Deserialize, Serialize};

/// Latest quota ceiling and remaining calls, parsed from response headers.
///
/// `remaining` is signed: the server has been observed to report negative
/// values when something goes wrong on its side, and the limiter treats that
/// as a reason to throttle rather than as a parse failure.
///
/// # Examples
///
/// ```
/// use congress_core::RateLimitInfo;
///
/// let info = RateLimitInfo::new(5000, 4413);
/// assert_eq!(info.limit, 5000);
/// assert_eq!(info.remaining, 4413);
/// assert_eq!(RateLimitInfo::default(), RateLimitInfo::new(0, 0));
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}/{} remaining", remaining, limit)]
pub struct RateLimitInfo {
    /// Requests allowed per hour
    pub limit: i64,
    /// Requests left in the current hour
    pub remaining: i64,
}

impl RateLimitInfo {
    /// Create a quota snapshot.
    pub fn new(limit: i64, remaining: i64) -> Self {
        Self { limit, remaining }
    }

    /// Fraction of the quota already used, in `[0, 1]` for plausible input.
    ///
    /// Returns `1.0` when `limit` is not positive.
    pub fn utilization(&self) -> f64 {
        if self.limit <= 0 {
            return 1.0;
        }
        1.0 - self.remaining as f64 / self.limit as f64
    }
}
