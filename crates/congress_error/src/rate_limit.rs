//! Quota exhaustion error types.

use congress_core::RateLimitInfo;

/// The server answered 429 Too Many Requests.
///
/// Carries the quota headers of the rejected response so the caller can
/// decide how long to back off. The limiter has already been fed the same
/// snapshot by the time this error is returned.
///
/// # Examples
///
/// ```
/// use congress_core::RateLimitInfo;
/// use congress_error::RateLimitExceededError;
///
/// let err = RateLimitExceededError::new(RateLimitInfo::new(5000, 0));
/// assert_eq!(err.status_code, 429);
/// assert_eq!(err.rate_limit.remaining, 0);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Rate Limit Exceeded: {} (HTTP {}) at line {} in {}",
    rate_limit,
    status_code,
    line,
    file
)]
pub struct RateLimitExceededError {
    /// HTTP status, always 429
    pub status_code: u16,
    /// Quota reported alongside the rejection
    pub rate_limit: RateLimitInfo,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl RateLimitExceededError {
    /// Status code the server uses to signal throttling.
    pub const STATUS: u16 = 429;

    /// Create a new RateLimitExceededError at the current location.
    #[track_caller]
    pub fn new(rate_limit: RateLimitInfo) -> Self {
        let location = std::panic::Location::caller();
        Self {
            status_code: Self::STATUS,
            rate_limit,
            line: location.line(),
            file: location.file(),
        }
    }
}
