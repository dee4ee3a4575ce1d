//! Extraction of quota information from response headers.
//!
//! The API reports the hourly ceiling and the calls left on every response,
//! successful or not. Missing or unparsable headers read as `0`, which the
//! adaptive limiter treats as an exhausted quota.

use congress_core::RateLimitInfo;
use reqwest::header::HeaderMap;
use tracing::{debug, instrument};

/// Header carrying the hourly request ceiling.
pub const RATE_LIMIT_LIMIT_HEADER: &str = "x-ratelimit-limit";

/// Header carrying the requests left in the current hour.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Reads [`RateLimitInfo`] from response headers.
///
/// # Example
///
/// ```
/// use congress_core::RateLimitInfo;
/// use congress_rate_limit::HeaderRateLimitDetector;
/// use reqwest::header::{HeaderMap, HeaderValue};
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-ratelimit-limit", HeaderValue::from_static("5000"));
/// headers.insert("x-ratelimit-remaining", HeaderValue::from_static("4413"));
///
/// let detector = HeaderRateLimitDetector::new();
/// assert_eq!(detector.detect(&headers), RateLimitInfo::new(5000, 4413));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderRateLimitDetector;

impl HeaderRateLimitDetector {
    /// Detector for the standard `x-ratelimit-*` headers.
    pub fn new() -> Self {
        Self
    }

    /// Parse the quota snapshot, defaulting each missing value to `0`.
    #[instrument(skip(self, headers))]
    pub fn detect(&self, headers: &HeaderMap) -> RateLimitInfo {
        let limit = parse_header_i64(headers, RATE_LIMIT_LIMIT_HEADER);
        let remaining = parse_header_i64(headers, RATE_LIMIT_REMAINING_HEADER);
        debug!(?limit, ?remaining, "Read quota headers");

        RateLimitInfo::new(limit.unwrap_or(0), remaining.unwrap_or(0))
    }
}

/// Helper to parse i64 from header value.
fn parse_header_i64(headers: &HeaderMap, key: &str) -> Option<i64> {
    headers.get(key)?.to_str().ok()?.trim().parse().ok()
}
