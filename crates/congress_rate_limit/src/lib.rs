//! Quota-aware request pacing for the congress.gov API.
//!
//! The API grants each key a fixed number of calls per hour and reports the
//! ceiling and the calls left on every response. [`AdaptiveRateLimiter`]
//! turns those two numbers into a delay between request starts: negligible
//! while the quota is fresh, growing as it depletes, and pinned at the
//! configured maximum once the remaining calls fall inside the safety margin.
//!
//! The request pipeline talks to a limiter only through the [`RateLimiter`]
//! trait. When pacing is disabled it holds a [`NoopRateLimiter`] instead of
//! branching on an `Option`.
//!
//! ```
//! use congress_core::RateLimitInfo;
//! use congress_rate_limit::{AdaptiveRateLimiter, LimiterConfig, RateLimiter};
//! use std::time::Duration;
//!
//! let limiter = AdaptiveRateLimiter::new(LimiterConfig::default());
//! limiter.update_rate_limit_info(RateLimitInfo::new(1000, 50));
//! assert_eq!(limiter.current_delay(), Duration::from_millis(30_000));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod detector;
mod limiter;

pub use config::{LimiterConfig, LimiterConfigBuilder};
pub use detector::{HeaderRateLimitDetector, RATE_LIMIT_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER};
pub use limiter::{AdaptiveRateLimiter, HOUR, NoopRateLimiter, RateLimiter};
