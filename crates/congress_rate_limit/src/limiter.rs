//! Request pacing driven by server-reported quota.

use crate::LimiterConfig;
use async_trait::async_trait;
use congress_core::RateLimitInfo;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, instrument, trace, warn};

/// Length of the server's quota window.
pub const HOUR: Duration = Duration::from_secs(3600);

/// Floor on the time left in the window, so the per-call spacing stays finite
/// right at the boundary.
const MIN_TIME_REMAINING: Duration = Duration::from_millis(100);

/// Gate consulted by the request pipeline before every outbound call.
///
/// Implementations are shared by every clone of a client, so both methods
/// take `&self` and must tolerate concurrent callers.
#[async_trait]
pub trait RateLimiter: Send + Sync + std::fmt::Debug {
    /// Suspend until the next request may start.
    async fn wait_for_next_request(&self);

    /// Feed back the quota snapshot read from the latest response.
    fn update_rate_limit_info(&self, info: RateLimitInfo);
}

/// Limiter that never waits and ignores feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRateLimiter;

#[async_trait]
impl RateLimiter for NoopRateLimiter {
    async fn wait_for_next_request(&self) {}

    fn update_rate_limit_info(&self, _info: RateLimitInfo) {}
}

#[derive(Debug)]
struct LimiterState {
    hour_start: Instant,
    /// Start of the most recent request, or `None` before the first one.
    last_request: Option<Instant>,
    current_delay: Duration,
    last_info: Option<RateLimitInfo>,
}

impl LimiterState {
    /// Re-arm the window once a full hour has passed since it opened.
    fn roll_window(&mut self, now: Instant, config: &LimiterConfig) {
        if now.saturating_duration_since(self.hour_start) >= HOUR {
            debug!("Quota window elapsed, resetting delay to minimum");
            self.hour_start = now;
            self.current_delay = config.min_delay();
        }
    }
}

/// Spaces request starts according to how much of the hourly quota is left.
///
/// After each response the limiter computes
///
/// ```text
/// delay = (time left in hour / remaining) * (1 - remaining / limit)
/// ```
///
/// clamped to `[min_delay, max_delay]`. When `remaining` is at or below
/// `floor(limit * safety_margin)` the delay is `max_delay`; negative or zero
/// `remaining` and a non-positive `limit` land there too.
///
/// The window is a fixed one-hour span re-armed from the moment it was
/// opened, not a sliding window.
#[derive(Debug)]
pub struct AdaptiveRateLimiter {
    config: LimiterConfig,
    state: Mutex<LimiterState>,
}

impl AdaptiveRateLimiter {
    /// Create a limiter whose window opens now.
    pub fn new(config: LimiterConfig) -> Self {
        Self {
            state: Mutex::new(LimiterState {
                hour_start: Instant::now(),
                last_request: None,
                current_delay: config.min_delay(),
                last_info: None,
            }),
            config,
        }
    }

    /// Settings this limiter was built with.
    pub fn config(&self) -> &LimiterConfig {
        &self.config
    }

    /// Spacing currently enforced between request starts.
    pub fn current_delay(&self) -> Duration {
        self.state().current_delay
    }

    /// Most recent quota snapshot, if any response has been seen.
    pub fn last_rate_limit(&self) -> Option<RateLimitInfo> {
        self.state().last_info
    }

    fn state(&self) -> MutexGuard<'_, LimiterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Delay for `info`, given how far into the window `elapsed` is.
    fn calculate_delay(&self, info: RateLimitInfo, elapsed: Duration) -> Duration {
        let time_remaining = HOUR.saturating_sub(elapsed).max(MIN_TIME_REMAINING);
        let safe_remaining = (info.limit as f64 * self.config.safety_margin).floor() as i64;

        if info.limit <= 0 || info.remaining <= safe_remaining {
            warn!(
                limit = info.limit,
                remaining = info.remaining,
                safe_remaining,
                "Quota at or below safety margin, throttling maximally"
            );
            return self.config.max_delay();
        }

        let optimal_ms = time_remaining.as_secs_f64() * 1000.0 / info.remaining as f64;
        let utilization = info.utilization();
        let adaptive_ms = optimal_ms * utilization;
        trace!(optimal_ms, utilization, adaptive_ms, "Computed adaptive delay");

        let min_ms = self.config.min_delay_ms as f64;
        let max_ms = self.config.max_delay_ms as f64;
        if adaptive_ms <= min_ms {
            self.config.min_delay()
        } else if adaptive_ms >= max_ms {
            self.config.max_delay()
        } else {
            Duration::from_micros((adaptive_ms * 1000.0).round() as u64)
        }
    }
}

impl Default for AdaptiveRateLimiter {
    fn default() -> Self {
        Self::new(LimiterConfig::default())
    }
}

#[async_trait]
impl RateLimiter for AdaptiveRateLimiter {
    #[instrument(skip(self))]
    async fn wait_for_next_request(&self) {
        let wait = {
            let mut state = self.state();
            let now = Instant::now();
            state.roll_window(now, &self.config);

            let wait = match state.last_request {
                Some(last) => (last + state.current_delay).saturating_duration_since(now),
                None => Duration::ZERO,
            };
            // Claim the slot before sleeping so concurrent callers queue behind it.
            state.last_request = Some(now + wait);
            wait
        };

        if !wait.is_zero() {
            debug!(wait_ms = wait.as_millis() as u64, "Pacing request");
            tokio::time::sleep(wait).await;
        }
    }

    #[instrument(skip(self), fields(limit = info.limit, remaining = info.remaining))]
    fn update_rate_limit_info(&self, info: RateLimitInfo) {
        let mut state = self.state();
        let now = Instant::now();
        state.roll_window(now, &self.config);

        let elapsed = now.saturating_duration_since(state.hour_start);
        state.current_delay = self.calculate_delay(info, elapsed);
        state.last_request = Some(now);
        state.last_info = Some(info);
        debug!(
            delay_ms = state.current_delay.as_millis() as u64,
            "Updated request spacing"
        );
    }
}
