//! Timing behaviour of the adaptive limiter under tokio's paused clock.

use congress_core::RateLimitInfo;
use congress_rate_limit::{
    AdaptiveRateLimiter, HOUR, LimiterConfig, NoopRateLimiter, RateLimiter,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Time spent inside one `wait_for_next_request` call.
async fn timed_wait(limiter: &dyn RateLimiter) -> Duration {
    let start = Instant::now();
    limiter.wait_for_next_request().await;
    start.elapsed()
}

#[tokio::test(start_paused = true)]
async fn test_first_request_does_not_wait() {
    let limiter = AdaptiveRateLimiter::default();
    assert_eq!(timed_wait(&limiter).await, Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_back_to_back_requests_are_spaced_by_current_delay() {
    let limiter = AdaptiveRateLimiter::default();
    limiter.wait_for_next_request().await;

    assert_eq!(timed_wait(&limiter).await, Duration::from_millis(50));
    assert_eq!(timed_wait(&limiter).await, Duration::from_millis(50));
}

#[tokio::test(start_paused = true)]
async fn test_elapsed_time_counts_toward_spacing() {
    let limiter = AdaptiveRateLimiter::default();
    limiter.update_rate_limit_info(RateLimitInfo::new(1000, 800));
    assert_eq!(limiter.current_delay(), Duration::from_millis(900));

    tokio::time::advance(Duration::from_millis(600)).await;
    assert_eq!(timed_wait(&limiter).await, Duration::from_millis(300));

    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(timed_wait(&limiter).await, Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_margin_breach_waits_max_delay() {
    let limiter = AdaptiveRateLimiter::default();

    limiter.update_rate_limit_info(RateLimitInfo::new(1000, 50));
    assert_eq!(timed_wait(&limiter).await, Duration::from_millis(30_000));

    limiter.update_rate_limit_info(RateLimitInfo::new(1000, 0));
    assert_eq!(timed_wait(&limiter).await, Duration::from_millis(30_000));
}

#[tokio::test(start_paused = true)]
async fn test_fresh_quota_waits_min_delay() {
    let limiter = AdaptiveRateLimiter::default();
    limiter.update_rate_limit_info(RateLimitInfo::new(1000, 999));
    assert_eq!(timed_wait(&limiter).await, Duration::from_millis(50));
}

#[tokio::test(start_paused = true)]
async fn test_delay_grows_as_quota_depletes() {
    let limiter = AdaptiveRateLimiter::default();
    let mut delays = Vec::new();
    for remaining in [800, 600, 400, 200] {
        limiter.update_rate_limit_info(RateLimitInfo::new(1000, remaining));
        delays.push(limiter.current_delay());
    }

    assert!(delays.windows(2).all(|w| w[0] <= w[1]), "{delays:?}");
    assert!(delays[3] > delays[0]);
}

#[tokio::test(start_paused = true)]
async fn test_window_reset_restores_min_delay() {
    let limiter = AdaptiveRateLimiter::default();
    limiter.update_rate_limit_info(RateLimitInfo::new(1000, 0));
    assert_eq!(limiter.current_delay(), Duration::from_millis(30_000));

    tokio::time::advance(HOUR).await;
    assert_eq!(timed_wait(&limiter).await, Duration::ZERO);
    assert_eq!(limiter.current_delay(), Duration::from_millis(50));
    assert_eq!(timed_wait(&limiter).await, Duration::from_millis(50));
}

#[tokio::test(start_paused = true)]
async fn test_window_does_not_reset_early() {
    let limiter = AdaptiveRateLimiter::default();
    limiter.update_rate_limit_info(RateLimitInfo::new(1000, 0));

    tokio::time::advance(HOUR - Duration::from_secs(1)).await;
    limiter.update_rate_limit_info(RateLimitInfo::new(1000, 0));
    assert_eq!(limiter.current_delay(), Duration::from_millis(30_000));
}

#[tokio::test(start_paused = true)]
async fn test_update_late_in_window_uses_less_time() {
    let early = AdaptiveRateLimiter::default();
    early.update_rate_limit_info(RateLimitInfo::new(1000, 200));

    let late = AdaptiveRateLimiter::default();
    tokio::time::advance(Duration::from_secs(1800)).await;
    late.update_rate_limit_info(RateLimitInfo::new(1000, 200));

    assert_eq!(early.current_delay(), Duration::from_millis(14_400));
    assert_eq!(late.current_delay(), Duration::from_millis(7_200));
}

#[tokio::test(start_paused = true)]
async fn test_last_rate_limit_is_recorded() {
    let limiter = AdaptiveRateLimiter::default();
    assert_eq!(limiter.last_rate_limit(), None);

    limiter.update_rate_limit_info(RateLimitInfo::new(5000, 4413));
    assert_eq!(limiter.last_rate_limit(), Some(RateLimitInfo::new(5000, 4413)));
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_callers_each_respect_spacing() {
    let limiter = Arc::new(AdaptiveRateLimiter::new(
        LimiterConfig::builder().min_delay_ms(100).build(),
    ));
    limiter.wait_for_next_request().await;
    let start = Instant::now();

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let limiter = Arc::clone(&limiter);
            tokio::spawn(async move {
                limiter.wait_for_next_request().await;
                Instant::now()
            })
        })
        .collect();

    let mut finished = Vec::new();
    for handle in handles {
        finished.push(handle.await.unwrap().duration_since(start));
    }
    finished.sort();

    assert_eq!(
        finished,
        vec![
            Duration::from_millis(100),
            Duration::from_millis(200),
            Duration::from_millis(300),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_noop_limiter_never_waits() {
    let limiter = NoopRateLimiter;
    limiter.update_rate_limit_info(RateLimitInfo::new(1000, 0));
    assert_eq!(timed_wait(&limiter).await, Duration::ZERO);
    assert_eq!(timed_wait(&limiter).await, Duration::ZERO);
}
