//! Tuning knobs for the adaptive limiter.

use congress_error::SdkError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Adaptive limiter settings.
///
/// Immutable once handed to a limiter. Deserialises from the `[rate_limit]`
/// table of `congress_gov.toml`; missing keys take their defaults.
///
/// ```toml
/// [rate_limit]
/// safety_margin = 0.1
/// min_delay_ms = 50
/// max_delay_ms = 30000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(build_fn(private, name = "build_internal"))]
#[serde(default)]
pub struct LimiterConfig {
    /// Fraction of the hourly ceiling held back as a buffer
    #[builder(default = "LimiterConfig::DEFAULT_SAFETY_MARGIN")]
    pub safety_margin: f64,
    /// Shortest spacing between request starts, in milliseconds
    #[builder(default = "LimiterConfig::DEFAULT_MIN_DELAY_MS")]
    pub min_delay_ms: u64,
    /// Spacing used once the buffer is breached, in milliseconds
    #[builder(default = "LimiterConfig::DEFAULT_MAX_DELAY_MS")]
    pub max_delay_ms: u64,
}

impl LimiterConfig {
    /// Default safety margin.
    pub const DEFAULT_SAFETY_MARGIN: f64 = 0.1;
    /// Default minimum delay in milliseconds.
    pub const DEFAULT_MIN_DELAY_MS: u64 = 50;
    /// Default maximum delay in milliseconds.
    pub const DEFAULT_MAX_DELAY_MS: u64 = 30_000;

    /// Start building a config from the defaults.
    pub fn builder() -> LimiterConfigBuilder {
        LimiterConfigBuilder::default()
    }

    /// Minimum delay as a [`Duration`].
    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    /// Maximum delay as a [`Duration`].
    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// Check that the margin lies in `[0, 1]` and the delays are ordered.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError`] describing the first violated constraint.
    ///
    /// ```
    /// use congress_rate_limit::LimiterConfig;
    ///
    /// assert!(LimiterConfig::default().validate().is_ok());
    ///
    /// let inverted = LimiterConfig::builder().min_delay_ms(500).max_delay_ms(100).build();
    /// assert!(inverted.validate().is_err());
    /// ```
    #[track_caller]
    pub fn validate(&self) -> Result<(), SdkError> {
        if !(0.0..=1.0).contains(&self.safety_margin) {
            return Err(SdkError::new(format!(
                "safety_margin must be within [0, 1], got {}",
                self.safety_margin
            )));
        }
        if self.max_delay_ms < self.min_delay_ms {
            return Err(SdkError::new(format!(
                "max_delay_ms ({}) must not be below min_delay_ms ({})",
                self.max_delay_ms, self.min_delay_ms
            )));
        }
        Ok(())
    }
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            safety_margin: Self::DEFAULT_SAFETY_MARGIN,
            min_delay_ms: Self::DEFAULT_MIN_DELAY_MS,
            max_delay_ms: Self::DEFAULT_MAX_DELAY_MS,
        }
    }
}

impl LimiterConfigBuilder {
    /// Build the config. Unset fields keep their defaults.
    ///
    /// Range checks are left to [`LimiterConfig::validate`].
    pub fn build(&self) -> LimiterConfig {
        self.build_internal().unwrap_or_default()
    }
}
