//! Top-level error wrapper types.

use congress_core::RateLimitInfo;

use crate::{ApiError, ConfigError, HttpError, JsonError, RateLimitExceededError, SdkError};

/// Every failure the client can report.
///
/// # Examples
///
/// ```
/// use congress_error::{CongressError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: CongressError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CongressErrorKind {
    /// Client could not be configured
    #[from(ConfigError)]
    Config(ConfigError),
    /// Library used outside its contract
    #[from(SdkError)]
    Sdk(SdkError),
    /// Server throttled the request (HTTP 429)
    #[from(RateLimitExceededError)]
    RateLimit(RateLimitExceededError),
    /// Server rejected the request (non-2xx other than 429)
    #[from(ApiError)]
    Api(ApiError),
    /// Transport failure
    #[from(HttpError)]
    Http(HttpError),
    /// Response body could not be decoded
    #[from(JsonError)]
    Json(JsonError),
}

/// Congress.gov client error with kind discrimination.
///
/// # Examples
///
/// ```
/// use congress_core::RateLimitInfo;
/// use congress_error::{CongressError, CongressErrorKind, RateLimitExceededError};
///
/// let err: CongressError = RateLimitExceededError::new(RateLimitInfo::new(5000, 0)).into();
/// assert_eq!(err.status_code(), Some(429));
/// assert!(matches!(err.kind(), CongressErrorKind::RateLimit(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Congress.gov Error: {}", _0)]
pub struct CongressError(Box<CongressErrorKind>);

impl CongressError {
    /// Create a new error from a kind.
    pub fn new(kind: CongressErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CongressErrorKind {
        &self.0
    }

    /// Consume the wrapper and return the kind.
    pub fn into_kind(self) -> CongressErrorKind {
        *self.0
    }

    /// HTTP status of the response that caused the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self.kind() {
            CongressErrorKind::RateLimit(e) => Some(e.status_code),
            CongressErrorKind::Api(e) => Some(e.status_code),
            _ => None,
        }
    }

    /// Quota snapshot attached to a 429 rejection.
    pub fn rate_limit(&self) -> Option<RateLimitInfo> {
        match self.kind() {
            CongressErrorKind::RateLimit(e) => Some(e.rate_limit),
            _ => None,
        }
    }

    /// Whether the server throttled the request.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.kind(), CongressErrorKind::RateLimit(_))
    }
}

// Generic From implementation for any type that converts to CongressErrorKind
impl<T> From<T> for CongressError
where
    T: Into<CongressErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for congress.gov operations.
pub type CongressResult<T> = Result<T, CongressError>;
