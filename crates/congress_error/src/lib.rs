//! Error types for the congress.gov API client.
//!
//! # Error Hierarchy
//!
//! All errors follow the concrete struct + umbrella kind pattern:
//! - Each condition has its own struct carrying the data a caller needs
//!   (status code, quota snapshot, response body)
//! - Each struct records the source location where it was raised via `#[track_caller]`
//! - [`CongressErrorKind`] unifies them, and [`CongressError`] boxes the kind
//!
//! Callers that implement their own backoff policy match on
//! [`CongressError::kind`] to tell a throttled request apart from a rejected
//! one or from a misuse of the library.
//!
//! # Examples
//!
//! ```
//! use congress_error::{CongressErrorKind, CongressResult, ConfigError};
//!
//! fn connect(api_key: &str) -> CongressResult<()> {
//!     if api_key.is_empty() {
//!         Err(ConfigError::new("API key is required"))?
//!     }
//!     Ok(())
//! }
//!
//! let err = connect("").unwrap_err();
//! assert!(matches!(err.kind(), CongressErrorKind::Config(_)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod error;
mod http;
mod json;
mod rate_limit;
mod sdk;

pub use api::ApiError;
pub use config::ConfigError;
pub use error::{CongressError, CongressErrorKind, CongressResult};
pub use http::HttpError;
pub use json::JsonError;
pub use rate_limit::RateLimitExceededError;
pub use sdk::SdkError;
