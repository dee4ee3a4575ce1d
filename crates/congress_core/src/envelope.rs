//! Response envelopes.
//!
//! Every endpoint except the congressional record returns its JSON body with
//! the quota snapshot attached under `rateLimit`. The congressional record
//! endpoint is normalized into [`PaginatedResponse`] instead.

use crate::{Format, RateLimitInfo};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An upstream body together with the quota observed on that response.
///
/// Serializes as the body's own fields plus a `rateLimit` key. The body is
/// flattened, so it must serialize as a JSON object; an array or scalar body
/// makes serialization fail. Serialize [`RateLimited::into_body`] alone for
/// those.
///
/// # Examples
///
/// ```
/// use congress_core::{RateLimitInfo, RateLimited};
/// use serde_json::json;
///
/// let response = RateLimited::new(json!({"bills": []}), RateLimitInfo::new(5000, 4999));
/// assert_eq!(
///     serde_json::to_value(&response).unwrap(),
///     json!({"bills": [], "rateLimit": {"limit": 5000, "remaining": 4999}})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLimited<T> {
    /// Upstream body
    #[serde(flatten)]
    pub body: T,
    /// Quota observed on the response that carried `body`
    #[serde(rename = "rateLimit")]
    pub rate_limit: RateLimitInfo,
}

impl<T> RateLimited<T> {
    /// Pair a body with its quota snapshot.
    pub fn new(body: T, rate_limit: RateLimitInfo) -> Self {
        Self { body, rate_limit }
    }

    /// Transform the body, keeping the quota snapshot.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RateLimited<U> {
        RateLimited {
            body: f(self.body),
            rate_limit: self.rate_limit,
        }
    }

    /// Discard the quota snapshot.
    pub fn into_body(self) -> T {
        self.body
    }
}

/// Pagination block of a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Pagination {
    /// Total records matching the request
    count: u64,
    /// URL of the next page
    next: String,
}

impl Pagination {
    /// Create a pagination block.
    pub fn new(count: u64, next: impl Into<String>) -> Self {
        Self {
            count,
            next: next.into(),
        }
    }
}

/// Echo of the request format, as the API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    /// MIME type of the body
    content_type: String,
    /// Body format
    format: Format,
}

impl Default for RequestInfo {
    fn default() -> Self {
        Self {
            content_type: "application/json".to_string(),
            format: Format::Json,
        }
    }
}

/// Paginated list envelope: resource data plus `pagination` and `request`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Resource data, flattened into the envelope
    #[serde(flatten)]
    pub data: T,
    /// Paging information
    pub pagination: Pagination,
    /// Request echo
    pub request: RequestInfo,
}

/// The non-standard envelope returned by the congressional record endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbnormalPaginatedResponse {
    /// Paging and records, all PascalCase
    #[serde(rename = "Results")]
    pub results: AbnormalResults,
}

/// Body of [`AbnormalPaginatedResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AbnormalResults {
    /// Offset of the first record in this page
    pub index_start: u64,
    /// Number of records in this page
    pub set_size: u64,
    /// Total matching records
    pub total_count: u64,
    /// Records with PascalCase keys at every depth
    pub issues: Vec<Value>,
}

/// Normalized congressional record issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongressionalRecordIssues {
    /// Issues with lowerCamelCase keys
    pub issues: Vec<Value>,
}
