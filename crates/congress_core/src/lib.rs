//! Core data types for the congress.gov API client.
//!
//! This crate provides the foundation types shared by every other crate in the
//! workspace: the quota snapshot reported by the server, query parameters and
//! their wire encoding, the uniform response envelopes, and the normalizer for
//! the one upstream endpoint that does not follow the common response shape.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod envelope;
mod normalize;
mod params;
mod quota;
mod telemetry;

pub use envelope::{
    AbnormalPaginatedResponse, AbnormalResults, CongressionalRecordIssues, PaginatedResponse,
    Pagination, RateLimited, RequestInfo,
};
pub use normalize::{adapt_abnormal_response, lower_camel_keys, lower_first_letter};
pub use params::{DATE_TIME_FORMAT, Format, ParamValue, QueryParams};
pub use quota::RateLimitInfo;
pub use telemetry::init_tracing;
