//! Typed, rate-limit aware client for the congress.gov v3 API.
//!
//! # Overview
//!
//! - [`ApiClient`] is the request pipeline: URL and query construction,
//!   pacing through a [`RateLimiter`](congress_rate_limit::RateLimiter),
//!   quota feedback from response headers, and classification of the
//!   outcome into [`CongressError`](congress_error::CongressError) kinds.
//! - Resource clients ([`BillClient`], [`MemberClient`], ...) map arguments
//!   onto paths and return the JSON body with the observed quota attached.
//! - [`CongressionalRecordClient`] normalizes the one endpoint whose response
//!   does not match the rest of the API.
//! - [`CongressGovClient`] hands out all of them over one shared pipeline.
//!
//! # Configuration
//!
//! [`CongressConfig::load`] layers the bundled `congress_gov.toml`, optional
//! user files, and `CONGRESS_GOV_*` environment variables into
//! [`ClientOptions`].
//!
//! # Example
//!
//! ```no_run
//! use congress_client::CongressGovClient;
//! use congress_core::{Format, QueryParams};
//!
//! # async fn run() -> congress_error::CongressResult<()> {
//! let congress = CongressGovClient::new("DEMO_KEY")?;
//! let params = QueryParams::new().limit(20).format(Format::Json).sort("updateDate desc");
//! let page = congress.bill().get_bills(&params).await?;
//! println!("{}", page.body["pagination"]["count"]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod congress_gov;
mod metrics;
mod paths;
mod resources;

pub use client::{API_KEY_HEADER, ApiClient};
pub use config::{
    ClientOptions, ClientOptionsBuilder, ClientOptionsBuilderError, CongressConfig,
    DEFAULT_BASE_URL, ENV_PREFIX,
};
pub use congress_gov::CongressGovClient;
pub use metrics::{ApiMetrics, classify_error};
pub use paths::{
    AmendmentType, BillType, Chamber, CommitteeReportType, CommunicationType, LawType,
};
pub use resources::{
    AmendmentClient, BillClient, BoundCongressionalRecordClient, CommitteeClient,
    CommitteeMeetingClient, CommitteePrintClient, CommitteeReportClient, CongressClient,
    CongressionalRecordClient, CrsReportClient, DailyCongressionalRecordClient, HearingClient,
    HouseCommunicationClient, HouseRequirementClient, HouseVoteClient, MemberClient,
    NominationClient, SenateCommunicationClient, SummariesClient, TreatyClient,
};
