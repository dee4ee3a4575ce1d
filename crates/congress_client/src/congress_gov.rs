//! Entry point bundling every resource client.

use crate::{
    AmendmentClient, ApiClient, BillClient, BoundCongressionalRecordClient, ClientOptions,
    CommitteeClient, CommitteeMeetingClient, CommitteePrintClient, CommitteeReportClient,
    CongressClient, CongressConfig, CongressionalRecordClient, CrsReportClient,
    DailyCongressionalRecordClient, HearingClient, HouseCommunicationClient,
    HouseRequirementClient, HouseVoteClient, MemberClient, NominationClient,
    SenateCommunicationClient, SummariesClient, TreatyClient,
};
use congress_error::CongressResult;
use congress_rate_limit::RateLimiter;
use std::sync::Arc;
use tracing::instrument;

/// One handle for the whole API.
///
/// All accessors hand out resource clients over the same [`ApiClient`], so
/// pacing accounts for every request made through this value and its clones.
///
/// # Example
///
/// ```no_run
/// use congress_client::{BillType, CongressGovClient};
/// use congress_core::QueryParams;
///
/// # async fn run() -> congress_error::CongressResult<()> {
/// let congress = CongressGovClient::from_config()?;
///
/// let bill = congress.bill().get_bill(117, BillType::Hr, 3076, &QueryParams::new()).await?;
/// let member = congress.member().get_member("P000197", &QueryParams::new()).await?;
/// println!("{} requests left", member.rate_limit.remaining);
/// # let _ = bill;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CongressGovClient {
    client: ApiClient,
}

impl CongressGovClient {
    /// Client with default options.
    pub fn new(api_key: impl Into<String>) -> CongressResult<Self> {
        Ok(Self::from_client(ApiClient::new(api_key)?))
    }

    /// Client built from explicit options.
    pub fn from_options(options: ClientOptions) -> CongressResult<Self> {
        Ok(Self::from_client(ApiClient::from_options(options)?))
    }

    /// Client built from configuration files and `CONGRESS_GOV_*` variables.
    #[instrument]
    pub fn from_config() -> CongressResult<Self> {
        Self::from_options(CongressConfig::load()?)
    }

    /// Wrap an existing pipeline.
    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// The shared request pipeline.
    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    /// The limiter shared by every resource client.
    pub fn rate_limiter(&self) -> Arc<dyn RateLimiter> {
        self.client.rate_limiter()
    }

    /// Amendment endpoints.
    pub fn amendment(&self) -> AmendmentClient {
        AmendmentClient::new(self.client.clone())
    }

    /// Bill and law endpoints.
    pub fn bill(&self) -> BillClient {
        BillClient::new(self.client.clone())
    }

    /// Bound congressional record endpoints.
    pub fn bound_congressional_record(&self) -> BoundCongressionalRecordClient {
        BoundCongressionalRecordClient::new(self.client.clone())
    }

    /// Committee endpoints.
    pub fn committee(&self) -> CommitteeClient {
        CommitteeClient::new(self.client.clone())
    }

    /// Committee meeting endpoints.
    pub fn committee_meeting(&self) -> CommitteeMeetingClient {
        CommitteeMeetingClient::new(self.client.clone())
    }

    /// Committee print endpoints.
    pub fn committee_print(&self) -> CommitteePrintClient {
        CommitteePrintClient::new(self.client.clone())
    }

    /// Committee report endpoints.
    pub fn committee_report(&self) -> CommitteeReportClient {
        CommitteeReportClient::new(self.client.clone())
    }

    /// Congress endpoints.
    pub fn congress(&self) -> CongressClient {
        CongressClient::new(self.client.clone())
    }

    /// Congressional record endpoint.
    pub fn congressional_record(&self) -> CongressionalRecordClient {
        CongressionalRecordClient::new(self.client.clone())
    }

    /// CRS report endpoints.
    pub fn crs_report(&self) -> CrsReportClient {
        CrsReportClient::new(self.client.clone())
    }

    /// Daily congressional record endpoints.
    pub fn daily_congressional_record(&self) -> DailyCongressionalRecordClient {
        DailyCongressionalRecordClient::new(self.client.clone())
    }

    /// Hearing endpoints.
    pub fn hearing(&self) -> HearingClient {
        HearingClient::new(self.client.clone())
    }

    /// House communication endpoints.
    pub fn house_communication(&self) -> HouseCommunicationClient {
        HouseCommunicationClient::new(self.client.clone())
    }

    /// House requirement endpoints.
    pub fn house_requirement(&self) -> HouseRequirementClient {
        HouseRequirementClient::new(self.client.clone())
    }

    /// House roll call vote endpoints.
    pub fn house_vote(&self) -> HouseVoteClient {
        HouseVoteClient::new(self.client.clone())
    }

    /// Member endpoints.
    pub fn member(&self) -> MemberClient {
        MemberClient::new(self.client.clone())
    }

    /// Nomination endpoints.
    pub fn nomination(&self) -> NominationClient {
        NominationClient::new(self.client.clone())
    }

    /// Senate communication endpoints.
    pub fn senate_communication(&self) -> SenateCommunicationClient {
        SenateCommunicationClient::new(self.client.clone())
    }

    /// Summary endpoints.
    pub fn summaries(&self) -> SummariesClient {
        SummariesClient::new(self.client.clone())
    }

    /// Treaty endpoints.
    pub fn treaty(&self) -> TreatyClient {
        TreatyClient::new(self.client.clone())
    }
}
