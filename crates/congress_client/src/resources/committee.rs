//! Committee endpoints.

use crate::{ApiClient, Chamber};
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/committee";

/// Committees and subcommittees, addressed by chamber and system code
/// (e.g. `house`, `hspw00`).
#[derive(Debug, Clone)]
pub struct CommitteeClient {
    client: ApiClient,
}

impl CommitteeClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all committees.
    #[instrument(skip(self, params))]
    pub async fn get_committees(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List committees of one chamber.
    #[instrument(skip(self, params))]
    pub async fn get_committees_by_chamber(
        &self,
        chamber: Chamber,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{chamber}"), params)
            .await
    }

    /// List committees that sat in `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_committees_by_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// List committees of one chamber that sat in `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_committees_by_congress_and_chamber(
        &self,
        congress: u32,
        chamber: Chamber,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}/{chamber}"), params)
            .await
    }

    /// Detailed record for one committee.
    #[instrument(skip(self, params))]
    pub async fn get_committee(
        &self,
        chamber: Chamber,
        committee_code: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{chamber}/{committee_code}"), params)
            .await
    }

    /// Bills referred to a committee.
    #[instrument(skip(self, params))]
    pub async fn get_committee_bills(
        &self,
        chamber: Chamber,
        committee_code: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(chamber, committee_code, "bills", params).await
    }

    /// Reports issued by a committee.
    #[instrument(skip(self, params))]
    pub async fn get_committee_reports(
        &self,
        chamber: Chamber,
        committee_code: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(chamber, committee_code, "reports", params).await
    }

    /// Nominations referred to a Senate committee.
    #[instrument(skip(self, params))]
    pub async fn get_committee_nominations(
        &self,
        chamber: Chamber,
        committee_code: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(chamber, committee_code, "nominations", params)
            .await
    }

    /// House communications referred to a committee.
    #[instrument(skip(self, params))]
    pub async fn get_committee_house_communications(
        &self,
        chamber: Chamber,
        committee_code: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(chamber, committee_code, "house-communication", params)
            .await
    }

    /// Senate communications referred to a committee.
    #[instrument(skip(self, params))]
    pub async fn get_committee_senate_communications(
        &self,
        chamber: Chamber,
        committee_code: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(chamber, committee_code, "senate-communication", params)
            .await
    }

    async fn sub_resource(
        &self,
        chamber: Chamber,
        committee_code: &str,
        resource: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{chamber}/{committee_code}/{resource}"),
                params,
            )
            .await
    }
}
