//! Member endpoints.
//!
//! Members are identified by their Bioguide ID (e.g. `L000174`). State
//! filters take the two-letter postal code.

use crate::ApiClient;
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/member";

/// Members of Congress and their legislation.
#[derive(Debug, Clone)]
pub struct MemberClient {
    client: ApiClient,
}

impl MemberClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List members. Accepts `currentMember` in addition to the usual filters.
    #[instrument(skip(self, params))]
    pub async fn get_members(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// Detailed record for one member.
    #[instrument(skip(self, params))]
    pub async fn get_member(
        &self,
        bioguide_id: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{bioguide_id}"), params)
            .await
    }

    /// Legislation sponsored by a member.
    #[instrument(skip(self, params))]
    pub async fn get_sponsored_legislation(
        &self,
        bioguide_id: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{bioguide_id}/sponsored-legislation"),
                params,
            )
            .await
    }

    /// Legislation cosponsored by a member.
    #[instrument(skip(self, params))]
    pub async fn get_cosponsored_legislation(
        &self,
        bioguide_id: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{bioguide_id}/cosponsored-legislation"),
                params,
            )
            .await
    }

    /// Members who served in `congress`.
    ///
    /// The API only lists members still serving unless told otherwise, so
    /// `current_member` is always sent: `true` for the sitting congress,
    /// `false` to get the full roster of a prior one.
    #[instrument(skip(self, params))]
    pub async fn get_members_by_congress(
        &self,
        congress: u32,
        current_member: bool,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        let params = params.clone().with("currentMember", current_member);
        self.client
            .get_json(&format!("{ENDPOINT}/congress/{congress}"), &params)
            .await
    }

    /// Members representing a state.
    #[instrument(skip(self, params))]
    pub async fn get_members_by_state(
        &self,
        state_code: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{state_code}"), params)
            .await
    }

    /// Members representing one district of a state.
    #[instrument(skip(self, params))]
    pub async fn get_members_by_state_and_district(
        &self,
        state_code: &str,
        district: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{state_code}/{district}"), params)
            .await
    }

    /// Members who represented one district during `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_members_by_congress_state_and_district(
        &self,
        congress: u32,
        state_code: &str,
        district: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/congress/{congress}/{state_code}/{district}"),
                params,
            )
            .await
    }
}
