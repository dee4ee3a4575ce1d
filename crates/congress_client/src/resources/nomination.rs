//! Nomination endpoints.

use crate::ApiClient;
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/nomination";

/// Presidential nominations. Nomination numbers may carry a partition
/// suffix, so they are taken as strings (`"2467"`, `"78-1"`).
#[derive(Debug, Clone)]
pub struct NominationClient {
    client: ApiClient,
}

impl NominationClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List nominations.
    #[instrument(skip(self, params))]
    pub async fn get_nominations(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List nominations received in `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_nominations_by_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// Detailed record for one nomination.
    #[instrument(skip(self, params))]
    pub async fn get_nomination(
        &self,
        congress: u32,
        nomination_number: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}/{nomination_number}"), params)
            .await
    }

    /// Nominees listed under one position (`ordinal`) of a nomination.
    #[instrument(skip(self, params))]
    pub async fn get_nominees(
        &self,
        congress: u32,
        nomination_number: &str,
        ordinal: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{nomination_number}/{ordinal}"),
                params,
            )
            .await
    }

    /// Actions taken on a nomination.
    #[instrument(skip(self, params))]
    pub async fn get_nomination_actions(
        &self,
        congress: u32,
        nomination_number: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, nomination_number, "actions", params)
            .await
    }

    /// Committees a nomination was referred to.
    #[instrument(skip(self, params))]
    pub async fn get_nomination_committees(
        &self,
        congress: u32,
        nomination_number: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, nomination_number, "committees", params)
            .await
    }

    /// Printed hearings held on a nomination.
    #[instrument(skip(self, params))]
    pub async fn get_nomination_hearings(
        &self,
        congress: u32,
        nomination_number: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, nomination_number, "hearings", params)
            .await
    }

    async fn sub_resource(
        &self,
        congress: u32,
        nomination_number: &str,
        resource: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{nomination_number}/{resource}"),
                params,
            )
            .await
    }
}
