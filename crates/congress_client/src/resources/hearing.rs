use crate::{ApiClient, Chamber};
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/hearing";

/// Printed committee hearings, addressed by jacket number.
#[derive(Debug, Clone)]
pub struct HearingClient {
    client: ApiClient,
}

impl HearingClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List hearings.
    #[instrument(skip(self, params))]
    pub async fn get_hearings(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List hearings held during `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_hearings_by_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// List hearings held by one chamber during `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_hearings_by_congress_and_chamber(
        &self,
        congress: u32,
        chamber: Chamber,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}/{chamber}"), params)
            .await
    }

    /// Detailed record for one hearing.
    #[instrument(skip(self, params))]
    pub async fn get_hearing(
        &self,
        congress: u32,
        chamber: Chamber,
        jacket_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{chamber}/{jacket_number}"),
                params,
            )
            .await
    }
}
