use crate::{ApiClient, BillType};
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/summaries";

/// CRS bill summaries, sorted by last update.
#[derive(Debug, Clone)]
pub struct SummariesClient {
    client: ApiClient,
}

impl SummariesClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List summaries.
    #[instrument(skip(self, params))]
    pub async fn get_summaries(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List summaries of bills from `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_summaries_by_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// List summaries of one bill type from `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_summaries_by_congress_and_type(
        &self,
        congress: u32,
        bill_type: BillType,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}/{bill_type}"), params)
            .await
    }
}
