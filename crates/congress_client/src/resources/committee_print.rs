//! Committee print endpoints.

use crate::{ApiClient, Chamber};
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/committee-print";

/// Committee prints, addressed by jacket number.
#[derive(Debug, Clone)]
pub struct CommitteePrintClient {
    client: ApiClient,
}

impl CommitteePrintClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List prints.
    ///
    /// Accepts `offset`, `limit`, `fromDateTime` and `toDateTime`.
    #[instrument(skip(self, params))]
    pub async fn get_prints(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List prints issued during `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_prints_by_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// List prints issued by one chamber during `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_prints_by_congress_and_chamber(
        &self,
        congress: u32,
        chamber: Chamber,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}/{chamber}"), params)
            .await
    }

    /// Detailed record for one print.
    #[instrument(skip(self, params))]
    pub async fn get_print(
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

    /// Text versions of one print.
    #[instrument(skip(self, params))]
    pub async fn get_print_text(
        &self,
        congress: u32,
        chamber: Chamber,
        jacket_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{chamber}/{jacket_number}/text"),
                params,
            )
            .await
    }
}
