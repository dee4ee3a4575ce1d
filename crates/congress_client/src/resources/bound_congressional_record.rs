//! Bound congressional record endpoints.

use crate::ApiClient;
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/bound-congressional-record";

/// The permanent, bound edition of the Congressional Record, addressed by
/// the date of the daily issue it collects.
#[derive(Debug, Clone)]
pub struct BoundCongressionalRecordClient {
    client: ApiClient,
}

impl BoundCongressionalRecordClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List bound records.
    #[instrument(skip(self, params))]
    pub async fn get_records(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List bound records for one year.
    #[instrument(skip(self, params))]
    pub async fn get_records_by_year(
        &self,
        year: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{year}"), params)
            .await
    }

    /// List bound records for one month.
    #[instrument(skip(self, params))]
    pub async fn get_records_by_year_and_month(
        &self,
        year: u32,
        month: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{year}/{month}"), params)
            .await
    }

    /// Bound records for one day.
    #[instrument(skip(self, params))]
    pub async fn get_records_by_date(
        &self,
        year: u32,
        month: u32,
        day: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{year}/{month}/{day}"), params)
            .await
    }
}
