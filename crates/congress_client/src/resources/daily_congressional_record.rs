//! Daily congressional record endpoints.
//!
//! Unlike `/congressional-record`, these endpoints answer with the usual
//! lowerCamelCase envelope and need no normalization.

use crate::ApiClient;
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/daily-congressional-record";

/// Daily issues of the Congressional Record, addressed by volume and issue.
#[derive(Debug, Clone)]
pub struct DailyCongressionalRecordClient {
    client: ApiClient,
}

impl DailyCongressionalRecordClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List daily issues, most recent first.
    #[instrument(skip(self, params))]
    pub async fn get_records(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List the issues of one volume.
    #[instrument(skip(self, params))]
    pub async fn get_records_by_volume(
        &self,
        volume_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{volume_number}"), params)
            .await
    }

    /// Detailed record for one issue.
    #[instrument(skip(self, params))]
    pub async fn get_records_by_volume_and_issue(
        &self,
        volume_number: u32,
        issue_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{volume_number}/{issue_number}"), params)
            .await
    }

    /// Articles printed in one issue, grouped by section.
    #[instrument(skip(self, params))]
    pub async fn get_articles(
        &self,
        volume_number: u32,
        issue_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{volume_number}/{issue_number}/articles"),
                params,
            )
            .await
    }
}
