use crate::ApiClient;
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/crsreport";

/// Congressional Research Service reports.
#[derive(Debug, Clone)]
pub struct CrsReportClient {
    client: ApiClient,
}

impl CrsReportClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List reports.
    #[instrument(skip(self, params))]
    pub async fn get_reports(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// Detailed record for one report, e.g. `R47175`.
    #[instrument(skip(self, params))]
    pub async fn get_report(
        &self,
        report_number: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{report_number}"), params)
            .await
    }
}
