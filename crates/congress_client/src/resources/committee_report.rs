//! Committee report endpoints.
//!
//! Reports are addressed by congress, [`CommitteeReportType`] and number,
//! e.g. H. Rept. 116-617 is `/committee-report/116/hrpt/617`.

use crate::{ApiClient, CommitteeReportType};
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/committee-report";

/// Committee reports and their text.
#[derive(Debug, Clone)]
pub struct CommitteeReportClient {
    client: ApiClient,
}

impl CommitteeReportClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List reports.
    ///
    /// Accepts `conference=true` to restrict the list to conference reports.
    #[instrument(skip(self, params))]
    pub async fn get_reports(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List reports filed during `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_reports_by_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// List reports of one type filed during `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_reports_by_congress_and_type(
        &self,
        congress: u32,
        report_type: CommitteeReportType,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}/{report_type}"), params)
            .await
    }

    /// Detailed record for one report.
    #[instrument(skip(self, params))]
    pub async fn get_report(
        &self,
        congress: u32,
        report_type: CommitteeReportType,
        report_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{report_type}/{report_number}"),
                params,
            )
            .await
    }

    /// Text versions of one report.
    #[instrument(skip(self, params))]
    pub async fn get_report_text(
        &self,
        congress: u32,
        report_type: CommitteeReportType,
        report_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{report_type}/{report_number}/text"),
                params,
            )
            .await
    }
}
