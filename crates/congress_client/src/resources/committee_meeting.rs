use crate::{ApiClient, Chamber};
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/committee-meeting";

/// Committee meetings, addressed by event ID.
#[derive(Debug, Clone)]
pub struct CommitteeMeetingClient {
    client: ApiClient,
}

impl CommitteeMeetingClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List meetings.
    #[instrument(skip(self, params))]
    pub async fn get_meetings(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List meetings held during `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_meetings_by_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// List meetings held by one chamber's committees during `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_meetings_by_congress_and_chamber(
        &self,
        congress: u32,
        chamber: Chamber,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}/{chamber}"), params)
            .await
    }

    /// Detailed record for one meeting.
    #[instrument(skip(self, params))]
    pub async fn get_meeting(
        &self,
        congress: u32,
        chamber: Chamber,
        event_id: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}/{chamber}/{event_id}"), params)
            .await
    }
}
