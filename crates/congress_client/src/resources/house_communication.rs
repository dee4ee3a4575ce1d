//! House communication endpoints.

use crate::{ApiClient, CommunicationType};
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/house-communication";

/// Communications received by the House, addressed by congress,
/// [`CommunicationType`] and number.
#[derive(Debug, Clone)]
pub struct HouseCommunicationClient {
    client: ApiClient,
}

impl HouseCommunicationClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List communications.
    #[instrument(skip(self, params))]
    pub async fn get_communications(
        &self,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List communications received during `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_communications_by_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// List communications of one type received during `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_communications_by_congress_and_type(
        &self,
        congress: u32,
        communication_type: CommunicationType,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{communication_type}"),
                params,
            )
            .await
    }

    /// Detailed record for one communication.
    #[instrument(skip(self, params))]
    pub async fn get_communication(
        &self,
        congress: u32,
        communication_type: CommunicationType,
        communication_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{communication_type}/{communication_number}"),
                params,
            )
            .await
    }
}
