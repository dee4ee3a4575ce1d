//! Congress and session endpoints.

use crate::ApiClient;
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/congress";

/// Congresses and their sessions.
#[derive(Debug, Clone)]
pub struct CongressClient {
    client: ApiClient,
}

impl CongressClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List congresses, most recent first.
    #[instrument(skip(self, params))]
    pub async fn get_congresses(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// Detailed record for one congress.
    #[instrument(skip(self, params))]
    pub async fn get_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// The congress currently in session.
    #[instrument(skip(self, params))]
    pub async fn get_current_congress(
        &self,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/current"), params)
            .await
    }
}
