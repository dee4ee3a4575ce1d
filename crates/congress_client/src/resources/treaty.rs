use crate::ApiClient;
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/treaty";

/// Treaties submitted to the Senate.
#[derive(Debug, Clone)]
pub struct TreatyClient {
    client: ApiClient,
}

impl TreatyClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List treaties.
    #[instrument(skip(self, params))]
    pub async fn get_treaties(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List treaties received in `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_treaties_by_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// Detailed record for one treaty.
    #[instrument(skip(self, params))]
    pub async fn get_treaty(
        &self,
        congress: u32,
        treaty_number: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}/{treaty_number}"), params)
            .await
    }

    /// One part of a partitioned treaty (`treaty_suffix` such as `"A"`).
    #[instrument(skip(self, params))]
    pub async fn get_partitioned_treaty(
        &self,
        congress: u32,
        treaty_number: &str,
        treaty_suffix: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{treaty_number}/{treaty_suffix}"),
                params,
            )
            .await
    }

    /// Actions taken on a treaty.
    #[instrument(skip(self, params))]
    pub async fn get_treaty_actions(
        &self,
        congress: u32,
        treaty_number: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{treaty_number}/actions"),
                params,
            )
            .await
    }

    /// Committees a treaty was referred to.
    #[instrument(skip(self, params))]
    pub async fn get_treaty_committees(
        &self,
        congress: u32,
        treaty_number: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{treaty_number}/committees"),
                params,
            )
            .await
    }
}
