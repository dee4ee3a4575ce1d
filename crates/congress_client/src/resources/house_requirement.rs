//! House requirement endpoints.
//!
//! A requirement is a reporting obligation set in law; executive
//! communications sent to satisfy it are its matching communications.

use crate::ApiClient;
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/house-requirement";

/// House reporting requirements.
#[derive(Debug, Clone)]
pub struct HouseRequirementClient {
    client: ApiClient,
}

impl HouseRequirementClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List requirements.
    #[instrument(skip(self, params))]
    pub async fn get_requirements(
        &self,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// Detailed record for one requirement.
    #[instrument(skip(self, params))]
    pub async fn get_requirement(
        &self,
        requirement_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{requirement_number}"), params)
            .await
    }

    /// Communications filed against one requirement.
    #[instrument(skip(self, params))]
    pub async fn get_matching_communications(
        &self,
        requirement_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{requirement_number}/matching-communications"),
                params,
            )
            .await
    }
}
