//! Amendment endpoints.

use crate::{AmendmentType, ApiClient};
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/amendment";

/// House and Senate amendments.
#[derive(Debug, Clone)]
pub struct AmendmentClient {
    client: ApiClient,
}

impl AmendmentClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List amendments, most recently updated first.
    #[instrument(skip(self, params))]
    pub async fn get_amendments(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List amendments offered in `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_amendments_by_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// List amendments of one type offered in `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_amendments_by_congress_and_type(
        &self,
        congress: u32,
        amendment_type: AmendmentType,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}/{amendment_type}"), params)
            .await
    }

    /// Detailed record for one amendment.
    #[instrument(skip(self, params))]
    pub async fn get_amendment(
        &self,
        congress: u32,
        amendment_type: AmendmentType,
        amendment_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{amendment_type}/{amendment_number}"),
                params,
            )
            .await
    }

    /// Actions taken on an amendment.
    #[instrument(skip(self, params))]
    pub async fn get_amendment_actions(
        &self,
        congress: u32,
        amendment_type: AmendmentType,
        amendment_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, amendment_type, amendment_number, "actions", params)
            .await
    }

    /// Cosponsors of an amendment.
    #[instrument(skip(self, params))]
    pub async fn get_amendment_cosponsors(
        &self,
        congress: u32,
        amendment_type: AmendmentType,
        amendment_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, amendment_type, amendment_number, "cosponsors", params)
            .await
    }

    /// Amendments to an amendment.
    #[instrument(skip(self, params))]
    pub async fn get_amendment_amendments(
        &self,
        congress: u32,
        amendment_type: AmendmentType,
        amendment_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, amendment_type, amendment_number, "amendments", params)
            .await
    }

    /// Text versions of an amendment (117th Congress onward).
    #[instrument(skip(self, params))]
    pub async fn get_amendment_text(
        &self,
        congress: u32,
        amendment_type: AmendmentType,
        amendment_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, amendment_type, amendment_number, "text", params)
            .await
    }

    async fn sub_resource(
        &self,
        congress: u32,
        amendment_type: AmendmentType,
        amendment_number: u32,
        resource: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{amendment_type}/{amendment_number}/{resource}"),
                params,
            )
            .await
    }
}
