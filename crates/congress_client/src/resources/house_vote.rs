use crate::ApiClient;
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/house-vote";

/// House roll call votes (beta endpoint upstream).
#[derive(Debug, Clone)]
pub struct HouseVoteClient {
    client: ApiClient,
}

impl HouseVoteClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List roll call votes.
    #[instrument(skip(self, params))]
    pub async fn get_house_roll_call_votes(
        &self,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List roll call votes taken during `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_house_roll_call_votes_by_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// List roll call votes taken during one session of `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_house_roll_call_votes_by_congress_and_session(
        &self,
        congress: u32,
        session: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}/{session}"), params)
            .await
    }

    /// Detailed record for one roll call vote.
    #[instrument(skip(self, params))]
    pub async fn get_house_roll_call_vote(
        &self,
        congress: u32,
        session: u32,
        vote_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{session}/{vote_number}"),
                params,
            )
            .await
    }

    /// How each member voted on one roll call.
    #[instrument(skip(self, params))]
    pub async fn get_house_roll_call_vote_members(
        &self,
        congress: u32,
        session: u32,
        vote_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{ENDPOINT}/{congress}/{session}/{vote_number}/members"),
                params,
            )
            .await
    }
}
