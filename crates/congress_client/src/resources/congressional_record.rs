//! Congressional record endpoint.
//!
//! This is the one endpoint whose response does not follow the API's usual
//! envelope: records sit under `Results.Issues` with PascalCase keys, and
//! pagination is given as `IndexStart`/`SetSize`/`TotalCount` with no next
//! link. [`CongressionalRecordClient::get_issues`] normalizes it into the
//! same `{issues, pagination, request}` shape the other list endpoints use.

use crate::ApiClient;
use congress_core::{
    AbnormalPaginatedResponse, CongressionalRecordIssues, PaginatedResponse, QueryParams,
    adapt_abnormal_response,
};
use congress_error::{CongressResult, SdkError};
use tracing::{debug, instrument};
use url::Url;

const ENDPOINT: &str = "/congressional-record";

/// Daily issues of the Congressional Record.
#[derive(Debug, Clone)]
pub struct CongressionalRecordClient {
    client: ApiClient,
}

impl CongressionalRecordClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List issues, most recent first.
    ///
    /// Accepts `y`, `m` and `d` date filters along with `offset` and `limit`.
    /// `pagination.next` repeats every parameter given here, with `offset`
    /// advanced past the returned page. The quota snapshot is still fed to the
    /// limiter but is not part of the returned value.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use congress_client::{ApiClient, CongressionalRecordClient};
    /// use congress_core::QueryParams;
    ///
    /// # async fn run() -> congress_error::CongressResult<()> {
    /// let records = CongressionalRecordClient::new(ApiClient::new("DEMO_KEY")?);
    /// let page = records
    ///     .get_issues(&QueryParams::new().with("y", 2022).limit(10))
    ///     .await?;
    /// for issue in &page.data.issues {
    ///     println!("{}", issue["issueNumber"]);
    /// }
    /// println!("next: {}", page.pagination.next());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, params))]
    pub async fn get_issues(
        &self,
        params: &QueryParams,
    ) -> CongressResult<PaginatedResponse<CongressionalRecordIssues>> {
        let response = self
            .client
            .get::<AbnormalPaginatedResponse>(ENDPOINT, params)
            .await?;
        debug!(rate_limit = %response.rate_limit, "Normalizing congressional record page");

        let base = format!("{}{ENDPOINT}", self.client.base_url());
        let base = Url::parse(&base)
            .map_err(|e| SdkError::new(format!("Invalid congressional record URL {base}: {e}")))?;

        Ok(adapt_abnormal_response(response.body, params, &base))
    }
}
