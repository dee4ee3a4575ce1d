//! Bill and law endpoints.
//!
//! Bills are addressed by congress, [`BillType`] and number, e.g. H.R. 3076
//! of the 117th Congress is `/bill/117/hr/3076`. Laws live under a separate
//! `/law` root but return bill records.

use crate::{ApiClient, BillType, LawType};
use congress_core::{QueryParams, RateLimited};
use congress_error::CongressResult;
use serde_json::Value;
use tracing::instrument;

const ENDPOINT: &str = "/bill";
const LAW_ENDPOINT: &str = "/law";

/// Bills, their sub-resources, and enacted laws.
///
/// # Example
///
/// ```no_run
/// use congress_client::{ApiClient, BillClient, BillType};
/// use congress_core::QueryParams;
///
/// # async fn run() -> congress_error::CongressResult<()> {
/// let bills = BillClient::new(ApiClient::new("DEMO_KEY")?);
/// let actions = bills
///     .get_bill_actions(117, BillType::Hr, 3076, &QueryParams::new().limit(10))
///     .await?;
/// println!("{}", actions.body["actions"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BillClient {
    client: ApiClient,
}

impl BillClient {
    /// Wrap a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List bills, most recently updated first.
    ///
    /// Accepts `offset`, `limit`, `fromDateTime`, `toDateTime` and `sort`.
    #[instrument(skip(self, params))]
    pub async fn get_bills(&self, params: &QueryParams) -> CongressResult<RateLimited<Value>> {
        self.client.get_json(ENDPOINT, params).await
    }

    /// List bills introduced in `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_bills_by_congress(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}"), params)
            .await
    }

    /// List bills of one type introduced in `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_bills_by_congress_and_type(
        &self,
        congress: u32,
        bill_type: BillType,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{ENDPOINT}/{congress}/{bill_type}"), params)
            .await
    }

    /// Detailed record for one bill.
    #[instrument(skip(self, params))]
    pub async fn get_bill(
        &self,
        congress: u32,
        bill_type: BillType,
        bill_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&bill_path(congress, bill_type, bill_number, ""), params)
            .await
    }

    /// Floor and committee actions on a bill.
    #[instrument(skip(self, params))]
    pub async fn get_bill_actions(
        &self,
        congress: u32,
        bill_type: BillType,
        bill_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, bill_type, bill_number, "actions", params)
            .await
    }

    /// Amendments offered to a bill.
    #[instrument(skip(self, params))]
    pub async fn get_bill_amendments(
        &self,
        congress: u32,
        bill_type: BillType,
        bill_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, bill_type, bill_number, "amendments", params)
            .await
    }

    /// Committees a bill was referred to, with their activities.
    #[instrument(skip(self, params))]
    pub async fn get_bill_committees(
        &self,
        congress: u32,
        bill_type: BillType,
        bill_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, bill_type, bill_number, "committees", params)
            .await
    }

    /// Cosponsors of a bill.
    #[instrument(skip(self, params))]
    pub async fn get_bill_cosponsors(
        &self,
        congress: u32,
        bill_type: BillType,
        bill_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, bill_type, bill_number, "cosponsors", params)
            .await
    }

    /// Bills the API considers related to this one.
    #[instrument(skip(self, params))]
    pub async fn get_related_bills(
        &self,
        congress: u32,
        bill_type: BillType,
        bill_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, bill_type, bill_number, "relatedbills", params)
            .await
    }

    /// Legislative subjects and policy area of a bill.
    #[instrument(skip(self, params))]
    pub async fn get_bill_subjects(
        &self,
        congress: u32,
        bill_type: BillType,
        bill_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, bill_type, bill_number, "subjects", params)
            .await
    }

    /// CRS summaries of a bill.
    #[instrument(skip(self, params))]
    pub async fn get_bill_summaries(
        &self,
        congress: u32,
        bill_type: BillType,
        bill_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, bill_type, bill_number, "summaries", params)
            .await
    }

    /// Published text versions of a bill.
    #[instrument(skip(self, params))]
    pub async fn get_bill_text(
        &self,
        congress: u32,
        bill_type: BillType,
        bill_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, bill_type, bill_number, "text", params)
            .await
    }

    /// Official and short titles of a bill.
    #[instrument(skip(self, params))]
    pub async fn get_bill_titles(
        &self,
        congress: u32,
        bill_type: BillType,
        bill_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.sub_resource(congress, bill_type, bill_number, "titles", params)
            .await
    }

    /// Laws enacted by `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_laws(
        &self,
        congress: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{LAW_ENDPOINT}/{congress}"), params)
            .await
    }

    /// Public or private laws enacted by `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_laws_by_type(
        &self,
        congress: u32,
        law_type: LawType,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&format!("{LAW_ENDPOINT}/{congress}/{law_type}"), params)
            .await
    }

    /// One law by its number within `congress`.
    #[instrument(skip(self, params))]
    pub async fn get_law(
        &self,
        congress: u32,
        law_type: LawType,
        law_number: u32,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(
                &format!("{LAW_ENDPOINT}/{congress}/{law_type}/{law_number}"),
                params,
            )
            .await
    }

    async fn sub_resource(
        &self,
        congress: u32,
        bill_type: BillType,
        bill_number: u32,
        resource: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.client
            .get_json(&bill_path(congress, bill_type, bill_number, resource), params)
            .await
    }
}

fn bill_path(congress: u32, bill_type: BillType, bill_number: u32, resource: &str) -> String {
    if resource.is_empty() {
        format!("{ENDPOINT}/{congress}/{bill_type}/{bill_number}")
    } else {
        format!("{ENDPOINT}/{congress}/{bill_type}/{bill_number}/{resource}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_path() {
        assert_eq!(bill_path(117, BillType::Hr, 3076, ""), "/bill/117/hr/3076");
        assert_eq!(
            bill_path(118, BillType::Sjres, 9, "relatedbills"),
            "/bill/118/sjres/9/relatedbills"
        );
    }
}
