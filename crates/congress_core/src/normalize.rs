//! Normalization of the congressional record response.
//!
//! The congressional record endpoint answers with PascalCase keys and its own
//! paging block. These functions rewrite it into the lowerCamelCase
//! [`PaginatedResponse`] every other endpoint uses, including a `next` link the
//! upstream never supplies.

use crate::{
    AbnormalPaginatedResponse, AbnormalResults, CongressionalRecordIssues, PaginatedResponse,
    Pagination, QueryParams, RequestInfo,
};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

/// Lowercase the first character of a key.
///
/// `PDF` is the one key that maps to all-lowercase `pdf` rather than `pDF`.
///
/// # Examples
///
/// ```
/// use congress_core::lower_first_letter;
///
/// assert_eq!(lower_first_letter("PublishDate"), "publishDate");
/// assert_eq!(lower_first_letter("PDF"), "pdf");
/// assert_eq!(lower_first_letter(""), "");
/// ```
pub fn lower_first_letter(key: &str) -> String {
    if key == "PDF" {
        return "pdf".to_string();
    }
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Recursively rename every object key with [`lower_first_letter`].
///
/// Arrays are mapped element-wise and scalars pass through untouched.
pub fn lower_camel_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(lower_camel_keys).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (lower_first_letter(&key), lower_camel_keys(value)))
                .collect(),
        ),
        leaf => leaf,
    }
}

/// Convert a congressional record response into the uniform paginated shape.
///
/// `params` are the parameters of the request that produced `response`; the
/// `next` link repeats them against `base_url` with `offset` advanced past
/// this page and `limit` set to the page size.
///
/// # Examples
///
/// ```
/// use congress_core::{adapt_abnormal_response, AbnormalPaginatedResponse, QueryParams};
/// use serde_json::json;
/// use url::Url;
///
/// let response: AbnormalPaginatedResponse = serde_json::from_value(json!({
///     "Results": {
///         "IndexStart": 0,
///         "SetSize": 1,
///         "TotalCount": 10,
///         "Issues": [{"Id": 1, "Links": {"PDF": []}}]
///     }
/// }))
/// .unwrap();
/// let base = Url::parse("https://api.congress.gov/v3/congressional-record").unwrap();
/// let page = adapt_abnormal_response(response, &QueryParams::new().limit(1), &base);
///
/// assert_eq!(page.data.issues, vec![json!({"id": 1, "links": {"pdf": []}})]);
/// assert_eq!(
///     page.pagination.next(),
///     "https://api.congress.gov/v3/congressional-record?limit=1&offset=1"
/// );
/// ```
#[instrument(skip(response, params), fields(base_url = %base_url))]
pub fn adapt_abnormal_response(
    response: AbnormalPaginatedResponse,
    params: &QueryParams,
    base_url: &Url,
) -> PaginatedResponse<CongressionalRecordIssues> {
    let AbnormalResults {
        index_start,
        set_size,
        total_count,
        issues,
    } = response.results;

    let mut next_params = params.clone();
    next_params.set("offset", index_start.saturating_add(set_size));
    next_params.set("limit", set_size);

    let mut next = base_url.clone();
    next.set_query(Some(&next_params.to_query_string()));

    debug!(
        issues = issues.len(),
        total_count,
        next = %next,
        "Normalized congressional record response"
    );

    PaginatedResponse {
        data: CongressionalRecordIssues {
            issues: issues.into_iter().map(lower_camel_keys).collect(),
        },
        pagination: Pagination::new(total_count, next),
        request: RequestInfo::default(),
    }
}
