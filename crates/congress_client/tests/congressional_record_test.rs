//! Normalization of the congressional record endpoint end to end.

use congress_client::{ApiClient, ClientOptions, CongressGovClient};
use congress_core::{QueryParams, RateLimitInfo};
use congress_rate_limit::AdaptiveRateLimiter;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn congress(server: &MockServer) -> CongressGovClient {
    let options = ClientOptions::builder()
        .api_key("test-api-key")
        .base_url(format!("{}/v3", server.uri()))
        .rate_limiting(false)
        .build()
        .unwrap();
    CongressGovClient::from_options(options).unwrap()
}

fn abnormal_page() -> serde_json::Value {
    json!({
        "Results": {
            "IndexStart": 20,
            "SetSize": 10,
            "TotalCount": 3500,
            "Issues": [{
                "Id": 26958,
                "Congress": "117",
                "Issue": "7",
                "PublishDate": "2022-01-13",
                "Links": {
                    "Digest": {
                        "Label": "Daily Digest",
                        "PDF": [{"Part": "1", "Url": "https://example.test/d.pdf"}]
                    },
                    "FullRecord": {
                        "PDF": [{"Part": "1", "Url": "https://example.test/f.pdf"}]
                    }
                }
            }]
        }
    })
}

#[tokio::test]
async fn test_get_issues_returns_uniform_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/congressional-record"))
        .and(query_param("y", "2022"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(abnormal_page())
                .insert_header("x-ratelimit-limit", "5000")
                .insert_header("x-ratelimit-remaining", "4321"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let congress = congress(&server);
    let params = QueryParams::new().with("y", 2022).offset(20).limit(10);
    let page = congress.congressional_record().get_issues(&params).await.unwrap();

    let expected_next = format!(
        "{}/v3/congressional-record?y=2022&offset=30&limit=10",
        server.uri()
    );
    assert_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({
            "issues": [{
                "id": 26958,
                "congress": "117",
                "issue": "7",
                "publishDate": "2022-01-13",
                "links": {
                    "digest": {
                        "label": "Daily Digest",
                        "pdf": [{"part": "1", "url": "https://example.test/d.pdf"}]
                    },
                    "fullRecord": {
                        "pdf": [{"part": "1", "url": "https://example.test/f.pdf"}]
                    }
                }
            }],
            "pagination": {"count": 3500, "next": expected_next},
            "request": {"contentType": "application/json", "format": "json"}
        })
    );
}

#[tokio::test]
async fn test_get_issues_still_feeds_limiter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/congressional-record"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(abnormal_page())
                .insert_header("x-ratelimit-limit", "5000")
                .insert_header("x-ratelimit-remaining", "4321"),
        )
        .mount(&server)
        .await;

    let limiter = Arc::new(AdaptiveRateLimiter::default());
    let client = ApiClient::with_rate_limiter(
        ClientOptions::builder()
            .api_key("test-api-key")
            .base_url(format!("{}/v3", server.uri()))
            .build()
            .unwrap(),
        limiter.clone(),
    )
    .unwrap();
    let congress = CongressGovClient::from_client(client);

    congress
        .congressional_record()
        .get_issues(&QueryParams::new())
        .await
        .unwrap();

    assert_eq!(limiter.last_rate_limit(), Some(RateLimitInfo::new(5000, 4321)));
}

#[tokio::test]
async fn test_get_issues_without_params_pages_from_set_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/congressional-record"))
        .respond_with(ResponseTemplate::new(200).set_body_json(abnormal_page()))
        .mount(&server)
        .await;

    let page = congress(&server)
        .congressional_record()
        .get_issues(&QueryParams::new())
        .await
        .unwrap();

    assert_eq!(page.pagination.count(), &3500);
    assert!(
        page.pagination
            .next()
            .ends_with("/v3/congressional-record?offset=30&limit=10")
    );
}

#[tokio::test]
async fn test_get_issues_rejects_regular_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/congressional-record"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"issues": []})))
        .mount(&server)
        .await;

    let err = congress(&server)
        .congressional_record()
        .get_issues(&QueryParams::new())
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), congress_error::CongressErrorKind::Json(_)));
}
