use congress_core::RateLimitInfo;
use congress_error::{
    ApiError, ConfigError, CongressError, CongressErrorKind, CongressResult, HttpError, JsonError,
    RateLimitExceededError, SdkError,
};
use serde_json::json;

#[test]
fn test_location_is_captured_at_call_site() {
    let err = ConfigError::new("API key is required");
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
    assert!(err.to_string().starts_with("Configuration Error: API key is required"));
}

#[test]
fn test_rate_limit_error_carries_quota() {
    let err: CongressError = RateLimitExceededError::new(RateLimitInfo::new(5000, 0)).into();
    assert!(err.is_rate_limited());
    assert_eq!(err.status_code(), Some(429));
    assert_eq!(err.rate_limit(), Some(RateLimitInfo::new(5000, 0)));
    assert!(err.to_string().contains("0/5000 remaining"));
}

#[test]
fn test_api_error_reports_status_endpoint_and_body() {
    let body = json!({"error": {"message": "Not Found"}});
    let err: CongressError = ApiError::new(404, "/bill/999", body.clone()).into();

    assert_eq!(err.status_code(), Some(404));
    assert!(err.rate_limit().is_none());
    assert!(!err.is_rate_limited());

    match err.into_kind() {
        CongressErrorKind::Api(api) => {
            assert_eq!(api.endpoint, "/bill/999");
            assert_eq!(api.body, body);
            assert_eq!(api.message(), "Not Found");
        }
        other => panic!("expected API error, got {other}"),
    }
}

#[test]
fn test_api_error_message_fallbacks() {
    assert_eq!(
        ApiError::new(400, "/x", json!({"message": "top level"})).message(),
        "top level"
    );
    assert_eq!(
        ApiError::new(400, "/x", json!({"error": "flat"})).message(),
        "flat"
    );
    assert_eq!(
        ApiError::new(500, "/x", serde_json::Value::Null).message(),
        "no response body"
    );
    assert_eq!(
        ApiError::new(500, "/x", json!({"code": 7})).message(),
        r#"{"code":7}"#
    );
}

#[test]
fn test_non_http_errors_have_no_status() {
    let errors: Vec<CongressError> = vec![
        ConfigError::new("missing key").into(),
        SdkError::new("bad margin").into(),
        HttpError::new("connection refused").into(),
        JsonError::new("expected value").into(),
    ];
    for err in errors {
        assert_eq!(err.status_code(), None);
        assert_eq!(err.rate_limit(), None);
    }
}

#[test]
fn test_question_mark_converts_into_congress_error() {
    fn fails() -> CongressResult<u32> {
        Err(SdkError::new("max delay below min delay"))?
    }

    let err = fails().unwrap_err();
    assert!(matches!(err.kind(), CongressErrorKind::Sdk(_)));
    assert!(err.to_string().starts_with("Congress.gov Error: SDK Error"));
}
