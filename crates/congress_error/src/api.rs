//! Non-success API response error types.

use serde_json::Value;

/// The server answered with a non-2xx status other than 429.
///
/// `body` holds the decoded JSON error object when the server sent one,
/// otherwise the raw body text as a JSON string.
#[derive(Debug, Clone, derive_more::Error)]
pub struct ApiError {
    /// HTTP status code
    pub status_code: u16,
    /// Resource path that was requested, relative to the base URL
    pub endpoint: String,
    /// Response body
    pub body: Value,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ApiError {
    /// Create a new ApiError at the current location.
    #[track_caller]
    pub fn new(status_code: u16, endpoint: impl Into<String>, body: Value) -> Self {
        let location = std::panic::Location::caller();
        Self {
            status_code,
            endpoint: endpoint.into(),
            body,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Human readable message extracted from the body.
    ///
    /// Looks for `error.message`, then a top-level `message`, then a string
    /// `error`, and falls back to the body itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use congress_error::ApiError;
    /// use serde_json::json;
    ///
    /// let err = ApiError::new(403, "/bill", json!({"error": {"code": "API_KEY_INVALID", "message": "bad key"}}));
    /// assert_eq!(err.message(), "bad key");
    ///
    /// let err = ApiError::new(500, "/bill", json!("upstream unavailable"));
    /// assert_eq!(err.message(), "upstream unavailable");
    /// ```
    pub fn message(&self) -> String {
        let nested = self
            .body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str);
        let top = self.body.get("message").and_then(Value::as_str);
        let flat = self.body.get("error").and_then(Value::as_str);

        match nested.or(top).or(flat) {
            Some(msg) => msg.to_string(),
            None => match &self.body {
                Value::String(s) => s.clone(),
                Value::Null => String::from("no response body"),
                other => other.to_string(),
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "API Error: {} (HTTP {} from {}) at line {} in {}",
            self.message(),
            self.status_code,
            self.endpoint,
            self.line,
            self.file
        )
    }
}
