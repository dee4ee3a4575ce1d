//! The request pipeline shared by every resource client.

use crate::{ApiMetrics, ClientOptions};
use congress_core::{QueryParams, RateLimitInfo, RateLimited};
use congress_error::{
    ApiError, CongressError, CongressResult, ConfigError, HttpError, JsonError,
    RateLimitExceededError, SdkError,
};
use congress_rate_limit::{
    AdaptiveRateLimiter, HeaderRateLimitDetector, NoopRateLimiter, RateLimiter,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// HTTP client for the congress.gov v3 API.
///
/// Every call goes through the same steps: build the URL, wait on the rate
/// limiter, send the GET, feed the quota headers back to the limiter, then
/// classify the status. Clones share the HTTP connection pool and the limiter,
/// so all resource clients built from one `ApiClient` draw on one quota.
///
/// # Example
///
/// ```no_run
/// use congress_client::ApiClient;
/// use congress_core::QueryParams;
///
/// # async fn run() -> congress_error::CongressResult<()> {
/// let client = ApiClient::new("DEMO_KEY")?;
/// let bills = client.get_json("/bill", &QueryParams::new().limit(5)).await?;
/// println!("{} calls left this hour", bills.rate_limit.remaining);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    http: Client,
    api_key: String,
    base_url: String,
    limiter: Arc<dyn RateLimiter>,
    detector: HeaderRateLimitDetector,
}

impl ApiClient {
    /// Client for the public API with default options.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> CongressResult<Self> {
        Self::from_options(ClientOptions::new(api_key))
    }

    /// Client built from explicit options.
    ///
    /// Uses the adaptive limiter unless `rate_limiting` is off.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty API key, and an SDK error
    /// for invalid limiter settings or an unparsable base URL.
    pub fn from_options(options: ClientOptions) -> CongressResult<Self> {
        let limiter = Self::limiter_for(&options)?;
        Self::build(options, limiter, Client::new())
    }

    /// Client that paces requests with a caller-supplied limiter.
    ///
    /// The `rate_limiting` and `rate_limit` options are ignored.
    pub fn with_rate_limiter(
        options: ClientOptions,
        limiter: Arc<dyn RateLimiter>,
    ) -> CongressResult<Self> {
        Self::build(options, limiter, Client::new())
    }

    /// Client that sends requests through a caller-configured `reqwest::Client`
    /// (timeouts, proxies, user agent).
    pub fn with_http_client(options: ClientOptions, http: Client) -> CongressResult<Self> {
        let limiter = Self::limiter_for(&options)?;
        Self::build(options, limiter, http)
    }

    fn limiter_for(options: &ClientOptions) -> CongressResult<Arc<dyn RateLimiter>> {
        if !options.rate_limiting() {
            debug!("Rate limiting disabled");
            return Ok(Arc::new(NoopRateLimiter));
        }
        options.rate_limit().validate()?;
        Ok(Arc::new(AdaptiveRateLimiter::new(options.rate_limit())))
    }

    #[track_caller]
    fn build(
        options: ClientOptions,
        limiter: Arc<dyn RateLimiter>,
        http: Client,
    ) -> CongressResult<Self> {
        let api_key = options.api_key().trim();
        if api_key.is_empty() {
            return Err(ConfigError::new("API key is required").into());
        }

        let base_url = options.base_url().trim_end_matches('/');
        Url::parse(base_url)
            .map_err(|e| SdkError::new(format!("Invalid base URL {base_url}: {e}")))?;

        debug!(base_url, "Creating congress.gov API client");
        Ok(Self {
            inner: Arc::new(Inner {
                http,
                api_key: api_key.to_string(),
                base_url: base_url.to_string(),
                limiter,
                detector: HeaderRateLimitDetector::new(),
            }),
        })
    }

    /// Root URL that endpoints are appended to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The limiter shared by every clone of this client.
    pub fn rate_limiter(&self) -> Arc<dyn RateLimiter> {
        Arc::clone(&self.inner.limiter)
    }

    /// Full request URL for `endpoint` with `params` as the query string.
    ///
    /// Parameters without a value are left out; the query is omitted entirely
    /// when nothing remains.
    ///
    /// # Example
    ///
    /// ```
    /// use congress_client::ApiClient;
    /// use congress_core::QueryParams;
    /// use chrono::NaiveDate;
    ///
    /// let client = ApiClient::new("DEMO_KEY").unwrap();
    /// let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    /// let url = client
    ///     .build_url("/bill", &QueryParams::new().from_date_time(date))
    ///     .unwrap();
    /// assert_eq!(
    ///     url.as_str(),
    ///     "https://api.congress.gov/v3/bill?fromDateTime=2021-01-01T00%3A00%3A00Z"
    /// );
    /// ```
    pub fn build_url(&self, endpoint: &str, params: &QueryParams) -> CongressResult<Url> {
        let raw = if endpoint.is_empty() || endpoint.starts_with('/') {
            format!("{}{}", self.inner.base_url, endpoint)
        } else {
            format!("{}/{}", self.inner.base_url, endpoint)
        };
        let mut url = Url::parse(&raw)
            .map_err(|e| SdkError::new(format!("Invalid endpoint {endpoint}: {e}")))?;

        let query = params.to_query_string();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    /// GET `endpoint` and return the JSON body with the observed quota.
    ///
    /// # Errors
    ///
    /// - [`RateLimitExceededError`] on HTTP 429
    /// - [`ApiError`] on any other non-2xx status
    /// - [`HttpError`] when the request cannot be sent or the body read
    /// - [`JsonError`] when a 2xx body is not JSON
    pub async fn get_json(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<Value>> {
        self.get(endpoint, params).await
    }

    /// GET `endpoint` and deserialize the body into `T`.
    ///
    /// A body that does not match `T` is reported as [`JsonError`].
    #[instrument(skip(self, params))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> CongressResult<RateLimited<T>> {
        let (rate_limit, text) = self.execute(endpoint, params).await?;
        let body = serde_json::from_str::<T>(&text).map_err(|e| {
            let err = CongressError::from(JsonError::new(format!(
                "Failed to parse response from {endpoint}: {e}"
            )));
            error!(error = %err, "Response body did not match expected shape");
            ApiMetrics::get().record_error(endpoint, &err);
            err
        })?;
        Ok(RateLimited::new(body, rate_limit))
    }

    /// Send one request and classify the outcome, returning the raw 2xx body.
    async fn execute(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> CongressResult<(RateLimitInfo, String)> {
        let metrics = ApiMetrics::get();
        let url = self.build_url(endpoint, params)?;

        self.inner.limiter.wait_for_next_request().await;

        debug!(url = %url, "Sending request");
        let started = Instant::now();
        let response = self
            .inner
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.inner.api_key)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                let err = CongressError::from(HttpError::new(format!(
                    "Request to {endpoint} failed: {e}"
                )));
                error!(error = %err, "Failed to send request");
                metrics.record_error(endpoint, &err);
                err
            })?;

        let status = response.status();
        let rate_limit = self.inner.detector.detect(response.headers());
        self.inner.limiter.update_rate_limit_info(rate_limit);
        metrics.record_request(endpoint, started.elapsed().as_secs_f64());
        metrics.record_rate_limit(rate_limit.remaining);

        if status == StatusCode::TOO_MANY_REQUESTS {
            let err = CongressError::from(RateLimitExceededError::new(rate_limit));
            warn!(%rate_limit, "Rate limit exceeded");
            metrics.record_error(endpoint, &err);
            return Err(err);
        }

        let text = response.text().await.map_err(|e| {
            let err = CongressError::from(HttpError::new(format!(
                "Failed to read response from {endpoint}: {e}"
            )));
            error!(error = %err, "Failed to read response body");
            metrics.record_error(endpoint, &err);
            err
        })?;

        if !status.is_success() {
            let body = if text.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str(&text).unwrap_or(Value::String(text))
            };
            let err = CongressError::from(ApiError::new(status.as_u16(), endpoint, body));
            warn!(status = status.as_u16(), error = %err, "API returned error");
            metrics.record_error(endpoint, &err);
            return Err(err);
        }

        debug!(status = status.as_u16(), %rate_limit, "Request succeeded");
        Ok((rate_limit, text))
    }
}
