//! CoinGecko REST API client implementation.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::auth::{API_KEY_HEADER, ApiKey};
use crate::config::{self, ClientConfig};
use crate::error::{CoinGeckoError, from_middleware, from_reqwest};
use crate::rate_limit::RequestThrottle;
use crate::rest::catalog::Endpoints;
use crate::rest::diagnostics::{DiagnosticSink, TracingSink};
use crate::rest::endpoints::{Endpoint, placeholder_count, render_path};
use crate::rest::params;

/// The CoinGecko REST API client.
///
/// The client is a mutable request builder: pick an endpoint, add query
/// parameters and headers, then execute. Selecting an endpoint clears the
/// query parameters but keeps custom headers, so headers set once apply to
/// every later request on the same client.
///
/// # Example
///
/// ```rust,no_run
/// use coingecko_api_client::rest::CoinGeckoClient;
///
/// #[tokio::main]
/// async fn main() {
///     let mut client = CoinGeckoClient::with_credential("CG-your-key");
///
///     let prices = client
///         .endpoints()
///         .simple_price()
///         .with_params([("ids", "bitcoin,ethereum"), ("vs_currencies", "usd")])
///         .execute()
///         .await;
///     println!("{prices:?}");
/// }
/// ```
///
/// [`execute`](Self::execute) reports failures through the configured
/// [`DiagnosticSink`] and returns `None`. Use [`try_execute`](Self::try_execute)
/// to get the [`CoinGeckoError`] instead.
#[derive(Clone)]
pub struct CoinGeckoClient {
    http_client: ClientWithMiddleware,
    config: ClientConfig,
    api_key: Option<ApiKey>,
    template: Option<String>,
    endpoint: Option<String>,
    query_params: BTreeMap<String, String>,
    custom_headers: BTreeMap<String, String>,
    timeout: Duration,
    throttle: Option<RequestThrottle>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl CoinGeckoClient {
    /// Create a client without an API key, using default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a client that sends `key` with every request.
    pub fn with_credential(key: impl Into<ApiKey>) -> Self {
        Self::builder().api_key(key).build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinGeckoClientBuilder {
        CoinGeckoClientBuilder::new()
    }

    /// Access the endpoint catalog.
    pub fn endpoints(&mut self) -> Endpoints<'_> {
        Endpoints::new(self)
    }

    /// Select the endpoint for the next request.
    ///
    /// `args` fill the `{name}` placeholders of `template` in order, verbatim.
    /// Query parameters are cleared, custom headers are kept. A mismatch
    /// between placeholders and arguments is logged and the unmatched
    /// placeholders stay in the path, use [`select`](Self::select) to reject it.
    pub fn select_endpoint(&mut self, template: &str, args: &[&str]) -> &mut Self {
        let expected = placeholder_count(template);
        if expected != args.len() {
            tracing::warn!(
                template,
                expected,
                got = args.len(),
                "path argument count does not match endpoint template"
            );
        }

        self.endpoint = Some(render_path(template, args));
        self.template = Some(template.to_string());
        self.query_params.clear();
        self
    }

    /// Select a catalog endpoint, rejecting the wrong number of path arguments.
    pub fn select(&mut self, endpoint: Endpoint, args: &[&str]) -> Result<&mut Self, CoinGeckoError> {
        let path = endpoint.path(args)?;
        self.endpoint = Some(path);
        self.template = Some(endpoint.template().to_string());
        self.query_params.clear();
        Ok(self)
    }

    /// Merge query parameters. Later values replace earlier ones with the same name.
    pub fn with_params<I, K, V>(&mut self, params: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.query_params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.to_string())));
        self
    }

    /// Merge query parameters from any value that serializes to a query string.
    ///
    /// ```rust
    /// use coingecko_api_client::rest::CoinGeckoClient;
    ///
    /// #[derive(serde::Serialize)]
    /// struct Markets<'a> {
    ///     vs_currency: &'a str,
    ///     per_page: u32,
    /// }
    ///
    /// let mut client = CoinGeckoClient::new();
    /// client
    ///     .endpoints()
    ///     .coins_markets()
    ///     .with_query(&Markets { vs_currency: "usd", per_page: 50 })
    ///     .unwrap();
    /// assert_eq!(client.query_params()["per_page"], "50");
    /// ```
    pub fn with_query<Q>(&mut self, query: &Q) -> Result<&mut Self, CoinGeckoError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let encoded = serde_urlencoded::to_string(query)
            .map_err(|e| CoinGeckoError::InvalidParams(e.to_string()))?;
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&encoded)
            .map_err(|e| CoinGeckoError::InvalidParams(e.to_string()))?;
        Ok(self.with_params(pairs))
    }

    /// Merge custom headers. They persist across endpoint changes.
    ///
    /// Names are case-insensitive and stored lowercased, so a later value
    /// replaces an earlier one whatever its casing. A header named like the
    /// API key header replaces the configured key.
    pub fn with_headers<I, K, V>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.custom_headers
            .extend(headers.into_iter().map(|(k, v)| (k.into().to_ascii_lowercase(), v.into())));
        self
    }

    /// Override the request timeout for subsequent executions.
    pub fn with_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /// Get the API key, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(ApiKey::expose_secret)
    }

    /// The selected endpoint path, with path arguments filled in.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Current query parameters.
    pub fn query_params(&self) -> &BTreeMap<String, String> {
        &self.query_params
    }

    /// Current custom headers, names lowercased.
    pub fn custom_headers(&self) -> &BTreeMap<String, String> {
        &self.custom_headers
    }

    /// Current request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Query parameters that the reference table does not list for the
    /// selected endpoint. They are still sent.
    pub fn unrecognized_params(&self) -> Vec<&str> {
        let Some(template) = self.template.as_deref() else {
            return Vec::new();
        };
        self.query_params
            .keys()
            .map(String::as_str)
            .filter(|name| !params::is_documented(template, name))
            .collect()
    }

    /// The full URL the next request would be sent to.
    pub fn request_url(&self) -> Result<Url, CoinGeckoError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(CoinGeckoError::MissingEndpoint)?;

        let query_string = serde_urlencoded::to_string(&self.query_params)
            .map_err(|e| CoinGeckoError::InvalidParams(e.to_string()))?;
        let url = if query_string.is_empty() {
            format!("{}{}", self.config.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.config.base_url, endpoint, query_string)
        };
        Ok(Url::parse(&url)?)
    }

    /// The headers the next request would carry, besides the user agent.
    pub fn request_headers(&self) -> Result<HeaderMap, CoinGeckoError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &self.api_key {
            let mut value = HeaderValue::from_str(key.expose_secret())
                .map_err(|_| CoinGeckoError::InvalidHeader(API_KEY_HEADER.to_string()))?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        for (name, value) in &self.custom_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| CoinGeckoError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| CoinGeckoError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    /// Send the request and parse the JSON body.
    pub async fn try_execute(&self) -> Result<serde_json::Value, CoinGeckoError> {
        let url = self.request_url()?;
        let headers = self.request_headers()?;

        for param in self.unrecognized_params() {
            tracing::debug!(param, endpoint = self.endpoint(), "query parameter not documented for endpoint");
        }

        if let Some(throttle) = &self.throttle {
            throttle.acquire().await;
        }

        tracing::debug!(%url, "sending request");
        let response = self
            .http_client
            .get(url.clone())
            .headers(headers)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(from_middleware)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoinGeckoError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(from_reqwest)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send the request and deserialize the body into `T`.
    pub async fn try_execute_as<T>(&self) -> Result<T, CoinGeckoError>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.try_execute().await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Send the request, returning `None` on any failure.
    ///
    /// The failure is reported to the diagnostic sink with a verbose or terse
    /// message depending on [`config::debug_enabled`] at that moment.
    pub async fn execute(&self) -> Option<serde_json::Value> {
        match self.try_execute().await {
            Ok(value) => Some(value),
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }

    fn report(&self, err: &CoinGeckoError) {
        let message = err.diagnostic(config::debug_enabled());
        self.diagnostics.emit(err, &message);
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinGeckoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoClient")
            .field("base_url", &self.config.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("endpoint", &self.endpoint)
            .field("query_params", &self.query_params)
            .field("custom_headers", &self.custom_headers.keys().collect::<Vec<_>>())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl std::fmt::Display for CoinGeckoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CoinGeckoClient")
    }
}

/// Builder for [`CoinGeckoClient`].
pub struct CoinGeckoClientBuilder {
    config: ClientConfig,
    api_key: Option<ApiKey>,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl CoinGeckoClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            api_key: None,
            diagnostics: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the default request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for transient failures.
    pub fn retry_attempts(mut self, retries: u32) -> Self {
        self.config.retry_attempts = retries;
        self
    }

    /// Set the minimum delay between retries.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.config.retry_delay = delay;
        self
    }

    /// Retry transient failures (timeouts, 429, 5xx) with exponential backoff.
    pub fn enable_retries(mut self, enabled: bool) -> Self {
        self.config.retry_enabled = enabled;
        self
    }

    /// Set the number of requests allowed per minute.
    pub fn rate_limit_per_minute(mut self, per_minute: u32) -> Self {
        self.config.rate_limit_per_minute = per_minute;
        self
    }

    /// Wait for a free slot before each request instead of relying on the server's 429.
    pub fn enforce_rate_limit(mut self, enforced: bool) -> Self {
        self.config.rate_limit_enforced = enforced;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Set where failure messages from [`CoinGeckoClient::execute`] go.
    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Build the client.
    pub fn build(self) -> CoinGeckoClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("coingecko-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("coingecko-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let mut client = ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
        if self.config.retry_enabled {
            let max_delay = self
                .config
                .retry_delay
                .saturating_mul(self.config.retry_attempts.max(1));
            let retry_policy = ExponentialBackoff::builder()
                .retry_bounds(self.config.retry_delay, max_delay)
                .build_with_max_retries(self.config.retry_attempts);
            client = client.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        let throttle = self
            .config
            .rate_limit_enforced
            .then(|| RequestThrottle::per_minute(self.config.rate_limit_per_minute));

        CoinGeckoClient {
            http_client: client.build(),
            timeout: self.config.timeout,
            config: self.config,
            api_key: self.api_key,
            template: None,
            endpoint: None,
            query_params: BTreeMap::new(),
            custom_headers: BTreeMap::new(),
            throttle,
            diagnostics: self.diagnostics.unwrap_or_else(|| Arc::new(TracingSink)),
        }
    }
}

impl Default for CoinGeckoClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
