//! Travis CI API client implementation.

use crate::auth::AuthMethod;
use crate::config::{TravisConfig, TravisConfigBuilder};
use crate::errors::{TravisError, TravisErrorKind, TravisResult};
use crate::observability::{redact_header, Metrics, MetricsSnapshot, RequestTimer};
use crate::pagination::{PageLink, Pagination, Response};
use crate::services::{OrganizationsService, RepositoriesService};
use reqwest::{
    header::{HeaderMap, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Client, Method,
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::trace;
use url::Url;

/// Header selecting the API version.
pub const API_VERSION_HEADER: &str = "Travis-API-Version";

/// Travis CI API client.
pub struct TravisClient {
    http: Client,
    config: TravisConfig,
    base_url: Url,
    metrics: Arc<Metrics>,
}

impl TravisClient {
    /// Creates a new Travis CI client.
    pub fn new(config: TravisConfig) -> TravisResult<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            TravisError::new(
                TravisErrorKind::InvalidBaseUrl,
                format!("Invalid base URL: {}", e),
            )
        })?;

        if base_url.cannot_be_a_base() {
            return Err(TravisError::new(
                TravisErrorKind::InvalidBaseUrl,
                "Base URL cannot be used as a base",
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool.max_idle_per_host)
            .pool_idle_timeout(config.pool.idle_timeout)
            .build()
            .map_err(|e| {
                TravisError::configuration(format!("Failed to create HTTP client: {}", e))
                    .with_cause(e)
            })?;

        if let Some(ref auth) = config.auth {
            trace!(token = %auth.redacted(), "Travis client configured with token");
        }

        Ok(Self {
            http,
            config,
            base_url,
            metrics: Arc::new(Metrics::new()),
        })
    }

    /// Creates a new client builder.
    pub fn builder() -> TravisClientBuilder {
        TravisClientBuilder::new()
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Gets the configuration.
    pub fn config(&self) -> &TravisConfig {
        &self.config
    }

    /// Gets a snapshot of the request metrics.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    // Service accessors

    /// Gets the organizations service.
    pub fn organizations(&self) -> OrganizationsService<'_> {
        OrganizationsService::new(self)
    }

    /// Gets the repositories service.
    pub fn repositories(&self) -> RepositoriesService<'_> {
        RepositoriesService::new(self)
    }

    // HTTP methods

    /// Makes a GET request against the path built from `segments`.
    ///
    /// Each segment is percent-encoded on its own, so a slug like
    /// `owner/name` stays one segment (`owner%2Fname`).
    pub async fn get<T: DeserializeOwned, P: Serialize>(
        &self,
        segments: &[&str],
        params: &P,
    ) -> TravisResult<(T, Response)> {
        let url = self.endpoint(segments, params)?;
        self.request(Method::GET, url, Option::<&()>::None).await
    }

    /// Makes a POST request against the path built from `segments`.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        segments: &[&str],
        body: Option<&B>,
    ) -> TravisResult<(T, Response)> {
        let url = self.endpoint(segments, &())?;
        self.request(Method::POST, url, body).await
    }

    /// Fetches the page a pagination link points to.
    pub async fn get_page<T: DeserializeOwned>(&self, link: &PageLink) -> TravisResult<(T, Response)> {
        let url = self.link_url(&link.href)?;
        self.request(Method::GET, url, Option::<&()>::None).await
    }

    // Internal methods

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> TravisResult<(T, Response)> {
        let timer = RequestTimer::start(self.metrics.clone(), method.as_str(), url.as_str());

        let result = self
            .execute(method, url, body)
            .await
            .and_then(|(status, headers, bytes)| Self::decode(status, headers, &bytes));

        match result {
            Ok((value, response)) => {
                timer.success(response.status);
                Ok((value, response))
            }
            Err(error) => {
                timer.failure(&error.to_string());
                Err(error)
            }
        }
    }

    async fn execute<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> TravisResult<(u16, HeaderMap, Vec<u8>)> {
        let body_bytes = body.map(|b| serde_json::to_vec(b)).transpose().map_err(|e| {
            TravisError::invalid_parameter(format!("Failed to serialize request body: {}", e))
        })?;

        let mut request = self
            .http
            .request(method, url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(ACCEPT, "application/json")
            .header(API_VERSION_HEADER, &self.config.api_version);

        if let Some(ref auth) = self.config.auth {
            let value = auth.header_value();
            trace!(authorization = %redact_header(AUTHORIZATION.as_str(), &value), "Attaching credentials");
            request = request.header(AUTHORIZATION, value);
        }

        if let Some(bytes) = body_bytes {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        let response = request.send().await.map_err(Self::transport_error)?;

        let status = response.status();
        let headers = response.headers().clone();

        let bytes = response.bytes().await.map_err(Self::transport_error)?.to_vec();

        if !status.is_success() {
            return Err(TravisError::from_response(
                status.as_u16(),
                headers,
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }

        Ok((status.as_u16(), headers, bytes))
    }

    fn decode<T: DeserializeOwned>(
        status: u16,
        headers: HeaderMap,
        body: &[u8],
    ) -> TravisResult<(T, Response)> {
        let value = serde_json::from_slice(body).map_err(|e| {
            TravisError::deserialization(format!("Failed to deserialize response: {}", e))
                .with_status(status)
                .with_body(String::from_utf8_lossy(body).into_owned())
                .with_cause(e)
        })?;

        let pagination = Pagination::from_body(body)
            .map_err(|e| e.with_status(status).with_body(String::from_utf8_lossy(body).into_owned()))?;
        Ok((value, Response::new(status, headers, pagination)))
    }

    fn transport_error(e: reqwest::Error) -> TravisError {
        if e.is_timeout() {
            TravisError::timeout(format!("Request timed out: {}", e)).with_cause(e)
        } else if e.is_connect() {
            TravisError::new(
                TravisErrorKind::ConnectionFailed,
                format!("Connection failed: {}", e),
            )
            .with_cause(e)
        } else {
            TravisError::new(TravisErrorKind::Unknown, format!("Request failed: {}", e))
                .with_cause(e)
        }
    }

    fn endpoint<P: Serialize>(&self, segments: &[&str], params: &P) -> TravisResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                TravisError::new(TravisErrorKind::InvalidBaseUrl, "Base URL cannot be used as a base")
            })?
            .pop_if_empty()
            .extend(segments);

        let query = serde_urlencoded::to_string(params).map_err(|e| {
            TravisError::invalid_parameter(format!("Failed to serialize parameters: {}", e))
        })?;

        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    fn link_url(&self, href: &str) -> TravisResult<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let href = href.trim_start_matches('/');
        Url::parse(&format!("{}/{}", base, href)).map_err(|e| {
            TravisError::invalid_parameter(format!("Invalid pagination link {}: {}", href, e))
        })
    }
}

/// Builder for TravisClient.
pub struct TravisClientBuilder {
    config_builder: TravisConfigBuilder,
}

impl TravisClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config_builder: TravisConfig::builder(),
        }
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(url);
        self
    }

    /// Sets the authentication method.
    pub fn auth(mut self, auth: AuthMethod) -> Self {
        self.config_builder = self.config_builder.auth(auth);
        self
    }

    /// Sets an API token.
    pub fn token(self, token: impl Into<String>) -> Self {
        self.auth(AuthMethod::token(token))
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(ua);
        self
    }

    /// Builds the client.
    pub fn build(self) -> TravisResult<TravisClient> {
        let config = self.config_builder.build()?;
        TravisClient::new(config)
    }
}

impl Default for TravisClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
