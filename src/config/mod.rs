//! Configuration types for the Travis CI client.

use crate::auth::AuthMethod;
use crate::errors::{TravisError, TravisErrorKind};
use std::time::Duration;

/// Default Travis CI API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.travis-ci.com/";

/// Base URL of the legacy travis-ci.org API.
pub const ORG_BASE_URL: &str = "https://api.travis-ci.org/";

/// Value of the `Travis-API-Version` header.
pub const DEFAULT_API_VERSION: &str = "3";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = "integrations-travis/0.1.0";

/// Environment variable overriding the base URL.
pub const ENV_API_URL: &str = "TRAVIS_API_URL";

/// Environment variable holding the API token.
pub const ENV_TOKEN: &str = "TRAVIS_TOKEN";

/// Connection pool configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum idle connections per host.
    pub max_idle_per_host: usize,
    /// Idle connection timeout.
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 20,
            idle_timeout: Duration::from_secs(90),
        }
    }
}

/// Travis CI client configuration.
#[derive(Debug, Clone)]
pub struct TravisConfig {
    /// API base URL.
    pub base_url: String,
    /// `Travis-API-Version` header value.
    pub api_version: String,
    /// Authentication method. Public endpoints work without one.
    pub auth: Option<AuthMethod>,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
    /// Connection pool configuration.
    pub pool: PoolConfig,
}

impl Default for TravisConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            auth: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pool: PoolConfig::default(),
        }
    }
}

impl TravisConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> TravisConfigBuilder {
        TravisConfigBuilder::new()
    }

    /// Builds a configuration from `TRAVIS_API_URL` and `TRAVIS_TOKEN`.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, TravisError> {
        let mut builder = Self::builder();
        if let Ok(url) = std::env::var(ENV_API_URL) {
            builder = builder.base_url(url);
        }
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            if !token.is_empty() {
                builder = builder.auth(AuthMethod::token(token));
            }
        }
        builder.build()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TravisError> {
        if self.base_url.is_empty() {
            return Err(TravisError::new(
                TravisErrorKind::InvalidBaseUrl,
                "Base URL cannot be empty",
            ));
        }

        let url = url::Url::parse(&self.base_url).map_err(|e| {
            TravisError::new(
                TravisErrorKind::InvalidBaseUrl,
                format!("Base URL is not a valid URL: {}", e),
            )
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(TravisError::new(
                TravisErrorKind::InvalidBaseUrl,
                "Base URL must use the http or https scheme",
            ));
        }

        if self.user_agent.is_empty() {
            return Err(TravisError::configuration("User-Agent cannot be empty"));
        }

        if self.api_version.is_empty() {
            return Err(TravisError::configuration("API version cannot be empty"));
        }

        Ok(())
    }
}

/// Builder for TravisConfig.
#[derive(Debug, Default)]
pub struct TravisConfigBuilder {
    base_url: Option<String>,
    api_version: Option<String>,
    auth: Option<AuthMethod>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    pool: Option<PoolConfig>,
}

impl TravisConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API version header value.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the authentication method.
    pub fn auth(mut self, auth: AuthMethod) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the connection pool configuration.
    pub fn pool(mut self, config: PoolConfig) -> Self {
        self.pool = Some(config);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<TravisConfig, TravisError> {
        let config = TravisConfig {
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_version: self.api_version.unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            auth: self.auth,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            pool: self.pool.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}
