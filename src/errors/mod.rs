//! Error types for the Travis CI client.

use reqwest::header::HeaderMap;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Result type alias for Travis CI operations.
pub type TravisResult<T> = Result<T, TravisError>;

/// Error kinds for categorizing Travis CI errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravisErrorKind {
    // Configuration errors
    /// Invalid base URL.
    InvalidBaseUrl,
    /// Invalid configuration.
    InvalidConfiguration,

    // Request errors
    /// Invalid parameter (query or body could not be encoded).
    InvalidParameter,
    /// Bad request (400).
    BadRequest,
    /// Unprocessable entity (422).
    UnprocessableEntity,

    // Auth errors
    /// Missing or invalid token (401).
    Unauthorized,
    /// Access forbidden (403).
    Forbidden,

    // Resource errors
    /// Resource not found (404).
    NotFound,
    /// Resource conflict (409).
    Conflict,
    /// Too many requests (429).
    TooManyRequests,

    // Network errors
    /// Connection failed.
    ConnectionFailed,
    /// Request timeout.
    Timeout,

    // Server errors
    /// Any 5xx response.
    ServerError,

    // Response errors
    /// Failed to deserialize response.
    DeserializationError,

    // Generic
    /// Unknown error.
    Unknown,
}

impl fmt::Display for TravisErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidBaseUrl => "invalid_base_url",
            Self::InvalidConfiguration => "invalid_configuration",
            Self::InvalidParameter => "invalid_parameter",
            Self::BadRequest => "bad_request",
            Self::UnprocessableEntity => "unprocessable_entity",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::TooManyRequests => "too_many_requests",
            Self::ConnectionFailed => "connection_failed",
            Self::Timeout => "timeout",
            Self::ServerError => "server_error",
            Self::DeserializationError => "deserialization_error",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Error body returned by the Travis API.
///
/// ```json
/// {"@type": "error", "error_type": "not_found",
///  "error_message": "repository not found (or insufficient access)",
///  "resource_type": "repository"}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error_type: Option<String>,
    pub error_message: Option<String>,
    pub resource_type: Option<String>,
}

/// Travis CI API error with detailed information.
#[derive(Error, Debug)]
pub struct TravisError {
    kind: TravisErrorKind,
    message: String,
    status_code: Option<u16>,
    /// `error_type` from the Travis error envelope.
    error_type: Option<String>,
    /// `resource_type` from the Travis error envelope.
    resource_type: Option<String>,
    /// Raw response body, kept for callers that need more than the envelope.
    body: Option<String>,
    headers: Option<HeaderMap>,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for TravisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {})", code)?;
        }
        if let Some(ref error_type) = self.error_type {
            write!(f, " [error_type: {}]", error_type)?;
        }
        Ok(())
    }
}

impl TravisError {
    /// Creates a new Travis error.
    pub fn new(kind: TravisErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            error_type: None,
            resource_type: None,
            body: None,
            headers: None,
            cause: None,
        }
    }

    /// Sets the HTTP status code.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Sets the raw response body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the response headers.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets the underlying cause.
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Gets the error kind.
    pub fn kind(&self) -> &TravisErrorKind {
        &self.kind
    }

    /// Gets the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Gets the Travis `error_type`, e.g. `not_found`.
    pub fn error_type(&self) -> Option<&str> {
        self.error_type.as_deref()
    }

    /// Gets the Travis `resource_type`, e.g. `repository`.
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    /// Gets the raw response body.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Gets the response headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }

    /// Returns true if repeating the same request could succeed.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            TravisErrorKind::TooManyRequests
                | TravisErrorKind::ConnectionFailed
                | TravisErrorKind::Timeout
                | TravisErrorKind::ServerError
        )
    }

    /// Creates an error from a non-success HTTP response.
    ///
    /// The body is parsed as a Travis error envelope when possible; otherwise
    /// a generic message is used and the body is still kept.
    pub fn from_response(status: u16, headers: HeaderMap, body: String) -> Self {
        let envelope = serde_json::from_str::<ErrorEnvelope>(&body).ok();

        let message = envelope
            .as_ref()
            .and_then(|e| e.error_message.clone())
            .unwrap_or_else(|| format!("HTTP {} error", status));

        let mut error = Self::new(Self::kind_from_status(status), message)
            .with_status(status)
            .with_headers(headers)
            .with_body(body);

        if let Some(envelope) = envelope {
            error.error_type = envelope.error_type;
            error.resource_type = envelope.resource_type;
        }

        error
    }

    /// Maps HTTP status code to error kind.
    fn kind_from_status(status: u16) -> TravisErrorKind {
        match status {
            400 => TravisErrorKind::BadRequest,
            401 => TravisErrorKind::Unauthorized,
            403 => TravisErrorKind::Forbidden,
            404 => TravisErrorKind::NotFound,
            409 => TravisErrorKind::Conflict,
            422 => TravisErrorKind::UnprocessableEntity,
            429 => TravisErrorKind::TooManyRequests,
            500..=599 => TravisErrorKind::ServerError,
            _ => TravisErrorKind::Unknown,
        }
    }

    // Convenience constructors

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(TravisErrorKind::InvalidConfiguration, message)
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(TravisErrorKind::InvalidParameter, message)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TravisErrorKind::Timeout, message)
    }

    /// Creates a deserialization error.
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::new(TravisErrorKind::DeserializationError, message)
    }
}
