//! Static token authentication for the Travis CI API.

use secrecy::{ExposeSecret, SecretString};

/// Authentication method for the Travis CI API.
#[derive(Debug, Clone)]
pub enum AuthMethod {
    /// API token, sent as `Authorization: token <value>`.
    Token(SecretString),
}

impl AuthMethod {
    /// Creates a token authentication method.
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(SecretString::new(token.into()))
    }

    /// Generates the Authorization header value.
    pub fn header_value(&self) -> String {
        match self {
            Self::Token(token) => format!("token {}", token.expose_secret()),
        }
    }

    /// Gets a redacted form of the credential for logging.
    pub fn redacted(&self) -> String {
        match self {
            Self::Token(token) => {
                let exposed = token.expose_secret();
                let prefix: String = exposed.chars().take(4).collect();
                if exposed.chars().count() > 8 {
                    format!("{}***", prefix)
                } else {
                    "***".to_string()
                }
            }
        }
    }
}
