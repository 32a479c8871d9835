//! Journey planner client configuration

use std::fmt;
use std::time::Duration;

use domain::{Language, ResponseFormat};
use serde::{Deserialize, Serialize};
use url::Url;

/// Settings shared by every request a client makes
///
/// The value is immutable once handed to a client. Per-request variations
/// are expressed with the `with_*` builders, which return a new config.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL the query string is appended to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Account name, sent as the `user` parameter
    #[serde(default)]
    pub username: String,

    /// Account password, sent as the `pass` parameter
    #[serde(default, skip_serializing)]
    pub password: String,

    /// Response body format
    #[serde(default)]
    pub format: ResponseFormat,

    /// Language of names and instructions
    #[serde(default)]
    pub language: Language,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "http://api.reittiopas.fi/hsl/prod/".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            username: String::new(),
            password: String::new(),
            format: ResponseFormat::default(),
            language: Language::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("format", &self.format)
            .field("language", &self.language)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration for the given endpoint and credentials
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(endpoint: &str) -> Self {
        Self {
            timeout_secs: 5,
            ..Self::new(endpoint, "test-user", "test-pass")
        }
    }

    /// Copy of this config with a different response format
    #[must_use]
    pub fn with_format(self, format: ResponseFormat) -> Self {
        Self { format, ..self }
    }

    /// Copy of this config with a different language
    #[must_use]
    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    /// Copy of this config with a different request timeout
    #[must_use]
    pub fn with_timeout_secs(self, timeout_secs: u64) -> Self {
        Self {
            timeout_secs,
            ..self
        }
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("endpoint must not be empty".to_string());
        }

        let url = Url::parse(&self.endpoint)
            .map_err(|e| format!("endpoint '{}' is not a valid URL: {e}", self.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("endpoint scheme must be http or https, got '{}'", url.scheme()));
        }

        if self.username.is_empty() {
            return Err("username must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
