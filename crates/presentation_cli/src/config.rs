//! CLI configuration
//!
//! Values are layered: built-in defaults, then `reittiolainen.toml` (or the
//! file given with `--config`), then `REITTIOLAINEN_*` environment variables.

use std::path::Path;

use integration_reittiopas::{ClientConfig, Language, ResponseFormat};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Settings for talking to the journey planner
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// API endpoint
    pub endpoint: String,

    /// API username
    pub username: String,

    /// API password (sensitive)
    pub password: SecretString,

    /// Response format
    #[serde(default)]
    pub format: ResponseFormat,

    /// Response language
    #[serde(default)]
    pub language: Language,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Without `path`, `reittiolainen.toml` in the working directory is read
    /// if present. An explicit `path` must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the
    /// wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("reittiolainen").required(false),
        };

        let defaults = ClientConfig::default();
        let builder = config::Config::builder()
            .set_default("endpoint", defaults.endpoint)?
            .set_default("username", defaults.username)?
            .set_default("password", "")?
            .set_default("timeout_secs", defaults.timeout_secs)?
            .set_default("format", defaults.format.to_string())?
            .set_default("language", defaults.language.to_string())?
            .add_source(file)
            // e.g. REITTIOLAINEN_USERNAME, REITTIOLAINEN_TIMEOUT_SECS
            .add_source(config::Environment::with_prefix("REITTIOLAINEN").try_parsing(true));

        builder.build()?.try_deserialize()
    }

    /// Client configuration with the password exposed for the query string
    #[must_use]
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig::new(
            self.endpoint.clone(),
            self.username.clone(),
            self.password.expose_secret(),
        )
        .with_format(self.format)
        .with_language(self.language)
        .with_timeout_secs(self.timeout_secs)
    }
}
