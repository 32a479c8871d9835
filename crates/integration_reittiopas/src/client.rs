//! Reittiopas journey planner client
//!
//! Route and geocode requests over the planner's query-string API.
//! Each call is one GET, decoded according to the configured format.

use async_trait::async_trait;
use bytes::Bytes;
use domain::{Coordinate, Language, ResponseFormat};
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ReittiopasError;
use crate::models::ApiResponse;
use crate::query::{build_url, redacted};
use crate::request::{GeocodeRequest, PlannerRequest, RouteRequest};

/// Trait for journey planner clients
#[async_trait]
pub trait JourneyPlanner: Send + Sync {
    /// Look up itineraries for a route request
    async fn route(&self, request: &RouteRequest) -> Result<ApiResponse, ReittiopasError>;

    /// Resolve an address or stop to candidate locations
    async fn geocode(&self, request: &GeocodeRequest) -> Result<ApiResponse, ReittiopasError>;

    /// Coordinate of the best match for `search_term`, or `None` when
    /// nothing matched
    async fn geocode_coords(
        &self,
        search_term: &str,
    ) -> Result<Option<Coordinate>, ReittiopasError>;
}

/// HTTP client for the Reittiopas API
#[derive(Debug, Clone)]
pub struct ReittiopasClient {
    client: Client,
    config: ClientConfig,
}

impl ReittiopasClient {
    /// Create a new Reittiopas client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ReittiopasError> {
        config
            .validate()
            .map_err(ReittiopasError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("reittiolainen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReittiopasError::ConfigurationError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The configuration every request is made with
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Client sharing this one's connection pool, with a different format
    #[must_use]
    pub fn with_format(&self, format: ResponseFormat) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone().with_format(format),
        }
    }

    /// Client sharing this one's connection pool, with a different language
    #[must_use]
    pub fn with_language(&self, language: Language) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone().with_language(language),
        }
    }

    /// Serialize `request` under `config`, GET it and decode the body
    async fn send<R: PlannerRequest + Sync>(
        &self,
        config: &ClientConfig,
        request: &R,
    ) -> Result<ApiResponse, ReittiopasError> {
        if !config.format.is_supported() {
            return Err(ReittiopasError::UnsupportedFormat(config.format));
        }

        let url = build_url(config, request)?;
        debug!(url = %redacted(&url), "Sending {} request", R::KIND);

        let body = self.fetch(url).await?;
        ApiResponse::decode(config.format, body)
    }

    async fn fetch(&self, url: Url) -> Result<Bytes, ReittiopasError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Journey planner returned an error status");
            // The body is only context here; the status must survive a failed read
            let body = response.bytes().await.unwrap_or_default();
            return Err(ReittiopasError::http_status(
                status.as_u16(),
                &String::from_utf8_lossy(&body),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        debug!(%status, bytes = body.len(), "Response received");
        Ok(body)
    }

    fn transport_error(&self, error: reqwest::Error) -> ReittiopasError {
        if error.is_timeout() {
            ReittiopasError::transport(format!(
                "request timed out after {} seconds",
                self.config.timeout_secs
            ))
        } else {
            // reqwest errors embed the URL, which carries the password
            ReittiopasError::transport(error.without_url().to_string())
        }
    }
}

#[async_trait]
impl JourneyPlanner for ReittiopasClient {
    #[instrument(skip(self, request), fields(from = %request.from, to = %request.to, format = %self.config.format))]
    async fn route(&self, request: &RouteRequest) -> Result<ApiResponse, ReittiopasError> {
        self.send(&self.config, request).await
    }

    #[instrument(skip(self, request), fields(key = %request.search_term, format = %self.config.format))]
    async fn geocode(&self, request: &GeocodeRequest) -> Result<ApiResponse, ReittiopasError> {
        self.send(&self.config, request).await
    }

    #[instrument(skip(self))]
    async fn geocode_coords(
        &self,
        search_term: &str,
    ) -> Result<Option<Coordinate>, ReittiopasError> {
        if !self.config.format.is_supported() {
            return Err(ReittiopasError::UnsupportedFormat(self.config.format));
        }

        // Coordinates can only be read from a JSON tree
        let config = self.config.clone().with_format(ResponseFormat::Json);
        let response = self.send(&config, &GeocodeRequest::new(search_term)).await?;

        let coordinate = response.first_coordinate()?;
        match coordinate {
            Some(coord) => debug!(%coord, "Geocoded search term"),
            None => debug!("No location matched"),
        }
        Ok(coordinate)
    }
}
