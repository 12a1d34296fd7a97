use crate::models::{
    donation::{Donation, Donations},
    error::AppError,
    summary::ImpactSummary,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

// The app is served from the same origin as the backend; the relative base
// keeps deployments free of any environment wiring.
const BASE_URL: &str = "/api";

// API CONFIGURATION
/// Configuration for the foundation backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Constructs the full URL for the impact summary endpoint.
    pub fn summary_url(&self) -> String {
        format!("{}/impact/summary/", self.base_url)
    }

    /// Constructs the full URL for the donations feed.
    pub fn donations_url(&self) -> String {
        format!("{}/donations/", self.base_url)
    }

    /// Constructs the full URL for the health probe.
    pub fn health_url(&self) -> String {
        format!("{}/health/", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct HealthBody {
    status: String,
}

// PORTAL CLIENT
/// HTTP client for the foundation backend.
pub struct PortalClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PortalClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the aggregate impact summary.
    pub async fn fetch_impact_summary(&self) -> Result<ImpactSummary, AppError> {
        self.get_json(&self.config.summary_url()).await
    }

    /// Fetches the donations feed.
    pub async fn fetch_donations(&self) -> Result<Donations, AppError> {
        let donations: Vec<Donation> = self.get_json(&self.config.donations_url()).await?;
        Ok(Donations::new(donations))
    }

    /// Probes the backend health endpoint.
    pub async fn check_health(&self) -> Result<(), AppError> {
        let body: HealthBody = self.get_json(&self.config.health_url()).await?;
        if body.status == "ok" {
            Ok(())
        } else {
            Err(AppError::ApiError(format!(
                "Backend reported status '{}'",
                body.status
            )))
        }
    }

    /// Executes a single GET request and deserializes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl Default for PortalClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the impact summary using default configuration.
pub async fn fetch_impact_summary() -> Result<ImpactSummary, AppError> {
    PortalClient::new()?.fetch_impact_summary().await
}

/// Fetches the donations feed using default configuration.
pub async fn fetch_donations() -> Result<Donations, AppError> {
    PortalClient::new()?.fetch_donations().await
}

/// Probes backend health using default configuration.
pub async fn check_backend_health() -> Result<(), AppError> {
    PortalClient::new()?.check_health().await
}
