/*
[INPUT]:  HTTP configuration (base URL, timeouts) and optional bearer credentials
[OUTPUT]: Configured reqwest client plus shared request/decode helpers
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
[UPDATE]: 2026-10-14 Base URL and bearer token come from configuration instead of constants
*/

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::http::{MomentumError, Result};
use crate::types::{ApiErrorBody, ApiPayload};

/// Public Momentum API used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://momentum.redberryinternship.ge/api";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for authenticated requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub bearer_token: String,
}

impl Credentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            bearer_token: token.into(),
        }
    }
}

/// Main HTTP client for the Momentum API
#[derive(Debug, Clone)]
pub struct MomentumClient {
    http_client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl MomentumClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(&config.base_url)?,
            credentials: None,
        })
    }

    /// Builder-style variant of [`MomentumClient::set_credentials`]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint relative to the API root
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build request builder with the JSON accept header and bearer token
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        let mut builder = self
            .http_client
            .request(method, url)
            .header(ACCEPT, "application/json");
        if let Some(credentials) = self.credentials.as_ref() {
            builder = builder.header(
                AUTHORIZATION,
                format!("Bearer {}", credentials.bearer_token),
            );
        }
        Ok(builder)
    }

    /// Send a request and decode a (possibly enveloped) JSON body
    ///
    /// `failure` is used as the error message when a non-2xx body carries no
    /// `message` field of its own.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        failure: &str,
    ) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %body, "api request failed");
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|err| err.message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| failure.to_string());
            return Err(MomentumError::api_error(status, message));
        }

        debug!(status = status.as_u16(), bytes = body.len(), "api response received");
        let payload: ApiPayload<T> = serde_json::from_str(&body)?;
        Ok(payload.into_inner())
    }

    /// GET an endpoint, logging and swallowing any failure into `T::default()`
    pub(crate) async fn fetch_or_default<T: DeserializeOwned + Default>(
        &self,
        endpoint: &str,
        failure: &str,
    ) -> T {
        let result = match self.request(Method::GET, endpoint) {
            Ok(builder) => self.send_json(builder, failure).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(value) => value,
            Err(err) => {
                error!(endpoint = %endpoint, error = %err, "{failure}");
                T::default()
            }
        }
    }
}

fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MomentumError::Config("base url must not be empty".to_string()));
    }
    // Url::join drops the last path segment unless the base ends with '/'
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Ok(Url::parse(&with_slash)?)
}
