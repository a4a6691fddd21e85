/*
[INPUT]:  HTTP configuration (base URL, timeouts, stored credential)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::auth::TokenStore;
use crate::http::{GaxError, Result};

/// Base URL for the GAX banking API
const DEFAULT_BASE_URL: &str = "https://gax-2.onrender.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Options for a raw API request
///
/// `body` carries a pre-serialized JSON text; bodyless methods leave it
/// unset. Caller-supplied headers are applied last and win on conflicts,
/// including `Authorization`.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Main HTTP client for the GAX banking API
#[derive(Debug, Clone)]
pub struct GaxClient {
    http_client: Client,
    base_url: Url,
    token: Option<String>,
}

impl GaxClient {
    /// Create a new client with default configuration and no credential
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against a non-default base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            token: None,
        })
    }

    /// Create a new client, reading the stored credential from `store`.
    ///
    /// A missing credential is not an error; the client simply issues
    /// unauthenticated requests.
    pub fn from_token_store(store: &TokenStore) -> Result<Self> {
        let mut client = Self::new()?;
        client.token = store.load_token();
        Ok(client)
    }

    /// Set the authorization token for subsequent requests
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Get the authorization token if set
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Issue a request against an arbitrary endpoint path and decode the
    /// response as untyped JSON.
    ///
    /// The typed endpoint methods cover the fixed API surface; this is the
    /// escape hatch they are built on.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<serde_json::Value> {
        let url = self.base_url.join(endpoint)?;
        let headers = self.request_headers(&options.headers)?;
        let mut builder = self.http_client.request(options.method, url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }
        self.send_json(builder).await
    }

    /// Build a request builder for an API endpoint with the default headers
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        let headers = self.request_headers(&[])?;
        Ok(self.http_client.request(method, url).headers(headers))
    }

    /// Execute a request and decode the JSON response.
    ///
    /// Single funnel for the whole API surface: maps non-success statuses to
    /// [`GaxError::Status`] and logs every failure once before it propagates.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        match self.execute_json(builder).await {
            Ok(value) => Ok(value),
            Err(error) => {
                tracing::error!(%error, "API request failed");
                Err(error)
            }
        }
    }

    async fn execute_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GaxError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    /// Default header set with caller overrides applied last
    fn request_headers(&self, overrides: &[(String, String)]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Token {token}"))
                .map_err(|e| GaxError::Config(format!("Invalid token value: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in overrides {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| GaxError::Config(format!("Invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| GaxError::Config(format!("Invalid header value: {e}")))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}
